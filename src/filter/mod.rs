pub mod matching;
pub mod registry;
pub mod state;
pub mod toggle;

pub use registry::{options_for, OptionChip, RegistryOption};
pub use state::{
    toggle_array_filter, update_filter, FieldValue, FilterField, FilterState, FilterUpdate,
    ListingType, PricePeriod, SetField, TextField,
};
pub use toggle::{toggle, Favorites, SelectionSet};
