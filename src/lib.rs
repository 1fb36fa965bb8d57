//! Headless property-search filter: filter state, option registries, the
//! dialogs that edit it and the tab strip that summarises it.

pub mod config;
pub mod coordinator;
pub mod dialogs;
pub mod filter;
pub mod models;
pub mod script;
pub mod search;
pub mod session;
pub mod tabs;
pub mod theme;

pub use coordinator::FilterCoordinator;
pub use filter::{FilterState, FilterUpdate, ListingType, PricePeriod, SetField, TextField};
