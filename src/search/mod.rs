pub mod http;
pub mod sample;
pub mod traits;
pub mod types;

pub use http::HttpPropertySearch;
pub use sample::SampleListings;
pub use traits::PropertySearch;
pub use types::SearchQuery;
