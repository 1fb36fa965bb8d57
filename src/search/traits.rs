use crate::filter::FilterState;
use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that answers a property search
/// Lets the offline sample set and the remote API be swapped freely
#[async_trait]
pub trait PropertySearch: Send + Sync {
    /// Listings matching `filter`
    async fn search(&self, filter: &FilterState) -> Result<Vec<Property>>;

    /// Get the name of the search source
    fn source_name(&self) -> &'static str;
}
