use serde::{Deserialize, Serialize};

use crate::filter::{FilterState, ListingType, PricePeriod, SelectionSet};
use crate::models::Property;

/// Query parameters for the property search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pairs: Vec<(String, String)>,
}

impl SearchQuery {
    /// Serializes a filter. Empty text and empty sets are left out; sets are
    /// comma-joined in selection order.
    pub fn from_filter(filter: &FilterState) -> Self {
        let mut query = Self::default();

        if let Some(kind) = filter.listing_type {
            query.push("type", kind.label());
            if kind == ListingType::Rent {
                let period = match filter.price_period {
                    PricePeriod::Monthly => "Monthly",
                    PricePeriod::Daily => "Daily",
                };
                query.push("pricePeriod", period);
            }
        }
        query.push("commercial", if filter.commercial { "true" } else { "false" });

        query.push_text("minPrice", filter.min_price.as_deref());
        query.push_text("maxPrice", filter.max_price.as_deref());
        query.push_set("propertyTypes", &filter.property_types);
        query.push_set("bedrooms", &filter.bedrooms);
        query.push_set("bathrooms", &filter.bathrooms);
        query.push_set("furnishings", &filter.furnishings);
        query.push_set("amenities", &filter.amenities);
        query.push_text("minSize", filter.min_size.as_deref());
        query.push_text("maxSize", filter.max_size.as_deref());
        query.push_text("daysOnSite", filter.days_on_site.as_deref());
        query.push_text("keywords", filter.keywords.as_deref());

        query
    }

    fn push(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    fn push_text(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.push(key, v);
        }
    }

    fn push_set(&mut self, key: &str, set: &SelectionSet) {
        if !set.is_empty() {
            self.push(key, &set.iter().collect::<Vec<_>>().join(","));
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Body returned by the property search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<Property>,
    #[serde(default)]
    pub total: Option<usize>,
}
