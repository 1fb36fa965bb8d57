use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::{ListingType, PricePeriod};

/// Source of the property listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub enum Source {
    /// Bundled sample listings used offline
    Sample,
    /// Remote property search API
    #[default]
    Api,
}

/// Location information for a property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub area: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Core property listing model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    #[serde(default)]
    pub source: Source,
    pub location: Location,
    pub title: String,
    pub listing_type: ListingType,
    pub commercial: bool,
    pub price: i64,
    pub price_period: PricePeriod,
    /// Label from the property-type registry
    pub property_type: String,
    /// Bedroom registry value ("Studio", "1".."6", "7+")
    pub bedrooms: String,
    /// Bathroom registry value ("1".."6", "7+")
    pub bathrooms: String,
    pub furnishing: Option<String>,
    /// Amenity registry keys
    pub amenities: Vec<String>,
    pub size_sqft: i32,
    pub description: String,
    pub images: Vec<String>,
    pub url: String,
    pub listed_at: DateTime<Utc>,
    #[serde(default)]
    pub raw_data: serde_json::Value,
}
