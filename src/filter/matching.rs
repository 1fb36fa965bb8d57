//! Client-side matching of listings against a [`FilterState`].
//!
//! Numeric fields hold raw text. Values that do not parse are treated as
//! unset rather than rejected.

use chrono::{DateTime, Duration, Utc};

use super::state::{FilterState, ListingType};
use crate::models::Property;

fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.trim().replace(',', "").parse::<f64>().ok())
}

/// Start of the days-on-site window. Negative, non-finite or out-of-range
/// day counts mean no window.
fn window_start(now: DateTime<Utc>, raw: Option<&str>) -> Option<DateTime<Utc>> {
    let days = parse_number(raw).filter(|d| d.is_finite() && *d >= 0.0)?;
    let seconds = days * 86_400.0;
    if seconds >= i64::MAX as f64 {
        return None;
    }
    Duration::try_seconds(seconds as i64).and_then(|d| now.checked_sub_signed(d))
}

fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
}

impl FilterState {
    /// Whether `property` passes every active criterion. `now` anchors the
    /// days-on-site window.
    pub fn matches(&self, property: &Property, now: DateTime<Utc>) -> bool {
        if let Some(kind) = self.listing_type {
            if property.listing_type != kind {
                return false;
            }
            if kind == ListingType::Rent && property.price_period != self.price_period {
                return false;
            }
        }

        if property.commercial != self.commercial {
            return false;
        }

        let price = property.price as f64;
        if !within(
            price,
            parse_number(self.min_price.as_deref()),
            parse_number(self.max_price.as_deref()),
        ) {
            return false;
        }

        let size = f64::from(property.size_sqft);
        if !within(
            size,
            parse_number(self.min_size.as_deref()),
            parse_number(self.max_size.as_deref()),
        ) {
            return false;
        }

        // Empty set = any value
        let any_of = |set: &super::SelectionSet, value: &str| set.is_empty() || set.contains(value);
        if !any_of(&self.property_types, property.property_type.as_str())
            || !any_of(&self.bedrooms, property.bedrooms.as_str())
            || !any_of(&self.bathrooms, property.bathrooms.as_str())
        {
            return false;
        }

        if !self.furnishings.is_empty() {
            match &property.furnishing {
                Some(f) if self.furnishings.contains(f) => {}
                _ => return false,
            }
        }

        // Amenities use AND logic
        if !self
            .amenities
            .iter()
            .all(|key| property.amenities.iter().any(|a| a == key))
        {
            return false;
        }

        if let Some(cutoff) = window_start(now, self.days_on_site.as_deref()) {
            if property.listed_at < cutoff {
                return false;
            }
        }

        if let Some(keywords) = self.keywords.as_deref() {
            let haystack = format!(
                "{} {} {}",
                property.title,
                property.description,
                property.location.area.as_deref().unwrap_or("")
            )
            .to_lowercase();
            if !keywords
                .split_whitespace()
                .all(|word| haystack.contains(&word.to_lowercase()))
            {
                return false;
            }
        }

        true
    }
}
