//! Static option registries for every filterable dimension.
//!
//! Registries are immutable for the lifetime of the process. Dialogs iterate
//! them to render selectable chips and consult the [`FilterState`] to decide
//! which chips are active.

use serde::Serialize;

use super::state::{FilterState, SetField};

/// A selectable option with a stable key and a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryOption {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
}

const fn opt(key: &'static str, label: &'static str, icon: &'static str) -> RegistryOption {
    RegistryOption {
        key,
        label,
        icon: Some(icon),
    }
}

pub const PROPERTY_TYPES: &[&str] = &[
    "Apartment",
    "Villa",
    "Townhouse",
    "Penthouse",
    "Duplex",
    "Compound",
    "Hotel Apartment",
    "Full Floor",
    "Whole Building",
    "Land",
];

pub const BEDROOMS: &[&str] = &["Studio", "1", "2", "3", "4", "5", "6", "7+"];

pub const BATHROOMS: &[&str] = &["1", "2", "3", "4", "5", "6", "7+"];

pub const FURNISHINGS: &[&str] = &["Furnished", "Unfurnished", "Partly furnished"];

pub const AMENITIES: &[RegistryOption] = &[
    opt("pool", "Swimming Pool", "pool"),
    opt("gym", "Gym", "dumbbell"),
    opt("parking", "Covered Parking", "car"),
    opt("balcony", "Balcony", "balcony"),
    opt("central_ac", "Central A/C", "snowflake"),
    opt("maid_room", "Maid's Room", "bed"),
    opt("security", "Security", "shield"),
    opt("pets", "Pets Allowed", "paw"),
    opt("kids_play", "Children's Play Area", "child"),
    opt("water_view", "View of Water", "water"),
    opt("wardrobes", "Built-in Wardrobes", "hanger"),
    opt("study", "Study", "book"),
];

/// Choices for the "days on site" field, as `(value, label)`.
pub const DAYS_ON_SITE: &[(&str, &str)] = &[
    ("1", "Last 24 hours"),
    ("3", "Last 3 days"),
    ("7", "Last week"),
    ("14", "Last 2 weeks"),
    ("30", "Last month"),
];

/// Allowed values for a set-valued field, in display order.
pub fn registry_for(field: SetField) -> Vec<&'static str> {
    match field {
        SetField::PropertyTypes => PROPERTY_TYPES.to_vec(),
        SetField::Bedrooms => BEDROOMS.to_vec(),
        SetField::Bathrooms => BATHROOMS.to_vec(),
        SetField::Furnishings => FURNISHINGS.to_vec(),
        SetField::Amenities => AMENITIES.iter().map(|a| a.key).collect(),
    }
}

pub fn is_registered(field: SetField, value: &str) -> bool {
    match field {
        SetField::PropertyTypes => PROPERTY_TYPES.contains(&value),
        SetField::Bedrooms => BEDROOMS.contains(&value),
        SetField::Bathrooms => BATHROOMS.contains(&value),
        SetField::Furnishings => FURNISHINGS.contains(&value),
        SetField::Amenities => AMENITIES.iter().any(|a| a.key == value),
    }
}

pub fn amenity_label(key: &str) -> Option<&'static str> {
    AMENITIES.iter().find(|a| a.key == key).map(|a| a.label)
}

/// A chip as a dialog renders it: the registry value plus its active state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionChip {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    pub active: bool,
}

/// Chips for `field`, marked active when the value is in `state`.
pub fn options_for(field: SetField, state: &FilterState) -> Vec<OptionChip> {
    let selected = state.set(field);
    match field {
        SetField::Amenities => AMENITIES
            .iter()
            .map(|a| OptionChip {
                value: a.key,
                label: a.label,
                icon: a.icon,
                active: selected.contains(a.key),
            })
            .collect(),
        _ => registry_for(field)
            .into_iter()
            .map(|value| OptionChip {
                value,
                label: value,
                icon: None,
                active: selected.contains(value),
            })
            .collect(),
    }
}
