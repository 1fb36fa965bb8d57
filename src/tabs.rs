//! The horizontal strip of filter chips above the results list.

use serde::{Deserialize, Serialize};

use crate::dialogs::DialogKind;
use crate::filter::{FilterState, PricePeriod, SelectionSet, SetField, TextField};
use crate::theme::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tab {
    Category,
    PropertyType,
    Price,
    BedsAndBaths,
    Amenities,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Self::Category,
        Self::PropertyType,
        Self::Price,
        Self::BedsAndBaths,
        Self::Amenities,
    ];

    pub fn dialog(self) -> DialogKind {
        match self {
            Self::Category => DialogKind::Category,
            Self::PropertyType => DialogKind::PropertyType,
            Self::Price => DialogKind::Price,
            Self::BedsAndBaths => DialogKind::BedsAndBaths,
            Self::Amenities => DialogKind::Amenities,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabChip {
    pub tab: Tab,
    pub label: String,
    /// The tab's fields hold a non-default value.
    pub selected: bool,
    /// The tab's dialog is the one on screen.
    pub open: bool,
    pub background: &'static str,
    pub text: &'static str,
}

pub struct TabStrip;

impl TabStrip {
    pub fn chips(
        state: &FilterState,
        active: Option<DialogKind>,
        palette: &Palette,
    ) -> Vec<TabChip> {
        Tab::ALL
            .iter()
            .map(|&tab| {
                let selected = match tab {
                    Tab::Category => state.listing_type.is_some(),
                    _ => tab.dialog().fields().iter().any(|f| state.is_set(*f)),
                };
                let open = active == Some(tab.dialog());
                let (background, text) = palette.chip(selected || open);
                TabChip {
                    tab,
                    label: label_for(tab, state),
                    selected,
                    open,
                    background,
                    text,
                }
            })
            .collect()
    }
}

fn counted(base: &str, set: &SelectionSet) -> String {
    match set.len() {
        0 => base.to_string(),
        1 => set.iter().next().unwrap_or(base).to_string(),
        n => format!("{base} · {n}"),
    }
}

fn joined(set: &SelectionSet, noun: &str) -> Option<String> {
    if set.is_empty() {
        return None;
    }
    Some(format!("{} {noun}", set.iter().collect::<Vec<_>>().join(", ")))
}

fn label_for(tab: Tab, state: &FilterState) -> String {
    match tab {
        Tab::Category => state
            .listing_type
            .map_or_else(|| "Rent / Buy".to_string(), |t| t.label().to_string()),
        Tab::PropertyType => counted("Property", &state.property_types),
        Tab::Price => {
            let suffix = match state.price_period {
                PricePeriod::Daily => " /day",
                PricePeriod::Monthly => "",
            };
            let min = state.text(TextField::MinPrice);
            let max = state.text(TextField::MaxPrice);
            let range = match (min, max) {
                (None, None) => return "Price".to_string(),
                (Some(min), None) => format!("{min}+"),
                (None, Some(max)) => format!("Up to {max}"),
                (Some(min), Some(max)) => format!("{min} – {max}"),
            };
            format!("{range}{suffix}")
        }
        Tab::BedsAndBaths => {
            let beds = joined(state.set(SetField::Bedrooms), "Beds");
            let baths = joined(state.set(SetField::Bathrooms), "Baths");
            match (beds, baths) {
                (None, None) => "Beds & Baths".to_string(),
                (Some(b), None) | (None, Some(b)) => b,
                (Some(beds), Some(baths)) => format!("{beds} · {baths}"),
            }
        }
        Tab::Amenities => {
            let n = state.amenities.len();
            if n == 0 {
                "Amenities".to_string()
            } else {
                format!("Amenities · {n}")
            }
        }
    }
}
