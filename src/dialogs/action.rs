use serde::{Deserialize, Serialize};

use super::{DialogKind, DialogPhase};
use crate::filter::{FilterField, FilterState, ListingType, PricePeriod, SetField, TextField};

/// How the user asked a dialog to go away. None of these commit anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    Scrim,
    CloseIcon,
    Apply,
}

/// User input inside the open dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DialogAction {
    /// Single-select: assigns, never toggles.
    SelectCategory { listing_type: ListingType },
    Toggle { field: SetField, value: String },
    /// Raw text input. An empty string clears the field.
    EditText { field: TextField, value: String },
    SetPriceRange { min: String, max: String },
    SetCommercial { commercial: bool },
    SetPricePeriod { period: PricePeriod },
    Dismiss { reason: DismissReason },
}

impl DialogAction {
    /// Filter fields the action writes. Empty for dismissals.
    pub fn targets(&self) -> Vec<FilterField> {
        match self {
            Self::SelectCategory { .. } => vec![FilterField::Type],
            Self::Toggle { field, .. } => vec![FilterField::Set(*field)],
            Self::EditText { field, .. } => vec![FilterField::Text(*field)],
            Self::SetPriceRange { .. } => vec![
                FilterField::Text(TextField::MinPrice),
                FilterField::Text(TextField::MaxPrice),
            ],
            Self::SetCommercial { .. } => vec![FilterField::Commercial],
            Self::SetPricePeriod { .. } => vec![FilterField::PricePeriod],
            Self::Dismiss { .. } => Vec::new(),
        }
    }
}

/// Notifications for the navigation host.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogEvent {
    PhaseChanged { kind: DialogKind, phase: DialogPhase },
    /// The dialog finished closing and its slot is free again.
    Closed { kind: DialogKind },
    FiltersChanged(FilterState),
}

pub(crate) fn text_value(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
