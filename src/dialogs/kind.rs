use serde::{Deserialize, Serialize};

use crate::filter::{FilterField, SetField, TextField};

/// Every dialog is the same component, configured by the fields it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogKind {
    Category,
    PropertyType,
    Price,
    BedsAndBaths,
    Amenities,
    /// The full filter sheet: every field, inline.
    Filter,
}

const CATEGORY_FIELDS: &[FilterField] = &[FilterField::Type];

const PROPERTY_TYPE_FIELDS: &[FilterField] = &[FilterField::Set(SetField::PropertyTypes)];

const PRICE_FIELDS: &[FilterField] = &[
    FilterField::PricePeriod,
    FilterField::Text(TextField::MinPrice),
    FilterField::Text(TextField::MaxPrice),
];

const BEDS_AND_BATHS_FIELDS: &[FilterField] = &[
    FilterField::Set(SetField::Bedrooms),
    FilterField::Set(SetField::Bathrooms),
];

const AMENITIES_FIELDS: &[FilterField] = &[FilterField::Set(SetField::Amenities)];

impl DialogKind {
    /// Fields the dialog renders and may write, in display order.
    pub fn fields(self) -> &'static [FilterField] {
        match self {
            Self::Category => CATEGORY_FIELDS,
            Self::PropertyType => PROPERTY_TYPE_FIELDS,
            Self::Price => PRICE_FIELDS,
            Self::BedsAndBaths => BEDS_AND_BATHS_FIELDS,
            Self::Amenities => AMENITIES_FIELDS,
            Self::Filter => &FilterField::ALL,
        }
    }

    pub fn shows(self, field: FilterField) -> bool {
        self.fields().contains(&field)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::PropertyType => "Property type",
            Self::Price => "Price",
            Self::BedsAndBaths => "Beds & Baths",
            Self::Amenities => "Amenities",
            Self::Filter => "Filters",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_sheet_is_a_superset() {
        for kind in [
            DialogKind::Category,
            DialogKind::PropertyType,
            DialogKind::Price,
            DialogKind::BedsAndBaths,
            DialogKind::Amenities,
        ] {
            for field in kind.fields() {
                assert!(DialogKind::Filter.shows(*field), "{kind:?} shows {field:?}");
            }
        }
    }

    #[test]
    fn extra_fields_only_in_filter_sheet() {
        let extras = [
            FilterField::Commercial,
            FilterField::Set(SetField::Furnishings),
            FilterField::Text(TextField::MinSize),
            FilterField::Text(TextField::Keywords),
        ];
        for field in extras {
            assert!(DialogKind::Filter.shows(field));
            assert!(!DialogKind::Price.shows(field));
            assert!(!DialogKind::Amenities.shows(field));
        }
    }
}
