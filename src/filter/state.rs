use serde::{Deserialize, Serialize};
use tracing::warn;

use super::registry;
use super::toggle::SelectionSet;

/// Rent or buy. A third value cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingType {
    Rent,
    Buy,
}

impl ListingType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Buy => "Buy",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricePeriod {
    #[default]
    Monthly,
    Daily,
}

/// Set-valued fields, the only ones written through the toggle primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetField {
    PropertyTypes,
    Bedrooms,
    Bathrooms,
    Furnishings,
    Amenities,
}

/// Free-text fields, stored as raw user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    MinPrice,
    MaxPrice,
    MinSize,
    MaxSize,
    DaysOnSite,
    Keywords,
}

/// Every key of [`FilterState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    Type,
    Commercial,
    PricePeriod,
    Text(TextField),
    Set(SetField),
}

impl FilterField {
    pub const ALL: [FilterField; 14] = [
        Self::Type,
        Self::Commercial,
        Self::PricePeriod,
        Self::Text(TextField::MinPrice),
        Self::Text(TextField::MaxPrice),
        Self::Set(SetField::PropertyTypes),
        Self::Set(SetField::Bedrooms),
        Self::Set(SetField::Bathrooms),
        Self::Set(SetField::Furnishings),
        Self::Set(SetField::Amenities),
        Self::Text(TextField::MinSize),
        Self::Text(TextField::MaxSize),
        Self::Text(TextField::DaysOnSite),
        Self::Text(TextField::Keywords),
    ];
}

/// A single-field replacement. One variant per key, so an update can never
/// name a key outside the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterUpdate {
    Type(Option<ListingType>),
    Commercial(bool),
    PricePeriod(PricePeriod),
    Text(TextField, Option<String>),
    Set(SetField, SelectionSet),
}

impl FilterUpdate {
    pub fn field(&self) -> FilterField {
        match self {
            Self::Type(_) => FilterField::Type,
            Self::Commercial(_) => FilterField::Commercial,
            Self::PricePeriod(_) => FilterField::PricePeriod,
            Self::Text(f, _) => FilterField::Text(*f),
            Self::Set(f, _) => FilterField::Set(*f),
        }
    }
}

/// Value of one field, as read back with [`FilterState::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Type(Option<ListingType>),
    Flag(bool),
    PricePeriod(PricePeriod),
    Text(Option<&'a str>),
    Set(&'a SelectionSet),
}

/// The in-progress search filter.
///
/// Replaced as a whole on every change; see [`update_filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    #[serde(rename = "type")]
    pub listing_type: Option<ListingType>,
    pub commercial: bool,
    pub price_period: PricePeriod,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub property_types: SelectionSet,
    pub bedrooms: SelectionSet,
    pub bathrooms: SelectionSet,
    pub furnishings: SelectionSet,
    pub amenities: SelectionSet,
    pub min_size: Option<String>,
    pub max_size: Option<String>,
    pub days_on_site: Option<String>,
    pub keywords: Option<String>,
}

impl FilterState {
    /// The state a search screen starts from: renting, residential, monthly.
    pub fn seeded() -> Self {
        Self {
            listing_type: Some(ListingType::Rent),
            commercial: false,
            price_period: PricePeriod::Monthly,
            ..Self::default()
        }
    }

    pub fn get(&self, field: FilterField) -> FieldValue<'_> {
        match field {
            FilterField::Type => FieldValue::Type(self.listing_type),
            FilterField::Commercial => FieldValue::Flag(self.commercial),
            FilterField::PricePeriod => FieldValue::PricePeriod(self.price_period),
            FilterField::Text(f) => FieldValue::Text(self.text(f)),
            FilterField::Set(f) => FieldValue::Set(self.set(f)),
        }
    }

    pub fn text(&self, field: TextField) -> Option<&str> {
        match field {
            TextField::MinPrice => self.min_price.as_deref(),
            TextField::MaxPrice => self.max_price.as_deref(),
            TextField::MinSize => self.min_size.as_deref(),
            TextField::MaxSize => self.max_size.as_deref(),
            TextField::DaysOnSite => self.days_on_site.as_deref(),
            TextField::Keywords => self.keywords.as_deref(),
        }
    }

    pub fn set(&self, field: SetField) -> &SelectionSet {
        match field {
            SetField::PropertyTypes => &self.property_types,
            SetField::Bedrooms => &self.bedrooms,
            SetField::Bathrooms => &self.bathrooms,
            SetField::Furnishings => &self.furnishings,
            SetField::Amenities => &self.amenities,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut Option<String> {
        match field {
            TextField::MinPrice => &mut self.min_price,
            TextField::MaxPrice => &mut self.max_price,
            TextField::MinSize => &mut self.min_size,
            TextField::MaxSize => &mut self.max_size,
            TextField::DaysOnSite => &mut self.days_on_site,
            TextField::Keywords => &mut self.keywords,
        }
    }

    fn set_mut(&mut self, field: SetField) -> &mut SelectionSet {
        match field {
            SetField::PropertyTypes => &mut self.property_types,
            SetField::Bedrooms => &mut self.bedrooms,
            SetField::Bathrooms => &mut self.bathrooms,
            SetField::Furnishings => &mut self.furnishings,
            SetField::Amenities => &mut self.amenities,
        }
    }

    /// Whether `field` differs from its seeded value.
    pub fn is_set(&self, field: FilterField) -> bool {
        let seeded = Self::seeded();
        self.get(field) != seeded.get(field)
    }

    /// Number of fields that differ from the seeded defaults.
    pub fn active_count(&self) -> usize {
        FilterField::ALL.iter().filter(|f| self.is_set(**f)).count()
    }

    /// True when both prices parse and the minimum exceeds the maximum.
    ///
    /// Informational only; nothing at this layer rejects such a filter.
    pub fn price_range_inverted(&self) -> bool {
        let parse = |v: &Option<String>| v.as_deref().and_then(|s| s.trim().parse::<f64>().ok());
        matches!(
            (parse(&self.min_price), parse(&self.max_price)),
            (Some(min), Some(max)) if min > max
        )
    }
}

/// Returns a copy of `current` with only the field named by `update` replaced.
///
/// Text is stored as given: a minimum above the maximum is accepted. Set
/// values outside the field's registry are dropped.
pub fn update_filter(current: &FilterState, update: FilterUpdate) -> FilterState {
    let mut next = current.clone();
    match update {
        FilterUpdate::Type(v) => next.listing_type = v,
        FilterUpdate::Commercial(v) => next.commercial = v,
        FilterUpdate::PricePeriod(v) => next.price_period = v,
        FilterUpdate::Text(field, v) => *next.text_mut(field) = v,
        FilterUpdate::Set(field, v) => *next.set_mut(field) = registered_only(field, v),
    }
    next
}

fn registered_only(field: SetField, set: SelectionSet) -> SelectionSet {
    if set.iter().all(|v| registry::is_registered(field, v)) {
        return set;
    }
    set.iter()
        .filter(|v| {
            let known = registry::is_registered(field, v);
            if !known {
                warn!(?field, value = *v, "dropping unregistered value");
            }
            known
        })
        .collect()
}

/// Toggles `value` in the set `field` and writes the result with [`update_filter`].
///
/// Values outside the field's registry leave the filter unchanged.
pub fn toggle_array_filter(current: &FilterState, field: SetField, value: &str) -> FilterState {
    if !registry::is_registered(field, value) {
        warn!(?field, value, "ignoring toggle of unregistered value");
        return current.clone();
    }
    let next = current.set(field).toggled(value);
    update_filter(current, FilterUpdate::Set(field, next))
}
