//! The selection toggle primitive and the ordered sets built on it.

use serde::{Deserialize, Serialize};

/// Returns `current` with `candidate` removed if present, appended otherwise.
///
/// The input is never modified; remaining elements keep their relative order.
pub fn toggle<T: PartialEq + Clone>(current: &[T], candidate: T) -> Vec<T> {
    if current.contains(&candidate) {
        current.iter().filter(|v| **v != candidate).cloned().collect()
    } else {
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend_from_slice(current);
        next.push(candidate);
        next
    }
}

/// Ordered, duplicate-free set of selected values.
///
/// Only [`SelectionSet::toggled`] produces new members, so duplicates cannot
/// be introduced. Deserialized input is deduplicated the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SelectionSet(Vec<String>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggled(&self, value: &str) -> Self {
        Self(toggle(&self.0, value.to_string()))
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> FromIterator<&'a str> for SelectionSet {
    /// Builds a set by toggling each value in turn.
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |set, v| {
            if set.contains(v) {
                set
            } else {
                set.toggled(v)
            }
        })
    }
}

impl From<Vec<String>> for SelectionSet {
    fn from(values: Vec<String>) -> Self {
        values.iter().map(String::as_str).collect()
    }
}

impl From<SelectionSet> for Vec<String> {
    fn from(set: SelectionSet) -> Self {
        set.0
    }
}

/// Favorited property identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(Vec<String>);

impl Favorites {
    pub fn toggled(&self, property_id: &str) -> Self {
        Self(toggle(&self.0, property_id.to_string()))
    }

    pub fn contains(&self, property_id: &str) -> bool {
        self.0.iter().any(|id| id == property_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
