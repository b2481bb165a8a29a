use std::collections::BTreeMap;

use crate::FilterField;

/// Search criteria: each present field holds a non-empty trimmed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    criteria: BTreeMap<FilterField, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `field` to the trimmed `value`, or clears it when the trimmed value is empty.
    pub fn set(&mut self, field: FilterField, value: &str) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.criteria.remove(&field);
        } else {
            self.criteria.insert(field, trimmed.to_string());
        }
    }

    #[must_use]
    pub fn with(mut self, field: FilterField, value: &str) -> Self {
        self.set(field, value);
        self
    }

    /// Builds a filter set from optional raw values, dropping absent and blank ones.
    pub fn from_optional<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = (FilterField, Option<&'a str>)>,
    {
        let mut set = Self::new();
        for (field, value) in values {
            if let Some(value) = value {
                set.set(field, value);
            }
        }
        set
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.criteria.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterField, &str)> {
        self.criteria
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}
