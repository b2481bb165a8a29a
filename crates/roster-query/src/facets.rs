use std::collections::BTreeSet;

use roster_model::{FacetField, Record};

/// Distinct trimmed non-empty values of `column`, ascending.
///
/// Ordering is by byte value, which for UTF-8 is Unicode code point order and
/// therefore case-sensitive: every uppercase ASCII letter sorts before every
/// lowercase one (`["B", "a"]`).
pub fn distinct_values(records: &[Record], column: &str) -> Vec<String> {
    let values: BTreeSet<String> = records
        .iter()
        .map(|record| record.text(column))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();
    values.into_iter().collect()
}

/// Selection lists shown on the index page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub countries: Vec<String>,
    pub cities: Vec<String>,
    pub classes: Vec<String>,
    pub industries: Vec<String>,
}

impl Facets {
    pub fn collect(records: &[Record]) -> Self {
        Self {
            countries: distinct_values(records, FacetField::Country.column()),
            cities: distinct_values(records, FacetField::City.column()),
            classes: distinct_values(records, FacetField::Class.column()),
            industries: distinct_values(records, FacetField::Industry.column()),
        }
    }

    pub fn values(&self, field: FacetField) -> &[String] {
        match field {
            FacetField::Country => &self.countries,
            FacetField::City => &self.cities,
            FacetField::Class => &self.classes,
            FacetField::Industry => &self.industries,
        }
    }
}
