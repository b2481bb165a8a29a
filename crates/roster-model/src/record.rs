use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::CellValue;

/// One roster row: field name to cell value.
///
/// Fields are kept in key order. A field that is absent reads the same as a
/// [`CellValue::Missing`] cell.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    fields: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns a copy of this record with `field` set to `value`.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields.get(field)
    }

    /// Display text of `field`, `""` when absent or missing.
    pub fn text(&self, field: &str) -> Cow<'_, str> {
        self.fields
            .get(field)
            .map_or(Cow::Borrowed(""), CellValue::display_text)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_missing_fields_read_empty() {
        let record = Record::from_iter([
            ("Name", CellValue::text("Ada")),
            ("City", CellValue::Missing),
        ]);
        assert_eq!(record.text("Name"), "Ada");
        assert_eq!(record.text("City"), "");
        assert_eq!(record.text("Industry"), "");
    }

    #[test]
    fn with_field_leaves_original_untouched() {
        let original = Record::from_iter([("Country", "France")]);
        let decorated = original.clone().with_field("flag", "x");
        assert_eq!(original.len(), 1);
        assert_eq!(decorated.len(), 2);
        assert_eq!(decorated.text("flag"), "x");
    }

    #[test]
    fn record_serializes() {
        let record = Record::from_iter([("Class", CellValue::Number(2019.0))]);
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: Record = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
