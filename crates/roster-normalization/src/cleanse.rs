//! Conversion of records into serialisable, missing-free values.

use std::collections::BTreeMap;

use roster_model::cell::as_integral;
use roster_model::{CellValue, Record};
use serde::Serialize;

/// A cell ready for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CleanValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<&CellValue> for CleanValue {
    fn from(value: &CellValue) -> Self {
        match value {
            CellValue::Text(text) => CleanValue::Text(text.clone()),
            CellValue::Number(number) => match as_integral(*number) {
                Some(integer) => CleanValue::Integer(integer),
                None if number.is_finite() => CleanValue::Float(*number),
                None => CleanValue::Text(String::new()),
            },
            CellValue::Missing => CleanValue::Text(String::new()),
        }
    }
}

/// A record whose missing cells have been replaced by empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CleanRecord(BTreeMap<String, CleanValue>);

impl CleanRecord {
    pub fn get(&self, field: &str) -> Option<&CleanValue> {
        self.0.get(field)
    }
}

/// Shapes that can be cleansed: a single record or a sequence of records.
pub trait Cleanse {
    type Output;

    fn cleanse(&self) -> Self::Output;
}

impl Cleanse for Record {
    type Output = CleanRecord;

    fn cleanse(&self) -> CleanRecord {
        CleanRecord(
            self.fields()
                .map(|(name, value)| (name.to_string(), CleanValue::from(value)))
                .collect(),
        )
    }
}

impl Cleanse for [Record] {
    type Output = Vec<CleanRecord>;

    fn cleanse(&self) -> Vec<CleanRecord> {
        self.iter().map(Record::cleanse).collect()
    }
}
