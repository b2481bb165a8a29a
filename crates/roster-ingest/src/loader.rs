//! Roster record loading.

use std::collections::BTreeMap;
use std::path::PathBuf;

use roster_model::{CellValue, Record};

use crate::csv_table::{CsvTable, is_na_token, read_csv_table};
use crate::error::Result;
use crate::hints::{ColumnHint, build_column_hints, parse_number};

/// Loads the roster from a CSV source.
///
/// Nothing is cached: every [`load`](Self::load) re-reads and re-parses the
/// file, so edits to the source are visible on the next call.
#[derive(Debug, Clone)]
pub struct RecordLoader {
    path: PathBuf,
}

impl RecordLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads all records in source order.
    ///
    /// A missing source is not an error: it yields an empty roster and callers
    /// must treat that as a normal state. Any other read or parse failure is
    /// returned.
    pub fn load(&self) -> Result<Vec<Record>> {
        let table = match read_csv_table(&self.path) {
            Ok(table) => table,
            Err(err) if err.is_not_found() => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Roster source not found, serving an empty roster"
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };
        let hints = build_column_hints(&table);
        for (column, hint) in &hints {
            tracing::debug!(
                column = %column,
                is_numeric = hint.is_numeric,
                null_ratio = hint.null_ratio,
                unique_ratio = hint.unique_ratio,
                "Column hint"
            );
        }
        let records = records_with_hints(&table, &hints);
        tracing::debug!(
            path = %self.path.display(),
            rows = records.len(),
            columns = table.headers.len(),
            "Loaded roster"
        );
        Ok(records)
    }
}

/// Converts a raw table into records, inferring numeric columns.
///
/// Missing cells are kept as [`CellValue::Missing`] so that the record still
/// carries every header field.
pub fn records_from_table(table: &CsvTable) -> Vec<Record> {
    records_with_hints(table, &build_column_hints(table))
}

fn records_with_hints(table: &CsvTable, hints: &BTreeMap<String, ColumnHint>) -> Vec<Record> {
    let numeric: Vec<bool> = table
        .headers
        .iter()
        .map(|header| hints.get(header).is_some_and(|hint| hint.is_numeric))
        .collect();

    table
        .rows
        .iter()
        .map(|row| {
            table
                .headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    let raw = row.get(idx).map(String::as_str).unwrap_or("");
                    (header.as_str(), to_cell(raw, numeric[idx]))
                })
                .collect::<Record>()
        })
        .collect()
}

fn to_cell(raw: &str, numeric: bool) -> CellValue {
    if is_na_token(raw) {
        return CellValue::Missing;
    }
    if numeric && let Some(value) = parse_number(raw) {
        return CellValue::Number(value);
    }
    CellValue::Text(raw.to_string())
}
