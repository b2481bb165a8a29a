//! Column statistics used for type inference.

use std::collections::{BTreeMap, BTreeSet};

use crate::csv_table::{CsvTable, is_na_token};

/// Summary of one source column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnHint {
    /// Every non-missing cell parses as a number (and at least one exists).
    pub is_numeric: bool,
    /// Distinct non-missing values over non-missing count.
    pub unique_ratio: f64,
    /// Missing cells over row count.
    pub null_ratio: f64,
}

pub(crate) fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Builds a hint per header, keyed by column name.
pub fn build_column_hints(table: &CsvTable) -> BTreeMap<String, ColumnHint> {
    let mut hints = BTreeMap::new();
    let row_count = table.rows.len();
    for (col_idx, header) in table.headers.iter().enumerate() {
        let mut non_null = 0usize;
        let mut numeric = 0usize;
        let mut uniques = BTreeSet::new();
        for value in table.column(col_idx) {
            if is_na_token(value) {
                continue;
            }
            non_null += 1;
            uniques.insert(value.trim());
            if parse_number(value).is_some() {
                numeric += 1;
            }
        }
        let null_ratio = if row_count == 0 {
            1.0
        } else {
            row_count.saturating_sub(non_null) as f64 / row_count as f64
        };
        let unique_ratio = if non_null == 0 {
            0.0
        } else {
            uniques.len() as f64 / non_null as f64
        };
        hints.insert(
            header.clone(),
            ColumnHint {
                is_numeric: non_null > 0 && numeric == non_null,
                unique_ratio,
                null_ratio,
            },
        );
    }
    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
        CsvTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|v| v.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn numeric_column_ignores_missing_cells() {
        let table = table(
            &["Class", "Name"],
            &[&["2019", "Ada"], &["", "Grace"], &["2020", "NA"]],
        );
        let hints = build_column_hints(&table);

        let class = hints.get("Class").expect("Class hint");
        assert!(class.is_numeric);
        assert!((class.null_ratio - 1.0 / 3.0).abs() < 1e-9);
        assert!((class.unique_ratio - 1.0).abs() < 1e-9);

        let name = hints.get("Name").expect("Name hint");
        assert!(!name.is_numeric);
        assert!((name.null_ratio - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn mixed_column_is_text() {
        let table = table(&["Class"], &[&["2019"], &["Fall 2020"]]);
        let hints = build_column_hints(&table);

        assert!(!hints["Class"].is_numeric);
    }

    #[test]
    fn all_missing_column_is_not_numeric() {
        let table = table(&["Industry"], &[&[""], &["nan"]]);
        let hints = build_column_hints(&table);

        let industry = &hints["Industry"];
        assert!(!industry.is_numeric);
        assert!((industry.null_ratio - 1.0).abs() < 1e-9);
        assert!((industry.unique_ratio - 0.0).abs() < 1e-9);
    }
}
