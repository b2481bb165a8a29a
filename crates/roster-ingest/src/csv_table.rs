//! CSV file reading with a single header row.

use std::collections::HashSet;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Cell values treated as missing, matched after trimming.
///
/// These are the tokens spreadsheet exports and dataframe tools commonly use
/// for "no value".
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true when `value` denotes a missing cell.
pub fn is_na_token(value: &str) -> bool {
    NA_TOKENS.contains(&value.trim())
}

/// Raw table as read from disk: header names plus rows padded to header width.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the cells of column `idx`.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(idx).map(String::as_str).unwrap_or(""))
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Names blank headers `Unnamed: {idx}` and suffixes repeated names with `.1`, `.2`, ...
fn disambiguate_headers(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut headers = Vec::with_capacity(raw.len());
    for (idx, header) in raw.into_iter().enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            header
        };
        let mut candidate = base.clone();
        let mut suffix = 1usize;
        while seen.contains(&candidate) {
            candidate = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        headers.push(candidate);
    }
    headers
}

/// Reads `path` into a [`CsvTable`].
///
/// The first non-blank row is the header. Fully blank rows are skipped, short
/// rows are padded with empty cells and cells past the header width are dropped.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::from_csv(path, e))?;

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::from_csv(path, e))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => {
                let raw = record.iter().map(normalize_header).collect();
                headers = Some(disambiguate_headers(raw));
            }
            Some(columns) => {
                let row = (0..columns.len())
                    .map(|idx| record.get(idx).unwrap_or("").to_string())
                    .collect();
                rows.push(row);
            }
        }
    }

    Ok(CsvTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_basic() {
        let file = create_temp_csv("Name,City\nAda,London\nGrace,Arlington\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["Name", "City"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Grace", "Arlington"]);
    }

    #[test]
    fn test_read_csv_table_with_bom() {
        let file = create_temp_csv("\u{feff}Name,City\nAda,London\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["Name", "City"]);
    }

    #[test]
    fn test_short_rows_are_padded_and_long_rows_truncated() {
        let file = create_temp_csv("A,B,C\n1\n1,2,3,4\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.rows[0], vec!["1", "", ""]);
        assert_eq!(table.rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let file = create_temp_csv("\nA,B\n,\n1,2\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn test_blank_and_duplicate_headers_are_named() {
        let file = create_temp_csv("Name,,Name,Name\na,b,c,d\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["Name", "Unnamed: 1", "Name.1", "Name.2"]);
    }

    #[test]
    fn test_empty_file_yields_empty_table() {
        let file = create_temp_csv("");
        let table = read_csv_table(file.path()).unwrap();

        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_csv_table(&dir.path().join("absent.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_quoted_fields_keep_commas() {
        let file = create_temp_csv("Name,Title\n\"Doe, John\",\"CEO, Founder\"\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.rows[0], vec!["Doe, John", "CEO, Founder"]);
    }

    #[test]
    fn test_na_tokens() {
        assert!(is_na_token(""));
        assert!(is_na_token("  "));
        assert!(is_na_token("NaN"));
        assert!(is_na_token(" N/A "));
        assert!(!is_na_token("Nancy"));
        assert!(!is_na_token("0"));
    }
}
