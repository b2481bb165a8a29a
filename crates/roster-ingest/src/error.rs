//! Error types for roster ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the roster source.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV content.
    #[error("failed to parse CSV {path}{}: {message}", line_suffix(.line))]
    CsvParse {
        path: PathBuf,
        line: Option<u64>,
        message: String,
    },
}

impl IngestError {
    pub(crate) fn from_csv(path: &std::path::Path, err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Self::FileNotFound {
                    path: path.to_path_buf(),
                }
            }
            csv::ErrorKind::Io(source) => Self::FileRead {
                path: path.to_path_buf(),
                source,
            },
            _ => Self::CsvParse {
                path: path.to_path_buf(),
                line,
                message,
            },
        }
    }

    /// True when the source simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|line| format!(" at line {line}"))
        .unwrap_or_default()
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/members.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/members.csv");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_csv_parse_display_with_line() {
        let err = IngestError::CsvParse {
            path: PathBuf::from("members.csv"),
            line: Some(3),
            message: "bad quote".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse CSV members.csv at line 3: bad quote"
        );
    }

    #[test]
    fn test_csv_parse_display_without_line() {
        let err = IngestError::CsvParse {
            path: PathBuf::from("members.csv"),
            line: None,
            message: "bad quote".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse CSV members.csv: bad quote");
    }
}
