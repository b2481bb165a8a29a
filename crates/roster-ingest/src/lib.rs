//! Roster ingestion utilities.
//!
//! Reads the member roster from a CSV export into [`Record`]s.
//!
//! # Features
//!
//! - **CSV Loading**: header row, flexible row widths, BOM handling
//! - **Missing Values**: empty cells and standard NA tokens become [`CellValue::Missing`]
//! - **Column Hints**: per-column statistics driving numeric type inference
//! - **Record Loader**: re-reads the source on every call; a missing source is an empty roster
//!
//! # Example
//!
//! ```ignore
//! use roster_ingest::RecordLoader;
//!
//! let loader = RecordLoader::new("data/members.csv");
//! let records = loader.load()?;
//! ```
//!
//! [`Record`]: roster_model::Record
//! [`CellValue::Missing`]: roster_model::CellValue::Missing

mod csv_table;
mod error;
mod hints;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv_table::{CsvTable, NA_TOKENS, is_na_token, read_csv_table};

// === Column Hints ===
pub use hints::{ColumnHint, build_column_hints};

// === Record Loading ===
pub use loader::{RecordLoader, records_from_table};
