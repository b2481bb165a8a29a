//! Data model for the member roster.
//!
//! A roster is a flat sequence of [`Record`]s loaded from a tabular source.
//! Records are not schema-enforced: any record may lack any field, and a
//! missing field reads as an empty string.

pub mod cell;
pub mod fields;
pub mod filter;
pub mod record;

pub use cell::CellValue;
pub use fields::{FacetField, FilterField, MatchMode};
pub use filter::FilterSet;
pub use record::Record;
