//! Presentation-side normalization of roster records.
//!
//! - [`flag_for`] maps a country name to a flag symbol.
//! - [`decorate`] builds a new record carrying that flag.
//! - [`Cleanse`] turns records into serialisable [`CleanRecord`]s with every
//!   missing value replaced by an empty string.

pub mod cleanse;
pub mod decorate;
pub mod flags;

pub use cleanse::{CleanRecord, CleanValue, Cleanse};
pub use decorate::{FLAG_FIELD, decorate, decorate_all};
pub use flags::{COUNTRY_FLAGS, DEFAULT_FLAG, flag_for};
