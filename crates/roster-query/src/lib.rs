//! Read-only queries over a loaded roster.
//!
//! All operations are linear scans over the records in source order; none of
//! them reorder or mutate the input.

pub mod facets;
pub mod filter;
pub mod lookup;

pub use facets::{Facets, distinct_values};
pub use filter::{SearchOutcome, filter_records, matches, search};
pub use lookup::member_at;
