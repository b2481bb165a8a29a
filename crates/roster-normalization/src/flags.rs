//! Country name to flag lookup.

/// Flag used when a country has no entry.
pub const DEFAULT_FLAG: &str = "🌐";

/// Known countries, including the aliases seen in the roster export.
///
/// Lookup is exact and case-sensitive.
pub const COUNTRY_FLAGS: &[(&str, &str)] = &[
    ("United States", "🇺🇸"),
    ("Australia", "🇦🇺"),
    ("United Kingdom", "🇬🇧"),
    ("Vietnam", "🇻🇳"),
    ("Việt Nam", "🇻🇳"),
    ("USA", "🇺🇸"),
    ("France", "🇫🇷"),
    ("Canada", "🇨🇦"),
];

pub fn flag_for(country: &str) -> &'static str {
    COUNTRY_FLAGS
        .iter()
        .find(|(name, _)| *name == country)
        .map_or(DEFAULT_FLAG, |&(_, flag)| flag)
}
