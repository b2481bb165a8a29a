use std::borrow::Cow;
use std::fmt;

/// A single cell of the roster table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Text used for matching, faceting and rendering.
    ///
    /// Missing cells read as `""`. Integral numbers drop the fractional part,
    /// so a numeric `Class` column displays as `2019` rather than `2019.0`.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(value) => Cow::Borrowed(value.as_str()),
            Self::Number(value) => Cow::Owned(format_number(*value)),
            Self::Missing => Cow::Borrowed(""),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Largest magnitude at which every integral `f64` is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Returns the integer value of `value` when it has no fractional part.
pub fn as_integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        Some(value as i64)
    } else {
        None
    }
}

pub fn format_number(value: f64) -> String {
    match as_integral(value) {
        Some(integer) => integer.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!(CellValue::Number(2019.0).display_text(), "2019");
        assert_eq!(CellValue::Number(100.0).display_text(), "100");
        assert_eq!(CellValue::Number(-3.0).display_text(), "-3");
    }

    #[test]
    fn fractional_numbers_keep_fraction() {
        assert_eq!(CellValue::Number(3.5).display_text(), "3.5");
    }

    #[test]
    fn missing_displays_empty() {
        assert_eq!(CellValue::Missing.display_text(), "");
        assert!(CellValue::Missing.is_missing());
    }

    #[test]
    fn non_finite_is_not_integral() {
        assert_eq!(as_integral(f64::NAN), None);
        assert_eq!(as_integral(f64::INFINITY), None);
        assert_eq!(as_integral(1e300), None);
    }
}
