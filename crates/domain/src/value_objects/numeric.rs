//! Numeric text parsing and signed display.
//!
//! Every numeric field of the form is kept as the raw text the user typed so
//! that intermediate states like `""` or `"-"` stay representable. Arithmetic
//! only ever sees the result of [`parse_numeric`].

use std::fmt;

/// Parse user-typed numeric text, degrading to `0`.
///
/// - blank (after trimming) is `0`
/// - integers parse as themselves
/// - finite decimals and exponent forms (`"1.5"`, `"1e2"`) are truncated toward zero
///   and saturate at the `i32` bounds
/// - anything else, including `"NaN"` and `"inf"`, is `0`
pub fn parse_numeric(raw: &str) -> i32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    if let Ok(value) = trimmed.parse::<i32>() {
        return value;
    }
    match trimmed.parse::<f64>() {
        // `as` saturates for out-of-range floats
        Ok(value) if value.is_finite() => value.trunc() as i32,
        _ => 0,
    }
}

/// A derived number rendered with an explicit sign for non-negative values.
///
/// `Signed(3)` displays as `+3`, `Signed(0)` as `+0`, `Signed(-1)` as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signed(pub i32);

impl Signed {
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Signed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<i32> for Signed {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

pub fn format_signed(value: i32) -> String {
    Signed(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_garbage_are_zero() {
        assert_eq!(parse_numeric(""), 0);
        assert_eq!(parse_numeric("   "), 0);
        assert_eq!(parse_numeric("abc"), 0);
        assert_eq!(parse_numeric("-"), 0);
        assert_eq!(parse_numeric("NaN"), 0);
        assert_eq!(parse_numeric("inf"), 0);
        assert_eq!(parse_numeric("-infinity"), 0);
    }

    #[test]
    fn integers_parse() {
        assert_eq!(parse_numeric("7"), 7);
        assert_eq!(parse_numeric("-3"), -3);
        assert_eq!(parse_numeric(" 12 "), 12);
        assert_eq!(parse_numeric("+4"), 4);
    }

    #[test]
    fn decimals_truncate_toward_zero() {
        assert_eq!(parse_numeric("1.9"), 1);
        assert_eq!(parse_numeric("-1.9"), -1);
        assert_eq!(parse_numeric("1e2"), 100);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(parse_numeric("1e20"), i32::MAX);
        assert_eq!(parse_numeric("-99999999999"), i32::MIN);
    }

    #[test]
    fn parse_is_idempotent_through_display() {
        for raw in ["", "abc", "7", "-3", "2.5"] {
            let once = parse_numeric(raw);
            assert_eq!(parse_numeric(&once.to_string()), once);
        }
    }

    #[test]
    fn signed_display() {
        assert_eq!(format_signed(3), "+3");
        assert_eq!(format_signed(0), "+0");
        assert_eq!(format_signed(-1), "-1");
        assert_eq!(Signed(-12).to_string(), "-12");
    }
}
