//! # Shared Utility Functions
//!
//! Display helpers used by both layouts.

/// Format an integer with en-US thousands separators.
///
/// ```rust
/// use shared::utils::format_thousands;
///
/// assert_eq!(format_thousands(1234), "1,234");
/// assert_eq!(format_thousands(-1234567), "-1,234,567");
/// assert_eq!(format_thousands(999), "999");
/// ```
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();

    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if value < 0 {
        result.push('-');
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(-5), "-5");
        assert_eq!(format_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }
}
