//! # Clock Formatting
//!
//! The header shows local time as `Mon D, HH:MM:SS AM/PM`, matching the
//! en-US `toLocaleString` output for month `short`, day `numeric`, 2-digit
//! hour/minute/second on a 12-hour clock.

use chrono::{DateTime, TimeZone};

/// `strftime` pattern for the header clock.
pub const CLOCK_FORMAT: &str = "%b %-d, %I:%M:%S %p";

/// Format a timestamp for the header clock.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use shared::clock::format_clock;
///
/// let t = Utc.with_ymd_and_hms(2024, 10, 5, 14, 8, 48).unwrap();
/// assert_eq!(format_clock(&t), "Oct 5, 02:08:48 PM");
/// ```
pub fn format_clock<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format(CLOCK_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_midnight_is_twelve_am() {
        let t = Utc.with_ymd_and_hms(2024, 1, 9, 0, 0, 7).unwrap();
        assert_eq!(format_clock(&t), "Jan 9, 12:00:07 AM");
    }

    #[test]
    fn test_noon_and_two_digit_day() {
        let t = Utc.with_ymd_and_hms(2024, 12, 25, 12, 30, 0).unwrap();
        assert_eq!(format_clock(&t), "Dec 25, 12:30:00 PM");
    }

    #[test]
    fn test_uses_the_given_offset() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let t = Utc.with_ymd_and_hms(2024, 10, 5, 14, 8, 48).unwrap().with_timezone(&offset);
        assert_eq!(format_clock(&t), "Oct 5, 09:08:48 AM");
    }

    #[test]
    fn test_shape() {
        let formatted = format_clock(&Utc::now());
        let (date, time) = formatted.split_once(", ").unwrap();
        let (month, day) = date.split_once(' ').unwrap();
        assert_eq!(month.len(), 3);
        assert!(day.parse::<u32>().is_ok());
        let (hms, meridiem) = time.split_once(' ').unwrap();
        assert!(meridiem == "AM" || meridiem == "PM");
        assert_eq!(hms.len(), 8);
        assert_eq!(hms.matches(':').count(), 2);
    }
}
