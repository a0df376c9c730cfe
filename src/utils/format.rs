use crate::error::FormatError;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const UNITS: [&str; 4] = ["bytes", "KB", "MB", "GB"];
const FACTOR: f64 = 1024.0;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Scale a byte count into the largest unit that keeps the value below 1024,
/// rounding up. Anything at or above 1024 GB stays expressed in GB.
pub fn format_file_size(size: u64) -> String {
    let mut value = size as f64;
    let mut unit = 0;
    while value >= FACTOR && unit < UNITS.len() - 1 {
        value /= FACTOR;
        unit += 1;
    }
    format!("{} {}", value.ceil() as u64, UNITS[unit])
}

pub fn truncate_string(s: &str, front_chars: usize, back_chars: usize) -> String {
    truncate_string_with(s, front_chars, back_chars, "...")
}

/// Shorten a string to its first `front_chars` and last `back_chars`
/// characters joined by `ellipsis`. Strings already within the budget are
/// returned unchanged. Counts chars, not bytes, so multibyte names are safe.
pub fn truncate_string_with(
    s: &str,
    front_chars: usize,
    back_chars: usize,
    ellipsis: &str,
) -> String {
    let len = s.chars().count();
    if len <= front_chars + back_chars {
        return s.to_string();
    }

    let front: String = s.chars().take(front_chars).collect();
    let back: String = s.chars().skip(len - back_chars).collect();
    format!("{}{}{}", front, ellipsis, back)
}

/// Parse a date-time string and render it as e.g. "Jan 5, 2023 9:07".
/// Day and hour are unpadded, minutes always two digits, 24-hour clock.
pub fn format_date(raw: &str) -> Result<String, FormatError> {
    Ok(format_datetime(&parse_datetime(raw)?))
}

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    format!(
        "{} {}, {} {}:{:02}",
        MONTHS[dt.month0() as usize],
        dt.day(),
        dt.year(),
        dt.hour(),
        dt.minute()
    )
}

fn parse_datetime(raw: &str) -> Result<NaiveDateTime, FormatError> {
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(dt);
        }
    }

    // Bare dates land at midnight
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(d.and_time(NaiveTime::MIN));
    }

    Err(FormatError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size_basic() {
        assert_eq!(format_file_size(0), "0 bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
    }

    #[test]
    fn test_format_file_size_rounds_up() {
        assert_eq!(format_file_size(1536), "2 KB");
        assert_eq!(format_file_size(1025), "2 KB");
    }

    #[test]
    fn test_truncate_string_short_input_unchanged() {
        assert_eq!(truncate_string("abc", 3, 2), "abc");
        assert_eq!(truncate_string("abcde", 3, 2), "abcde");
    }

    #[test]
    fn test_truncate_string_splits_front_and_back() {
        assert_eq!(truncate_string("abcdefghij", 3, 2), "abc...ij");
        assert_eq!(truncate_string_with("abcdefghij", 3, 2, "--"), "abc--ij");
    }

    #[test]
    fn test_format_date_renders_month_table() {
        assert_eq!(format_date("2023-01-05T09:07:00").unwrap(), "Jan 5, 2023 9:07");
        assert_eq!(format_date("2024-12-31 23:59:59").unwrap(), "Dec 31, 2024 23:59");
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        assert!(matches!(
            format_date("not-a-date"),
            Err(FormatError::InvalidDate(_))
        ));
    }
}
