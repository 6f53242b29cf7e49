/// Utilities for date and time formatting
///
/// The API sends ISO datetimes; the UI shows the date, or date plus HH:MM.

/// Format ISO datetime string to "YYYY-MM-DD HH:MM"
/// Example: "2026-03-15T14:02:26.123Z" -> "2026-03-15 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let time = time_part.trim_end_matches('Z');
        let time = time.split('.').next().unwrap_or(time);
        let mut pieces = time.split(':');
        if let (Some(hours), Some(minutes)) = (pieces.next(), pieces.next()) {
            return format!("{} {}:{}", date_part, hours, minutes);
        }
    }
    datetime_str.to_string()
}

/// Format ISO date or datetime string to "YYYY-MM-DD"
/// Example: "2026-03-15T14:02:26Z" -> "2026-03-15"
pub fn format_date(date_str: &str) -> String {
    date_str.split('T').next().unwrap_or(date_str).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2026-03-15T14:02:26.123Z"),
            "2026-03-15 14:02"
        );
        assert_eq!(format_datetime("2026-12-31T23:59:59Z"), "2026-12-31 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-15"), "2026-03-15");
        assert_eq!(format_date("2026-03-15T14:02:26.123Z"), "2026-03-15");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
