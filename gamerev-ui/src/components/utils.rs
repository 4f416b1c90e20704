//! Utility functions for UI components

use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime};

/// Parse a backend release date. Accepts a plain date, a local date-time,
/// or an RFC 3339 timestamp.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.date_naive())
}

/// Format a release date in the locale's short date form. Dates that don't
/// parse are shown as sent.
pub fn format_release_date(raw: &str, locale: Locale) -> String {
    match parse_release_date(raw) {
        Some(date) => date.format_localized("%x", locale).to_string(),
        None => {
            tracing::debug!("Unparseable release date: {raw:?}");
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_date() {
        assert_eq!(
            parse_release_date("2017-03-03"),
            NaiveDate::from_ymd_opt(2017, 3, 3)
        );
    }

    #[test]
    fn parses_date_time_and_rfc3339() {
        let expected = NaiveDate::from_ymd_opt(2023, 5, 12);
        assert_eq!(parse_release_date("2023-05-12T00:00:00"), expected);
        assert_eq!(parse_release_date("2023-05-12T09:30:00.250"), expected);
        assert_eq!(parse_release_date("2023-05-12T09:30:00+09:00"), expected);
    }

    #[test]
    fn localized_date_contains_parts() {
        let formatted = format_release_date("2017-03-03", Locale::en_US);
        assert!(formatted.contains("2017"), "{formatted}");
        assert!(formatted.contains("03"), "{formatted}");
        assert_ne!(formatted, "2017-03-03");
    }

    #[test]
    fn unparseable_date_is_shown_raw() {
        assert_eq!(format_release_date("soon", Locale::en_US), "soon");
        assert_eq!(format_release_date("", Locale::en_US), "");
    }
}
