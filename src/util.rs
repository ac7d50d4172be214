//! Date helpers shared by the store, the extractors and the prompts.
//!
//! Record dates travel as `DD.MM.YYYY` strings end to end. This module is
//! the only place those strings are interpreted as calendar dates.

use chrono::NaiveDate;
use chrono_tz::Tz;

/// Wire format for record dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parse a record date string. `None` when the string is not a valid
/// calendar date in exactly the `DD.MM.YYYY` format.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Today's calendar date in the configured timezone.
pub fn today_in(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// The current-date line embedded in extraction prompts,
/// e.g. `Wednesday, 05.03.2025`.
pub fn date_anchor(today: NaiveDate) -> String {
    today.format("%A, %d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_wire_format() {
        assert_eq!(
            parse_record_date("05.03.2025"),
            NaiveDate::from_ymd_opt(2025, 3, 5)
        );
    }

    #[test]
    fn test_rejects_malformed_dates() {
        assert_eq!(parse_record_date(""), None);
        assert_eq!(parse_record_date("завтра"), None);
        assert_eq!(parse_record_date("2025-03-05"), None);
        assert_eq!(parse_record_date("32.01.2025"), None);
        assert_eq!(parse_record_date("05.03.2025 "), None);
    }

    #[test]
    fn test_anchor_includes_weekday_and_date() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(date_anchor(day), "Wednesday, 05.03.2025");
    }
}
