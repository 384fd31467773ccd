//! Timestamp formatting for log entries

use super::date_format::DateFormat;
use crate::core::error::ConfigurationError;
use chrono::{Local, NaiveDateTime, Timelike};

pub const DEFAULT_DATE_SEPARATOR: char = '-';
pub const DEFAULT_TIME_SEPARATOR: char = ':';
pub const DEFAULT_DATE_TIME_SEPARATOR: &str = " ";

/// Nanoseconds per unit of the 5-digit fractional second
const FRACTION_UNIT_NANOS: u32 = 10_000;

/// Date and time formatting settings of a tracer (Value Object)
///
/// Renders timestamps as `<date><date_time_separator>HH:MM:SS.fffff`, where
/// the date part follows [`DateFormat`] and the `:` between time components
/// is the configured time separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormat {
    date_format: DateFormat,
    date_separator: char,
    time_separator: char,
    date_time_separator: String,
}

impl Default for DateTimeFormat {
    fn default() -> Self {
        Self {
            date_format: DateFormat::default(),
            date_separator: DEFAULT_DATE_SEPARATOR,
            time_separator: DEFAULT_TIME_SEPARATOR,
            date_time_separator: DEFAULT_DATE_TIME_SEPARATOR.to_string(),
        }
    }
}

impl DateTimeFormat {
    /// Create a format; the date-time separator is required
    pub fn new<'a>(
        date_format: DateFormat,
        date_separator: char,
        time_separator: char,
        date_time_separator: impl Into<Option<&'a str>>,
    ) -> Result<Self, ConfigurationError> {
        let date_time_separator = date_time_separator
            .into()
            .ok_or(ConfigurationError::MissingDateTimeSeparator)?;
        Ok(Self {
            date_format,
            date_separator,
            time_separator,
            date_time_separator: date_time_separator.to_string(),
        })
    }

    pub fn date_format(&self) -> DateFormat {
        self.date_format
    }

    pub fn set_date_format(&mut self, date_format: DateFormat) {
        self.date_format = date_format;
    }

    pub fn date_separator(&self) -> char {
        self.date_separator
    }

    pub fn set_date_separator(&mut self, separator: char) {
        self.date_separator = separator;
    }

    pub fn time_separator(&self) -> char {
        self.time_separator
    }

    pub fn set_time_separator(&mut self, separator: char) {
        self.time_separator = separator;
    }

    pub fn date_time_separator(&self) -> &str {
        &self.date_time_separator
    }

    /// Replace the date-time separator; an unset value is rejected
    pub fn set_date_time_separator<'a>(
        &mut self,
        separator: impl Into<Option<&'a str>>,
    ) -> Result<(), ConfigurationError> {
        let separator = separator
            .into()
            .ok_or(ConfigurationError::MissingDateTimeSeparator)?;
        self.date_time_separator = separator.to_string();
        Ok(())
    }

    /// Format the current local wall-clock time
    pub fn format(&self) -> String {
        self.format_at(&Local::now().naive_local())
    }

    /// Format a given instant
    pub fn format_at(&self, at: &NaiveDateTime) -> String {
        let sep = self.time_separator;
        // Leap seconds report nanoseconds past 1e9
        let fraction = (at.nanosecond() % 1_000_000_000) / FRACTION_UNIT_NANOS;
        format!(
            "{date}{dt_sep}{hour:02}{sep}{minute:02}{sep}{second:02}.{fraction:05}",
            date = self.date_format.render_date(at, self.date_separator),
            dt_sep = self.date_time_separator,
            hour = at.hour(),
            minute = at.minute(),
            second = at.second(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_nano_opt(7, 8, 9, 123_456_789)
            .unwrap()
    }

    #[test]
    fn test_default_format() {
        let format = DateTimeFormat::default();
        assert_eq!(format.format_at(&instant()), "2024-03-05 07:08:09.12345");
    }

    #[test]
    fn test_custom_separators() {
        let format =
            DateTimeFormat::new(DateFormat::Day2Month2Year2, '/', '.', " @ ").unwrap();
        assert_eq!(format.format_at(&instant()), "05/03/24 @ 07.08.09.12345");
    }

    #[test]
    fn test_empty_date_time_separator_is_allowed() {
        let format = DateTimeFormat::new(DateFormat::Year4Month2Day2, '-', ':', "").unwrap();
        assert_eq!(format.format_at(&instant()), "2024-03-0507:08:09.12345");
    }

    #[test]
    fn test_unset_date_time_separator_is_rejected() {
        let result = DateTimeFormat::new(DateFormat::Year4Month2Day2, '-', ':', None);
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingDateTimeSeparator)
        ));

        let mut format = DateTimeFormat::default();
        assert!(format.set_date_time_separator(None).is_err());
        assert_eq!(format.date_time_separator(), " ");
        format.set_date_time_separator("T").unwrap();
        assert_eq!(format.date_time_separator(), "T");
    }

    #[test]
    fn test_fraction_is_zero_padded() {
        let at = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_micro_opt(23, 59, 0, 420)
            .unwrap();
        assert_eq!(
            DateTimeFormat::default().format_at(&at),
            "2024-12-31 23:59:00.00042"
        );
    }

    #[test]
    fn test_current_time_matches_shape() {
        let formatted = DateTimeFormat::default().format();
        let bytes = formatted.as_bytes();
        assert_eq!(formatted.len(), "YYYY-MM-DD HH:MM:SS.fffff".len());
        assert_eq!(bytes[4], b'-');
        assert_eq!(bytes[7], b'-');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
        assert_eq!(bytes[19], b'.');
    }
}
