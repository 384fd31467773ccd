//! Date component ordering

use crate::core::error::ConfigurationError;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Ordering and width of the date components in a timestamp
///
/// The variant name spells out the order and the digit count of each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `DD-MM-YY`
    Day2Month2Year2,
    /// `DD-MM-YYYY`
    Day2Month2Year4,
    /// `MM-DD-YY`
    Month2Day2Year2,
    /// `MM-DD-YYYY`
    Month2Day2Year4,
    /// `YYYY-MM-DD`
    #[default]
    Year4Month2Day2,
    /// `YY-MM-DD`
    Year2Month2Day2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateField {
    Day,
    Month,
    Year2,
    Year4,
}

impl DateField {
    fn render(self, date: &impl Datelike) -> String {
        match self {
            DateField::Day => format!("{:02}", date.day()),
            DateField::Month => format!("{:02}", date.month()),
            DateField::Year2 => format!("{:02}", date.year().rem_euclid(100)),
            DateField::Year4 => format!("{:04}", date.year()),
        }
    }
}

impl DateFormat {
    pub const ALL: [DateFormat; 6] = [
        DateFormat::Day2Month2Year2,
        DateFormat::Day2Month2Year4,
        DateFormat::Month2Day2Year2,
        DateFormat::Month2Day2Year4,
        DateFormat::Year4Month2Day2,
        DateFormat::Year2Month2Day2,
    ];

    /// Short pattern name, e.g. `YYYY-MM-DD`
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Day2Month2Year2 => "DD-MM-YY",
            DateFormat::Day2Month2Year4 => "DD-MM-YYYY",
            DateFormat::Month2Day2Year2 => "MM-DD-YY",
            DateFormat::Month2Day2Year4 => "MM-DD-YYYY",
            DateFormat::Year4Month2Day2 => "YYYY-MM-DD",
            DateFormat::Year2Month2Day2 => "YY-MM-DD",
        }
    }

    fn fields(&self) -> [DateField; 3] {
        use DateField::*;
        match self {
            DateFormat::Day2Month2Year2 => [Day, Month, Year2],
            DateFormat::Day2Month2Year4 => [Day, Month, Year4],
            DateFormat::Month2Day2Year2 => [Month, Day, Year2],
            DateFormat::Month2Day2Year4 => [Month, Day, Year4],
            DateFormat::Year4Month2Day2 => [Year4, Month, Day],
            DateFormat::Year2Month2Day2 => [Year2, Month, Day],
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            DateFormat::Day2Month2Year2 => "day2_month2_year2",
            DateFormat::Day2Month2Year4 => "day2_month2_year4",
            DateFormat::Month2Day2Year2 => "month2_day2_year2",
            DateFormat::Month2Day2Year4 => "month2_day2_year4",
            DateFormat::Year4Month2Day2 => "year4_month2_day2",
            DateFormat::Year2Month2Day2 => "year2_month2_day2",
        }
    }

    /// Render the date part of `date`, joined with `separator`
    pub fn render_date(&self, date: &impl Datelike, separator: char) -> String {
        let [first, second, third] = self.fields().map(|field| field.render(date));
        format!("{first}{separator}{second}{separator}{third}")
    }
}

impl std::fmt::Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.pattern())
    }
}

impl std::str::FromStr for DateFormat {
    type Err = ConfigurationError;

    /// Accepts the pattern (`yyyy-mm-dd`) or the variant name (`year4_month2_day2`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        DateFormat::ALL
            .into_iter()
            .find(|format| {
                format.pattern().eq_ignore_ascii_case(&normalized)
                    || format.variant_name() == normalized
            })
            .ok_or_else(|| ConfigurationError::InvalidDateFormat(s.to_string()))
    }
}
