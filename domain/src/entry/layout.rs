//! Log entry layouts

use crate::level::LevelSet;
use serde::{Deserialize, Serialize};

/// Text written in place of an empty or whitespace-only message
pub const EMPTY_MESSAGE_PLACEHOLDER: &str = "(Empty log message)";

/// Width of the `"[LEVEL] "` tag once padded with `=`
pub const LEVEL_TAG_WIDTH: usize = 10;

const PLAIN_ARROW: &str = "===> ";

/// Line layout of a tracer, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryLayout {
    /// `<timestamp> ===> [INFO] ======> <1> message`
    #[default]
    Plain,
    /// `"<timestamp>","[INFO]","1","message"`
    Csv,
}

/// The pieces of one entry; disabled pieces are `None`
#[derive(Debug, Clone, Copy)]
pub struct EntryFields<'a> {
    pub timestamp: &'a str,
    pub level: Option<LevelSet>,
    pub number: Option<u32>,
    pub message: &'a str,
}

/// Bracketed uppercase level tag, e.g. `[WARNING]`
pub fn level_tag(level: LevelSet) -> String {
    format!("[{level}]")
}

/// Substitute the placeholder for blank messages
pub fn normalize_message(message: &str) -> &str {
    if message.trim().is_empty() {
        EMPTY_MESSAGE_PLACEHOLDER
    } else {
        message
    }
}

impl EntryLayout {
    pub fn from_csv_flag(csv: bool) -> Self {
        if csv { EntryLayout::Csv } else { EntryLayout::Plain }
    }

    pub fn is_csv(&self) -> bool {
        matches!(self, EntryLayout::Csv)
    }

    /// Build the entry line (without line terminator)
    pub fn render(&self, fields: &EntryFields<'_>) -> String {
        match self {
            EntryLayout::Plain => render_plain(fields),
            EntryLayout::Csv => render_csv(fields),
        }
    }
}

fn render_plain(fields: &EntryFields<'_>) -> String {
    let mut line = String::with_capacity(fields.timestamp.len() + fields.message.len() + 32);
    line.push_str(fields.timestamp);
    line.push(' ');
    line.push_str(PLAIN_ARROW);
    if let Some(level) = fields.level {
        let tag = format!("{} ", level_tag(level));
        line.push_str(&format!("{tag:=<LEVEL_TAG_WIDTH$}{PLAIN_ARROW}"));
    }
    if let Some(number) = fields.number {
        line.push_str(&format!("<{number}> "));
    }
    line.push_str(fields.message);
    line
}

// Fields are quoted as-is; embedded quotes are not escaped.
fn render_csv(fields: &EntryFields<'_>) -> String {
    let mut columns = Vec::with_capacity(4);
    columns.push(fields.timestamp.to_string());
    if let Some(level) = fields.level {
        columns.push(level_tag(level));
    }
    if let Some(number) = fields.number {
        columns.push(number.to_string());
    }
    columns.push(fields.message.to_string());

    columns
        .iter()
        .map(|column| format!("\"{column}\""))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2024-03-05 07:08:09.12345";

    fn fields<'a>(level: Option<LevelSet>, number: Option<u32>, message: &'a str) -> EntryFields<'a> {
        EntryFields {
            timestamp: TS,
            level,
            number,
            message,
        }
    }

    #[test]
    fn test_plain_with_level_and_number() {
        let line = EntryLayout::Plain.render(&fields(Some(LevelSet::INFO), Some(1), "hello"));
        assert_eq!(line, format!("{TS} ===> [INFO] ======> <1> hello"));
    }

    #[test]
    fn test_plain_level_padding_per_level() {
        let render = |level| EntryLayout::Plain.render(&fields(Some(level), None, "m"));
        assert_eq!(render(LevelSet::DEBUG), format!("{TS} ===> [DEBUG] =====> m"));
        assert_eq!(render(LevelSet::ERROR), format!("{TS} ===> [ERROR] =====> m"));
        assert_eq!(render(LevelSet::WARNING), format!("{TS} ===> [WARNING] ===> m"));
    }

    #[test]
    fn test_plain_without_level_or_number() {
        let line = EntryLayout::Plain.render(&fields(None, None, "disk low"));
        assert_eq!(line, format!("{TS} ===> disk low"));
    }

    #[test]
    fn test_plain_number_without_level() {
        let line = EntryLayout::Plain.render(&fields(None, Some(42), "x"));
        assert_eq!(line, format!("{TS} ===> <42> x"));
    }

    #[test]
    fn test_csv_all_fields() {
        let line = EntryLayout::Csv.render(&fields(Some(LevelSet::INFO), Some(1), "hello"));
        assert_eq!(line, format!("\"{TS}\",\"[INFO]\",\"1\",\"hello\""));
    }

    #[test]
    fn test_csv_optional_fields_omitted() {
        let line = EntryLayout::Csv.render(&fields(None, None, "hello"));
        assert_eq!(line, format!("\"{TS}\",\"hello\""));

        let line = EntryLayout::Csv.render(&fields(None, Some(7), "hello"));
        assert_eq!(line, format!("\"{TS}\",\"7\",\"hello\""));
    }

    #[test]
    fn test_csv_does_not_escape_quotes() {
        let line = EntryLayout::Csv.render(&fields(None, None, "say \"hi\""));
        assert_eq!(line, format!("\"{TS}\",\"say \"hi\"\""));
    }

    #[test]
    fn test_normalize_message() {
        assert_eq!(normalize_message(""), EMPTY_MESSAGE_PLACEHOLDER);
        assert_eq!(normalize_message(" \t\n"), EMPTY_MESSAGE_PLACEHOLDER);
        assert_eq!(normalize_message(" x "), " x ");
    }
}
