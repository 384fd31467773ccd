//! Timestamp formatting.
//!
//! - [`date_format::DateFormat`]: order and width of the date components
//! - [`date_time_format::DateTimeFormat`]: separators plus the date format;
//!   renders the timestamp prefix of every entry

pub mod date_format;
pub mod date_time_format;
