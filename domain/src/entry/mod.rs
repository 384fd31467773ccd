//! Log entry construction.

pub mod layout;

pub use layout::{EMPTY_MESSAGE_PLACEHOLDER, EntryFields, EntryLayout, level_tag, normalize_message};
