//! Logger levels and level filters.

pub mod level_set;

pub use level_set::LevelSet;
