//! Logger level flags
//!
//! A [`LevelSet`] is used in two roles: as the filter configured on a tracer
//! (any combination of levels, or exactly [`LevelSet::NONE`]) and as the
//! level of a single entry (exactly one concrete level). The type itself
//! accepts both; each operation validates the role it needs.

use crate::core::error::ConfigurationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bit-set over the logger levels (Value Object)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelSet(u8);

impl LevelSet {
    /// Logging disabled; never combined with another level in a filter
    pub const NONE: LevelSet = LevelSet(1);
    pub const INFO: LevelSet = LevelSet(2);
    pub const DEBUG: LevelSet = LevelSet(4);
    pub const WARNING: LevelSet = LevelSet(8);
    pub const ERROR: LevelSet = LevelSet(16);
    /// Every concrete level (`INFO | DEBUG | WARNING | ERROR`)
    pub const ALL: LevelSet = LevelSet(2 | 4 | 8 | 16);

    /// Single levels in declaration order, with their display names
    const NAMED: [(LevelSet, &'static str); 5] = [
        (LevelSet::NONE, "NONE"),
        (LevelSet::INFO, "INFO"),
        (LevelSet::DEBUG, "DEBUG"),
        (LevelSet::WARNING, "WARNING"),
        (LevelSet::ERROR, "ERROR"),
    ];

    /// True when every bit of `other` is also set in `self`
    pub const fn contains(self, other: LevelSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of single levels set
    pub const fn bit_count(self) -> u32 {
        self.0.count_ones()
    }

    /// True when exactly one level is set
    pub const fn is_single(self) -> bool {
        self.bit_count() == 1
    }

    /// True when `NONE` is set together with any other level
    pub const fn has_none_and_others(self) -> bool {
        self.contains(LevelSet::NONE) && self.0 != LevelSet::NONE.0
    }

    /// Validate this set for use as a tracer filter
    pub fn validate_filter(self) -> Result<LevelSet, ConfigurationError> {
        if self.has_none_and_others() {
            Err(ConfigurationError::NoneCombined(self))
        } else {
            Ok(self)
        }
    }

    /// Uppercase name of a single level (`INFO`, `WARNING`, ...)
    pub fn name(self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(level, _)| *level == self)
            .map(|(_, name)| *name)
    }

    /// Iterate over the single levels contained in this set
    pub fn iter(self) -> impl Iterator<Item = LevelSet> {
        Self::NAMED
            .into_iter()
            .map(|(level, _)| level)
            .filter(move |level| self.contains(*level))
    }
}

impl Default for LevelSet {
    /// Filters default to disabled
    fn default() -> Self {
        LevelSet::NONE
    }
}

impl BitOr for LevelSet {
    type Output = LevelSet;

    fn bitor(self, rhs: LevelSet) -> LevelSet {
        LevelSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for LevelSet {
    fn bitor_assign(&mut self, rhs: LevelSet) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == LevelSet::ALL {
            return f.write_str("ALL");
        }
        let mut first = true;
        for (level, name) in Self::NAMED {
            if self.contains(level) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelSet({self})")
    }
}

impl std::str::FromStr for LevelSet {
    type Err = ConfigurationError;

    /// Parse `"info"`, `"info|warning"`, `"debug, error"`, `"all"` or `"none"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = 0u8;
        for part in s.split(['|', ',']) {
            let level = match part.trim().to_ascii_lowercase().as_str() {
                "none" => LevelSet::NONE,
                "info" => LevelSet::INFO,
                "debug" => LevelSet::DEBUG,
                "warning" | "warn" => LevelSet::WARNING,
                "error" => LevelSet::ERROR,
                "all" => LevelSet::ALL,
                _ => return Err(ConfigurationError::InvalidLevel(s.to_string())),
            };
            bits |= level.0;
        }
        Ok(LevelSet(bits))
    }
}

impl Serialize for LevelSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string().to_ascii_lowercase())
    }
}

impl<'de> Deserialize<'de> for LevelSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_union_of_concrete_levels() {
        let union = LevelSet::INFO | LevelSet::DEBUG | LevelSet::WARNING | LevelSet::ERROR;
        assert_eq!(union, LevelSet::ALL);
        assert_eq!(LevelSet::ALL.bit_count(), 4);
        assert!(!LevelSet::ALL.contains(LevelSet::NONE));
    }

    #[test]
    fn test_none_combined_is_rejected_as_filter() {
        assert!(LevelSet::NONE.validate_filter().is_ok());
        assert!(LevelSet::ALL.validate_filter().is_ok());
        assert!(matches!(
            (LevelSet::NONE | LevelSet::INFO).validate_filter(),
            Err(ConfigurationError::NoneCombined(_))
        ));
    }

    #[test]
    fn test_single_level_names() {
        assert_eq!(LevelSet::INFO.name(), Some("INFO"));
        assert_eq!(LevelSet::WARNING.name(), Some("WARNING"));
        assert_eq!(LevelSet::ALL.name(), None);
        assert!(LevelSet::ERROR.is_single());
        assert!(!(LevelSet::INFO | LevelSet::DEBUG).is_single());
    }

    #[test]
    fn test_iter_yields_set_levels_in_order() {
        let set = LevelSet::ERROR | LevelSet::INFO;
        let levels: Vec<_> = set.iter().collect();
        assert_eq!(levels, vec![LevelSet::INFO, LevelSet::ERROR]);
    }

    #[test]
    fn test_display() {
        assert_eq!(LevelSet::ALL.to_string(), "ALL");
        assert_eq!((LevelSet::WARNING | LevelSet::INFO).to_string(), "INFO|WARNING");
        assert_eq!(LevelSet::NONE.to_string(), "NONE");
    }

    #[test]
    fn test_parse() {
        assert_eq!("info".parse::<LevelSet>().unwrap(), LevelSet::INFO);
        assert_eq!(
            "Info | Warn, error".parse::<LevelSet>().unwrap(),
            LevelSet::INFO | LevelSet::WARNING | LevelSet::ERROR
        );
        assert_eq!("ALL".parse::<LevelSet>().unwrap(), LevelSet::ALL);
        assert!("verbose".parse::<LevelSet>().is_err());
        assert!("".parse::<LevelSet>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&(LevelSet::INFO | LevelSet::ERROR)).unwrap();
        assert_eq!(json, "\"info|error\"");

        let parsed: LevelSet = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, LevelSet::ALL);
    }

    #[test]
    fn test_default_is_disabled() {
        assert_eq!(LevelSet::default(), LevelSet::NONE);
    }
}
