//! Text encoding of the log output

use crate::core::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Character encoding applied to every line written by a tracer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    /// UTF-8 without a byte-order mark
    #[default]
    Utf8,
    /// UTF-8 with a byte-order mark at the start of a fresh file
    Utf8Bom,
    Utf16Le,
    Utf16Be,
    /// 7-bit ASCII; other characters are written as `?`
    Ascii,
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf8Bom => "utf-8-bom",
            TextEncoding::Utf16Le => "utf-16le",
            TextEncoding::Utf16Be => "utf-16be",
            TextEncoding::Ascii => "us-ascii",
        }
    }

    /// Byte-order mark written before the first line of a fresh target
    pub fn preamble(&self) -> &'static [u8] {
        match self {
            TextEncoding::Utf8Bom => &[0xEF, 0xBB, 0xBF],
            TextEncoding::Utf16Le => &[0xFF, 0xFE],
            TextEncoding::Utf16Be => &[0xFE, 0xFF],
            TextEncoding::Utf8 | TextEncoding::Ascii => &[],
        }
    }

    /// Append the encoded form of `text` to `out`
    pub fn encode_into(&self, text: &str, out: &mut Vec<u8>) {
        match self {
            TextEncoding::Utf8 | TextEncoding::Utf8Bom => out.extend_from_slice(text.as_bytes()),
            TextEncoding::Utf16Le => out.extend(text.encode_utf16().flat_map(u16::to_le_bytes)),
            TextEncoding::Utf16Be => out.extend(text.encode_utf16().flat_map(u16::to_be_bytes)),
            TextEncoding::Ascii => {
                out.extend(text.chars().map(|c| if c.is_ascii() { c as u8 } else { b'?' }))
            }
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-8-bom" | "utf8-bom" => Ok(TextEncoding::Utf8Bom),
            "utf-16le" | "utf-16" | "utf16le" | "unicode" => Ok(TextEncoding::Utf16Le),
            "utf-16be" | "utf16be" => Ok(TextEncoding::Utf16Be),
            "ascii" | "us-ascii" => Ok(TextEncoding::Ascii),
            _ => Err(ConfigurationError::InvalidEncoding(s.to_string())),
        }
    }
}
