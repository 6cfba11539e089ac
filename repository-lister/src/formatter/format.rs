//! Output format selection.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An `output-format` value that names no known format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized output-format value '{0}'")]
pub struct UnknownFormat(pub String);

/// Serialization used for the `repositories` outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `[{"name": ..., "full_name": ...}, ...]`
    #[default]
    Json,
    /// One `full_name` per line.
    Flat,
    /// `["owner/a", "owner/b"]`
    Array,
    /// `name,full_name` header plus one row per repository.
    Csv,
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    /// Parses a format name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "flat" => Ok(Self::Flat),
            "array" => Ok(Self::Array),
            "csv" => Ok(Self::Csv),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Flat => "flat",
            Self::Array => "array",
            Self::Csv => "csv",
        })
    }
}
