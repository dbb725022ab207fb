use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

pub const DEFAULT_YEAR: i32 = 2025;
pub const UNKNOWN_YEAR: &str = "unknown";

/// Where records without a year land when a catalog is sorted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingYear {
    /// Undated records follow every dated one.
    #[default]
    Last,
    /// Undated records precede every dated one.
    First,
}

impl FromStr for MissingYear {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" => Ok(MissingYear::Last),
            "first" => Ok(MissingYear::First),
            _ => Err(ParseError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for MissingYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingYear::Last => write!(f, "last"),
            MissingYear::First => write!(f, "first"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Year given to records that carry none when filling defaults.
    pub default_year: i32,
    /// Text shown in place of an absent year.
    pub unknown_year: String,
    pub missing_year: MissingYear,
    /// Verbosity reduction; every level hides more decoration.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_year: DEFAULT_YEAR,
            unknown_year: UNKNOWN_YEAR.to_string(),
            missing_year: MissingYear::default(),
            quiet: 0,
        }
    }
}
