use std::num::ParseIntError;

use thiserror::Error;

/// Failures while turning user supplied text into domain types.
///
/// Library operations themselves never fail; only parsing does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid record '{0}': expected 'title;author' or 'title;author;year'")]
    InvalidRecord(String),

    #[error("invalid year '{input}': {source}")]
    InvalidYear {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown field '{0}' (expected title, author or year)")]
    UnknownField(String),

    #[error("unknown missing-year policy '{0}' (expected first or last)")]
    UnknownPolicy(String),
}
