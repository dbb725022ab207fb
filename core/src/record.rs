//! # Catalog Record
//!
//! A [`Record`] is one catalog entry: a title, an author and an optional
//! publication year. Records are values; operations that "change" one hand
//! back a new record.
//!
//! Records can be read from text in the form `title;author` or
//! `title;author;year`, and from JSON objects with the same field names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shelf_common::config::UNKNOWN_YEAR;
use shelf_common::error::ParseError;
use shelf_common::mapping::Mapping;
use shelf_common::value::{Key, Value};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    title: String,
    author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
}

impl Record {
    /// An undated record.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: None,
        }
    }

    pub fn dated(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self::new(title, author).with_year(year)
    }

    pub fn with_year(self, year: i32) -> Self {
        Self {
            year: Some(year),
            ..self
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// The value stored under `field`; an absent year reads as `Null`.
    pub fn field(&self, field: Field) -> Value {
        match field {
            Field::Title => Value::from(self.title.as_str()),
            Field::Author => Value::from(self.author.as_str()),
            Field::Year => Value::from(self.year),
        }
    }

    /// Key/value view of the record. `year` is only present when known.
    pub fn to_mapping(&self) -> Mapping {
        let mut mapping = Mapping::new();
        mapping.insert(Field::Title.key(), self.title.as_str());
        mapping.insert(Field::Author.key(), self.author.as_str());
        if let Some(year) = self.year {
            mapping.insert(Field::Year.key(), year);
        }
        mapping
    }

    /// `title (author, year)`, with `unknown` standing in for a missing year.
    pub fn describe(&self, unknown: &str) -> String {
        match self.year {
            Some(year) => format!("{} ({}, {})", self.title, self.author, year),
            None => format!("{} ({}, {})", self.title, self.author, unknown),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe(UNKNOWN_YEAR))
    }
}

impl FromStr for Record {
    type Err = ParseError;

    /// Parses `title;author` or `title;author;year`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(';').map(str::trim).collect();

        match parts.as_slice() {
            [title, author] if !title.is_empty() && !author.is_empty() => {
                Ok(Record::new(*title, *author))
            }
            [title, author, year] if !title.is_empty() && !author.is_empty() => {
                let year = year.parse::<i32>().map_err(|source| ParseError::InvalidYear {
                    input: year.to_string(),
                    source,
                })?;
                Ok(Record::dated(*title, *author, year))
            }
            _ => Err(ParseError::InvalidRecord(s.to_string())),
        }
    }
}

/// The named fields of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Year,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Author, Field::Year];

    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Year => "year",
        }
    }

    /// The mapping key this field is stored under.
    pub fn key(self) -> Key {
        Key::from(self.name())
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.name() == lower)
            .ok_or_else(|| ParseError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
