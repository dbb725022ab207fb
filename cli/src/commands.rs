pub mod books;
pub mod check;
pub mod collections;
pub mod mapping;
pub mod numbers;
pub mod text;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use shelf_common::config::{DEFAULT_YEAR, MissingYear, UNKNOWN_YEAR};
use shelf_core::{Field, Record};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Book catalog and collection utilities.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON array of {"title", "author", "year"?} objects; the built-in
    /// sample catalog is used when omitted
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Extra record appended to the catalog, as "title;author" or
    /// "title;author;year" (repeatable)
    #[arg(long = "add", global = true)]
    pub extra: Vec<Record>,

    /// Year given to undated books by `fill-years`
    #[arg(long, global = true, default_value_t = DEFAULT_YEAR)]
    pub default_year: i32,

    /// Text printed in place of a missing year
    #[arg(long, global = true, default_value = UNKNOWN_YEAR)]
    pub unknown_label: String,

    /// Where undated books go when sorting (first or last)
    #[arg(long, global = true, default_value_t = MissingYear::Last)]
    pub missing_year: MissingYear,

    /// Hide decoration; repeat to hide more
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every title in catalog order
    #[command(alias = "t")]
    Titles,
    /// Check for a book by an author, ignoring case
    HasAuthor { author: String },
    /// Give undated books the default year
    FillYears,
    /// Books published strictly after a year
    After { year: i32 },
    /// One "title (author, year)" line per book
    #[command(alias = "d")]
    Describe,
    /// Sort by year, then by title
    #[command(alias = "s")]
    Sort,
    /// Group books by title, author or year
    #[command(alias = "g")]
    Group { field: Field },
    /// Run every catalog operation in turn
    Tour,
    /// Push values onto a stack, then pop some off
    Stack {
        values: Vec<String>,
        #[arg(long, default_value_t = 1)]
        pops: usize,
    },
    /// Enqueue values, then dequeue some
    Queue {
        values: Vec<String>,
        #[arg(long, default_value_t = 1)]
        takes: usize,
    },
    /// Build a mapping from `key=value` entries and bare values
    #[command(alias = "m")]
    Map {
        entries: Vec<String>,
        /// Key to look up safely
        #[arg(long)]
        get: Option<String>,
        /// Returned by the lookup when the key is absent or null
        #[arg(long, default_value = "null")]
        default: String,
    },
    /// String transforms
    Text {
        action: TextAction,
        #[arg(required = true)]
        input: Vec<String>,
    },
    /// Numeric helpers
    Num { action: NumAction, input: String },
    /// Validate user input
    Check { kind: CheckKind, input: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TextAction {
    /// Capitalize every word
    TitleCase,
    /// First and last character
    FirstLast,
    /// Join first and last name
    FullName,
    /// Last path segment
    FileName,
    /// Join tags into a comma separated line
    Tags,
    /// Split a comma separated line into tags
    SplitTags,
    /// Percent-encode a search query
    Url,
    /// Password strength check
    Password,
    /// Find email addresses
    Emails,
    /// Hide every number
    Mask,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum NumAction {
    Prime,
    Fib,
    /// Comma separated list, computed with one shared cache
    Factorial,
    Phone,
    /// Draw this many values from a fresh counter
    Count,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CheckKind {
    Email,
    Name,
    Age,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
