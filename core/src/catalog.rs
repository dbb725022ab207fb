//! # Catalog Operations
//!
//! Stateless transformations over an ordered sequence of [`Record`]s.
//!
//! Nothing here fails. Missing years are either filled in, skipped or
//! printed as a placeholder depending on the operation; the input slice is
//! never modified.

use indexmap::IndexMap;
use shelf_common::grouping;
use shelf_common::mapping::Mapping;
use shelf_common::text;
use shelf_common::value::{Key, Value};
use tracing::debug;

use crate::record::{Field, Record};

mod sorting;

pub use sorting::{compare, sort_books};

/// Titles in catalog order.
pub fn titles(books: &[Record]) -> Vec<&str> {
    books.iter().map(Record::title).collect()
}

/// One value per record for `field`, in catalog order.
///
/// The result always has the same length as `books`; records without a year
/// contribute `Null`.
pub fn extract(books: &[Record], field: Field) -> Vec<Value> {
    books.iter().map(|book| book.field(field)).collect()
}

/// Whether any record was written by `author`, ignoring case.
pub fn has_author(books: &[Record], author: &str) -> bool {
    books
        .iter()
        .any(|book| text::eq_ignore_case(book.author(), author))
}

/// Copies the catalog, giving `default_year` to every undated record.
///
/// Years that are already set are kept, so applying this twice changes
/// nothing the second time.
pub fn with_default_year(books: &[Record], default_year: i32) -> Vec<Record> {
    books
        .iter()
        .map(|book| match book.year() {
            Some(_) => book.clone(),
            None => book.clone().with_year(default_year),
        })
        .collect()
}

/// Records published strictly after `min_year`. Undated records never match.
pub fn published_after(books: &[Record], min_year: i32) -> Vec<Record> {
    books
        .iter()
        .filter(|book| book.year().is_some_and(|year| year > min_year))
        .cloned()
        .collect()
}

/// `title (author, year)` lines, with `unknown` for missing years.
pub fn describe(books: &[Record], unknown: &str) -> Vec<String> {
    books.iter().map(|book| book.describe(unknown)).collect()
}

/// Buckets records by the value of `field`.
///
/// Buckets come in first-seen order. Undated records are left out when
/// grouping by year.
pub fn group_books(books: &[Record], field: Field) -> IndexMap<Key, Vec<Record>> {
    let groups = grouping::group_by_key(books.iter().cloned(), |book| book.field(field).as_key());
    debug!(field = %field, buckets = groups.len(), "catalog grouped");
    groups
}

pub fn to_mappings(books: &[Record]) -> Vec<Mapping> {
    books.iter().map(Record::to_mapping).collect()
}
