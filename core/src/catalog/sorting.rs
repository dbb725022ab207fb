//! Ordering of catalog records.
//!
//! Records sort by year, then by title compared byte by byte. Where undated
//! records go is decided by [`MissingYear`]; among themselves they are
//! ordered by title as well.

use std::cmp::Ordering;

use shelf_common::config::MissingYear;
use tracing::debug;

use crate::record::Record;

/// Total order used by [`sort_books`].
pub fn compare(a: &Record, b: &Record, missing: MissingYear) -> Ordering {
    let by_year = match (a.year(), b.year()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => undated_side(missing),
        (Some(_), None) => undated_side(missing).reverse(),
    };
    by_year.then_with(|| a.title().as_bytes().cmp(b.title().as_bytes()))
}

fn undated_side(missing: MissingYear) -> Ordering {
    match missing {
        MissingYear::Last => Ordering::Greater,
        MissingYear::First => Ordering::Less,
    }
}

/// Sorted copy of the catalog. The sort is stable, so records equal in both
/// year and title keep their input order.
pub fn sort_books(books: &[Record], missing: MissingYear) -> Vec<Record> {
    let undated = books.iter().filter(|book| book.year().is_none()).count();
    if undated > 0 {
        debug!(undated, policy = %missing, "sorting catalog with undated records");
    }

    let mut sorted: Vec<Record> = books.to_vec();
    sorted.sort_by(|a, b| compare(a, b, missing));
    sorted
}
