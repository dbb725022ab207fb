use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::*;

use crate::sprint;
use crate::terminal::{colors, format, print};
use shelf_common::config::Config;
use shelf_common::{info, success, warn};
use shelf_core::catalog;
use shelf_core::sample::sample_catalog;
use shelf_core::{Field, Record};

/// Reads the catalog from a JSON file, or falls back to the sample catalog,
/// then appends `extra`.
pub fn load(path: Option<&Path>, extra: &[Record]) -> anyhow::Result<Vec<Record>> {
    let mut books: Vec<Record> = match path {
        Some(path) => read_catalog(path)?,
        None => {
            info!("Using the built-in sample catalog");
            sample_catalog()
        }
    };

    if !extra.is_empty() {
        books.extend_from_slice(extra);
        info!("{} record(s) added from the command line", extra.len());
    }
    Ok(books)
}

fn read_catalog(path: &Path) -> anyhow::Result<Vec<Record>> {
    let raw: String = fs::read_to_string(path)
        .with_context(|| format!("reading catalog file {}", path.display()))?;
    let books: Vec<Record> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalog file {}", path.display()))?;

    let len: usize = books.len();
    let unit: &str = if len == 1 { "record has been" } else { "records have been" };
    success!("{len} {unit} loaded from {}", path.display());

    if books.is_empty() {
        warn!("The catalog is empty");
    }
    Ok(books)
}

pub fn titles(books: &[Record], cfg: &Config) {
    print::header("titles", cfg.quiet);
    let titles: Vec<&str> = catalog::titles(books);
    if titles.is_empty() {
        print::no_results(cfg.quiet);
        return;
    }
    for (idx, title) in titles.iter().enumerate() {
        print::print_status(format!("{} {}", idx.to_string().color(colors::ACCENT), title));
    }
}

pub fn has_author(books: &[Record], author: &str, cfg: &Config) {
    print::header("author lookup", cfg.quiet);
    let found: bool = catalog::has_author(books, author);
    print::aligned_line(author, format::bool_colored(found), author.chars().count());
}

pub fn fill_years(books: &[Record], cfg: &Config) {
    print::header("default years", cfg.quiet);
    let filled: Vec<Record> = catalog::with_default_year(books, cfg.default_year);
    let changed: usize = books.iter().filter(|book| book.year().is_none()).count();
    print_books(&filled, cfg);
    if cfg.quiet == 0 {
        sprint!();
    }
    success!("{changed} record(s) received the year {}", cfg.default_year);
}

pub fn after(books: &[Record], year: i32, cfg: &Config) {
    print::header(&format!("published after {year}"), cfg.quiet);
    print_books(&catalog::published_after(books, year), cfg);
}

pub fn describe(books: &[Record], cfg: &Config) {
    print::header("descriptions", cfg.quiet);
    let lines: Vec<String> = catalog::describe(books, &cfg.unknown_year);
    if lines.is_empty() {
        print::no_results(cfg.quiet);
        return;
    }
    for line in lines {
        print::print_status(line);
    }
}

pub fn sort(books: &[Record], cfg: &Config) {
    print::header("sorted by year and title", cfg.quiet);
    print_books(&catalog::sort_books(books, cfg.missing_year), cfg);
}

pub fn group(books: &[Record], field: Field, cfg: &Config) {
    print::header(&format!("grouped by {field}"), cfg.quiet);
    let groups = catalog::group_books(books, field);
    if groups.is_empty() {
        print::no_results(cfg.quiet);
        return;
    }

    for (idx, (key, members)) in groups.iter().enumerate() {
        print::tree_head(idx, &key.to_string());
        let details: Vec<format::Detail> = members
            .iter()
            .map(|book| {
                let label: String = String::from("Book");
                (label, book.describe(&cfg.unknown_year).normal())
            })
            .collect();
        print::as_tree_one_level(details);
        if idx + 1 != groups.len() {
            sprint!();
        }
    }

    let kept: usize = groups.values().map(Vec::len).sum();
    if kept < books.len() {
        warn!("{} record(s) have no {field} and were left out", books.len() - kept);
    }
}

/// Every catalog operation, one after another.
pub fn tour(books: &[Record], cfg: &Config) {
    titles(books, cfg);
    if let Some(author) = books.first().map(Record::author) {
        has_author(books, &author.to_lowercase(), cfg);
    }
    fill_years(books, cfg);
    after(books, 1950, cfg);
    describe(books, cfg);
    sort(books, cfg);
    group(books, Field::Author, cfg);
    print_summary(books, cfg);
}

fn print_summary(books: &[Record], cfg: &Config) {
    let undated: usize = books.iter().filter(|book| book.year().is_none()).count();
    let total: ColoredString = format!("{} records", books.len()).bold().green();
    let undated: ColoredString = format!("{undated} undated").bold().yellow();
    let output: String = format!("Tour complete: {total}, {undated}");

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            sprint!();
            success!("{}", output)
        }
    }
}

fn print_books(books: &[Record], cfg: &Config) {
    if books.is_empty() {
        print::no_results(cfg.quiet);
        return;
    }
    for (idx, book) in books.iter().enumerate() {
        print::tree_head(idx, book.title());
        if cfg.quiet < 2 {
            print::as_tree_one_level(format::record_to_details(book, &cfg.unknown_year));
        }
    }
}
