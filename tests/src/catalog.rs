#![cfg(test)]
use shelf_common::config::{Config, MissingYear};
use shelf_common::mapping::{self, Mapping};
use shelf_common::value::{Key, Value};
use shelf_core::catalog;
use shelf_core::sample::sample_catalog;
use shelf_core::{Field, Record};

use crate::util::rec;

/*************************************************************
                   Catalog walkthrough
**************************************************************/

#[test]
fn sample_catalog_walkthrough() {
    let cfg = Config::default();
    let books: Vec<Record> = sample_catalog();

    assert_eq!(catalog::titles(&books).len(), 5);
    assert!(catalog::has_author(&books, "оруэлл"));

    let filled = catalog::with_default_year(&books, cfg.default_year);
    assert!(filled.iter().all(|book| book.year().is_some()));
    assert_eq!(filled[3].year(), Some(2025));

    let recent = catalog::published_after(&books, 1950);
    assert_eq!(recent.len(), 2);

    let lines = catalog::describe(&books, &cfg.unknown_year);
    assert_eq!(lines[3], "Преступление и наказание (Достоевский, unknown)");

    let sorted = catalog::sort_books(&books, cfg.missing_year);
    assert_eq!(sorted.first().map(Record::title), Some("Собачье сердце"));
    assert_eq!(sorted.last().map(Record::title), Some("Преступление и наказание"));

    let groups = catalog::group_books(&books, Field::Author);
    assert_eq!(groups.len(), 4);
}

#[test]
fn record_mappings_group_like_records() {
    let books = sample_catalog();
    let mappings: Vec<Mapping> = catalog::to_mappings(&books);

    let by_mapping = mapping::group_by(&mappings, &Field::Author.key());
    let by_record = catalog::group_books(&books, Field::Author);

    let mapping_keys: Vec<&Key> = by_mapping.keys().collect();
    let record_keys: Vec<&Key> = by_record.keys().collect();
    assert_eq!(mapping_keys, record_keys);

    for (key, members) in &by_record {
        assert_eq!(by_mapping[key].len(), members.len());
    }
}

#[test]
fn grouping_mappings_by_year_drops_undated() {
    let mappings = catalog::to_mappings(&sample_catalog());
    let groups = mapping::group_by(&mappings, &Field::Year.key());
    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, 4);
}

#[test]
fn empty_catalog_is_harmless() {
    let books: Vec<Record> = Vec::new();
    assert!(catalog::titles(&books).is_empty());
    assert!(!catalog::has_author(&books, "anyone"));
    assert!(catalog::with_default_year(&books, 2025).is_empty());
    assert!(catalog::published_after(&books, 0).is_empty());
    assert!(catalog::sort_books(&books, MissingYear::Last).is_empty());
    assert!(catalog::group_books(&books, Field::Title).is_empty());
}

/*************************************************************
                 Undated records and sorting
**************************************************************/

#[test]
fn missing_year_policy_is_explicit() {
    let books = vec![
        rec("b", "x", None),
        rec("c", "x", Some(2000)),
        rec("a", "x", None),
        rec("d", "x", Some(1990)),
    ];

    let last = catalog::sort_books(&books, MissingYear::Last);
    assert_eq!(catalog::titles(&last), vec!["d", "c", "a", "b"]);

    let first = catalog::sort_books(&books, MissingYear::First);
    assert_eq!(catalog::titles(&first), vec!["a", "b", "d", "c"]);
}

#[test]
fn negative_years_sort_before_positive() {
    let books = vec![rec("later", "x", Some(5)), rec("earlier", "x", Some(-500))];
    let sorted = catalog::sort_books(&books, MissingYear::Last);
    assert_eq!(sorted[0].title(), "earlier");
}

/*************************************************************
                       Loading catalogs
**************************************************************/

#[test]
fn json_catalog_round_trips_into_operations() {
    let json = r#"[
        {"title": "Мы", "author": "Замятин", "year": 1920},
        {"title": "Котлован", "author": "Платонов"}
    ]"#;
    let books: Vec<Record> = serde_json::from_str(json).unwrap();

    assert_eq!(catalog::extract(&books, Field::Year), vec![Value::Int(1920), Value::Null]);
    assert!(catalog::has_author(&books, "ПЛАТОНОВ"));
}

#[test]
fn text_records_parse() {
    let books: Vec<Record> = ["1984;Оруэлл;1949", "Мы;Замятин"]
        .iter()
        .map(|line| line.parse())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(books[0].year(), Some(1949));
    assert_eq!(books[1].year(), None);
}
