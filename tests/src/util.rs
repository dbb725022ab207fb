#![cfg(test)]
use proptest::prelude::*;
use shelf_core::Record;

pub fn rec(title: &str, author: &str, year: Option<i32>) -> Record {
    let record = Record::new(title, author);
    match year {
        Some(year) => record.with_year(year),
        None => record,
    }
}

pub fn arb_record() -> impl Strategy<Value = Record> {
    (
        "[a-zA-Zа-я ]{1,12}",
        prop::sample::select(vec!["Оруэлл", "Булгаков", "Рэнд", "Достоевский", "Orwell"]),
        prop::option::of(1800i32..2030),
    )
        .prop_map(|(title, author, year)| rec(&title, author, year))
}

pub fn arb_catalog() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..24)
}
