#![cfg(test)]
use proptest::prelude::*;
use shelf_common::collections::{Queue, Stack};
use shelf_common::config::MissingYear;
use shelf_common::mapping::{self, Mapping};
use shelf_core::catalog;
use shelf_core::{Field, Record};

use crate::util::arb_catalog;

proptest! {
    #[test]
    fn extract_keeps_length_and_order(books in arb_catalog()) {
        let titles = catalog::extract(&books, Field::Title);
        prop_assert_eq!(titles.len(), books.len());
        for (value, book) in titles.iter().zip(&books) {
            prop_assert_eq!(value.as_str(), Some(book.title()));
        }
    }

    #[test]
    fn default_fill_is_idempotent(books in arb_catalog(), year in 1000i32..3000) {
        let once = catalog::with_default_year(&books, year);
        let twice = catalog::with_default_year(&once, year);
        prop_assert_eq!(&once, &twice);

        // explicit years survive a different default
        let other = catalog::with_default_year(&once, year + 1);
        prop_assert_eq!(once, other);
    }

    #[test]
    fn threshold_filter_never_keeps_undated(books in arb_catalog(), bound in 1800i32..2030) {
        let kept = catalog::published_after(&books, bound);
        prop_assert!(kept.iter().all(|book| book.year().is_some_and(|y| y > bound)));

        let expected = books.iter().filter(|book| book.year().is_some_and(|y| y > bound)).count();
        prop_assert_eq!(kept.len(), expected);
    }

    #[test]
    fn sort_is_ordered_permutation(books in arb_catalog()) {
        let sorted = catalog::sort_books(&books, MissingYear::Last);
        prop_assert_eq!(sorted.len(), books.len());

        for pair in sorted.windows(2) {
            prop_assert_ne!(
                catalog::compare(&pair[0], &pair[1], MissingYear::Last),
                std::cmp::Ordering::Greater
            );
        }

        let mut left: Vec<Record> = books.clone();
        let mut right: Vec<Record> = sorted.clone();
        left.sort_by(|a, b| format!("{a:?}").cmp(&format!("{b:?}")));
        right.sort_by(|a, b| format!("{a:?}").cmp(&format!("{b:?}")));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn sort_is_deterministic(books in arb_catalog()) {
        let first = catalog::sort_books(&books, MissingYear::First);
        let again = catalog::sort_books(&first, MissingYear::First);
        prop_assert_eq!(first, again);
    }

    #[test]
    fn grouping_covers_exactly_the_keyed_items(books in arb_catalog()) {
        let mappings: Vec<Mapping> = catalog::to_mappings(&books);
        let groups = mapping::group_by(&mappings, &Field::Year.key());

        let grouped: usize = groups.values().map(Vec::len).sum();
        let dated = books.iter().filter(|book| book.year().is_some()).count();
        prop_assert_eq!(grouped, dated);
    }

    #[test]
    fn has_author_ignores_case(books in arb_catalog()) {
        for book in &books {
            prop_assert!(catalog::has_author(&books, &book.author().to_uppercase()));
            prop_assert!(catalog::has_author(&books, &book.author().to_lowercase()));
        }
    }

    #[test]
    fn queue_is_fifo_and_stack_is_lifo(values in prop::collection::vec(any::<u16>(), 0..32)) {
        let mut queue: Queue<u16> = Queue::new();
        let mut stack: Stack<u16> = Stack::new();
        for &value in &values {
            queue.enqueue(value);
            stack.push(value);
        }

        let drained: Vec<u16> = std::iter::from_fn(|| queue.dequeue()).collect();
        prop_assert_eq!(&drained, &values);

        let popped: Vec<u16> = std::iter::from_fn(|| stack.pop()).collect();
        let reversed: Vec<u16> = values.iter().rev().copied().collect();
        prop_assert_eq!(popped, reversed);
    }

    #[test]
    fn lists_are_never_associative(values in prop::collection::vec(any::<i64>(), 0..16)) {
        prop_assert!(!Mapping::list(values).is_associative());
    }
}
