use std::hash::Hash;

use indexmap::IndexMap;
use tracing::debug;

/// Splits `items` into buckets labelled by `key_of`.
///
/// Buckets appear in the order their label was first seen and keep the
/// relative order of their members. Items for which `key_of` yields `None`
/// are left out of the result.
pub fn group_by_key<T, K, I, F>(items: I, mut key_of: F) -> IndexMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    F: FnMut(&T) -> Option<K>,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    let mut dropped: usize = 0;

    for item in items {
        match key_of(&item) {
            Some(key) => groups.entry(key).or_default().push(item),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, "items without a group key were skipped");
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_keep_first_seen_and_insertion_order() {
        let words = ["apple", "bean", "avocado", "beet", "cherry"];
        let groups = group_by_key(words, |w| w.chars().next());

        let labels: Vec<char> = groups.keys().copied().collect();
        assert_eq!(labels, vec!['a', 'b', 'c']);
        assert_eq!(groups[&'a'], vec!["apple", "avocado"]);
        assert_eq!(groups[&'b'], vec!["bean", "beet"]);
    }

    #[test]
    fn items_without_key_are_dropped() {
        let numbers = [1, -2, 3, -4];
        let groups = group_by_key(numbers, |n| (*n > 0).then_some(n % 2));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&1], vec![1, 3]);
    }

    #[test]
    fn empty_input_gives_empty_grouping() {
        let groups = group_by_key(Vec::<u8>::new(), |n| Some(*n));
        assert!(groups.is_empty());
    }
}
