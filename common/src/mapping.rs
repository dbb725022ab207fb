//! # Ordered Mappings
//!
//! [`Mapping`] is an insertion-ordered map from [`Key`] to [`Value`], the
//! generic record shape the grouping and lookup helpers work on.
//!
//! A mapping whose keys are exactly `0, 1, 2, ...` in order behaves like a
//! list; anything else is *associative*. [`Mapping::push`] appends under the
//! next free integer key, so a mapping built only with `push` stays a list.
//! Once the key `i64::MAX` has been used there is no next key and `push`
//! refuses to append.

use indexmap::IndexMap;

use crate::grouping;
use crate::value::{Key, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    entries: IndexMap<Key, Value>,
    // None once i64::MAX has been used as a key
    next_index: Option<i64>,
}

impl Default for Mapping {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            next_index: Some(0),
        }
    }
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list-shaped mapping keyed `0..n`.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut mapping = Self::new();
        for value in values {
            mapping.push(value);
        }
        mapping
    }

    /// Stores `value` under `key`, returning what was there before.
    ///
    /// Overwriting keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key: Key = key.into();
        if let (Key::Int(n), Some(next)) = (&key, self.next_index) {
            if *n >= next {
                self.next_index = n.checked_add(1);
            }
        }
        self.entries.insert(key, value.into())
    }

    /// Appends `value` under one past the largest non-negative integer key
    /// seen so far and returns that key.
    ///
    /// Returns `None`, leaving the mapping untouched, when `i64::MAX` is
    /// already taken.
    pub fn push(&mut self, value: impl Into<Value>) -> Option<Key> {
        let key = Key::Int(self.next_index?);
        self.insert(key.clone(), value);
        Some(key)
    }

    /// Looks a key up, telling an absent key apart from a stored `Null`.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the value under `key`, or `default` when the key is absent or
    /// holds `Null`.
    pub fn safe_get<'a>(&'a self, key: &Key, default: &'a Value) -> &'a Value {
        match self.entries.get(key) {
            Some(value) if !value.is_null() => value,
            _ => default,
        }
    }

    /// `true` unless the keys are exactly `0, 1, ..., n - 1` in order.
    ///
    /// An empty mapping is not associative.
    pub fn is_associative(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .any(|(idx, key)| key.as_int() != Some(idx as i64))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Buckets `items` by the value each holds under `key`.
///
/// Items that lack `key`, or hold `Null` under it, are dropped. Bucket
/// labels follow [`Value::as_key`].
pub fn group_by(items: &[Mapping], key: &Key) -> IndexMap<Key, Vec<Mapping>> {
    grouping::group_by_key(items.iter().cloned(), |item| {
        item.get(key).and_then(Value::as_key)
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
