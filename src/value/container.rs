//! The ordered key-value container every transform operates on.

use super::key::Key;
use super::value::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Container is an ordered sequence of `(Key, Value)` pairs with unique keys.
///
/// A single container plays both the list and the map role. Whether it is
/// list-like is derived from its keys on demand by [`Container::is_list_like`]
/// and never stored, so structural edits can't leave a stale classification.
///
/// Equality is strict and order-sensitive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Container {
    entries: Vec<(Key, Value)>,
}

impl Container {
    /// Creates a new empty container.
    pub fn new() -> Self {
        Container {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Container {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Creates a list-like container holding `values` at keys `0..n-1`.
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Container {
            entries: values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i as u64), v.into()))
                .collect(),
        }
    }

    /// Builds a container from pairs already known to have unique keys.
    pub(crate) fn from_unique_entries(entries: Vec<(Key, Value)>) -> Self {
        debug_assert!(
            entries
                .iter()
                .enumerate()
                .all(|(i, (k, _))| entries[..i].iter().all(|(p, _)| p != k)),
            "duplicate key in container entries"
        );
        Container { entries }
    }

    /// Returns true if the keys are exactly `0..n-1` in order.
    ///
    /// The empty container is list-like.
    pub fn is_list_like(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (k, _))| *k == Key::Index(i as u64))
    }

    /// Returns true if the container is not list-like.
    pub fn is_map_like(&self) -> bool {
        !self.is_list_like()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &Key) -> Option<usize> {
        match key.canonical_index() {
            Some(n) => self.entries.iter().position(|(k, _)| k.as_index() == Some(n)),
            None => self.entries.iter().position(|(k, _)| k == key),
        }
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.position(key).map(move |i| &mut self.entries[i].1)
    }

    pub fn get_key_value(&self, key: &Key) -> Option<(&Key, &Value)> {
        self.position(key).map(|i| {
            let (k, v) = &self.entries[i];
            (k, v)
        })
    }

    /// Builds a hash index of the entries for repeated lookups.
    pub(crate) fn index(&self) -> HashMap<&Key, &Value> {
        self.entries.iter().map(|(k, v)| (k, v)).collect()
    }

    pub fn contains_key(&self, key: &Key) -> bool {
        self.position(key).is_some()
    }

    /// Returns the value under `key`, appending `default()` first if the key
    /// is absent.
    pub fn get_or_insert_with(&mut self, key: Key, default: impl FnOnce() -> Value) -> &mut Value {
        let i = match self.position(&key) {
            Some(i) => i,
            None => {
                self.entries.push((key.normalized(), default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[i].1
    }

    /// Inserts a value. An existing key keeps its position and the previous
    /// value is returned; a new key is appended.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into().normalized();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Appends a value under the next free integer key: one past the largest
    /// integer key, or 0 if there is none.
    pub fn push(&mut self, value: impl Into<Value>) {
        let next = self
            .entries
            .iter()
            .filter_map(|(k, _)| k.as_index())
            .max()
            .map_or(0, |m| m + 1);
        self.entries.push((Key::Index(next), value.into()));
    }

    /// Removes an entry, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    /// Returns the values re-keyed as `0..n-1`.
    pub fn reindexed(self) -> Self {
        Container::list(self.entries.into_iter().map(|(_, v)| v))
    }

    /// Reindexes when `list_like` holds, otherwise returns the container as is.
    pub(crate) fn reindexed_if(self, list_like: bool) -> Self {
        if list_like {
            self.reindexed()
        } else {
            self
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Returns the entries in order.
    pub fn entries(&self) -> &[(Key, Value)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(Key, Value)> {
        self.entries
    }

    /// Compares two containers entry by entry (key, then value), then by length.
    pub fn natural_cmp(&self, other: &Container) -> Ordering {
        for ((ka, va), (kb, vb)) in self.entries.iter().zip(other.entries.iter()) {
            let ord = ka.cmp(kb).then_with(|| va.natural_cmp(vb));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.entries.len().cmp(&other.entries.len())
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Container {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut container = Container::new();
        for (k, v) in iter {
            container.insert(k, v);
        }
        container
    }
}

impl From<Vec<Value>> for Container {
    fn from(values: Vec<Value>) -> Self {
        Container::list(values)
    }
}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a (Key, Value);
    type IntoIter = std::slice::Iter<'a, (Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_list_like() {
            write!(f, "[")?;
            for (i, (_, v)) in self.entries.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", v)?;
            }
            write!(f, "]")
        } else {
            write!(f, "{{")?;
            for (i, (k, v)) in self.entries.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                match k {
                    Key::Index(n) => write!(f, "{}: {}", n, v)?,
                    Key::Name(s) => write!(f, "{:?}: {}", s, v)?,
                }
            }
            write!(f, "}}")
        }
    }
}
