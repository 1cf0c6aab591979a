use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use sc_utils::hash::HashMap;

// -----------------------------------------------------------------------------
// Record

/// A string-keyed map that remembers insertion order.
///
/// Records are the object shape on both sides of the boundary:
/// [`PlainRecord`](crate::PlainRecord) is `Record<PlainValue>` and the live
/// dynamic record is `Record<Value>`.
///
/// Iteration follows insertion order, which is how serialized fields keep the
/// declaration order of their class. Equality ignores the order.
///
/// Inserting an existing key overwrites the value in place.
///
/// # Examples
///
/// ```
/// use sc_class::{PlainRecord, PlainValue};
///
/// let mut record = PlainRecord::new();
/// record.insert("b", 1);
/// record.insert("a", 2);
/// record.insert("b", 3);
///
/// let keys: Vec<&str> = record.keys().collect();
/// assert_eq!(keys, ["b", "a"]);
/// assert_eq!(record.get("b"), Some(&PlainValue::from(3)));
/// ```
#[derive(Clone)]
pub struct Record<V> {
    entries: Vec<(String, V)>,
    indices: HashMap<String, usize>,
}

impl<V> Default for Record<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Record<V> {
    /// Creates an empty `Record`.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            indices: HashMap::default(),
        }
    }

    /// Creates a new empty `Record` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts a value, returning the previous value of the key if any.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<V>) -> Option<V> {
        let key: String = key.into();
        let value: V = value.into();
        if let Some(&index) = self.indices.get(key.as_str()) {
            return Some(core::mem::replace(&mut self.entries[index].1, value));
        }
        self.indices.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Builder form of [`insert`](Self::insert).
    #[inline]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<V>) -> Self {
        self.insert(key, value);
        self
    }

    /// Removes a key, returning its value. Later entries shift down by one.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.indices.remove(key)?;
        let (_, value) = self.entries.remove(index);
        for (_, slot) in self.indices.iter_mut() {
            if *slot > index {
                *slot -= 1;
            }
        }
        Some(value)
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.indices.get(key).map(|&index| &self.entries[index].1)
    }

    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.indices
            .get(key)
            .map(|&index| &mut self.entries[index].1)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.indices.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &V)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates `(key, value)` pairs in insertion order with mutable values.
    #[inline]
    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = (&str, &mut V)> + '_ {
        self.entries
            .iter_mut()
            .map(|(key, value)| (key.as_str(), value))
    }

    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<V: PartialEq> PartialEq for Record<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl<V: fmt::Debug> fmt::Debug for Record<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut record = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Record<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = (String, V);
    type IntoIter = alloc::vec::IntoIter<(String, V)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// -----------------------------------------------------------------------------
// Tests
