//! A hash set that counts insertion attempts.

use std::collections::HashSet;
use std::hash::Hash;
use std::ops::Deref;

/// Wraps a [`HashSet`] and counts every element offered to it.
///
/// Duplicates count too: `objects_added` tracks insertion attempts, not the
/// set's size. Read-only set operations are available through `Deref`.
///
/// # Examples
///
/// ```
/// use tally::counting::CountingSet;
///
/// let mut set = CountingSet::new();
/// set.extend([1, 1, 2]);
/// assert_eq!(set.objects_added(), 3);
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct CountingSet<T> {
    inner: HashSet<T>,
    objects_added: usize,
}

impl<T: Eq + Hash> CountingSet<T> {
    pub fn new() -> Self {
        Self::from_set(HashSet::new())
    }

    /// Wraps an existing set. Its current elements are not counted.
    pub fn from_set(inner: HashSet<T>) -> Self {
        Self {
            inner,
            objects_added: 0,
        }
    }

    /// Inserts `value`, returning whether it was newly added.
    pub fn insert(&mut self, value: T) -> bool {
        self.objects_added += 1;
        self.inner.insert(value)
    }

    pub fn objects_added(&self) -> usize {
        self.objects_added
    }

    pub fn into_inner(self) -> HashSet<T> {
        self.inner
    }
}

impl<T: Eq + Hash> Default for CountingSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Extend<T> for CountingSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Deref for CountingSet<T> {
    type Target = HashSet<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
