//! Hash-backed set used by the graph types and the clique search.

use std::collections::hash_set::{self, HashSet};
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// An unordered collection of distinct elements.
///
/// Mutators (`add`, `remove`) work in place and return `&mut Self` so calls can
/// be chained. `intersect` and `difference` always allocate a new set and never
/// touch either operand. Iteration order is arbitrary and may differ between
/// runs; nothing in this crate depends on it.
///
/// A `Set` is not meant to be shared between threads while being mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Set<T: Eq + Hash> {
    inner: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Create a new, empty set.
    pub fn empty() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    /// Create a set holding the distinct elements of `elements`.
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        elements.into_iter().collect()
    }

    /// Check whether `element` is in the set.
    pub fn contains(&self, element: &T) -> bool {
        self.inner.contains(element)
    }

    /// Insert `element`. Inserting an existing element is a no-op.
    pub fn add(&mut self, element: T) -> &mut Self {
        self.inner.insert(element);
        self
    }

    /// Delete `element` if present.
    pub fn remove(&mut self, element: &T) -> &mut Self {
        self.inner.remove(element);
        self
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate over the elements in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.inner.iter()
    }

    /// Returns true if no element is shared with `other`.
    pub fn is_disjoint(&self, other: &Set<T>) -> bool {
        self.inner.is_disjoint(&other.inner)
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Remove and return an arbitrary element, or `None` if the set is empty.
    ///
    /// An empty set is left untouched.
    pub fn pop(&mut self) -> Option<T> {
        let element = self.inner.iter().next()?.clone();
        self.inner.take(&element)
    }

    /// Elements present in both `self` and `other`.
    pub fn intersect(&self, other: &Set<T>) -> Set<T> {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .iter()
            .filter(|element| large.contains(element))
            .cloned()
            .collect()
    }

    /// Elements of `self` that are not in `other`.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        self.inner.difference(&other.inner).cloned().collect()
    }

    /// Copy the elements into a vector. The order is stable for this call only.
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.iter().cloned().collect()
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<T: Eq + Hash + fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for element in &self.inner {
            write!(f, "{} ", element)?;
        }
        write!(f, "}}")
    }
}
