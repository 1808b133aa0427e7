//! Hash-consing containers backing both forests.
//!
//! Neither container exposes removal, so an index handed out once stays
//! valid and keeps pointing at the same value for the lifetime of the
//! container.

use std::hash::Hash;
use std::ops::{Deref, Index};
use grammar::{Map, Set};

#[derive(Debug, Clone)]
pub struct IndexedSet<T>(Set<T>);

impl<T: Hash + Eq> IndexedSet<T> {
  pub fn new() -> Self {
    Self(Set::default())
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self(Set::with_capacity_and_hasher(capacity, Default::default()))
  }

  /// Returns the index of `value` and whether it was newly inserted. An
  /// equal value already present keeps its index and `value` is dropped.
  pub fn insert(&mut self, value: T) -> (usize, bool) {
    self.0.insert_full(value)
  }

  pub fn index_of(&self, value: &T) -> Option<usize> {
    self.0.get_index_of(value)
  }

  pub fn contains(&self, value: &T) -> bool {
    self.0.contains(value)
  }

  pub fn get(&self, index: usize) -> Option<&T> {
    self.0.get_index(index)
  }
}

impl<T: Hash + Eq> Default for IndexedSet<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Index<usize> for IndexedSet<T> {
  type Output = T;

  fn index(&self, index: usize) -> &T {
    &self.0[index]
  }
}

impl<T> Deref for IndexedSet<T> {
  type Target = Set<T>;

  fn deref(&self) -> &Set<T> {
    &self.0
  }
}

/// Map keyed by forest indices.
#[derive(Debug, Clone)]
pub struct IndexedMap<V>(Map<usize, V>);

impl<V> IndexedMap<V> {
  pub fn new() -> Self {
    Self(Map::default())
  }

  pub fn with_capacity(capacity: usize) -> Self {
    Self(Map::with_capacity_and_hasher(capacity, Default::default()))
  }

  pub fn get(&self, key: usize) -> Option<&V> {
    self.0.get(&key)
  }

  pub fn get_mut(&mut self, key: usize) -> Option<&mut V> {
    self.0.get_mut(&key)
  }

  /// Returns the previous value, like `IndexMap::insert`. The key keeps its
  /// position when it was already present.
  pub fn insert(&mut self, key: usize, value: V) -> Option<V> {
    self.0.insert(key, value)
  }

  pub fn contains_key(&self, key: usize) -> bool {
    self.0.contains_key(&key)
  }
}

impl<V> Default for IndexedMap<V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<V> Deref for IndexedMap<V> {
  type Target = Map<usize, V>;

  fn deref(&self) -> &Map<usize, V> {
    &self.0
  }
}
