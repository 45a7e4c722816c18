/* Description: Insertion-ordered sets deduplicated by canonical string.

Copyright (C) 2024 Danny McClanahan <dmcC2@hypnicjerk.ai>
SPDX-License-Identifier: GPL-3.0-or-later

This file is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as
published by the Free Software Foundation; either version 3 of the
License, or (at your option) any later version.

This file is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>. */

//! Insertion-ordered sets deduplicated by canonical string.
//!
//! Two elements are the same element iff their keys are equal. Nothing is ever removed, so
//! the position an element was inserted at is a stable handle for it.

use core::{fmt, ops};

use indexmap::{map::Entry, IndexMap};

use crate::{edge::Edge, state::State, FxBuildHasher};

/// Elements identified by a canonical string.
pub trait Keyed {
  fn key(&self) -> &str;
}

pub struct KeyedSet<T> {
  elements: IndexMap<String, T, FxBuildHasher>,
}

pub type StateSet = KeyedSet<State>;
pub type EdgeSet = KeyedSet<Edge>;

impl<T> KeyedSet<T>
where T: Keyed
{
  pub fn new() -> Self {
    Self {
      elements: IndexMap::with_hasher(FxBuildHasher::default()),
    }
  }

  #[inline]
  pub fn len(&self) -> usize { self.elements.len() }

  #[inline]
  pub fn is_empty(&self) -> bool { self.elements.is_empty() }

  /// Stores `element` unless its key is already present, in which case nothing changes and
  /// the stored element is returned instead.
  pub fn add(&mut self, element: T) -> &T {
    let (index, _) = self.insert_full(element);
    &self.elements[index]
  }

  /// Like [`Self::add`], but returns the position of the stored element and whether `element`
  /// was the one stored.
  pub fn insert_full(&mut self, element: T) -> (usize, bool) {
    match self.elements.entry(element.key().to_string()) {
      Entry::Occupied(o) => (o.index(), false),
      Entry::Vacant(v) => {
        let index = v.index();
        v.insert(element);
        (index, true)
      },
    }
  }

  #[inline]
  pub fn has(&self, key: &str) -> bool { self.elements.contains_key(key) }

  /// Whether an element with the same key as `element` is stored.
  #[inline]
  pub fn has_like(&self, element: &T) -> bool { self.has(element.key()) }

  #[inline]
  pub fn get(&self, key: &str) -> Option<&T> { self.elements.get(key) }

  /// The stored element sharing `element`'s key, which need not be `element` itself.
  #[inline]
  pub fn get_like(&self, element: &T) -> Option<&T> { self.get(element.key()) }

  #[inline]
  pub fn index_of(&self, key: &str) -> Option<usize> { self.elements.get_index_of(key) }

  #[inline]
  pub fn get_index(&self, index: usize) -> Option<&T> {
    self.elements.get_index(index).map(|(_, v)| v)
  }

  #[inline]
  pub(crate) fn get_index_mut(&mut self, index: usize) -> Option<&mut T> {
    self.elements.get_index_mut(index).map(|(_, v)| v)
  }

  pub fn keys(&self) -> impl ExactSizeIterator<Item=&str>+DoubleEndedIterator+'_ {
    self.elements.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl ExactSizeIterator<Item=&T>+DoubleEndedIterator+'_ {
    self.elements.values()
  }
}

impl<T> Default for KeyedSet<T>
where T: Keyed
{
  fn default() -> Self { Self::new() }
}

impl<T> Clone for KeyedSet<T>
where T: Clone
{
  fn clone(&self) -> Self {
    Self {
      elements: self.elements.clone(),
    }
  }
}

impl<T> fmt::Debug for KeyedSet<T>
where T: fmt::Debug
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_list().entries(self.elements.values()).finish()
  }
}

impl<T> ops::Index<usize> for KeyedSet<T> {
  type Output = T;

  fn index(&self, index: usize) -> &T { &self.elements[index] }
}

impl<T> FromIterator<T> for KeyedSet<T>
where T: Keyed
{
  fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
    let mut set = Self::new();
    for element in iter {
      set.add(element);
    }
    set
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[derive(Debug, Clone, PartialEq, Eq)]
  struct Tagged {
    key: String,
    tag: u32,
  }

  impl Tagged {
    fn new(key: &str, tag: u32) -> Self {
      Self {
        key: key.to_string(),
        tag,
      }
    }
  }

  impl Keyed for Tagged {
    fn key(&self) -> &str { &self.key }
  }

  #[test]
  fn add_and_lookup() {
    let set: KeyedSet<Tagged> = [Tagged::new("N1", 0), Tagged::new("N2", 1)]
      .into_iter()
      .collect();
    assert_eq!(set.len(), 2);
    assert!(set.has("N1"));
    assert!(set.has_like(&Tagged::new("N2", 99)));
    assert!(!set.has("N3"));
    assert_eq!(set.get("N2").map(|t| t.tag), Some(1));
    assert_eq!(set.index_of("N2"), Some(1));
    assert_eq!(set.keys().collect::<Vec<_>>(), vec!["N1", "N2"]);
  }

  #[test]
  fn duplicate_returns_existing() {
    let mut set = KeyedSet::new();
    let first = set.add(Tagged::new("N1", 0)).clone();
    let again = set.add(Tagged::new("N1", 7)).clone();
    assert_eq!(set.len(), 1);
    assert_eq!(first, again);
    assert_eq!(again.tag, 0);
    assert_eq!(set.get_like(&Tagged::new("N1", 7)).map(|t| t.tag), Some(0));

    assert_eq!(set.insert_full(Tagged::new("N1", 3)), (0, false));
    assert_eq!(set.insert_full(Tagged::new("N2", 3)), (1, true));
    assert_eq!(set.len(), 2);
  }
}
