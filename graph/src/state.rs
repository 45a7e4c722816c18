/* Description: Vertices of an automaton.

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

//! Vertices of an automaton.

use core::fmt;

use indexmap::IndexSet;

use crate::{
  collections::Keyed,
  edge::{Edge, EdgeId},
  FxBuildHasher,
};

/// Position of a state within its automaton.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct StateId(pub(crate) usize);

impl StateId {
  #[inline(always)]
  pub const fn as_index(self) -> usize { self.0 }
}

impl fmt::Display for StateId {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "#{}", self.0) }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StateOptions {
  pub initial: bool,
  pub fin: bool,
}

impl StateOptions {
  pub const INITIAL: Self = Self {
    initial: true,
    fin: false,
  };
  pub const FINAL: Self = Self {
    initial: false,
    fin: true,
  };
  pub const INITIAL_FINAL: Self = Self {
    initial: true,
    fin: true,
  };
}

type EdgeIds = IndexSet<EdgeId, FxBuildHasher>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
  id: StateId,
  label: String,
  initial: bool,
  fin: bool,
  /// Edges leaving this state, in insertion order.
  outgoing: EdgeIds,
  /// Edges entering this state, in insertion order.
  incoming: EdgeIds,
}

impl State {
  pub(crate) fn new(id: StateId, label: &str, options: StateOptions) -> Self {
    let StateOptions { initial, fin } = options;
    Self {
      id,
      label: label.to_string(),
      initial,
      fin,
      outgoing: EdgeIds::default(),
      incoming: EdgeIds::default(),
    }
  }

  #[inline]
  pub fn id(&self) -> StateId { self.id }

  #[inline]
  pub fn label(&self) -> &str { &self.label }

  #[inline]
  pub fn is_initial(&self) -> bool { self.initial }

  #[inline]
  pub fn is_final(&self) -> bool { self.fin }

  pub fn outgoing(&self) -> impl ExactSizeIterator<Item=EdgeId>+'_ { self.outgoing.iter().copied() }

  pub fn incoming(&self) -> impl ExactSizeIterator<Item=EdgeId>+'_ { self.incoming.iter().copied() }

  #[inline]
  pub fn has_outgoing(&self, edge: EdgeId) -> bool { self.outgoing.contains(&edge) }

  #[inline]
  pub fn has_incoming(&self, edge: EdgeId) -> bool { self.incoming.contains(&edge) }

  pub(crate) fn demote(&mut self) { self.initial = false; }

  /// Records `edge` as leaving this state. If `edge` does not start here, nothing is recorded
  /// and `None` is returned.
  pub(crate) fn register_outgoing(&mut self, id: EdgeId, edge: &Edge) -> Option<EdgeId> {
    if edge.source() != self.id {
      return None;
    }
    self.outgoing.insert(id);
    Some(id)
  }

  /// Records `edge` as entering this state. If `edge` does not end here, nothing is recorded
  /// and `None` is returned.
  pub(crate) fn register_incoming(&mut self, id: EdgeId, edge: &Edge) -> Option<EdgeId> {
    if edge.target() != self.id {
      return None;
    }
    self.incoming.insert(id);
    Some(id)
  }
}

impl Keyed for State {
  fn key(&self) -> &str { &self.label }
}

impl fmt::Display for State {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(&self.label) }
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::transition::Transition;

  #[test]
  fn options() {
    let s = State::new(StateId(0), "N1", StateOptions::INITIAL_FINAL);
    assert!(s.is_initial());
    assert!(s.is_final());
    assert_eq!(s.to_string(), "N1");

    let s = State::new(StateId(1), "N2", StateOptions::default());
    assert!(!s.is_initial());
    assert!(!s.is_final());
  }

  #[test]
  fn registration_checks_endpoints() {
    let mut a = State::new(StateId(0), "A", StateOptions::default());
    let mut b = State::new(StateId(1), "B", StateOptions::default());
    let edge = Edge::between(&a, &b, Transition::Symbol('a'));
    let id = EdgeId(0);

    assert_eq!(b.register_outgoing(id, &edge), None);
    assert_eq!(a.register_incoming(id, &edge), None);
    assert_eq!(b.outgoing().len(), 0);
    assert_eq!(a.incoming().len(), 0);

    assert_eq!(a.register_outgoing(id, &edge), Some(id));
    assert_eq!(b.register_incoming(id, &edge), Some(id));
    assert!(a.has_outgoing(id));
    assert!(b.has_incoming(id));

    /* Registering twice is a no-op. */
    assert_eq!(a.register_outgoing(id, &edge), Some(id));
    assert_eq!(a.outgoing().len(), 1);
  }
}
