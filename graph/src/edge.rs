/* Description: Directed, labelled arcs between states.

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

//! Directed, labelled arcs between states.

use core::fmt;

use crate::{
  collections::Keyed,
  encoding::SEPARATOR,
  error::GraphError,
  state::{State, StateId},
  transition::Transition,
};

/// Position of an edge within its automaton.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
  #[inline(always)]
  pub const fn as_index(self) -> usize { self.0 }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
  source: StateId,
  target: StateId,
  transition: Transition,
  /// `(source, target, transition)`, fixed at construction since labels never change.
  key: String,
}

impl Edge {
  pub(crate) fn between(source: &State, target: &State, transition: Transition) -> Self {
    Self {
      source: source.id(),
      target: target.id(),
      transition,
      key: tuple(source.label(), target.label(), transition),
    }
  }

  #[inline]
  pub fn source(&self) -> StateId { self.source }

  #[inline]
  pub fn target(&self) -> StateId { self.target }

  #[inline]
  pub fn transition(&self) -> Transition { self.transition }
}

impl Keyed for Edge {
  fn key(&self) -> &str { &self.key }
}

impl fmt::Display for Edge {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(&self.key) }
}

fn tuple(source: &str, target: &str, transition: impl fmt::Display) -> String {
  format!("({source}{SEPARATOR}{target}{SEPARATOR}{transition})")
}

/// An edge that is not attached to any automaton yet, naming its endpoints by label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeSpec {
  pub source: String,
  pub target: String,
  pub transition: String,
}

impl EdgeSpec {
  pub fn new(
    source: impl Into<String>,
    target: impl Into<String>,
    transition: impl Into<String>,
  ) -> Self {
    Self {
      source: source.into(),
      target: target.into(),
      transition: transition.into(),
    }
  }

  /// Reads the body of one `(from, to, symbol)` tuple, without its parentheses.
  pub fn from_tuple(body: &str) -> Result<Self, GraphError> {
    let mut parts = body.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
      (Some(source), Some(target), Some(transition), None) => {
        Ok(Self::new(source, target, transition))
      },
      _ => Err(GraphError::MalformedEdgeArguments(body.to_string())),
    }
  }

  /// Every part must be present; an empty part does not name anything.
  pub(crate) fn ensure_complete(&self) -> Result<(), GraphError> {
    if self.source.is_empty() || self.target.is_empty() || self.transition.is_empty() {
      return Err(GraphError::MalformedEdgeArguments(self.to_string()));
    }
    Ok(())
  }
}

impl fmt::Display for EdgeSpec {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&tuple(&self.source, &self.target, &self.transition))
  }
}
