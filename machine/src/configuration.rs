/* Description: Positions of a machine partway through its input.

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

//! Positions of a machine partway through its input.

use finite_automata_graph::{Automaton, StateId};
use smallvec::SmallVec;

/// A state paired with how much of the input has been consumed on the way to it.
///
/// The unread input is always a suffix of the whole input, so the byte offset where it
/// starts identifies it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Configuration {
  pub offset: usize,
  pub state: StateId,
}

impl Configuration {
  #[inline]
  pub const fn start(state: StateId) -> Self { Self { offset: 0, state } }

  #[inline]
  pub fn remaining<'i>(&self, input: &'i str) -> &'i str {
    input.get(self.offset..).unwrap_or_default()
  }

  /// Whether all of `input` has been read and the machine stopped in a final state.
  pub fn is_accepting(&self, automaton: &Automaton, input: &str) -> bool {
    self.remaining(input).is_empty()
      && automaton
        .state(self.state)
        .is_some_and(|state| state.is_final())
  }

  /// Configurations reachable by following one edge.
  pub fn successors(&self, automaton: &Automaton, input: &str) -> SmallVec<[Self; 4]> {
    let remaining = self.remaining(input);
    automaton
      .outgoing(self.state)
      .filter(|edge| edge.transition().can_follow(remaining))
      .map(|edge| Self {
        offset: self.offset + edge.transition().consumed_len(),
        state: edge.target(),
      })
      .collect()
  }

  /// `(remaining, label)`, for logging.
  pub fn describe(&self, automaton: &Automaton, input: &str) -> String {
    let label = automaton.state(self.state).map_or("?", |state| state.label());
    format!("({:?}, {label})", self.remaining(input))
  }
}
