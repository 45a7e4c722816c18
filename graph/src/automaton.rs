/* Description: Finite automata as graphs of states and edges.

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

//! Finite automata as graphs of states and edges.

use core::ops;

use indexmap::IndexSet;
use log::{debug, trace};
use static_assertions::assert_impl_all;

use crate::{
  collections::{EdgeSet, StateSet},
  edge::{Edge, EdgeId, EdgeSpec},
  error::{GraphError, Invalidity},
  state::{State, StateId, StateOptions},
  transition::Transition,
  FxBuildHasher,
};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "proptest"), derive(proptest_derive::Arbitrary))]
pub enum Determinism {
  Deterministic,
  #[default]
  Nondeterministic,
}

impl Determinism {
  #[inline]
  pub const fn from_flag(deterministic: bool) -> Self {
    if deterministic {
      Self::Deterministic
    } else {
      Self::Nondeterministic
    }
  }

  /// First character of the canonical form.
  #[inline]
  pub const fn prefix(self) -> char {
    match self {
      Self::Deterministic => 'D',
      Self::Nondeterministic => 'N',
    }
  }
}

/// Symbols of an automaton in the order they were first seen, kept in their text form.
///
/// Edges only ever contribute single characters, but a decoded header may declare longer
/// entries. Those are kept so the text survives re-encoding, and no edge can cover them.
pub type Alphabet = IndexSet<String, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct Automaton {
  determinism: Determinism,
  states: StateSet,
  edges: EdgeSet,
  alphabet: Alphabet,
  initial: Option<StateId>,
  final_states: IndexSet<StateId, FxBuildHasher>,
}

assert_impl_all!(Automaton: Send, Sync, Clone);

impl Automaton {
  pub fn new(determinism: Determinism) -> Self {
    Self {
      determinism,
      states: StateSet::new(),
      edges: EdgeSet::new(),
      alphabet: Alphabet::default(),
      initial: None,
      final_states: IndexSet::default(),
    }
  }

  pub fn deterministic() -> Self { Self::new(Determinism::Deterministic) }

  pub fn nondeterministic() -> Self { Self::new(Determinism::Nondeterministic) }

  /// Builds an automaton from its states and then its edges.
  pub fn with_states<'l>(
    determinism: Determinism,
    states: impl IntoIterator<Item=(&'l str, StateOptions)>,
    edges: impl IntoIterator<Item=EdgeSpec>,
  ) -> Result<Self, GraphError> {
    let mut automaton = Self::new(determinism);
    for (label, options) in states.into_iter() {
      automaton.add_state(label, options);
    }
    for edge in edges.into_iter() {
      automaton.insert_edge(edge)?;
    }
    Ok(automaton)
  }

  #[inline]
  pub fn determinism(&self) -> Determinism { self.determinism }

  #[inline]
  pub fn is_deterministic(&self) -> bool { self.determinism == Determinism::Deterministic }

  #[inline]
  pub fn states(&self) -> &StateSet { &self.states }

  #[inline]
  pub fn edges(&self) -> &EdgeSet { &self.edges }

  #[inline]
  pub fn alphabet(&self) -> &Alphabet { &self.alphabet }

  #[inline]
  pub fn state(&self, id: StateId) -> Option<&State> { self.states.get_index(id.0) }

  #[inline]
  pub fn edge(&self, id: EdgeId) -> Option<&Edge> { self.edges.get_index(id.0) }

  #[inline]
  pub fn state_by_label(&self, label: &str) -> Option<&State> { self.states.get(label) }

  #[inline]
  pub fn has_state(&self, label: &str) -> bool { self.states.has(label) }

  /// Looks an edge up by its canonical `(from, to, symbol)` form.
  #[inline]
  pub fn edge_by_key(&self, key: &str) -> Option<&Edge> { self.edges.get(key) }

  #[inline]
  pub fn has_edge(&self, key: &str) -> bool { self.edges.has(key) }

  pub fn initial_state(&self) -> Option<&State> {
    self.initial.and_then(|id| self.state(id))
  }

  /// Final states in the order they were added.
  pub fn final_states(&self) -> impl ExactSizeIterator<Item=&State>+'_ {
    self.final_states.iter().map(|id| &self[*id])
  }

  /// Edges leaving `state`, in insertion order.
  pub fn outgoing(&self, state: StateId) -> impl Iterator<Item=&Edge>+'_ {
    self
      .state(state)
      .into_iter()
      .flat_map(|s| s.outgoing())
      .map(|id| &self[id])
  }

  /// Returns the state labelled `label`, creating it first if there is none.
  ///
  /// `options` only apply to a newly created state: a new initial state takes over from the
  /// previous one, and a new final state joins the final states. An existing state is
  /// returned untouched.
  pub fn add_state(&mut self, label: &str, options: StateOptions) -> StateId {
    let candidate = StateId(self.states.len());
    let (index, inserted) = self
      .states
      .insert_full(State::new(candidate, label, options));
    let id = StateId(index);
    if !inserted {
      trace!("state {label:?} already present as {id}");
      return id;
    }
    trace!("added state {label:?} as {id} with {options:?}");

    if options.initial {
      if let Some(previous) = self.initial.replace(id) {
        if let Some(previous) = self.states.get_index_mut(previous.0) {
          previous.demote();
        }
      }
    }
    if options.fin {
      self.final_states.insert(id);
    }
    id
  }

  /// Adds an edge between the states labelled `source` and `target`.
  pub fn add_edge(
    &mut self,
    source: &str,
    target: &str,
    transition: &str,
  ) -> Result<EdgeId, GraphError> {
    self.insert_edge(EdgeSpec::new(source, target, transition))
  }

  /// Attaches a free-standing edge description to this automaton.
  pub fn insert_edge(&mut self, spec: EdgeSpec) -> Result<EdgeId, GraphError> {
    spec.ensure_complete()?;
    let transition = Transition::new(&spec.transition)?;
    let source = self.resolve(&spec.source)?;
    let target = self.resolve(&spec.target)?;
    self.add_edge_between(source, target, transition)
  }

  /// Adds an edge between two states of this automaton.
  ///
  /// Inserting the edge, extending the alphabet and registering the edge with both of its
  /// endpoints happen together. Adding an edge that is already present changes nothing and
  /// returns the existing edge.
  pub fn add_edge_between(
    &mut self,
    source: StateId,
    target: StateId,
    transition: Transition,
  ) -> Result<EdgeId, GraphError> {
    let (Some(from), Some(to)) = (self.state(source), self.state(target)) else {
      let missing = if self.state(source).is_none() {
        source
      } else {
        target
      };
      return Err(GraphError::UnknownState(missing.to_string()));
    };
    let edge = Edge::between(from, to, transition);

    let (index, inserted) = self.edges.insert_full(edge);
    let id = EdgeId(index);
    if let Some(symbol) = transition.symbol() {
      self.alphabet.insert(symbol.to_string());
    }
    if !inserted {
      return Ok(id);
    }

    let edge = &self.edges[id.0];
    trace!("added edge {edge} as {id:?}");
    let registered_out = self
      .states
      .get_index_mut(source.0)
      .and_then(|s| s.register_outgoing(id, edge));
    let registered_in = self
      .states
      .get_index_mut(target.0)
      .and_then(|s| s.register_incoming(id, edge));
    debug_assert_eq!(registered_out, Some(id));
    debug_assert_eq!(registered_in, Some(id));
    Ok(id)
  }

  /// Adds `symbol` to the alphabet without any edge consuming it.
  pub(crate) fn declare_symbol(&mut self, symbol: &str) {
    self.alphabet.insert(symbol.to_string());
  }

  fn resolve(&self, label: &str) -> Result<StateId, GraphError> {
    self
      .states
      .index_of(label)
      .map(StateId)
      .ok_or_else(|| GraphError::UnknownState(label.to_string()))
  }

  /// Whether this automaton can be simulated; see [`Self::validate`].
  pub fn is_valid(&self) -> bool {
    match self.validate() {
      Ok(()) => true,
      Err(reason) => {
        debug!("invalid automaton: {reason}");
        false
      },
    }
  }

  /// Checks that there is an initial state and at least one final state. A DFA must
  /// additionally have, from every state, exactly one edge for each symbol of the alphabet
  /// and no other edges.
  pub fn validate(&self) -> Result<(), Invalidity> {
    if self.initial.is_none() {
      return Err(Invalidity::NoInitialState);
    }
    if self.final_states.is_empty() {
      return Err(Invalidity::NoFinalStates);
    }
    if self.is_deterministic() {
      for state in self.states.iter() {
        self.check_total(state)?;
      }
    }
    Ok(())
  }

  fn check_total(&self, state: &State) -> Result<(), Invalidity> {
    let mut remaining = self.alphabet.clone();
    let mut buf = [0u8; 4];
    for edge in state.outgoing().map(|id| &self[id]) {
      match edge.transition() {
        Transition::Symbol(symbol) => {
          /* Every edge symbol is in the alphabet, so a miss means we saw it already. */
          if !remaining.shift_remove(&*symbol.encode_utf8(&mut buf)) {
            return Err(Invalidity::DuplicateSymbol {
              state: state.label().to_string(),
              symbol,
            });
          }
        },
        transition => {
          return Err(Invalidity::NonSymbolTransition {
            state: state.label().to_string(),
            transition,
          });
        },
      }
    }
    if !remaining.is_empty() {
      return Err(Invalidity::MissingSymbols {
        state: state.label().to_string(),
        missing: remaining.into_iter().collect(),
      });
    }
    Ok(())
  }
}

impl Default for Automaton {
  fn default() -> Self { Self::nondeterministic() }
}

impl ops::Index<StateId> for Automaton {
  type Output = State;

  fn index(&self, id: StateId) -> &State { &self.states[id.0] }
}

impl ops::Index<EdgeId> for Automaton {
  type Output = Edge;

  fn index(&self, id: EdgeId) -> &Edge { &self.edges[id.0] }
}
