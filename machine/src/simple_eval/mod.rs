/* Description: Left-to-right evaluation of an input against an automaton.

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

//! Left-to-right evaluation of an input against an automaton.

pub trait SearchState<Eval: ?Sized> {
  type Args;

  fn create(args: Self::Args) -> Self;
  fn reset(&mut self, eval: &Eval);
}

pub trait SimpleEvaluator<Cache: SearchState<Self>> {
  type Success;
  type Err;

  fn create_cache(&self, args: Cache::Args) -> Cache {
    let mut cache = Cache::create(args);
    cache.reset(self);
    cache
  }

  fn evaluate(&self, cache: &mut Cache, input: &str) -> Result<Self::Success, Self::Err>;
}

pub mod bfs {
  use finite_automata_graph::{Automaton, FxBuildHasher};
  use indexmap::IndexSet;
  use log::{debug, trace};

  use super::{SearchState, SimpleEvaluator};
  use crate::{configuration::Configuration, error::MachineError};

  /// Explores every configuration reachable from the initial state, nearest first.
  #[derive(Debug, Copy, Clone)]
  pub struct BfsEvaluator<'a> {
    automaton: &'a Automaton,
  }

  impl<'a> BfsEvaluator<'a> {
    pub const fn new(automaton: &'a Automaton) -> Self { Self { automaton } }

    #[inline]
    pub fn automaton(&self) -> &'a Automaton { self.automaton }
  }

  /// Configurations seen during one evaluation.
  ///
  /// The visited set keeps insertion order, so it doubles as the queue: everything past
  /// `cursor` is still waiting to be expanded.
  #[derive(Debug, Clone, Default)]
  pub struct BfsCache {
    visited: IndexSet<Configuration, FxBuildHasher>,
    cursor: usize,
  }

  impl BfsCache {
    pub fn new() -> Self { Self::default() }

    /// Number of distinct configurations discovered by the last evaluation.
    #[inline]
    pub fn visited_len(&self) -> usize { self.visited.len() }

    #[inline]
    pub fn pending(&self) -> usize { self.visited.len() - self.cursor }

    fn clear(&mut self) {
      self.visited.clear();
      self.cursor = 0;
    }

    fn enqueue(&mut self, configuration: Configuration) -> bool {
      self.visited.insert(configuration)
    }

    fn dequeue(&mut self) -> Option<Configuration> {
      let next = self.visited.get_index(self.cursor).copied()?;
      self.cursor += 1;
      Some(next)
    }
  }

  impl<'a> SearchState<BfsEvaluator<'a>> for BfsCache {
    type Args = ();

    fn create(_args: ()) -> Self { Self::new() }

    fn reset(&mut self, eval: &BfsEvaluator<'a>) {
      self.clear();
      if let Some(initial) = eval.automaton.initial_state() {
        self.enqueue(Configuration::start(initial.id()));
      }
    }
  }

  impl<'a> SimpleEvaluator<BfsCache> for BfsEvaluator<'a> {
    type Success = bool;
    type Err = MachineError;

    fn evaluate(&self, cache: &mut BfsCache, input: &str) -> Result<bool, MachineError> {
      self
        .automaton
        .validate()
        .map_err(MachineError::InvalidAutomaton)?;
      cache.reset(self);

      while let Some(configuration) = cache.dequeue() {
        trace!(
          "expanding {}",
          configuration.describe(self.automaton, input)
        );
        if configuration.is_accepting(self.automaton, input) {
          debug!(
            "accepted {input:?} after {} configurations",
            cache.visited_len()
          );
          return Ok(true);
        }
        for successor in configuration.successors(self.automaton, input) {
          cache.enqueue(successor);
        }
      }
      debug!(
        "rejected {input:?} after {} configurations",
        cache.visited_len()
      );
      Ok(false)
    }
  }

  #[cfg(test)]
  mod test {
    use std::collections::BTreeSet;

    use finite_automata_graph::{arbitrary, Determinism, StateId, StateOptions, Transition};
    use proptest::prelude::*;

    use super::*;

    fn eval(automaton: &Automaton, input: &str) -> (Result<bool, MachineError>, usize) {
      let eval = BfsEvaluator::new(automaton);
      let mut cache = eval.create_cache(());
      let result = eval.evaluate(&mut cache, input);
      (result, cache.visited_len())
    }

    #[test]
    fn epsilon_self_loop_terminates() {
      let mut nfa = Automaton::nondeterministic();
      nfa.add_state("A", StateOptions::INITIAL);
      nfa.add_state("B", StateOptions::FINAL);
      nfa.add_edge("A", "A", "λ").unwrap();
      nfa.add_edge("A", "B", "b").unwrap();

      assert_eq!(eval(&nfa, "b").0, Ok(true));
      let (result, visited) = eval(&nfa, "a");
      assert_eq!(result, Ok(false));
      assert!(visited <= 2 * nfa.states().len());
    }

    #[test]
    fn epsilon_cycle_terminates() {
      let mut nfa = Automaton::nondeterministic();
      nfa.add_state("A", StateOptions::INITIAL);
      nfa.add_state("B", StateOptions::default());
      nfa.add_state("C", StateOptions::FINAL);
      nfa.add_edge("A", "B", "λ").unwrap();
      nfa.add_edge("B", "A", "λ").unwrap();
      nfa.add_edge("B", "C", "c").unwrap();

      assert_eq!(eval(&nfa, "c").0, Ok(true));
      let (result, visited) = eval(&nfa, "cc");
      assert_eq!(result, Ok(false));
      assert!(visited <= 3 * nfa.states().len());
    }

    #[test]
    fn blank_edge_consumes_blank_character() {
      let nfa = Automaton::from_canonical("NFA:({}, {A, B}, {(A, B, ☐)}, A, {B})").unwrap();
      assert!(nfa.alphabet().is_empty());
      assert_eq!(eval(&nfa, "☐").0, Ok(true));
      assert_eq!(eval(&nfa, "").0, Ok(false));
      assert_eq!(eval(&nfa, "a").0, Ok(false));
      assert_eq!(eval(&nfa, "☐☐").0, Ok(false));
    }

    #[test]
    fn empty_edge_only_taken_at_end_of_input() {
      let mut nfa = Automaton::nondeterministic();
      let a = nfa.add_state("A", StateOptions::INITIAL);
      let b = nfa.add_state("B", StateOptions::default());
      let c = nfa.add_state("C", StateOptions::FINAL);
      nfa.add_edge_between(a, c, Transition::Empty).unwrap();
      nfa.add_edge_between(a, b, Transition::Symbol('x')).unwrap();
      nfa.add_edge_between(b, c, Transition::Empty).unwrap();
      assert_eq!(eval(&nfa, "").0, Ok(true));
      assert_eq!(eval(&nfa, "x").0, Ok(true));
      assert_eq!(eval(&nfa, "xx").0, Ok(false));
      assert_eq!(eval(&nfa, "y").0, Ok(false));
    }

    #[test]
    fn invalid_automaton_is_reported() {
      let nfa = Automaton::nondeterministic();
      assert!(matches!(
        eval(&nfa, "").0,
        Err(MachineError::InvalidAutomaton(_))
      ));
    }

    #[test]
    fn cache_is_reused() {
      let mut dfa = Automaton::deterministic();
      dfa.add_state("q0", StateOptions::INITIAL_FINAL);
      dfa.add_edge("q0", "q0", "a").unwrap();
      let eval = BfsEvaluator::new(&dfa);
      let mut cache = eval.create_cache(());
      assert_eq!(cache.pending(), 1);
      assert_eq!(eval.evaluate(&mut cache, "aaaa"), Ok(true));
      assert_eq!(cache.visited_len(), 5);
      assert_eq!(eval.evaluate(&mut cache, "ab"), Ok(false));
      assert_eq!(cache.visited_len(), 2);
      assert_eq!(cache.pending(), 0);
    }

    fn epsilon_closure(automaton: &Automaton, mut states: BTreeSet<StateId>) -> BTreeSet<StateId> {
      let mut pending: Vec<StateId> = states.iter().copied().collect();
      while let Some(state) = pending.pop() {
        for edge in automaton.outgoing(state) {
          if edge.transition().is_epsilon() && states.insert(edge.target()) {
            pending.push(edge.target());
          }
        }
      }
      states
    }

    /// Tracks every state the automaton could be in at once.
    fn subset_accepts(automaton: &Automaton, input: &str) -> bool {
      let initial = automaton.initial_state().unwrap().id();
      let mut current = epsilon_closure(automaton, [initial].into_iter().collect());
      for c in input.chars() {
        let stepped = current
          .iter()
          .flat_map(|state| automaton.outgoing(*state))
          .filter(|edge| edge.transition() == Transition::Symbol(c))
          .map(|edge| edge.target())
          .collect();
        current = epsilon_closure(automaton, stepped);
      }
      current.iter().any(|state| automaton[*state].is_final())
    }

    proptest! {
      #[test]
      fn agrees_with_subset_simulation(
        automaton in arbitrary::automaton(Determinism::Nondeterministic),
        input in arbitrary::input(6),
      ) {
        prop_assume!(automaton.is_valid());
        let (result, visited) = eval(&automaton, &input);
        prop_assert_eq!(result, Ok(subset_accepts(&automaton, &input)));
        prop_assert!(visited <= (input.len() + 1) * automaton.states().len());
      }
    }
  }
}
