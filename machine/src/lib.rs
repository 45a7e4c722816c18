/* Description: Decide whether an automaton accepts an input.

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

//! Decide whether an automaton accepts an input.
//!
//! A [`Machine`] borrows an [`Automaton`] and runs inputs against it by breadth-first
//! search over [`Configuration`]s, following epsilon edges without consuming input.
//! Configurations already seen are never expanded again, so a run always terminates, even
//! through epsilon cycles.
//!
//!```
//! use finite_automata_graph::Automaton;
//! use finite_automata_machine::Machine;
//!
//! let nfa: Automaton = "NFA:({a, b}, {N1, N2}, {(N1, N1, a), (N1, N2, b)}, N1, {N2})"
//!   .parse()
//!   .unwrap();
//! let mut machine = Machine::with_automaton(&nfa);
//! assert_eq!(machine.run("aab"), Ok(true));
//! assert!(!machine.accepts("ba"));
//!```

#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]
#![doc(test(attr(deny(warnings))))]

use finite_automata_graph::Automaton;
use log::debug;

pub mod configuration;
pub mod error;
pub mod simple_eval;

pub use configuration::Configuration;
pub use error::MachineError;
use simple_eval::{
  bfs::{BfsCache, BfsEvaluator},
  SimpleEvaluator,
};

/// Runs inputs against whichever automaton it is currently bound to.
///
/// The search cache is kept between runs and cleared at the start of each one.
#[derive(Debug, Clone, Default)]
pub struct Machine<'a> {
  automaton: Option<&'a Automaton>,
  cache: BfsCache,
}

impl<'a> Machine<'a> {
  pub fn new() -> Self { Self::default() }

  pub fn with_automaton(automaton: &'a Automaton) -> Self {
    Self {
      automaton: Some(automaton),
      cache: BfsCache::new(),
    }
  }

  #[inline]
  pub fn automaton(&self) -> Option<&'a Automaton> { self.automaton }

  pub fn set_automaton(&mut self, automaton: &'a Automaton) { self.automaton = Some(automaton); }

  /// Whether the bound automaton accepts all of `input`.
  pub fn run(&mut self, input: &str) -> Result<bool, MachineError> {
    let automaton = self.automaton.ok_or(MachineError::NoAutomaton)?;
    BfsEvaluator::new(automaton).evaluate(&mut self.cache, input)
  }

  /// Binds `automaton`, then runs `input` against it.
  pub fn run_on(&mut self, input: &str, automaton: &'a Automaton) -> Result<bool, MachineError> {
    self.set_automaton(automaton);
    self.run(input)
  }

  /// Like [`Self::run`], but an automaton that cannot be run rejects everything.
  pub fn accepts(&mut self, input: &str) -> bool {
    self.run(input).unwrap_or_else(|e| {
      debug!("rejecting {input:?}: {e}");
      false
    })
  }

  /// Distinct configurations explored by the most recent run.
  #[inline]
  pub fn visited(&self) -> usize { self.cache.visited_len() }
}

#[cfg(test)]
mod test {
  use finite_automata_graph::{Invalidity, StateOptions};

  use super::*;

  #[test]
  fn unbound() {
    let mut machine = Machine::new();
    assert_eq!(machine.run("a"), Err(MachineError::NoAutomaton));
    assert!(!machine.accepts("a"));
    assert!(machine.automaton().is_none());
  }

  #[test]
  fn rebinding() {
    let mut only_a = Automaton::nondeterministic();
    only_a.add_state("A", StateOptions::INITIAL);
    only_a.add_state("B", StateOptions::FINAL);
    only_a.add_edge("A", "B", "a").unwrap();

    let mut only_b = Automaton::nondeterministic();
    only_b.add_state("A", StateOptions::INITIAL);
    only_b.add_state("B", StateOptions::FINAL);
    only_b.add_edge("A", "B", "b").unwrap();

    let mut machine = Machine::with_automaton(&only_a);
    assert_eq!(machine.run("a"), Ok(true));
    assert_eq!(machine.run_on("a", &only_b), Ok(false));
    assert_eq!(machine.run("b"), Ok(true));
    assert!(core::ptr::eq(machine.automaton().unwrap(), &only_b));
  }

  #[test]
  fn invalid_dfa() {
    let mut dfa = Automaton::deterministic();
    dfa.add_state("q0", StateOptions::INITIAL_FINAL);
    dfa.add_state("q1", StateOptions::default());
    dfa.add_edge("q0", "q1", "a").unwrap();

    let mut machine = Machine::with_automaton(&dfa);
    assert_eq!(
      machine.run("a"),
      Err(MachineError::InvalidAutomaton(Invalidity::MissingSymbols {
        state: "q1".to_string(),
        missing: vec!["a".to_string()],
      }))
    );
    assert!(!machine.accepts(""));
  }

  #[test]
  fn whole_input_only() {
    let mut nfa = Automaton::nondeterministic();
    nfa.add_state("A", StateOptions::INITIAL);
    nfa.add_state("B", StateOptions::FINAL);
    nfa.add_edge("A", "B", "a").unwrap();

    let mut machine = Machine::with_automaton(&nfa);
    assert!(machine.accepts("a"));
    assert!(!machine.accepts("aa"));
    assert!(!machine.accepts(""));
    assert_eq!(machine.visited(), 1);
  }
}
