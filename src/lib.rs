/* Description: Finite automata with a canonical text form and an acceptance simulator.

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

//! Finite automata with a canonical text form and an acceptance simulator.
//!
//! Automata are built with [`graph`] and run with [`machine`]:
//!
//!```
//! use finite_automata::{Automaton, Machine};
//!
//! let dfa: Automaton = "DFA:({a}, {q0}, {(q0, q0, a)}, q0, {q0})".parse().unwrap();
//! let mut machine = Machine::with_automaton(&dfa);
//! assert!(machine.accepts("aaaa"));
//! assert!(!machine.accepts("aba"));
//!```

#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]
#![doc(test(attr(deny(warnings))))]

pub use finite_automata_graph as graph;
pub use finite_automata_machine as machine;
pub use graph::{
  Automaton, Determinism, Edge, EdgeId, EdgeSpec, GraphError, Invalidity, ParseError, State,
  StateId, StateOptions, Transition, TransitionError,
};
pub use machine::{Machine, MachineError};
