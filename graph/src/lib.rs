/* Description: States, edges and automata, with their canonical text form.

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

//! States, edges and automata, with their canonical text form.
//!
//! An [`Automaton`] owns all of its [`State`]s and [`Edge`]s and hands out [`StateId`] and
//! [`EdgeId`] handles to them. Labels identify states and `(from, to, symbol)` tuples
//! identify edges, so adding either twice is harmless.
//!
//!```
//! use finite_automata_graph::{Automaton, StateOptions};
//!
//! let mut nfa = Automaton::nondeterministic();
//! nfa.add_state("N1", StateOptions::INITIAL);
//! nfa.add_state("N2", StateOptions::FINAL);
//! nfa.add_edge("N1", "N1", "a").unwrap();
//! nfa.add_edge("N1", "N2", "b").unwrap();
//! assert!(nfa.is_valid());
//! assert_eq!(
//!   nfa.to_string(),
//!   "NFA:({a, b}, {N1, N2}, {(N1, N1, a), (N1, N2, b)}, N1, {N2})",
//! );
//!```

#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]
#![doc(test(attr(deny(warnings))))]

use core::hash::BuildHasherDefault;

use rustc_hash::FxHasher;

pub type FxBuildHasher = BuildHasherDefault<FxHasher>;

pub mod automaton;
pub mod collections;
pub mod edge;
pub mod encoding;
pub mod error;
pub mod state;
pub mod transition;

cfg_if::cfg_if! {
  if #[cfg(any(test, feature = "proptest"))] {
    pub mod arbitrary;
  }
}

pub use automaton::{Alphabet, Automaton, Determinism};
pub use collections::{EdgeSet, Keyed, KeyedSet, StateSet};
pub use edge::{Edge, EdgeId, EdgeSpec};
pub use error::{GraphError, Invalidity, ParseError, TransitionError};
pub use state::{State, StateId, StateOptions};
pub use transition::{Transition, BLANK, EPSILON};
