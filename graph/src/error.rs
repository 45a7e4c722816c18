/* Description: Errors raised while building, validating or decoding automata.

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

//! Errors raised while building, validating or decoding automata.

use displaydoc::Display;
use thiserror::Error;

use crate::transition::Transition;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
  /// transition {0:?} is longer than one character
  InvalidTransitionLength(String),
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
  /// state {0:?} is not part of the automaton
  UnknownState(String),
  /// edge arguments {0:?} do not form a complete (from, to, transition) triple
  MalformedEdgeArguments(String),
  /// {0}
  Transition(#[from] TransitionError),
}

/// Any failure to decode a canonical string.
///
/// Callers are expected to treat every variant the same way (the text was not a
/// usable automaton); the variants only exist to make the failure explainable.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
  /// input does not have the shape of a canonical automaton string
  Grammar,
  /// could not rebuild the automaton: {0}
  Reconstruction(#[from] GraphError),
}

/// The first structural defect found by [`Automaton::validate`](crate::Automaton::validate).
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum Invalidity {
  /// automaton has no initial state
  NoInitialState,
  /// automaton has no final states
  NoFinalStates,
  /// state {state:?} has the non-symbol transition {transition:?}, which a DFA does not allow
  NonSymbolTransition { state: String, transition: Transition },
  /// state {state:?} has more than one transition on {symbol:?}
  DuplicateSymbol { state: String, symbol: char },
  /// state {state:?} has no transition on {missing:?}
  MissingSymbols { state: String, missing: Vec<String> },
}
