/* Description: Canonical text form of an automaton.

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

//! Canonical text form of an automaton.
//!
//! ```text
//! NFA:({a, b}, {N1, N2}, {(N1, N1, a), (N1, N2, b)}, N1, {N2})
//! ```
//!
//! The sections are the alphabet, the state labels, the edges, the initial state label
//! (empty if there is none) and the final state labels. Every section lists its entries in
//! insertion order, so decoding an encoded automaton and encoding it again gives back the
//! same text.

use core::{fmt, str::FromStr};
use std::sync::LazyLock;

use indexmap::IndexSet;
use log::debug;
use regex::Regex;

use crate::{
  automaton::{Automaton, Determinism},
  edge::EdgeSpec,
  error::{GraphError, ParseError},
  state::StateOptions,
  FxBuildHasher,
};

/// Separates entries within a section, and the parts of an edge tuple.
pub(crate) const SEPARATOR: &str = ", ";

const TUPLE_SEPARATOR: &str = "), (";

/* Only `D` or `N` may lead; a comma in that position is not an automaton kind. */
static CANONICAL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^([DN])FA:\(\{(.*)\}, \{(.*)\}, \{(.*)\}, (.*), \{(.*)\}\)$")
    .expect("canonical pattern is a valid regex")
});

fn write_joined<T: fmt::Display>(
  f: &mut fmt::Formatter,
  entries: impl IntoIterator<Item=T>,
) -> fmt::Result {
  f.write_str("{")?;
  for (i, entry) in entries.into_iter().enumerate() {
    if i > 0 {
      f.write_str(SEPARATOR)?;
    }
    write!(f, "{entry}")?;
  }
  f.write_str("}")
}

impl fmt::Display for Automaton {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}FA:(", self.determinism().prefix())?;
    write_joined(f, self.alphabet().iter())?;
    f.write_str(SEPARATOR)?;
    write_joined(f, self.states().keys())?;
    f.write_str(SEPARATOR)?;
    write_joined(f, self.edges().keys())?;
    f.write_str(SEPARATOR)?;
    if let Some(initial) = self.initial_state() {
      f.write_str(initial.label())?;
    }
    f.write_str(SEPARATOR)?;
    write_joined(f, self.final_states().map(|s| s.label()))?;
    f.write_str(")")
  }
}

/// The captured sections of a canonical string, not yet interpreted.
struct Sections<'t> {
  determinism: Determinism,
  alphabet: &'t str,
  states: &'t str,
  edges: &'t str,
  initial: &'t str,
  finals: &'t str,
}

impl<'t> Sections<'t> {
  fn split(text: &'t str) -> Result<Self, ParseError> {
    let captures = CANONICAL.captures(text).ok_or(ParseError::Grammar)?;
    let section = |i| captures.get(i).map_or("", |m| m.as_str());
    Ok(Self {
      determinism: Determinism::from_flag(section(1) == "D"),
      alphabet: section(2),
      states: section(3),
      edges: section(4),
      initial: section(5),
      finals: section(6),
    })
  }

  /// Non-empty entries of a `{...}` section.
  fn entries(section: &str) -> impl Iterator<Item=&str> {
    section.split(SEPARATOR).filter(|entry| !entry.is_empty())
  }

  fn edge_tuples(&self) -> Result<Vec<EdgeSpec>, GraphError> {
    if self.edges.is_empty() {
      return Ok(Vec::new());
    }
    let body = self
      .edges
      .strip_prefix('(')
      .and_then(|s| s.strip_suffix(')'))
      .ok_or_else(|| GraphError::MalformedEdgeArguments(self.edges.to_string()))?;
    body.split(TUPLE_SEPARATOR).map(EdgeSpec::from_tuple).collect()
  }

  fn build(self) -> Result<Automaton, ParseError> {
    let mut automaton = Automaton::new(self.determinism);
    for entry in Self::entries(self.alphabet) {
      automaton.declare_symbol(entry);
    }

    let finals: IndexSet<&str, FxBuildHasher> = Self::entries(self.finals).collect();
    for label in Self::entries(self.states) {
      let options = StateOptions {
        initial: label == self.initial,
        fin: finals.contains(label),
      };
      automaton.add_state(label, options);
    }

    for spec in self.edge_tuples()? {
      automaton.insert_edge(spec)?;
    }
    Ok(automaton)
  }
}

impl Automaton {
  /// Decodes a canonical string into a new automaton.
  pub fn from_canonical(text: &str) -> Result<Self, ParseError> {
    Sections::split(text)
      .and_then(Sections::build)
      .inspect_err(|e| debug!("failed to decode {text:?}: {e}"))
  }

  /// Replaces this automaton with the one `text` describes. On failure `self` is left as it
  /// was.
  pub fn reload(&mut self, text: &str) -> Result<(), ParseError> {
    *self = Self::from_canonical(text)?;
    Ok(())
  }

  pub fn to_canonical(&self) -> String { self.to_string() }
}

/// Automata are equal when their canonical forms are.
impl PartialEq for Automaton {
  fn eq(&self, other: &Self) -> bool { self.to_string() == other.to_string() }
}

impl Eq for Automaton {}

impl FromStr for Automaton {
  type Err = ParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> { Self::from_canonical(s) }
}
