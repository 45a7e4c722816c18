/* Description: Strategies generating automata and their inputs.

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

//! Strategies generating automata and their inputs.
//!
//! Labels are alphanumeric and symbols are drawn from `a..=e`, so every generated automaton
//! survives a trip through its canonical form.

use proptest::{
  collection::{btree_set, vec},
  prelude::*,
  strategy::{BoxedStrategy, Union},
};

use crate::{
  automaton::{Automaton, Determinism},
  state::{StateId, StateOptions},
  transition::Transition,
};

pub const MAX_STATES: usize = 5;

pub fn label() -> impl Strategy<Value=String> { "[A-Za-z][A-Za-z0-9]{0,3}" }

pub fn symbol() -> impl Strategy<Value=char> { proptest::char::range('a', 'e') }

pub fn transition() -> impl Strategy<Value=Transition> {
  Union::new_weighted(vec![
    (4, symbol().prop_map(Transition::Symbol).boxed()),
    (1, Just(Transition::Epsilon).boxed()),
  ])
}

pub fn input(max_len: usize) -> impl Strategy<Value=String> {
  vec(symbol(), 0..=max_len).prop_map(|symbols| symbols.into_iter().collect())
}

pub fn automaton(determinism: Determinism) -> BoxedStrategy<Automaton> {
  Automaton::arbitrary_with(determinism)
}

impl Arbitrary for Automaton {
  type Parameters = Determinism;
  type Strategy = BoxedStrategy<Self>;

  fn arbitrary_with(determinism: Self::Parameters) -> Self::Strategy {
    btree_set(label(), 1..=MAX_STATES)
      .prop_flat_map(|labels| {
        let n = labels.len();
        (
          Just(labels.into_iter().collect::<Vec<_>>()),
          proptest::option::weighted(0.9, 0..n),
          vec(any::<bool>(), n),
          vec((0..n, 0..n, transition()), 0..=(3 * n)),
        )
      })
      .prop_map(move |(labels, initial, finals, edges)| {
        let mut automaton = Automaton::new(determinism);
        let ids: Vec<StateId> = labels
          .iter()
          .zip(finals)
          .enumerate()
          .map(|(i, (label, fin))| {
            let options = StateOptions {
              initial: initial == Some(i),
              fin,
            };
            automaton.add_state(label, options)
          })
          .collect();
        for (source, target, transition) in edges.into_iter() {
          automaton
            .add_edge_between(ids[source], ids[target], transition)
            .expect("both endpoints were just added");
        }
        automaton
      })
      .boxed()
  }
}
