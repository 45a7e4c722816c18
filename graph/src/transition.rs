/* Description: Edge labels: single symbols and the reserved sentinels.

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

//! Edge labels: single symbols and the reserved sentinels.

use core::fmt;

use crate::error::TransitionError;

/// Text form of [`Transition::Epsilon`].
pub const EPSILON: char = 'λ';
/// Text form of [`Transition::Blank`].
pub const BLANK: char = '☐';

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Transition {
  /// Consumes exactly this character.
  Symbol(char),
  /// Built from the empty string. Only matches once the input is used up, consumes nothing,
  /// and never joins an alphabet.
  Empty,
  /// Consumes no input and can always be followed.
  Epsilon,
  /// Reserved placeholder marker. Consumes a literal [`BLANK`] character like a symbol
  /// would, but is never part of an alphabet.
  Blank,
}

impl Transition {
  pub fn new(text: &str) -> Result<Self, TransitionError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
      (None, _) => Ok(Self::Empty),
      (Some(c), None) => Ok(Self::from_char(c)),
      (Some(_), Some(_)) => Err(TransitionError::InvalidTransitionLength(text.to_string())),
    }
  }

  pub const fn from_char(c: char) -> Self {
    match c {
      EPSILON => Self::Epsilon,
      BLANK => Self::Blank,
      c => Self::Symbol(c),
    }
  }

  /// The symbol this transition contributes to an alphabet, if any.
  #[inline]
  pub const fn symbol(&self) -> Option<char> {
    match self {
      Self::Symbol(c) => Some(*c),
      Self::Empty | Self::Epsilon | Self::Blank => None,
    }
  }

  #[inline]
  pub const fn is_epsilon(&self) -> bool { matches!(self, Self::Epsilon) }

  /// Whether an edge with this label may be taken when `remaining` is the unread input.
  pub fn can_follow(&self, remaining: &str) -> bool {
    match self {
      Self::Epsilon => true,
      Self::Symbol(c) => remaining.starts_with(*c),
      Self::Blank => remaining.starts_with(BLANK),
      Self::Empty => remaining.is_empty(),
    }
  }

  /// Bytes of input consumed by following this transition.
  #[inline]
  pub const fn consumed_len(&self) -> usize {
    match self {
      Self::Symbol(c) => c.len_utf8(),
      Self::Blank => BLANK.len_utf8(),
      Self::Empty | Self::Epsilon => 0,
    }
  }
}

impl From<char> for Transition {
  fn from(c: char) -> Self { Self::from_char(c) }
}

impl TryFrom<&str> for Transition {
  type Error = TransitionError;

  fn try_from(text: &str) -> Result<Self, Self::Error> { Self::new(text) }
}

impl fmt::Display for Transition {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Symbol(c) => write!(f, "{}", c),
      Self::Empty => Ok(()),
      Self::Epsilon => write!(f, "{}", EPSILON),
      Self::Blank => write!(f, "{}", BLANK),
    }
  }
}

#[cfg(test)]
mod test {
  use proptest::prelude::*;

  use super::*;

  #[test]
  fn single_character() {
    assert_eq!(Transition::new("a"), Ok(Transition::Symbol('a')));
    assert_eq!(Transition::new("λ"), Ok(Transition::Epsilon));
    assert_eq!(Transition::new("☐"), Ok(Transition::Blank));
  }

  #[test]
  fn empty_string_is_allowed() {
    assert_eq!(Transition::new(""), Ok(Transition::Empty));
    assert_eq!(Transition::Empty.to_string(), "");
  }

  #[test]
  fn longer_strings_are_rejected() {
    assert_eq!(
      Transition::new("ab"),
      Err(TransitionError::InvalidTransitionLength("ab".to_string()))
    );
    assert!(Transition::try_from("λλ").is_err());
  }

  #[test]
  fn following() {
    assert!(Transition::Epsilon.can_follow(""));
    assert!(Transition::Epsilon.can_follow("b"));
    assert!(Transition::Symbol('a').can_follow("ab"));
    assert!(!Transition::Symbol('a').can_follow("ba"));
    assert!(!Transition::Symbol('a').can_follow(""));
    assert!(Transition::Empty.can_follow(""));
    assert!(!Transition::Empty.can_follow("a"));
    assert!(Transition::Blank.can_follow("☐a"));
    assert!(!Transition::Blank.can_follow("a☐"));
    assert!(!Transition::Blank.can_follow(""));

    assert_eq!(Transition::Symbol('a').consumed_len(), 1);
    assert_eq!(Transition::Symbol('é').consumed_len(), 2);
    assert_eq!(Transition::Epsilon.consumed_len(), 0);
    assert_eq!(Transition::Empty.consumed_len(), 0);
    assert_eq!(Transition::Blank.consumed_len(), '☐'.len_utf8());
  }

  #[test]
  fn alphabet_contribution() {
    assert_eq!(Transition::Symbol('x').symbol(), Some('x'));
    assert_eq!(Transition::Epsilon.symbol(), None);
    assert_eq!(Transition::Blank.symbol(), None);
    assert_eq!(Transition::Empty.symbol(), None);
  }

  proptest! {
    #[test]
    fn display_reparses(c in any::<char>()) {
      let t = Transition::from(c);
      prop_assert_eq!(Transition::new(&t.to_string()), Ok(t));
    }
  }
}
