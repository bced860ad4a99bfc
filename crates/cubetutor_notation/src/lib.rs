//! Singmaster move-token parser and serializer.
//!
//! A token is a family letter (`U D L R F B` for outer layers, `M E S` for
//! middle slices, `x y z` for whole-cube rotations) followed by an optional
//! one-character suffix: none for the canonical quarter turn, `'` for the
//! opposite quarter turn, or `2` for a half turn.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

mod errors;
mod family;

pub use errors::InvalidMoveToken;
pub use family::{Axis, Grip, MoveFamily, Sign};

/// Single move: a family letter plus a turn-amount suffix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Move {
    /// Family letter naming the gripped layer or rotation axis.
    pub family: MoveFamily,
    /// Turn-amount suffix.
    pub suffix: Suffix,
}

impl Move {
    /// Constructs a move from a family and a suffix.
    pub fn new(family: MoveFamily, suffix: Suffix) -> Self {
        Self { family, suffix }
    }

    /// Returns the rotation axis.
    pub fn axis(self) -> Axis {
        self.family.axis()
    }
    /// Returns the grip selecting which pieces the move rotates.
    pub fn grip(self) -> Grip {
        self.family.grip()
    }

    /// Returns the signed number of 90° steps about [`Self::axis()`],
    /// counterclockwise-positive looking down the axis from outside the
    /// puzzle. The family's canonical direction and the suffix are both
    /// baked in, so the result is one of -2, -1, 1, or 2.
    pub fn quarter_turns(self) -> i8 {
        self.family.canonical_quarter_turns() * self.suffix.multiplier()
    }

    /// Returns the move that exactly undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            family: self.family,
            suffix: self.suffix.inverse(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.family, self.suffix)
    }
}

impl FromStr for Move {
    type Err = InvalidMoveToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(InvalidMoveToken::Empty)?;
        let family =
            MoveFamily::from_char(letter).ok_or(InvalidMoveToken::UnknownFamily(letter))?;
        let suffix = match chars.as_str() {
            "" => Suffix::Quarter,
            "'" => Suffix::Prime,
            "2" => Suffix::Double,
            rest => return Err(InvalidMoveToken::BadSuffix(rest.to_owned())),
        };
        Ok(Self { family, suffix })
    }
}

/// Turn-amount suffix on a move token.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Suffix {
    /// No suffix; one quarter turn in the family's canonical direction.
    #[default]
    Quarter,
    /// `'`; one quarter turn against the canonical direction.
    Prime,
    /// `2`; a half turn, direction-unambiguous.
    Double,
}

impl Suffix {
    /// Returns the signed multiplier applied to the family's canonical
    /// quarter turn.
    pub fn multiplier(self) -> i8 {
        match self {
            Suffix::Quarter => 1,
            Suffix::Prime => -1,
            Suffix::Double => 2,
        }
    }

    /// Returns the suffix of the inverse move. Half turns are their own
    /// inverse.
    pub fn inverse(self) -> Self {
        match self {
            Suffix::Quarter => Suffix::Prime,
            Suffix::Prime => Suffix::Quarter,
            Suffix::Double => Suffix::Double,
        }
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suffix::Quarter => Ok(()),
            Suffix::Prime => write!(f, "'"),
            Suffix::Double => write!(f, "2"),
        }
    }
}

/// Parses a whitespace-separated sequence of move tokens.
pub fn parse_moves(s: &str) -> impl Iterator<Item = Result<Move, InvalidMoveToken>> + '_ {
    s.split_whitespace().map(str::parse)
}

/// Formats a sequence of moves as a whitespace-separated string.
pub fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    moves.into_iter().map(|m| m.to_string()).join(" ")
}

#[cfg(test)]
mod tests;
