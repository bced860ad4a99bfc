//! Codec between [`CubeState`] and the flat 54-character facelet format.
//!
//! The string holds 9 characters per face in face order `U R F D L B`, each
//! face read row-major in its own viewing orientation. The two directions
//! of the codec are mutually inverse for every fully-specified state.

use itertools::Itertools;
use thiserror::Error;

use crate::{CubeState, Face};

/// Face order of the facelet format.
pub(crate) const FACE_ORDER: [Face; 6] = [
    Face::Up,
    Face::Right,
    Face::Front,
    Face::Down,
    Face::Left,
    Face::Back,
];

/// Facelet string of the solved state.
pub const SOLVED_FACELETS: &str =
    "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// Error produced when decoding a facelet string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedFaceletString {
    /// Wrong length
    #[error("facelet string has {0} characters, expected 54")]
    BadLength(usize),
    /// Unrecognized color symbol
    #[error("unrecognized facelet symbol {symbol:?} at index {index}")]
    BadSymbol {
        /// Character position of the offending symbol.
        index: usize,
        /// The offending symbol.
        symbol: char,
    },
}

/// Iterates the 54 facelet cells in canonical order.
pub(crate) fn facelet_cells() -> impl Iterator<Item = (Face, [i32; 3])> {
    FACE_ORDER.into_iter().flat_map(|face| {
        itertools::iproduct!(0..3, 0..3).map(move |(row, col)| (face, facelet_pos(face, row, col)))
    })
}

/// Returns the lattice position of the facelet at `(row, col)` of `face`,
/// with the grid read row-major in the face's own viewing orientation.
fn facelet_pos(face: Face, row: i32, col: i32) -> [i32; 3] {
    let (r, c) = (row - 1, col - 1);
    match face {
        Face::Up => [c, 1, r],
        Face::Right => [1, -r, -c],
        Face::Front => [c, -r, 1],
        Face::Down => [c, -1, -r],
        Face::Left => [-1, -r, c],
        Face::Back => [-c, -r, -1],
    }
}

impl CubeState {
    /// Encodes the state as the canonical 54-character facelet string.
    pub fn facelet_string(&self) -> String {
        facelet_cells()
            .map(|(face, pos)| {
                let sticker = self.piece_at(pos).and_then(|piece| piece.sticker(face));
                match sticker {
                    Some(color) => color.letter(),
                    None => {
                        debug_panic!("missing sticker at {pos:?} facing {face:?}");
                        face.letter()
                    }
                }
            })
            .collect()
    }

    /// Decodes a facelet string into a freshly constructed state.
    ///
    /// Fails on any length other than 54 or any character outside the six
    /// face letters. Not retryable; callers fall back to a known-good
    /// default state.
    pub fn from_facelet_string(s: &str) -> Result<Self, MalformedFaceletString> {
        if s.chars().count() != 54 {
            return Err(MalformedFaceletString::BadLength(s.chars().count()));
        }
        let mut state = Self::from_sticker_fn(|_, _| None);
        for ((face, pos), (index, symbol)) in facelet_cells().zip_eq(s.chars().enumerate()) {
            let color = Face::from_letter(symbol)
                .map(Face::home_color)
                .ok_or(MalformedFaceletString::BadSymbol { index, symbol })?;
            match state.piece_at_mut(pos) {
                Some(piece) => piece.set_sticker(face, color),
                None => debug_panic!("no piece at facelet position {pos:?}"),
            }
        }
        Ok(state)
    }
}
