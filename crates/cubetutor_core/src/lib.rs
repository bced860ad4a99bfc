//! 3×3×3 cube state model: piece store, move executor, facelet codec, and
//! scan-color classifier.
//!
//! [`CubeState`] is the single source of truth for logical puzzle state. It
//! is mutated exclusively through [`CubeState::apply()`] and converted to
//! and from the flat 54-character facelet format by
//! [`CubeState::facelet_string()`] and [`CubeState::from_facelet_string()`].

/// Maximum distance a rotated coordinate may land from the integer lattice
/// before it counts as drift.
pub const EPSILON: f32 = 1e-4;

macro_rules! debug_panic {
    ($($tok:tt)*) => {
        match cfg!(debug_assertions) {
            true => panic!($($tok)*),
            false => log::error!($($tok)*),
        }
    };
}

mod cube;
mod face;
mod facelets;
mod piece;
pub mod scan;

pub use cube::CubeState;
pub use face::{Face, StickerColor};
pub use facelets::{MalformedFaceletString, SOLVED_FACELETS};
pub use piece::Piece;
