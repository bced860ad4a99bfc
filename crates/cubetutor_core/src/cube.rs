use cgmath::{Deg, Matrix3};
use cubetutor_notation::{Axis, Move};
use itertools::Itertools;
use strum::VariantArray;

use crate::{Face, Piece, StickerColor};

/// Logical state of the 3×3×3 puzzle: 26 movable pieces in a flat arena.
///
/// Pieces keep their arena index for the lifetime of the state; only their
/// positions and sticker slots permute. Slice membership is recomputed from
/// live rounded positions on every move, so no piece ever carries a stale
/// layer identity.
#[derive(Debug, Clone)]
pub struct CubeState {
    pieces: [Piece; 26],
}

/// Equality is by lattice position, not arena order: two states are equal
/// iff every position holds a piece with the same stickers.
impl PartialEq for CubeState {
    fn eq(&self, other: &Self) -> bool {
        self.pieces
            .iter()
            .all(|p| other.piece_at(p.position()) == Some(p))
    }
}
impl Eq for CubeState {}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    /// Returns the solved state: every sticker shows its face's home color.
    pub fn solved() -> Self {
        Self::from_sticker_fn(|face, _pos| Some(face.home_color()))
    }

    /// Builds a state with every piece at its home lattice position and
    /// surface stickers assigned by `sticker`, called once per
    /// (face, position) pair.
    pub(crate) fn from_sticker_fn(
        sticker: impl Fn(Face, [i32; 3]) -> Option<StickerColor>,
    ) -> Self {
        let pieces = itertools::iproduct!(-1..=1, -1..=1, -1..=1)
            .map(|(x, y, z)| [x, y, z])
            .filter(|&pos| pos != [0, 0, 0])
            .map(|pos| {
                let mut stickers = [None; 6];
                for &face in Face::VARIANTS {
                    if on_face(pos, face) {
                        stickers[face.index()] = sticker(face, pos);
                    }
                }
                Piece::new(pos, stickers)
            })
            .collect_vec();
        Self {
            pieces: pieces.try_into().expect("3x3x3 has 26 movable pieces"),
        }
    }

    /// Returns the pieces in arena order.
    pub fn pieces(&self) -> &[Piece; 26] {
        &self.pieces
    }

    /// Returns the piece currently at the given lattice position, or `None`
    /// for the center or an off-lattice position.
    pub fn piece_at(&self, pos: [i32; 3]) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position() == pos)
    }

    pub(crate) fn piece_at_mut(&mut self, pos: [i32; 3]) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.position() == pos)
    }

    /// Applies one move, mutating in place.
    ///
    /// The gripped subset is selected by the move's predicate over each
    /// piece's current rounded position, then every member receives the
    /// identical rotation; there are no intermediate reads, so the turn is
    /// logically atomic.
    pub fn apply(&mut self, mv: Move) {
        let rotation = rotation_matrix(mv.axis(), mv.quarter_turns());
        let axis = mv.axis().index();
        let grip = mv.grip();
        for piece in &mut self.pieces {
            if grip.contains(piece.position()[axis]) {
                piece.rotate(&rotation);
            }
        }
    }

    /// Applies a sequence of moves in order.
    pub fn apply_all(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.apply(mv);
        }
    }

    /// Returns whether every face shows a single color.
    ///
    /// Orientation-independent: a whole-cube rotation of a solved state is
    /// still solved.
    pub fn is_solved(&self) -> bool {
        Face::VARIANTS.iter().all(|&face| {
            self.pieces
                .iter()
                .filter(|p| on_face(p.position(), face))
                .map(|p| p.sticker(face))
                .all_equal()
        })
    }
}

/// Returns whether a lattice position touches the given face's surface.
fn on_face(pos: [i32; 3], face: Face) -> bool {
    let n = face.normal();
    (0..3).all(|i| n[i] == 0 || pos[i] == n[i])
}

fn rotation_matrix(axis: Axis, quarter_turns: i8) -> Matrix3<f32> {
    let angle = Deg(90.0 * f32::from(quarter_turns));
    match axis {
        Axis::X => Matrix3::from_angle_x(angle),
        Axis::Y => Matrix3::from_angle_y(angle),
        Axis::Z => Matrix3::from_angle_z(angle),
    }
}

#[cfg(test)]
mod tests {
    use cubetutor_notation::parse_moves;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SOLVED_FACELETS;

    fn moves(s: &str) -> Vec<Move> {
        parse_moves(s).collect::<Result<_, _>>().unwrap()
    }

    #[test]
    fn test_solved_invariants() {
        let state = CubeState::solved();
        assert!(state.is_solved());
        assert!(state.piece_at([0, 0, 0]).is_none());

        // 8 corners with 3 stickers, 12 edges with 2, 6 centers with 1.
        let sticker_counts = state
            .pieces()
            .iter()
            .map(|p| Face::VARIANTS.iter().filter(|&&f| p.sticker(f).is_some()).count())
            .counts();
        assert_eq!(sticker_counts[&3], 8);
        assert_eq!(sticker_counts[&2], 12);
        assert_eq!(sticker_counts[&1], 6);
    }

    #[test]
    fn test_four_fold_law() {
        for token in ["U", "D", "L", "R", "F", "B", "M", "E", "S"] {
            let mv: Move = token.parse().unwrap();
            let mut state = CubeState::solved();
            for _ in 0..4 {
                state.apply(mv);
            }
            assert_eq!(state.facelet_string(), SOLVED_FACELETS, "{token}^4");
        }
    }

    #[test]
    fn test_inverse_law() {
        for token in ["R", "U2", "M'", "E2", "x", "z'"] {
            let mv: Move = token.parse().unwrap();
            let mut state = CubeState::solved();
            state.apply_all(moves("R U F"));
            let before = state.facelet_string();
            state.apply(mv);
            state.apply(mv.inverse());
            assert_eq!(state.facelet_string(), before, "{token} then inverse");
        }
    }

    #[test]
    fn test_sexy_move_order_six() {
        let sexy = moves("R U R' U'");
        let mut state = CubeState::solved();
        for repetition in 1..=6 {
            state.apply_all(sexy.iter().copied());
            let solved = state.facelet_string() == SOLVED_FACELETS;
            assert_eq!(solved, repetition == 6, "after {repetition} repetitions");
        }
    }

    #[test]
    fn test_whole_cube_rotation_keeps_solved() {
        let mut state = CubeState::solved();
        state.apply("x".parse().unwrap());
        assert!(state.is_solved());
        // Reoriented, so the encoding differs even though the cube is
        // solved relative to itself.
        assert_ne!(state.facelet_string(), SOLVED_FACELETS);
        state.apply("x'".parse().unwrap());
        assert_eq!(state.facelet_string(), SOLVED_FACELETS);
    }

    #[test]
    fn test_slice_equals_opposite_faces_and_rotation() {
        // M = R L' x', so M R' L x is the identity.
        let mut state = CubeState::solved();
        state.apply_all(moves("M R' L x"));
        assert_eq!(state.facelet_string(), SOLVED_FACELETS);

        // E = U D' y', S = F' B z.
        let mut state = CubeState::solved();
        state.apply_all(moves("E U' D y"));
        assert_eq!(state.facelet_string(), SOLVED_FACELETS);
        let mut state = CubeState::solved();
        state.apply_all(moves("S F B' z'"));
        assert_eq!(state.facelet_string(), SOLVED_FACELETS);
    }
}
