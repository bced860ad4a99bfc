//! Face directions and sticker colors, with the fixed color scheme.

use strum::VariantArray;

/// Logical face direction of the puzzle.
///
/// The declaration order is also the slot order of a piece's sticker array:
/// `[Up, Down, Front, Back, Left, Right]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, VariantArray)]
pub enum Face {
    /// +Y
    Up,
    /// -Y
    Down,
    /// +Z
    Front,
    /// -Z
    Back,
    /// -X
    Left,
    /// +X
    Right,
}

impl Face {
    /// Returns the sticker-slot index of the face.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the outward unit normal on the lattice.
    pub fn normal(self) -> [i32; 3] {
        match self {
            Face::Up => [0, 1, 0],
            Face::Down => [0, -1, 0],
            Face::Front => [0, 0, 1],
            Face::Back => [0, 0, -1],
            Face::Left => [-1, 0, 0],
            Face::Right => [1, 0, 0],
        }
    }

    /// Returns the face whose outward normal is the given unit lattice
    /// vector, or `None` if the vector is not a unit axis vector.
    pub fn from_normal(n: [i32; 3]) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|f| f.normal() == n)
    }

    /// Returns the face's letter in the facelet format.
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }

    /// Returns the face for a facelet letter.
    pub fn from_letter(c: char) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|f| f.letter() == c)
    }

    /// Returns the sticker color on this face in the solved state.
    pub fn home_color(self) -> StickerColor {
        match self {
            Face::Up => StickerColor::White,
            Face::Down => StickerColor::Yellow,
            Face::Front => StickerColor::Green,
            Face::Back => StickerColor::Blue,
            Face::Left => StickerColor::Orange,
            Face::Right => StickerColor::Red,
        }
    }
}

/// One of the six sticker colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, VariantArray)]
#[allow(missing_docs)]
pub enum StickerColor {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

impl StickerColor {
    /// Returns the face this color belongs to in the solved state.
    pub fn home_face(self) -> Face {
        match self {
            StickerColor::White => Face::Up,
            StickerColor::Yellow => Face::Down,
            StickerColor::Green => Face::Front,
            StickerColor::Blue => Face::Back,
            StickerColor::Orange => Face::Left,
            StickerColor::Red => Face::Right,
        }
    }

    /// Returns the color's letter in the facelet format (its home face's
    /// letter).
    pub fn letter(self) -> char {
        self.home_face().letter()
    }
}
