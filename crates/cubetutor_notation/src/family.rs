//! Family letters and the per-letter axis, grip, and direction tables.

/// Coordinate axis of the puzzle lattice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left-to-right axis (+X is the R face).
    X,
    /// Bottom-to-top axis (+Y is the U face).
    Y,
    /// Back-to-front axis (+Z is the F face).
    Z,
}

impl Axis {
    /// Returns the coordinate index of the axis (X=0, Y=1, Z=2).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Sign of an extreme lattice coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// -1
    Neg,
    /// +1
    Pos,
}

impl Sign {
    /// Returns the sign as an integer, -1 or +1.
    pub fn int(self) -> i32 {
        match self {
            Sign::Neg => -1,
            Sign::Pos => 1,
        }
    }
}

/// Which slab of pieces a move grips, as a predicate on a piece's lattice
/// coordinate along the move's axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Grip {
    /// Outer layer: coordinate equals the face's extreme sign.
    Face(Sign),
    /// Middle layer: coordinate equals zero.
    Slice,
    /// Every piece: whole-cube rotation.
    WholeCube,
}

impl Grip {
    /// Returns whether a piece with the given coordinate along the move's
    /// axis is gripped.
    pub fn contains(self, coord: i32) -> bool {
        match self {
            Grip::Face(sign) => coord == sign.int(),
            Grip::Slice => coord == 0,
            Grip::WholeCube => true,
        }
    }
}

/// Move family letter.
///
/// `U D L R F B` grip one outer layer, `M E S` grip the middle slice on the
/// L/R, U/D, and F/B axis respectively, and `x y z` rotate the whole cube
/// about the R, U, and F axis respectively.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
#[allow(missing_docs)]
pub enum MoveFamily {
    U,
    D,
    L,
    R,
    F,
    B,
    M,
    E,
    S,
    #[strum(serialize = "x")]
    X,
    #[strum(serialize = "y")]
    Y,
    #[strum(serialize = "z")]
    Z,
}

impl MoveFamily {
    /// The six outer-layer families, in scramble-generation order.
    pub const FACES: [Self; 6] = [Self::U, Self::D, Self::L, Self::R, Self::F, Self::B];

    /// Returns the family for a letter, or `None` if the letter is not a
    /// recognized family. Case-sensitive: whole-cube rotations are
    /// lowercase.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::U),
            'D' => Some(Self::D),
            'L' => Some(Self::L),
            'R' => Some(Self::R),
            'F' => Some(Self::F),
            'B' => Some(Self::B),
            'M' => Some(Self::M),
            'E' => Some(Self::E),
            'S' => Some(Self::S),
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'z' => Some(Self::Z),
            _ => None,
        }
    }

    /// Returns the rotation axis.
    pub fn axis(self) -> Axis {
        match self {
            Self::L | Self::R | Self::M | Self::X => Axis::X,
            Self::U | Self::D | Self::E | Self::Y => Axis::Y,
            Self::F | Self::B | Self::S | Self::Z => Axis::Z,
        }
    }

    /// Returns the grip selecting which pieces the family rotates.
    pub fn grip(self) -> Grip {
        match self {
            Self::R | Self::U | Self::F => Grip::Face(Sign::Pos),
            Self::L | Self::D | Self::B => Grip::Face(Sign::Neg),
            Self::M | Self::E | Self::S => Grip::Slice,
            Self::X | Self::Y | Self::Z => Grip::WholeCube,
        }
    }

    /// Returns the signed 90° step of the canonical (suffixless) token,
    /// counterclockwise-positive looking down the axis from outside.
    ///
    /// Outer layers turn clockwise as seen from their own face. `M` follows
    /// `L`, `E` follows `D`, `S` follows `F`; `x`, `y`, `z` follow `R`,
    /// `U`, `F`.
    pub fn canonical_quarter_turns(self) -> i8 {
        match self {
            Self::R | Self::U | Self::F | Self::S | Self::X | Self::Y | Self::Z => -1,
            Self::L | Self::D | Self::B | Self::M | Self::E => 1,
        }
    }
}
