use cgmath::{Matrix3, Vector3};
use strum::VariantArray;

use crate::{EPSILON, Face, StickerColor};

/// One movable piece: a lattice position and six sticker slots indexed by
/// [`Face`].
///
/// Invariant: a slot is `Some` iff the position's coordinate on that face's
/// axis has the face's extreme sign (the Up slot is stickered iff `y == 1`,
/// and so on). Interior slots never touch the surface and stay `None`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Piece {
    pos: [i32; 3],
    stickers: [Option<StickerColor>; 6],
}

impl Piece {
    pub(crate) fn new(pos: [i32; 3], stickers: [Option<StickerColor>; 6]) -> Self {
        Self { pos, stickers }
    }

    /// Returns the piece's current lattice position.
    pub fn position(&self) -> [i32; 3] {
        self.pos
    }

    /// Returns the sticker in the given face's slot, or `None` for an
    /// interior slot.
    pub fn sticker(&self, face: Face) -> Option<StickerColor> {
        self.stickers[face.index()]
    }

    pub(crate) fn set_sticker(&mut self, face: Face, color: StickerColor) {
        self.stickers[face.index()] = Some(color);
    }

    /// Applies a rigid rotation: transforms the position, then permutes the
    /// sticker slots by the same rotation so each sticker keeps facing the
    /// direction it was carried to.
    pub(crate) fn rotate(&mut self, rotation: &Matrix3<f32>) {
        self.pos = snap(rotation * lattice_to_f32(self.pos));

        let mut rotated = [None; 6];
        for &face in Face::VARIANTS {
            let normal = snap(rotation * lattice_to_f32(face.normal()));
            match Face::from_normal(normal) {
                Some(dst) => rotated[dst.index()] = self.stickers[face.index()],
                None => debug_panic!("rotation mapped {face:?} normal off-axis to {normal:?}"),
            }
        }
        self.stickers = rotated;
    }
}

fn lattice_to_f32(v: [i32; 3]) -> Vector3<f32> {
    Vector3::new(v[0] as f32, v[1] as f32, v[2] as f32)
}

/// Snaps a rotated vector back onto the integer lattice. Coordinates more
/// than [`EPSILON`] from an integer are a defect: panic in debug builds,
/// log an error in release.
fn snap(v: Vector3<f32>) -> [i32; 3] {
    let mut out = [0; 3];
    for (coord, value) in out.iter_mut().zip([v.x, v.y, v.z]) {
        let rounded = value.round();
        if (value - rounded).abs() > EPSILON {
            debug_panic!("coordinate {value} drifted off the lattice");
        }
        *coord = rounded as i32;
    }
    out
}

#[cfg(test)]
mod tests {
    use cgmath::Deg;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sticker_slots_follow_rotation() {
        // UF edge: white up, green front.
        let mut piece = Piece::new([0, 1, 1], {
            let mut stickers = [None; 6];
            stickers[Face::Up.index()] = Some(StickerColor::White);
            stickers[Face::Front.index()] = Some(StickerColor::Green);
            stickers
        });

        // F: a -90° turn about +Z carries the edge to the RF position.
        piece.rotate(&Matrix3::from_angle_z(Deg(-90.0)));

        assert_eq!(piece.position(), [1, 0, 1]);
        assert_eq!(piece.sticker(Face::Right), Some(StickerColor::White));
        assert_eq!(piece.sticker(Face::Front), Some(StickerColor::Green));
        assert_eq!(piece.sticker(Face::Up), None);
    }
}
