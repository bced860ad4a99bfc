//! Scan-result assembly and the sticker-color classifier.
//!
//! The classifier is a best-effort heuristic over averaged pixel
//! neighborhoods; cells it cannot place are left unknown, and an unknown
//! cell later fails facelet decoding so callers can fall back to a
//! known-good state.

use strum::VariantArray;

use crate::facelets::FACE_ORDER;
use crate::{Face, StickerColor};

/// 8-bit RGB sample.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// One face's worth of classified cells, row-major in the face's viewing
/// orientation; `None` is the unknown sentinel.
pub type FaceColors = [Option<StickerColor>; 9];

/// Classifies an averaged RGB triple by fixed channel-magnitude
/// thresholds, or returns `None` if no rule matches.
pub fn classify_rgb(mean: [f32; 3]) -> Option<StickerColor> {
    let [r, g, b] = mean;
    // Red must test before orange; the red rule is a strict subset.
    if r > 150.0 && g > 150.0 && b > 150.0 {
        Some(StickerColor::White)
    } else if r > 150.0 && g > 150.0 && b < 100.0 {
        Some(StickerColor::Yellow)
    } else if r > 150.0 && g < 100.0 && b < 100.0 {
        Some(StickerColor::Red)
    } else if r > 150.0 && g < 150.0 && b < 100.0 {
        Some(StickerColor::Orange)
    } else if g > 100.0 && r < 100.0 && b < 100.0 {
        Some(StickerColor::Green)
    } else if b > 100.0 && r < 100.0 && g < 100.0 {
        Some(StickerColor::Blue)
    } else {
        None
    }
}

/// Averages a sampled pixel neighborhood and classifies the result.
pub fn classify_cell(samples: &[Rgb]) -> Option<StickerColor> {
    if samples.is_empty() {
        return None;
    }
    let count = samples.len() as f32;
    let mut sum = [0.0; 3];
    for px in samples {
        sum[0] += f32::from(px.r);
        sum[1] += f32::from(px.g);
        sum[2] += f32::from(px.b);
    }
    classify_rgb(sum.map(|channel| channel / count))
}

/// Classifies all nine cells of one captured face.
pub fn classify_face(cells: &[Vec<Rgb>; 9]) -> FaceColors {
    let mut colors = [None; 9];
    for (color, samples) in colors.iter_mut().zip(cells) {
        *color = classify_cell(samples);
    }
    colors
}

/// Incrementally captured scan of the six faces.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    faces: [Option<FaceColors>; 6],
}

impl ScanResult {
    /// Returns an empty scan with no faces captured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the classified colors for one face, replacing any earlier
    /// capture of the same face.
    pub fn record_face(&mut self, face: Face, colors: FaceColors) {
        self.faces[face.index()] = Some(colors);
    }

    /// Returns the captured colors for a face, if it has been captured.
    pub fn face(&self, face: Face) -> Option<&FaceColors> {
        self.faces[face.index()].as_ref()
    }

    /// Returns whether all six faces have been captured.
    pub fn is_complete(&self) -> bool {
        Face::VARIANTS.iter().all(|&f| self.face(f).is_some())
    }

    /// Builds the 54-character facelet string in canonical face order.
    ///
    /// Unknown cells and uncaptured faces produce `?`, which
    /// [`crate::CubeState::from_facelet_string()`] rejects; decoding a scan
    /// therefore fails cleanly instead of fabricating stickers.
    pub fn facelet_string(&self) -> String {
        FACE_ORDER
            .into_iter()
            .flat_map(|face| {
                let colors = self.face(face).copied().unwrap_or([None; 9]);
                colors.map(|cell| cell.map_or('?', StickerColor::letter))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{CubeState, MalformedFaceletString, SOLVED_FACELETS};

    #[test]
    fn test_classifier_thresholds() {
        assert_eq!(classify_rgb([220.0, 220.0, 220.0]), Some(StickerColor::White));
        assert_eq!(classify_rgb([230.0, 200.0, 40.0]), Some(StickerColor::Yellow));
        assert_eq!(classify_rgb([200.0, 30.0, 30.0]), Some(StickerColor::Red));
        assert_eq!(classify_rgb([230.0, 120.0, 20.0]), Some(StickerColor::Orange));
        assert_eq!(classify_rgb([40.0, 160.0, 50.0]), Some(StickerColor::Green));
        assert_eq!(classify_rgb([20.0, 40.0, 190.0]), Some(StickerColor::Blue));
        // Dim gray matches no rule.
        assert_eq!(classify_rgb([120.0, 120.0, 120.0]), None);
    }

    #[test]
    fn test_cell_averaging() {
        // Half bright red, half dark red; the mean is still red.
        let samples = [Rgb { r: 255, g: 20, b: 20 }, Rgb { r: 160, g: 40, b: 40 }];
        assert_eq!(classify_cell(&samples), Some(StickerColor::Red));
        assert_eq!(classify_cell(&[]), None);
    }

    #[test]
    fn test_classify_face_grid() {
        let patch = |r, g, b| vec![Rgb { r, g, b }; 4];
        let mut cells: [Vec<Rgb>; 9] = Default::default();
        for cell in &mut cells {
            *cell = patch(240, 240, 240);
        }
        cells[0] = patch(200, 30, 30);
        cells[8] = patch(90, 90, 90);

        let colors = classify_face(&cells);
        assert_eq!(colors[0], Some(StickerColor::Red));
        assert_eq!(colors[4], Some(StickerColor::White));
        assert_eq!(colors[8], None);
    }

    #[test]
    fn test_scan_completeness() {
        let mut scan = ScanResult::new();
        for &face in Face::VARIANTS {
            assert!(!scan.is_complete());
            scan.record_face(face, [Some(face.home_color()); 9]);
        }
        assert!(scan.is_complete());
        assert_eq!(scan.facelet_string(), SOLVED_FACELETS);
    }

    #[test]
    fn test_unknown_cell_fails_decode_cleanly() {
        let mut scan = ScanResult::new();
        for &face in Face::VARIANTS {
            scan.record_face(face, [Some(face.home_color()); 9]);
        }
        let mut up = [Some(Face::Up.home_color()); 9];
        up[4] = None;
        scan.record_face(Face::Up, up);

        let facelets = scan.facelet_string();
        assert_eq!(
            CubeState::from_facelet_string(&facelets),
            Err(MalformedFaceletString::BadSymbol {
                index: 4,
                symbol: '?',
            }),
        );
    }
}
