use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Animation preferences for move playback.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Seconds one turn animation takes.
    pub twist_duration: f32,
    /// Easing applied to a turn's visual progress.
    pub twist_interpolation: InterpolateFn,
}

impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_duration: 0.25,
            twist_interpolation: InterpolateFn::default(),
        }
    }
}

/// Function that maps a float from the range 0.0 to 1.0 to another float
/// from 0.0 to 1.0.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum InterpolateFn {
    Lerp,
    #[default]
    Cosine,
    Cubic,
}

impl InterpolateFn {
    /// Returns the interpolation value in the range [0, 1] for `t` in the
    /// range [0, 1].
    pub fn interpolate(self, t: f32) -> f32 {
        match self {
            Self::Lerp => t,
            Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,
            Self::Cubic => (3.0 - 2.0 * t) * t * t,
        }
    }
}
