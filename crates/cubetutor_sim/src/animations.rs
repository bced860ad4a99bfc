use cubetutor_notation::Move;
use web_time::Duration;

use crate::AnimationPreferences;

/// State of the in-flight turn animation.
///
/// At most one turn animates at a time; the scheduler holds the rest in
/// its queue. The animated move has already been applied logically.
#[derive(Debug, Default, Clone)]
pub(crate) struct TurnAnimationState {
    /// Animating move and its linear progress in [0, 1], if any.
    current: Option<(Move, f32)>,
}

impl TurnAnimationState {
    /// Starts animating a turn from zero progress.
    pub(crate) fn start(&mut self, mv: Move) {
        self.current = Some((mv, 0.0));
    }

    /// Steps the animation forward. Returns whether an animation was in
    /// flight at entry (i.e. whether the puzzle should be redrawn).
    pub(crate) fn proceed(&mut self, delta: Duration, prefs: &AnimationPreferences) -> bool {
        let Some((_, progress)) = &mut self.current else {
            return false;
        };
        if prefs.twist_duration > 0.0 {
            *progress += delta.as_secs_f32() / prefs.twist_duration;
        } else {
            *progress = 1.0;
        }
        if *progress >= 1.0 {
            self.current = None;
        }
        true
    }

    /// Returns the animating move and its raw linear progress.
    pub(crate) fn current(&self) -> Option<(Move, f32)> {
        self.current
    }

    /// Returns whether no turn is animating.
    pub(crate) fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Abandons the in-flight animation, if any.
    pub(crate) fn clear(&mut self) {
        self.current = None;
    }
}
