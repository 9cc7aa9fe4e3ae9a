// SPDX-License-Identifier: MPL-2.0
//! Chrome fade animation for the full-screen toggle.
//!
//! The fade is a pure function of time: setting a new target restarts the
//! animation from the opacity currently on screen, and repeated sets of the
//! same target are no-ops, so the toggle is idempotent.

use std::time::{Duration, Instant};

/// Duration of the chrome fade when toggling full-screen mode.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Time-based opacity animation between two values.
#[derive(Debug, Clone)]
pub struct Fade {
    from: f32,
    target: f32,
    started: Option<Instant>,
}

impl Fade {
    /// A settled, fully opaque fade.
    #[must_use]
    pub fn opaque() -> Self {
        Self {
            from: 1.0,
            target: 1.0,
            started: None,
        }
    }

    /// Starts animating toward `target` from the current on-screen opacity.
    ///
    /// Setting the current target again does nothing; changing targets
    /// mid-animation restarts from the interpolated value.
    pub fn set(&mut self, target: f32, now: Instant) {
        if (self.target - target).abs() < f32::EPSILON {
            return;
        }
        self.from = self.opacity(now);
        self.target = target;
        self.started = Some(now);
    }

    /// The opacity at `now`, interpolating linearly over [`FADE_DURATION`].
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.target;
        };
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= FADE_DURATION {
            return self.target;
        }
        let progress = elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32();
        self.from + (self.target - self.from) * progress
    }

    /// The value the fade is heading toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the fade is still interpolating at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| now.saturating_duration_since(started) < FADE_DURATION)
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::opaque()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn settled_fade_reports_target_opacity() {
        let fade = Fade::opaque();
        assert_abs_diff_eq!(fade.opacity(Instant::now()), 1.0);
        assert!(!fade.is_animating(Instant::now()));
    }

    #[test]
    fn fade_reaches_target_after_duration() {
        let mut fade = Fade::opaque();
        let start = Instant::now();
        fade.set(0.0, start);

        assert!(fade.is_animating(start));
        let done = start + FADE_DURATION;
        assert_abs_diff_eq!(fade.opacity(done), 0.0);
        assert!(!fade.is_animating(done));
    }

    #[test]
    fn fade_interpolates_halfway() {
        let mut fade = Fade::opaque();
        let start = Instant::now();
        fade.set(0.0, start);

        let halfway = start + FADE_DURATION / 2;
        assert_abs_diff_eq!(fade.opacity(halfway), 0.5, epsilon = 0.01);
    }

    #[test]
    fn repeated_identical_sets_are_idempotent() {
        let mut fade = Fade::opaque();
        let start = Instant::now();
        fade.set(0.0, start);

        let halfway = start + FADE_DURATION / 2;
        fade.set(0.0, halfway);

        // The animation was not restarted: it still completes on schedule.
        assert_abs_diff_eq!(fade.opacity(start + FADE_DURATION), 0.0);
    }

    #[test]
    fn toggling_mid_animation_restarts_from_current_opacity() {
        let mut fade = Fade::opaque();
        let start = Instant::now();
        fade.set(0.0, start);

        let halfway = start + FADE_DURATION / 2;
        fade.set(1.0, halfway);

        // Restarts from ~0.5 heading back to 1.0.
        assert_abs_diff_eq!(fade.opacity(halfway), 0.5, epsilon = 0.01);
        assert_abs_diff_eq!(fade.opacity(halfway + FADE_DURATION), 1.0);
    }
}
