//! Time-driven interpolation between discrete progress values.
//!
//! The animator owns no timer. The host pulls it forward with
//! [`ProgressAnimator::tick`] once per frame, passing the time elapsed since
//! the previous frame.

use crate::geometry::round_half_up;
use serde::{Deserialize, Serialize};

/// Duration of a keyboard step animation.
pub const DEFAULT_DURATION_MS: f64 = 250.0;

// =============================================================================
// Easing Functions
// =============================================================================

/// Easing curves for progress animations.
///
/// Every curve is monotonic and maps 0 to 0 and 1 to 1, so an animated
/// position never leaves the segment between start and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    #[default]
    EaseInOut,
    /// Cubic ease out
    CubicOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

// =============================================================================
// AnimationSession
// =============================================================================

/// One interpolation from a start position to an integer target.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSession {
    start: f64,
    target: i32,
    duration_ms: f64,
    elapsed_ms: f64,
    easing: Easing,
    position: f64,
    running: bool,
}

impl AnimationSession {
    fn new(start: f64, target: i32, duration_ms: f64, easing: Easing) -> Self {
        Self {
            start,
            target,
            duration_ms: if duration_ms.is_finite() {
                duration_ms.max(0.0)
            } else {
                0.0
            },
            elapsed_ms: 0.0,
            easing,
            position: start,
            running: true,
        }
    }

    /// Position the session started from.
    #[must_use]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Value the session ends on.
    #[must_use]
    pub const fn target(&self) -> i32 {
        self.target
    }

    /// Elapsed share of the duration, in `[0, 1]`.
    #[must_use]
    pub fn elapsed_fraction(&self) -> f64 {
        if self.duration_ms > 0.0 {
            (self.elapsed_ms / self.duration_ms).min(1.0)
        } else {
            1.0
        }
    }

    /// Last interpolated position.
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Whether the session still has frames to produce.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    fn advance(&mut self, delta_ms: f64) -> AnimationFrame {
        let delta_ms = if delta_ms.is_finite() { delta_ms.max(0.0) } else { 0.0 };
        self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.duration_ms);
        let fraction = self.elapsed_fraction();
        let target = f64::from(self.target);
        if fraction >= 1.0 {
            self.position = target;
            self.running = false;
        } else {
            let eased = self.easing.apply(fraction);
            self.position = (target - self.start).mul_add(eased, self.start);
        }
        AnimationFrame {
            position: self.position,
            value: round_half_up(self.position).clamp(i64::from(i32::MIN), i64::from(i32::MAX))
                as i32,
            finished: !self.running,
        }
    }
}

/// Output of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Interpolated position, used for thumb placement
    pub position: f64,
    /// Position rounded to the nearest value
    pub value: i32,
    /// Whether this was the final frame
    pub finished: bool,
}

// =============================================================================
// ProgressAnimator
// =============================================================================

/// Single-shot progress animation driver.
///
/// Holds at most one session. Starting a new session discards the old one;
/// a finished session is kept so its final position stays queryable.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressAnimator {
    session: Option<AnimationSession>,
    duration_ms: f64,
    easing: Easing,
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressAnimator {
    /// Create an idle animator with the default duration and easing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            session: None,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::EaseInOut,
        }
    }

    /// Set the duration used by [`Self::animate_to`].
    #[must_use]
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.set_duration(duration_ms);
        self
    }

    /// Set the easing curve for sessions started afterwards.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the duration used by [`Self::animate_to`].
    pub fn set_duration(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms.max(0.0);
    }

    /// Set the easing curve for sessions started afterwards.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Configured duration in milliseconds.
    #[must_use]
    pub const fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Configured easing curve.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.easing
    }

    /// Start a session with the configured duration.
    pub fn animate_to(&mut self, from: f64, to: i32) {
        self.start(from, to, self.duration_ms);
    }

    /// Start a session, discarding any previous one.
    pub fn start(&mut self, from: f64, to: i32, duration_ms: f64) {
        if self.is_running() {
            log::debug!("animator: replacing running session");
        }
        log::debug!("animator: {from} -> {to} over {duration_ms}ms");
        self.session = Some(AnimationSession::new(from, to, duration_ms, self.easing));
    }

    /// Advance the running session by `delta_ms`.
    ///
    /// Returns `None` when nothing is running. Gaps larger than the remaining
    /// duration finish the session on its target.
    pub fn tick(&mut self, delta_ms: f64) -> Option<AnimationFrame> {
        let session = self.session.as_mut().filter(|s| s.is_running())?;
        let frame = session.advance(delta_ms);
        log::trace!(
            "animator: tick {delta_ms}ms -> {:.3} ({})",
            frame.position,
            frame.value
        );
        if frame.finished {
            log::debug!("animator: finished on {}", frame.value);
        }
        Some(frame)
    }

    /// Discard the current session. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if self.session.take().is_some_and(|s| s.is_running()) {
            log::debug!("animator: cancelled");
        }
    }

    /// Whether a session is producing frames.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.session.as_ref().is_some_and(AnimationSession::is_running)
    }

    /// The current or last finished session.
    #[must_use]
    pub const fn session(&self) -> Option<&AnimationSession> {
        self.session.as_ref()
    }

    /// Last interpolated position, if any session exists.
    #[must_use]
    pub fn position(&self) -> Option<f64> {
        self.session.as_ref().map(AnimationSession::position)
    }

    /// Target of the current or last session.
    #[must_use]
    pub fn target(&self) -> Option<i32> {
        self.session.as_ref().map(AnimationSession::target)
    }
}
