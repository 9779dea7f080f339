//! Test harness for driving a seek bar through host events.

use crate::host::RecordingHost;
use detent_core::{Key, LayoutMetrics, Point, SeekEvent, ViewBounds};
use detent_widgets::{DiscreteSeekBar, SeekBarConfig};
use std::collections::VecDeque;

/// Upper bound on frames [`Harness::run_animation`] delivers.
pub const MAX_ANIMATION_FRAMES: usize = 10_000;

/// Test harness for interacting with a [`DiscreteSeekBar`].
pub struct Harness {
    /// Seek bar under test
    bar: DiscreteSeekBar<RecordingHost>,
    /// Event queue for simulation
    event_queue: VecDeque<SeekEvent>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    /// Create a harness around a default seek bar.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&SeekBarConfig::default())
    }

    /// Create a harness around a configured seek bar.
    #[must_use]
    pub fn with_config(config: &SeekBarConfig) -> Self {
        Self {
            bar: DiscreteSeekBar::with_config(RecordingHost::new(), config),
            event_queue: VecDeque::new(),
        }
    }

    /// Lay the track out with explicit metrics.
    #[must_use]
    pub fn layout(mut self, metrics: LayoutMetrics) -> Self {
        self.bar.on_size_changed(metrics);
        self
    }

    /// Lay the track out from view bounds.
    #[must_use]
    pub fn view(mut self, width: i32, height: i32, rtl: bool) -> Self {
        self.bar.on_view_resized(ViewBounds::new(width, height), rtl);
        self
    }

    /// The seek bar under test.
    #[must_use]
    pub const fn bar(&self) -> &DiscreteSeekBar<RecordingHost> {
        &self.bar
    }

    /// Mutable access to the seek bar.
    pub fn bar_mut(&mut self) -> &mut DiscreteSeekBar<RecordingHost> {
        &mut self.bar
    }

    /// The recording host.
    #[must_use]
    pub const fn host(&self) -> &RecordingHost {
        self.bar.host()
    }

    /// Forget everything recorded so far.
    pub fn clear_calls(&mut self) -> &mut Self {
        self.bar.host_mut().clear();
        self
    }

    // === Event Simulation ===

    /// Center of the thumb in view coordinates.
    #[must_use]
    pub fn thumb_center(&self) -> Point {
        let layout = self.bar.layout();
        let x = layout.track_start + self.bar.thumb_offset() + layout.thumb_width / 2;
        let y = layout.thumb_top + layout.thumb_height / 2;
        Point::new(x as f32, y as f32)
    }

    /// Press the middle of the thumb.
    pub fn press_thumb(&mut self) -> &mut Self {
        let position = self.thumb_center();
        self.send(SeekEvent::PointerDown { position })
    }

    /// Press at an arbitrary point.
    pub fn press_at(&mut self, x: f32, y: f32) -> &mut Self {
        self.send(SeekEvent::PointerDown {
            position: Point::new(x, y),
        })
    }

    /// Move the pointer horizontally, keeping it level with the thumb.
    pub fn move_to(&mut self, x: f32) -> &mut Self {
        let y = self.thumb_center().y;
        self.send(SeekEvent::PointerMove {
            position: Point::new(x, y),
        })
    }

    /// Lift the pointer.
    pub fn release(&mut self) -> &mut Self {
        self.send(SeekEvent::PointerUp)
    }

    /// Grab the thumb, move it so its center lands on `x`, and let go.
    pub fn drag_to(&mut self, x: f32) -> &mut Self {
        let position = self.thumb_center();
        self.event_queue.push_back(SeekEvent::PointerDown { position });
        self.event_queue.push_back(SeekEvent::PointerMove {
            position: Point::new(x, position.y),
        });
        self.event_queue.push_back(SeekEvent::PointerUp);
        self.process_events();
        self
    }

    /// Simulate a key press.
    pub fn press_key(&mut self, key: Key) -> &mut Self {
        self.send(SeekEvent::KeyDown { key })
    }

    /// Give the seek bar focus.
    pub fn focus(&mut self) -> &mut Self {
        self.send(SeekEvent::FocusIn)
    }

    /// Take focus away.
    pub fn blur(&mut self) -> &mut Self {
        self.send(SeekEvent::FocusOut)
    }

    /// Deliver one animation frame.
    pub fn tick(&mut self, elapsed_ms: f64) -> &mut Self {
        self.send(SeekEvent::AnimationTick { elapsed_ms })
    }

    /// Deliver frames of `frame_ms` until the seek bar stops asking for them.
    ///
    /// Returns the number of frames delivered.
    pub fn run_animation(&mut self, frame_ms: f64) -> usize {
        let mut frames = 0;
        while self.host().is_ticking() && frames < MAX_ANIMATION_FRAMES {
            self.tick(frame_ms);
            frames += 1;
        }
        log::debug!("harness: animation ran {frames} frames");
        frames
    }

    fn send(&mut self, event: SeekEvent) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    // === Assertions ===

    /// Assert the current value.
    ///
    /// # Panics
    ///
    /// Panics if the value differs.
    pub fn assert_progress(&self, expected: i32) -> &Self {
        let actual = self.bar.progress();
        assert_eq!(actual, expected, "Expected progress {expected} but got {actual}");
        self
    }

    /// Assert the bounds.
    ///
    /// # Panics
    ///
    /// Panics if either bound differs.
    pub fn assert_range(&self, min: i32, max: i32) -> &Self {
        let actual = (self.bar.min(), self.bar.max());
        assert_eq!(
            actual,
            (min, max),
            "Expected range {min}..={max} but got {}..={}",
            actual.0,
            actual.1
        );
        self
    }

    /// Assert where the thumb sits.
    ///
    /// # Panics
    ///
    /// Panics if the offset differs.
    pub fn assert_thumb_offset(&self, expected: i32) -> &Self {
        let actual = self.bar.thumb_offset();
        assert_eq!(actual, expected, "Expected thumb offset {expected} but got {actual}");
        self
    }

    /// Assert the indicator is showing.
    ///
    /// # Panics
    ///
    /// Panics if the indicator is hidden.
    pub fn assert_indicator_visible(&self) -> &Self {
        assert!(
            self.bar.is_indicator_visible(),
            "Expected indicator to be visible"
        );
        self
    }

    /// Assert the indicator is hidden.
    ///
    /// # Panics
    ///
    /// Panics if the indicator is showing.
    pub fn assert_indicator_hidden(&self) -> &Self {
        assert!(
            !self.bar.is_indicator_visible(),
            "Expected indicator to be hidden"
        );
        self
    }

    /// Assert the indicator text.
    ///
    /// # Panics
    ///
    /// Panics if the text differs.
    pub fn assert_indicator_text(&self, expected: &str) -> &Self {
        let actual = self.bar.indicator_text();
        assert_eq!(
            actual, expected,
            "Expected indicator text '{expected}' but got '{actual}'"
        );
        self
    }

    /// Assert a keyboard animation is running.
    ///
    /// # Panics
    ///
    /// Panics if nothing is animating.
    pub fn assert_animating(&self) -> &Self {
        assert!(self.bar.is_animating(), "Expected an animation to be running");
        self
    }

    /// Assert no drag or animation is in progress.
    ///
    /// # Panics
    ///
    /// Panics if the seek bar is dragging or animating.
    pub fn assert_idle(&self) -> &Self {
        assert!(!self.bar.is_dragging(), "Expected no drag in progress");
        assert!(!self.bar.is_animating(), "Expected no animation running");
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            let consumed = self.bar.event(&event);
            log::trace!("harness: {event:?} consumed={consumed}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> LayoutMetrics {
        LayoutMetrics::new(100, false)
            .with_track_start(10)
            .with_thumb(12, 12)
            .with_touch_margin(10)
    }

    #[test]
    fn test_harness_defaults() {
        let harness = Harness::new();
        harness.assert_range(0, 100).assert_progress(0).assert_idle();
        harness.assert_indicator_hidden();
    }

    #[test]
    fn test_thumb_center() {
        let harness = Harness::new().layout(track());
        assert_eq!(harness.thumb_center(), Point::new(16.0, 6.0));
    }

    #[test]
    fn test_drag_to() {
        let mut harness = Harness::new().layout(track());
        harness.drag_to(66.0);
        harness.assert_progress(50).assert_thumb_offset(50).assert_idle();
        assert_eq!(harness.host().visibility(), vec![true, false]);
    }

    #[test]
    fn test_run_animation_stops_when_released() {
        let mut harness = Harness::new().layout(track());
        harness.press_key(Key::Right);
        harness.assert_animating();
        let frames = harness.run_animation(16.0);
        assert_eq!(frames, 16);
        harness.assert_progress(5).assert_idle();
    }

    #[test]
    fn test_run_animation_without_request_is_noop() {
        let mut harness = Harness::new();
        assert_eq!(harness.run_animation(16.0), 0);
    }
}
