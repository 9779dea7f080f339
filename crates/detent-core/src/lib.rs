//! Core types for the Detent discrete seek bar.
//!
//! This crate holds the parts of the seek bar that do not depend on any
//! interaction state:
//! - Value bounds and clamping: [`ProgressRange`]
//! - Pixel geometry and layout: [`Rect`], [`LayoutMetrics`], [`TrackMapper`]
//! - Keyboard step animation: [`ProgressAnimator`], [`Easing`]
//! - Indicator text: [`IndicatorPattern`], [`Locale`], [`FormatterCache`]
//! - Persistence: [`SavedState`]
//! - Host input: [`SeekEvent`]

mod animation;
mod event;
mod format;
mod geometry;
mod mapper;
mod range;
mod state;

pub use animation::{
    AnimationFrame, AnimationSession, Easing, ProgressAnimator, DEFAULT_DURATION_MS,
};
pub use event::{Key, SeekEvent, StepDirection};
pub use format::{FormatError, FormatterCache, IndicatorPattern, Locale, DEFAULT_PATTERN};
pub use geometry::{round_half_up, LayoutMetrics, Point, Rect, ViewBounds};
pub use mapper::TrackMapper;
pub use range::{ProgressRange, ValueChange, DEFAULT_MAX, DEFAULT_MIN, MAX_KEY_STEPS};
pub use state::{SavedState, StateError, ENCODED_LEN};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==========================================================================
    // Range and mapper together
    // ==========================================================================

    #[test]
    fn test_mapper_tracks_range_changes() {
        let mut range = ProgressRange::new(0, 100, 50);
        let metrics = LayoutMetrics::new(200, false);
        assert_eq!(TrackMapper::new(&range, metrics).value_to_offset(range.value()), 100);

        range.set_max(50);
        assert_eq!(TrackMapper::new(&range, metrics).value_to_offset(range.value()), 200);
    }

    #[test]
    fn test_animation_frames_map_to_offsets() {
        let range = ProgressRange::new(0, 10, 0);
        let mapper = TrackMapper::new(&range, LayoutMetrics::new(100, true));
        let mut animator = ProgressAnimator::new().with_easing(Easing::Linear);
        animator.start(0.0, 10, 100.0);

        let frame = animator.tick(25.0).expect("running");
        assert_eq!(mapper.position_to_offset(frame.position), 75);
        let frame = animator.tick(75.0).expect("running");
        assert_eq!(mapper.position_to_offset(frame.position), 0);
    }

    #[test]
    fn test_saved_state_reflects_range() {
        let range = ProgressRange::new(10, 20, 15);
        let state = SavedState::new(range.value(), range.max(), range.min());
        assert_eq!(state.to_bytes()[3], 15);
    }

    proptest! {
        #[test]
        fn prop_drag_values_stay_in_range(
            min in -1000i32..1000,
            len in 1i32..1000,
            span in 0i32..800,
            offsets in proptest::collection::vec(-2000i32..2000, 1..30),
        ) {
            let mut range = ProgressRange::new(min, min + len, min);
            let mapper = TrackMapper::new(&range, LayoutMetrics::new(span, false));
            for offset in offsets {
                range.set_value(mapper.offset_to_value(offset), true);
                prop_assert!(range.min() <= range.value() && range.value() <= range.max());
            }
        }
    }
}
