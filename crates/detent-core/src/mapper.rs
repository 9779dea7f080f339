//! Conversion between progress values and pixel offsets along the track.
//!
//! Offsets are measured in screen space from the left end of the track, so a
//! mirrored layout puts `min` at offset `available_span`.

use crate::geometry::{round_half_up, LayoutMetrics, Rect};
use crate::range::ProgressRange;

/// Maps values onto a laid-out track.
///
/// Holds copies of the bounds and metrics, so a mapper is built on demand
/// wherever a conversion is needed and never goes stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackMapper {
    min: i32,
    max: i32,
    metrics: LayoutMetrics,
}

impl TrackMapper {
    /// Create a mapper for the current range bounds and layout.
    #[must_use]
    pub const fn new(range: &ProgressRange, metrics: LayoutMetrics) -> Self {
        Self {
            min: range.min(),
            max: range.max(),
            metrics,
        }
    }

    /// Create a mapper from raw bounds. `max` must be greater than `min`.
    #[must_use]
    pub const fn from_bounds(min: i32, max: i32, metrics: LayoutMetrics) -> Self {
        Self { min, max, metrics }
    }

    /// The metrics this mapper was built with.
    #[must_use]
    pub const fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    fn span(&self) -> f64 {
        (i64::from(self.max) - i64::from(self.min)) as f64
    }

    /// Pixel offset of the thumb for an integer value.
    #[must_use]
    pub fn value_to_offset(&self, value: i32) -> i32 {
        self.position_to_offset(f64::from(value))
    }

    /// Pixel offset of the thumb for a fractional position, as produced
    /// while animating between two values.
    #[must_use]
    pub fn position_to_offset(&self, position: f64) -> i32 {
        let available = self.metrics.available_span;
        let scale = ((position - f64::from(self.min)) / self.span()).clamp(0.0, 1.0);
        let offset = round_half_up(scale * f64::from(available))
            .clamp(0, i64::from(available)) as i32;
        if self.metrics.mirrored {
            available - offset
        } else {
            offset
        }
    }

    /// Value under a pixel offset. Offsets outside the track are clamped.
    #[must_use]
    pub fn offset_to_value(&self, offset: i32) -> i32 {
        let available = self.metrics.available_span;
        if available <= 0 {
            return self.min;
        }
        let offset = f64::from(offset.clamp(0, available));
        let fraction = offset / f64::from(available);
        let scale = if self.metrics.mirrored {
            1.0 - fraction
        } else {
            fraction
        };
        let value = round_half_up(scale.mul_add(self.span(), f64::from(self.min)));
        value.clamp(i64::from(self.min), i64::from(self.max)) as i32
    }

    /// Clamp a thumb left edge onto the track.
    #[must_use]
    pub fn clamp_thumb_left(&self, left: i32) -> i32 {
        left.clamp(self.metrics.track_start, self.metrics.track_end())
    }

    /// Bounds of the thumb at the given offset.
    #[must_use]
    pub const fn thumb_rect(&self, offset: i32) -> Rect {
        Rect::new(
            self.metrics.track_start + offset,
            self.metrics.thumb_top,
            self.metrics.thumb_width,
            self.metrics.thumb_height,
        )
    }

    /// Touch target of the thumb at the given offset.
    #[must_use]
    pub const fn hit_rect(&self, offset: i32) -> Rect {
        self.thumb_rect(offset).outset(self.metrics.touch_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mapper(min: i32, max: i32, span: i32, mirrored: bool) -> TrackMapper {
        TrackMapper::from_bounds(min, max, LayoutMetrics::new(span, mirrored))
    }

    // =========================================================================
    // value_to_offset
    // =========================================================================

    #[test]
    fn test_value_to_offset_endpoints() {
        let m = mapper(0, 100, 200, false);
        assert_eq!(m.value_to_offset(0), 0);
        assert_eq!(m.value_to_offset(100), 200);
        assert_eq!(m.value_to_offset(50), 100);
    }

    #[test]
    fn test_value_to_offset_mirrored() {
        let m = mapper(0, 100, 200, true);
        assert_eq!(m.value_to_offset(0), 200);
        assert_eq!(m.value_to_offset(100), 0);
        assert_eq!(m.value_to_offset(25), 150);
    }

    #[test]
    fn test_value_to_offset_rounds_half_up() {
        // 1/2 of 3 pixels = 1.5 -> 2
        let m = mapper(0, 2, 3, false);
        assert_eq!(m.value_to_offset(1), 2);
    }

    #[test]
    fn test_position_to_offset_fractional() {
        let m = mapper(0, 10, 100, false);
        assert_eq!(m.position_to_offset(2.5), 25);
        assert_eq!(m.position_to_offset(-4.0), 0);
        assert_eq!(m.position_to_offset(40.0), 100);
    }

    // =========================================================================
    // offset_to_value
    // =========================================================================

    #[test]
    fn test_offset_to_value_clamps_offset() {
        let m = mapper(10, 20, 100, false);
        assert_eq!(m.offset_to_value(-50), 10);
        assert_eq!(m.offset_to_value(500), 20);
    }

    #[test]
    fn test_offset_to_value_midpoint_prefers_higher() {
        // offset 5 of 10 over range 0..1 -> 0.5 -> 1
        let m = mapper(0, 1, 10, false);
        assert_eq!(m.offset_to_value(5), 1);
        assert_eq!(m.offset_to_value(4), 0);
    }

    #[test]
    fn test_offset_to_value_negative_range_rounds_up() {
        // -3 + 0.5 = -2.5 -> -2
        let m = mapper(-3, -2, 10, false);
        assert_eq!(m.offset_to_value(5), -2);
    }

    #[test]
    fn test_offset_to_value_mirrored() {
        let m = mapper(0, 100, 200, true);
        assert_eq!(m.offset_to_value(0), 100);
        assert_eq!(m.offset_to_value(200), 0);
        assert_eq!(m.offset_to_value(150), 25);
    }

    #[test]
    fn test_offset_to_value_zero_span() {
        let m = mapper(5, 50, 0, false);
        assert_eq!(m.offset_to_value(0), 5);
        assert_eq!(m.value_to_offset(50), 0);
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        let m = mapper(i32::MIN, i32::MAX, 1000, false);
        assert_eq!(m.offset_to_value(0), i32::MIN);
        assert_eq!(m.offset_to_value(1000), i32::MAX);
        assert_eq!(m.value_to_offset(i32::MAX), 1000);
    }

    // =========================================================================
    // Thumb bounds
    // =========================================================================

    #[test]
    fn test_thumb_and_hit_rect() {
        let metrics = LayoutMetrics::new(100, false)
            .with_track_start(18)
            .with_thumb(12, 12)
            .with_touch_margin(10);
        let m = TrackMapper::from_bounds(0, 100, metrics);
        assert_eq!(m.thumb_rect(40), Rect::new(58, 0, 12, 12));
        assert_eq!(m.hit_rect(40), Rect::new(48, -10, 32, 32));
        assert_eq!(m.clamp_thumb_left(0), 18);
        assert_eq!(m.clamp_thumb_left(500), 118);
    }

    proptest! {
        #[test]
        fn prop_round_trip_when_span_resolves_every_value(
            min in -10_000i32..10_000,
            len in 1i32..2_000,
            extra in 0i32..2_000,
            mirrored in any::<bool>(),
            pick in 0.0f64..=1.0,
        ) {
            let max = min + len;
            let m = mapper(min, max, len + extra, mirrored);
            let v = min + (f64::from(len) * pick) as i32;
            prop_assert_eq!(m.offset_to_value(m.value_to_offset(v)), v);
        }

        #[test]
        fn prop_mirror_symmetry(
            min in -10_000i32..10_000,
            len in 1i32..5_000,
            span in 0i32..5_000,
            pick in 0.0f64..=1.0,
        ) {
            let max = min + len;
            let v = min + (f64::from(len) * pick) as i32;
            let ltr = mapper(min, max, span, false);
            let rtl = mapper(min, max, span, true);
            prop_assert_eq!(rtl.value_to_offset(v), span - ltr.value_to_offset(v));
        }

        #[test]
        fn prop_offset_to_value_in_range(min in -10_000i32..10_000, len in 1i32..5_000, span in 0i32..5_000, offset in any::<i32>()) {
            let m = mapper(min, min + len, span, false);
            let v = m.offset_to_value(offset);
            prop_assert!(v >= min && v <= min + len);
        }
    }
}
