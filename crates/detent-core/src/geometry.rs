//! Geometric primitives: Point, Rect, `LayoutMetrics`.

use serde::{Deserialize, Serialize};

/// Round to the nearest integer, ties toward positive infinity.
///
/// This is `floor(x + 0.5)`, so `-2.5` rounds to `-2` where `f64::round`
/// would give `-3`. Non-finite input rounds to zero.
#[must_use]
pub fn round_half_up(x: f64) -> i64 {
    if x.is_finite() {
        (x + 0.5).floor() as i64
    } else {
        0
    }
}

/// A pointer position in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whole-pixel x coordinate, truncated toward zero.
    #[must_use]
    pub fn px_x(&self) -> i32 {
        self.x as i32
    }

    /// Whole-pixel y coordinate, truncated toward zero.
    #[must_use]
    pub fn px_y(&self) -> i32 {
        self.y as i32
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// A pixel-aligned rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: i32,
    /// Y position of top-left corner
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Horizontal center, rounded down.
    #[must_use]
    pub const fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Check if a pixel lies inside the rectangle.
    ///
    /// Left and top edges are inside, right and bottom edges are not.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if a pointer position lies inside the rectangle.
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        self.contains(point.px_x(), point.px_y())
    }

    /// Create a new rectangle grown by the given amount on all sides.
    #[must_use]
    pub const fn outset(&self, amount: i32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + 2 * amount,
            self.height + 2 * amount,
        )
    }
}

/// Outer bounds and padding of the view hosting the seek bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewBounds {
    /// View width
    pub width: i32,
    /// View height
    pub height: i32,
    /// Left padding
    pub padding_left: i32,
    /// Right padding
    pub padding_right: i32,
    /// Bottom padding
    pub padding_bottom: i32,
}

impl ViewBounds {
    /// Create bounds without padding.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            padding_left: 0,
            padding_right: 0,
            padding_bottom: 0,
        }
    }

    /// Set horizontal padding.
    #[must_use]
    pub const fn padding_horizontal(mut self, left: i32, right: i32) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self
    }

    /// Set bottom padding.
    #[must_use]
    pub const fn padding_bottom(mut self, bottom: i32) -> Self {
        self.padding_bottom = bottom;
        self
    }
}

/// Track geometry the value mapping works against.
///
/// Recomputed by the host on every size or direction change and treated
/// as read-only by everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Pixels the thumb can travel between the two ends of the track
    pub available_span: i32,
    /// Whether the track runs right-to-left
    pub mirrored: bool,
    /// X of the thumb's left edge at offset zero
    pub track_start: i32,
    /// Y of the thumb's top edge
    pub thumb_top: i32,
    /// Thumb width
    pub thumb_width: i32,
    /// Thumb height
    pub thumb_height: i32,
    /// Extra touch slop around the thumb on every side
    pub touch_margin: i32,
}

impl LayoutMetrics {
    /// Metrics for a bare track with a zero-sized thumb at the origin.
    #[must_use]
    pub const fn new(available_span: i32, mirrored: bool) -> Self {
        Self {
            available_span: if available_span < 0 { 0 } else { available_span },
            mirrored,
            track_start: 0,
            thumb_top: 0,
            thumb_width: 0,
            thumb_height: 0,
            touch_margin: 0,
        }
    }

    /// Set the thumb size.
    #[must_use]
    pub const fn with_thumb(mut self, width: i32, height: i32) -> Self {
        self.thumb_width = width;
        self.thumb_height = height;
        self
    }

    /// Set where the thumb's left edge sits at offset zero.
    #[must_use]
    pub const fn with_track_start(mut self, track_start: i32) -> Self {
        self.track_start = track_start;
        self
    }

    /// Set the touch slop around the thumb.
    #[must_use]
    pub const fn with_touch_margin(mut self, touch_margin: i32) -> Self {
        self.touch_margin = touch_margin;
        self
    }

    /// Derive the track from the view bounds.
    ///
    /// The thumb rests on the bottom of the content area, inset by the touch
    /// margin so the enlarged hit area stays inside the view. Its center
    /// travels between `padding_left + half + margin` and
    /// `width - padding_right - half - margin`.
    #[must_use]
    pub fn for_view(
        view: ViewBounds,
        thumb_size: i32,
        touch_target: i32,
        rtl: bool,
        mirror_for_rtl: bool,
    ) -> Self {
        let touch_margin = ((touch_target - thumb_size) / 2).max(0);
        let half_thumb = thumb_size / 2;
        let left = view.padding_left + half_thumb + touch_margin;
        let right = view.width - (view.padding_right + half_thumb + touch_margin);
        let bottom = view.height - view.padding_bottom - touch_margin;
        Self {
            available_span: (right - left).max(0),
            mirrored: rtl && mirror_for_rtl,
            track_start: view.padding_left + touch_margin,
            thumb_top: bottom - thumb_size,
            thumb_width: thumb_size,
            thumb_height: thumb_size,
            touch_margin,
        }
    }

    /// X of the thumb's left edge at the far end of the track.
    #[must_use]
    pub const fn track_end(&self) -> i32 {
        self.track_start + self.available_span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(f64::NAN), 0);
    }

    #[test]
    fn test_point_truncates() {
        let p = Point::new(10.9, -0.7);
        assert_eq!(p.px_x(), 10);
        assert_eq!(p.px_y(), 0);
    }

    #[test]
    fn test_rect_contains_half_open() {
        let r = Rect::new(10, 10, 20, 20);
        assert!(r.contains(10, 10));
        assert!(r.contains(29, 29));
        assert!(!r.contains(30, 15));
        assert!(!r.contains(15, 30));
        assert!(!r.contains(9, 15));
    }

    #[test]
    fn test_rect_contains_point_truncates() {
        let r = Rect::new(10, 10, 20, 20);
        assert!(r.contains_point(&Point::new(29.9, 10.0)));
        assert!(!r.contains_point(&Point::new(30.0, 10.0)));
        assert!(!r.contains_point(&Point::new(9.9, 15.0)));
    }

    #[test]
    fn test_rect_outset() {
        let r = Rect::new(10, 10, 12, 12).outset(10);
        assert_eq!(r, Rect::new(0, 0, 32, 32));
        assert_eq!(r.center_x(), 16);
    }

    #[test]
    fn test_metrics_new_clamps_negative_span() {
        assert_eq!(LayoutMetrics::new(-5, false).available_span, 0);
    }

    #[test]
    fn test_metrics_for_view() {
        let view = ViewBounds::new(300, 40).padding_horizontal(8, 8);
        let metrics = LayoutMetrics::for_view(view, 12, 32, false, true);
        assert_eq!(metrics.touch_margin, 10);
        assert_eq!(metrics.track_start, 18);
        // left center = 8 + 6 + 10 = 24, right center = 300 - 24 = 276
        assert_eq!(metrics.available_span, 252);
        assert_eq!(metrics.thumb_top, 40 - 10 - 12);
        assert_eq!(metrics.track_end(), 270);
        assert!(!metrics.mirrored);
    }

    #[test]
    fn test_metrics_mirroring_needs_both_flags() {
        let view = ViewBounds::new(100, 40);
        assert!(LayoutMetrics::for_view(view, 12, 32, true, true).mirrored);
        assert!(!LayoutMetrics::for_view(view, 12, 32, true, false).mirrored);
        assert!(!LayoutMetrics::for_view(view, 12, 32, false, true).mirrored);
    }

    #[test]
    fn test_metrics_too_narrow_view() {
        let metrics = LayoutMetrics::for_view(ViewBounds::new(10, 40), 12, 32, false, false);
        assert_eq!(metrics.available_span, 0);
    }
}
