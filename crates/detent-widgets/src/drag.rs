//! Pointer drag tracking for the thumb.

use detent_core::{Point, Rect, TrackMapper};

/// Drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Thumb follows the pointer
    Dragging {
        /// Distance from the thumb's left edge to where it was grabbed
        offset_within_thumb: i32,
    },
}

/// Turns pointer input into candidate values.
///
/// The controller only knows about pixels. It hands the value under the
/// pointer back to the caller, which decides whether to apply it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create an idle controller.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Start dragging if `position` is inside the thumb's touch target.
    ///
    /// Returns true when a drag started.
    pub fn pointer_down(&mut self, position: Point, hit_rect: Rect, thumb_left: i32) -> bool {
        if !hit_rect.contains_point(&position) {
            log::trace!("drag: press at {position:?} outside {hit_rect:?}");
            return false;
        }
        let offset_within_thumb = position.px_x() - thumb_left;
        self.state = DragState::Dragging {
            offset_within_thumb,
        };
        log::debug!("drag: start, grabbed {offset_within_thumb}px into thumb");
        true
    }

    /// Value under the pointer while dragging.
    ///
    /// The thumb keeps the grab offset, so its left edge follows the pointer
    /// and is clamped to the track before mapping.
    pub fn pointer_move(&self, position: Point, mapper: &TrackMapper) -> Option<i32> {
        let DragState::Dragging {
            offset_within_thumb,
        } = self.state
        else {
            return None;
        };
        let left = mapper.clamp_thumb_left(position.px_x().saturating_sub(offset_within_thumb));
        let value = mapper.offset_to_value(left - mapper.metrics().track_start);
        log::trace!("drag: thumb left {left} -> {value}");
        Some(value)
    }

    /// End the drag. Returns true if one was in progress.
    pub fn pointer_up(&mut self) -> bool {
        self.finish("up")
    }

    /// Abandon the drag. Returns true if one was in progress.
    pub fn pointer_cancel(&mut self) -> bool {
        self.finish("cancel")
    }

    fn finish(&mut self, reason: &str) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        if was_dragging {
            log::debug!("drag: stop ({reason})");
        }
        was_dragging
    }
}
