//! Input events delivered by the host.

use crate::geometry::{LayoutMetrics, Point};
use serde::{Deserialize, Serialize};

/// Direction of a keyboard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    /// Toward `min`
    Decrement,
    /// Toward `max`
    Increment,
}

impl StepDirection {
    /// Sign applied to the key increment.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Decrement => -1,
            Self::Increment => 1,
        }
    }
}

/// Keys the seek bar reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Left arrow / D-pad left
    Left,
    /// Right arrow / D-pad right
    Right,
    /// Any other key
    Other,
}

impl Key {
    /// Step direction for this key. Arrow keys are not swapped for RTL.
    #[must_use]
    pub const fn step_direction(self) -> Option<StepDirection> {
        match self {
            Self::Left => Some(StepDirection::Decrement),
            Self::Right => Some(StepDirection::Increment),
            Self::Other => None,
        }
    }
}

/// Host event types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SeekEvent {
    /// Pointer pressed
    PointerDown {
        /// Position of the press
        position: Point,
    },
    /// Pointer moved
    PointerMove {
        /// New position
        position: Point,
    },
    /// Pointer released
    PointerUp,
    /// Gesture taken away by the host
    PointerCancel,
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Track laid out again
    SizeChanged {
        /// New metrics
        metrics: LayoutMetrics,
    },
    /// Frame callback while animating
    AnimationTick {
        /// Milliseconds since the previous tick
        elapsed_ms: f64,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
}
