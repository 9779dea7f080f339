//! Interactive discrete seek bar.
//!
//! [`DiscreteSeekBar`] combines the pieces from `detent-core` with pointer
//! drags, animated keyboard steps and a floating value indicator. Hosts
//! feed it input and draw whatever it reports through [`SeekBarHost`].

mod config;
mod drag;
mod indicator;
mod listener;
mod seek_bar;

pub use config::{SeekBarConfig, DEFAULT_THUMB_SIZE, DEFAULT_TOUCH_TARGET};
pub use drag::{DragController, DragState};
pub use indicator::{IndicatorCoordinator, IndicatorTransition};
pub use listener::{
    IdentityTransformer, IndicatorListener, NullHost, NumericTransformer,
    OnProgressChangeListener, SeekBarHost,
};
pub use seek_bar::DiscreteSeekBar;

pub use detent_core::{
    Easing, Key, LayoutMetrics, Locale, Point, Rect, SavedState, SeekEvent, StepDirection,
    ViewBounds,
};
