//! Observer traits for seek bar notifications.
//!
//! Each concern has its own small trait and the seek bar holds at most one
//! observer per concern. Closures implement the single-method traits
//! directly.

/// Receives progress changes.
pub trait OnProgressChangeListener {
    /// Called after the value changed. `from_user` is true for drags and
    /// keyboard steps, false for programmatic changes.
    fn on_progress_changed(&mut self, value: i32, from_user: bool);
}

impl<F> OnProgressChangeListener for F
where
    F: FnMut(i32, bool),
{
    fn on_progress_changed(&mut self, value: i32, from_user: bool) {
        self(value, from_user);
    }
}

/// Receives indicator bubble transitions.
pub trait IndicatorListener {
    /// The bubble was shown.
    fn on_show_bubble(&mut self) {}

    /// The bubble was hidden.
    fn on_hide_bubble(&mut self) {}
}

/// Maps the stored value to the number shown in the indicator.
pub trait NumericTransformer {
    /// Value to display for `value`.
    fn transform(&self, value: i32) -> i32;
}

impl<F> NumericTransformer for F
where
    F: Fn(i32) -> i32,
{
    fn transform(&self, value: i32) -> i32 {
        self(value)
    }
}

/// Shows the stored value unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityTransformer;

impl NumericTransformer for IdentityTransformer {
    fn transform(&self, value: i32) -> i32 {
        value
    }
}

/// Render-side callbacks the seek bar drives.
///
/// Every method has a no-op default so hosts implement only what they draw.
pub trait SeekBarHost {
    /// The value changed.
    fn on_value_changed(&mut self, _value: i32, _from_user: bool) {}

    /// The indicator bubble should be shown or hidden.
    fn on_indicator_visibility_changed(&mut self, _visible: bool) {}

    /// The indicator text changed.
    fn on_indicator_text_changed(&mut self, _text: &str) {}

    /// The thumb moved to a new screen offset along the track.
    fn on_thumb_offset_changed(&mut self, _offset: i32) {}

    /// Start or stop delivering animation ticks.
    fn request_animation_ticks(&mut self, _active: bool) {}
}

/// Host that ignores every callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullHost;

impl SeekBarHost for NullHost {}
