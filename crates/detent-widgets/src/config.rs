//! Seek bar configuration, loadable from JSON.

use detent_core::{Easing, DEFAULT_DURATION_MS, DEFAULT_MAX, DEFAULT_MIN};
use serde::{Deserialize, Serialize};

/// Default thumb diameter in pixels.
pub const DEFAULT_THUMB_SIZE: i32 = 12;

/// Default minimum touch target in pixels.
pub const DEFAULT_TOUCH_TARGET: i32 = 32;

/// Initial settings for a [`DiscreteSeekBar`](crate::DiscreteSeekBar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeekBarConfig {
    /// Lower bound
    #[serde(default)]
    pub min: i32,
    /// Upper bound, raised to `min + 1` if not above `min`
    #[serde(default = "default_max")]
    pub max: i32,
    /// Initial value, clamped into the range
    #[serde(default)]
    pub value: i32,
    /// Run the track right-to-left under an RTL layout direction
    #[serde(default)]
    pub mirror_for_rtl: bool,
    /// Indicator pattern such as `"%d%%"`
    #[serde(default)]
    pub indicator_formatter: Option<String>,
    /// Keyboard step animation length
    #[serde(default = "default_duration")]
    pub animation_duration_ms: f64,
    /// Keyboard step animation curve
    #[serde(default)]
    pub easing: Easing,
    /// Thumb diameter
    #[serde(default = "default_thumb_size")]
    pub thumb_size: i32,
    /// Minimum touch target around the thumb
    #[serde(default = "default_touch_target")]
    pub touch_target: i32,
}

const fn default_max() -> i32 {
    DEFAULT_MAX
}

const fn default_duration() -> f64 {
    DEFAULT_DURATION_MS
}

const fn default_thumb_size() -> i32 {
    DEFAULT_THUMB_SIZE
}

const fn default_touch_target() -> i32 {
    DEFAULT_TOUCH_TARGET
}

impl Default for SeekBarConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            value: DEFAULT_MIN,
            mirror_for_rtl: false,
            indicator_formatter: None,
            animation_duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
            thumb_size: DEFAULT_THUMB_SIZE,
            touch_target: DEFAULT_TOUCH_TARGET,
        }
    }
}

impl SeekBarConfig {
    /// Parse a configuration from a JSON string. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Set the value bounds.
    #[must_use]
    pub const fn range(mut self, min: i32, max: i32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the initial value.
    #[must_use]
    pub const fn value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    /// Mirror the track under RTL.
    #[must_use]
    pub const fn mirror_for_rtl(mut self, mirror: bool) -> Self {
        self.mirror_for_rtl = mirror;
        self
    }

    /// Set the indicator pattern.
    #[must_use]
    pub fn indicator_formatter(mut self, pattern: impl Into<String>) -> Self {
        self.indicator_formatter = Some(pattern.into());
        self
    }

    /// Set the animation curve.
    #[must_use]
    pub const fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the animation length.
    #[must_use]
    pub const fn animation_duration_ms(mut self, duration_ms: f64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    /// Set thumb size and touch target.
    #[must_use]
    pub const fn thumb(mut self, thumb_size: i32, touch_target: i32) -> Self {
        self.thumb_size = thumb_size;
        self.touch_target = touch_target;
        self
    }
}
