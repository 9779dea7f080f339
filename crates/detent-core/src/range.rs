//! Bounded integer progress with mutual min/max clamping.

use crate::geometry::round_half_up;
use serde::{Deserialize, Serialize};

/// Default lower bound.
pub const DEFAULT_MIN: i32 = 0;
/// Default upper bound.
pub const DEFAULT_MAX: i32 = 100;
/// Maximum number of key presses needed to travel the whole range.
pub const MAX_KEY_STEPS: i64 = 20;

/// A change of the progress value that observers should hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueChange {
    /// The new value
    pub value: i32,
    /// Whether the change came from user interaction
    pub from_user: bool,
}

/// Integer progress kept inside `[min, max]` with `max > min`.
///
/// Inputs are never rejected. Out-of-range values are clamped and an
/// inverted range is repaired by moving the opposite bound, so every
/// setter leaves the range valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRange {
    min: i32,
    max: i32,
    value: i32,
    key_increment: i32,
}

impl Default for ProgressRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN, DEFAULT_MAX, DEFAULT_MIN)
    }
}

impl ProgressRange {
    /// Create a range the way a freshly inflated seek bar does: `max` is
    /// raised to at least `min + 1` and `value` clamped into the result.
    #[must_use]
    pub fn new(min: i32, max: i32, value: i32) -> Self {
        let max = max.max(min.saturating_add(1));
        let min = min.min(max - 1);
        let mut range = Self {
            min,
            max,
            value: value.clamp(min, max),
            key_increment: 1,
        };
        range.update_key_increment();
        range
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }

    /// Step applied by one key press.
    #[must_use]
    pub const fn key_increment(&self) -> i32 {
        self.key_increment
    }

    /// Width of the range, `max - min`. Always positive.
    #[must_use]
    pub fn span(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min)
    }

    /// Clamp an arbitrary value into the range.
    #[must_use]
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// Position of `value` within the range as a fraction in `[0, 1]`.
    #[must_use]
    pub fn fraction_of(&self, value: f64) -> f64 {
        let fraction = (value - f64::from(self.min)) / self.span() as f64;
        fraction.clamp(0.0, 1.0)
    }

    /// Set the upper bound.
    ///
    /// A bound at or below `min` drags `min` down to `max - 1`. If the
    /// current value no longer fits it is reset to `min`.
    pub fn set_max(&mut self, max: i32) -> Option<ValueChange> {
        self.max = max;
        if self.max <= self.min {
            self.min = self.max.saturating_sub(1);
            if self.max <= self.min {
                self.max = self.min + 1;
            }
            log::debug!("range: max {max} forced min to {}", self.min);
        }
        self.update_key_increment();
        self.reset_if_outside()
    }

    /// Set the lower bound.
    ///
    /// A bound at or above `max` pushes `max` up to `min + 1`. If the
    /// current value no longer fits it is reset to `min`.
    pub fn set_min(&mut self, min: i32) -> Option<ValueChange> {
        self.min = min;
        if self.min >= self.max {
            self.max = self.min.saturating_add(1);
            if self.min >= self.max {
                self.min = self.max - 1;
            }
            log::debug!("range: min {min} forced max to {}", self.max);
        }
        self.update_key_increment();
        self.reset_if_outside()
    }

    /// Set the value, clamped into the range.
    ///
    /// Returns the change when the stored value actually moved.
    pub fn set_value(&mut self, value: i32, from_user: bool) -> Option<ValueChange> {
        let value = self.clamp(value);
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(ValueChange { value, from_user })
    }

    fn reset_if_outside(&mut self) -> Option<ValueChange> {
        if self.value < self.min || self.value > self.max {
            self.set_value(self.min, false)
        } else {
            None
        }
    }

    fn update_key_increment(&mut self) {
        let steps = round_half_up(self.span() as f64 / MAX_KEY_STEPS as f64);
        self.key_increment = steps.clamp(1, i64::from(i32::MAX)) as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_default_range() {
        let range = ProgressRange::default();
        assert_eq!(range.min(), 0);
        assert_eq!(range.max(), 100);
        assert_eq!(range.value(), 0);
        assert_eq!(range.key_increment(), 5);
    }

    #[test]
    fn test_new_raises_max_above_min() {
        let range = ProgressRange::new(10, 5, 7);
        assert_eq!(range.min(), 10);
        assert_eq!(range.max(), 11);
        assert_eq!(range.value(), 10);
    }

    #[test]
    fn test_new_clamps_value() {
        assert_eq!(ProgressRange::new(0, 10, 50).value(), 10);
        assert_eq!(ProgressRange::new(0, 10, -3).value(), 0);
    }

    #[test]
    fn test_new_at_i32_max() {
        let range = ProgressRange::new(i32::MAX, i32::MAX, 0);
        assert_eq!(range.max(), i32::MAX);
        assert_eq!(range.min(), i32::MAX - 1);
    }

    // =========================================================================
    // set_max / set_min
    // =========================================================================

    #[test]
    fn test_set_max_below_min_moves_min() {
        let mut range = ProgressRange::new(50, 100, 75);
        let change = range.set_max(40);
        assert_eq!(range.min(), 39);
        assert_eq!(range.max(), 40);
        assert_eq!(range.value(), 39);
        assert_eq!(
            change,
            Some(ValueChange {
                value: 39,
                from_user: false
            })
        );
    }

    #[test]
    fn test_set_max_above_min_keeps_min() {
        let mut range = ProgressRange::new(0, 100, 50);
        assert_eq!(range.set_max(40), Some(ValueChange { value: 0, from_user: false }));
        assert_eq!(range.min(), 0);
        assert_eq!(range.max(), 40);
    }

    #[test]
    fn test_set_max_equal_to_min() {
        let mut range = ProgressRange::new(10, 20, 15);
        range.set_max(10);
        assert_eq!(range.min(), 9);
        assert_eq!(range.max(), 10);
        assert_eq!(range.value(), 9);
    }

    #[test]
    fn test_set_min_above_max_moves_max() {
        let mut range = ProgressRange::new(0, 10, 5);
        range.set_min(20);
        assert_eq!(range.min(), 20);
        assert_eq!(range.max(), 21);
        assert_eq!(range.value(), 20);
    }

    #[test]
    fn test_set_min_value_still_inside_is_silent() {
        let mut range = ProgressRange::new(0, 100, 50);
        assert_eq!(range.set_min(10), None);
        assert_eq!(range.value(), 50);
    }

    #[test]
    fn test_set_max_at_i32_min_saturates() {
        let mut range = ProgressRange::default();
        range.set_max(i32::MIN);
        assert_eq!(range.min(), i32::MIN);
        assert_eq!(range.max(), i32::MIN + 1);
    }

    #[test]
    fn test_set_min_at_i32_max_saturates() {
        let mut range = ProgressRange::default();
        range.set_min(i32::MAX);
        assert_eq!(range.max(), i32::MAX);
        assert_eq!(range.min(), i32::MAX - 1);
    }

    // =========================================================================
    // set_value
    // =========================================================================

    #[test]
    fn test_set_value_reports_change() {
        let mut range = ProgressRange::default();
        assert_eq!(
            range.set_value(30, true),
            Some(ValueChange {
                value: 30,
                from_user: true
            })
        );
        assert_eq!(range.value(), 30);
    }

    #[test]
    fn test_set_value_same_is_noop() {
        let mut range = ProgressRange::new(0, 100, 30);
        assert_eq!(range.set_value(30, false), None);
    }

    #[test]
    fn test_set_value_clamped_to_same_is_noop() {
        let mut range = ProgressRange::new(0, 100, 100);
        assert_eq!(range.set_value(500, true), None);
    }

    // =========================================================================
    // Key increment
    // =========================================================================

    #[test]
    fn test_key_increment_small_range() {
        assert_eq!(ProgressRange::new(0, 10, 0).key_increment(), 1);
        assert_eq!(ProgressRange::new(0, 29, 0).key_increment(), 1);
    }

    #[test]
    fn test_key_increment_rounds_half_up() {
        assert_eq!(ProgressRange::new(0, 30, 0).key_increment(), 2);
    }

    #[test]
    fn test_key_increment_large_range() {
        assert_eq!(ProgressRange::new(0, 1000, 0).key_increment(), 50);
    }

    #[test]
    fn test_key_increment_follows_bounds() {
        let mut range = ProgressRange::new(0, 1000, 0);
        range.set_max(10);
        assert_eq!(range.key_increment(), 1);
        range.set_min(-990);
        assert_eq!(range.key_increment(), 50);
    }

    #[test]
    fn test_fraction_of() {
        let range = ProgressRange::new(10, 20, 10);
        assert_eq!(range.fraction_of(15.0), 0.5);
        assert_eq!(range.fraction_of(0.0), 0.0);
        assert_eq!(range.fraction_of(99.0), 1.0);
    }

    proptest! {
        #[test]
        fn prop_value_always_in_range(min in -1000i32..1000, max in -1000i32..1000, v in any::<i32>()) {
            let mut range = ProgressRange::default();
            range.set_min(min);
            range.set_max(max);
            range.set_value(v, true);
            prop_assert!(range.min() < range.max());
            prop_assert!(range.min() <= range.value() && range.value() <= range.max());
        }

        #[test]
        fn prop_set_max_idempotent(min in -500i32..500, value in -500i32..500, x in -1000i32..1000) {
            let mut once = ProgressRange::new(min, min + 200, value);
            once.set_max(x);
            let mut twice = once.clone();
            twice.set_max(x);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_key_increment_bounds_step_count(min in -10_000i32..10_000, len in 1i32..100_000) {
            let range = ProgressRange::new(min, min + len, min);
            prop_assert!(range.key_increment() >= 1);
            let steps = (range.span() + i64::from(range.key_increment()) - 1)
                / i64::from(range.key_increment());
            // Ranges under 30 keep single steps; above that rounding adds a few.
            prop_assert!(steps < 30);
        }
    }
}
