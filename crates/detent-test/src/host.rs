//! Host that records every callback for later inspection.

use detent_widgets::SeekBarHost;

/// A single host callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// Value changed
    Value {
        /// New value
        value: i32,
        /// Whether the user caused it
        from_user: bool,
    },
    /// Indicator shown or hidden
    IndicatorVisible(bool),
    /// Indicator text changed
    IndicatorText(String),
    /// Thumb moved
    ThumbOffset(i32),
    /// Animation ticks requested or released
    AnimationTicks(bool),
}

/// Host that records callbacks instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    ticking: bool,
}

impl RecordingHost {
    /// Create an empty recording host.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Take the recorded calls, leaving the host empty.
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Clear all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Whether the seek bar currently wants animation ticks.
    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Value changes in order.
    #[must_use]
    pub fn values(&self) -> Vec<(i32, bool)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::Value { value, from_user } => Some((*value, *from_user)),
                _ => None,
            })
            .collect()
    }

    /// Indicator visibility changes in order.
    #[must_use]
    pub fn visibility(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HostCall::IndicatorVisible(visible) => Some(*visible),
                _ => None,
            })
            .collect()
    }

    /// Most recent indicator text.
    #[must_use]
    pub fn last_text(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::IndicatorText(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Most recent thumb offset.
    #[must_use]
    pub fn last_offset(&self) -> Option<i32> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::ThumbOffset(offset) => Some(*offset),
            _ => None,
        })
    }
}

impl SeekBarHost for RecordingHost {
    fn on_value_changed(&mut self, value: i32, from_user: bool) {
        self.calls.push(HostCall::Value { value, from_user });
    }

    fn on_indicator_visibility_changed(&mut self, visible: bool) {
        self.calls.push(HostCall::IndicatorVisible(visible));
    }

    fn on_indicator_text_changed(&mut self, text: &str) {
        self.calls.push(HostCall::IndicatorText(text.to_string()));
    }

    fn on_thumb_offset_changed(&mut self, offset: i32) {
        self.calls.push(HostCall::ThumbOffset(offset));
    }

    fn request_animation_ticks(&mut self, active: bool) {
        self.ticking = active;
        self.calls.push(HostCall::AnimationTicks(active));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_host_new() {
        let host = RecordingHost::new();
        assert!(host.is_empty());
        assert_eq!(host.call_count(), 0);
        assert!(!host.is_ticking());
    }

    #[test]
    fn test_recording_host_records_in_order() {
        let mut host = RecordingHost::new();
        host.on_value_changed(3, true);
        host.on_indicator_text_changed("3");
        host.on_thumb_offset_changed(30);
        host.on_indicator_visibility_changed(true);
        assert_eq!(
            host.calls(),
            &[
                HostCall::Value {
                    value: 3,
                    from_user: true
                },
                HostCall::IndicatorText("3".to_string()),
                HostCall::ThumbOffset(30),
                HostCall::IndicatorVisible(true),
            ]
        );
        assert_eq!(host.values(), vec![(3, true)]);
        assert_eq!(host.visibility(), vec![true]);
        assert_eq!(host.last_text(), Some("3"));
        assert_eq!(host.last_offset(), Some(30));
    }

    #[test]
    fn test_recording_host_tracks_ticking() {
        let mut host = RecordingHost::new();
        host.request_animation_ticks(true);
        assert!(host.is_ticking());
        host.request_animation_ticks(false);
        assert!(!host.is_ticking());
    }

    #[test]
    fn test_take_and_clear() {
        let mut host = RecordingHost::new();
        host.on_thumb_offset_changed(1);
        assert_eq!(host.take_calls().len(), 1);
        assert!(host.is_empty());
        host.on_thumb_offset_changed(2);
        host.clear();
        assert!(host.is_empty());
    }
}
