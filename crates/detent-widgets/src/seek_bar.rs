//! Discrete seek bar widget.

use crate::config::SeekBarConfig;
use crate::drag::DragController;
use crate::indicator::{IndicatorCoordinator, IndicatorTransition};
use crate::listener::{
    IdentityTransformer, IndicatorListener, NullHost, NumericTransformer,
    OnProgressChangeListener, SeekBarHost,
};
use detent_core::{
    Easing, Key, LayoutMetrics, Locale, Point, ProgressAnimator, ProgressRange, SavedState,
    SeekEvent, StateError, StepDirection, TrackMapper, ValueChange, ViewBounds, DEFAULT_MAX,
    DEFAULT_MIN,
};

/// A seek bar that snaps to integer values between `min` and `max`.
///
/// Pointer drags move the thumb directly, arrow keys animate it one key
/// increment at a time, and a floating indicator shows the value while the
/// bar is pressed or focused. Everything the host has to draw is pushed
/// through its [`SeekBarHost`].
///
/// # Example
///
/// ```
/// use detent_widgets::{DiscreteSeekBar, StepDirection};
///
/// let mut bar = DiscreteSeekBar::new();
/// bar.set_max(10);
/// bar.set_progress(4);
/// assert!(bar.on_key_step(StepDirection::Increment));
/// while bar.on_animation_tick(16.0) {}
/// assert_eq!(bar.progress(), 5);
/// ```
pub struct DiscreteSeekBar<H: SeekBarHost = NullHost> {
    range: ProgressRange,
    layout: LayoutMetrics,
    thumb_offset: i32,
    drag: DragController,
    animator: ProgressAnimator,
    indicator: IndicatorCoordinator,
    progress_listener: Option<Box<dyn OnProgressChangeListener>>,
    indicator_listener: Option<Box<dyn IndicatorListener>>,
    mirror_for_rtl: bool,
    thumb_size: i32,
    touch_target: i32,
    host: H,
}

impl<H: SeekBarHost> std::fmt::Debug for DiscreteSeekBar<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscreteSeekBar")
            .field("range", &self.range)
            .field("layout", &self.layout)
            .field("thumb_offset", &self.thumb_offset)
            .field("drag", &self.drag)
            .field("animator", &self.animator)
            .field("indicator", &self.indicator)
            .finish_non_exhaustive()
    }
}

impl Default for DiscreteSeekBar {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscreteSeekBar {
    /// Create a seek bar over 0..=100 with no host.
    #[must_use]
    pub fn new() -> Self {
        Self::with_host(NullHost)
    }
}

impl<H: SeekBarHost> DiscreteSeekBar<H> {
    /// Create a seek bar with default settings that reports to `host`.
    #[must_use]
    pub fn with_host(host: H) -> Self {
        Self::with_config(host, &SeekBarConfig::default())
    }

    /// Create a seek bar from a configuration.
    ///
    /// The range is normalised like any other: `max` is raised above `min`
    /// and the value clamped. The host hears nothing until the first input.
    #[must_use]
    pub fn with_config(host: H, config: &SeekBarConfig) -> Self {
        let range = ProgressRange::new(config.min, config.max, config.value);
        let animator = ProgressAnimator::new()
            .with_duration(config.animation_duration_ms)
            .with_easing(config.easing);
        let mut indicator = IndicatorCoordinator::new();
        indicator.set_pattern(
            config.indicator_formatter.as_deref(),
            range.value(),
            range.max(),
        );
        log::debug!(
            "seek bar: created {}..={} at {}",
            range.min(),
            range.max(),
            range.value()
        );
        Self {
            range,
            layout: LayoutMetrics::default(),
            thumb_offset: 0,
            drag: DragController::new(),
            animator,
            indicator,
            progress_listener: None,
            indicator_listener: None,
            mirror_for_rtl: config.mirror_for_rtl,
            thumb_size: config.thumb_size,
            touch_target: config.touch_target,
            host,
        }
    }

    // =========================================================================
    // Host
    // =========================================================================

    /// The host receiving callbacks.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the seek bar and return its host.
    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    // =========================================================================
    // Range
    // =========================================================================

    /// Current value.
    #[must_use]
    pub const fn progress(&self) -> i32 {
        self.range.value()
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.range.min()
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.range.max()
    }

    /// Distance moved by one arrow key press.
    #[must_use]
    pub const fn key_increment(&self) -> i32 {
        self.range.key_increment()
    }

    /// Set the upper bound. A bound at or below `min` pulls `min` down.
    pub fn set_max(&mut self, max: i32) {
        let change = self.range.set_max(max);
        self.indicator.update_sizing(self.range.max());
        self.after_bounds_changed(change);
    }

    /// Set the lower bound. A bound at or above `max` pushes `max` up.
    pub fn set_min(&mut self, min: i32) {
        let change = self.range.set_min(min);
        self.indicator.update_sizing(self.range.max());
        self.after_bounds_changed(change);
    }

    /// Set the value programmatically.
    ///
    /// Ends any drag and cancels any running animation first. Listeners
    /// see `from_user == false`.
    pub fn set_progress(&mut self, value: i32) {
        self.end_drag(true);
        let cancelled = self.stop_animation();
        self.apply_value(value, false);
        if cancelled {
            self.sync_thumb();
        }
    }

    fn after_bounds_changed(&mut self, change: Option<ValueChange>) {
        if let Some(change) = change {
            self.stop_animation();
            self.publish_value(change);
        }
        if !self.animator.is_running() {
            self.sync_thumb();
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Track geometry in use.
    #[must_use]
    pub const fn layout(&self) -> &LayoutMetrics {
        &self.layout
    }

    /// Offset of the thumb's left edge from the start of the track.
    #[must_use]
    pub const fn thumb_offset(&self) -> i32 {
        self.thumb_offset
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether a keyboard step is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Whether the bar accepts input.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.indicator.is_enabled()
    }

    /// Whether the bar has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.indicator.is_focused()
    }

    /// Whether the indicator bubble is showing.
    #[must_use]
    pub const fn is_indicator_visible(&self) -> bool {
        self.indicator.is_visible()
    }

    /// Text shown in the indicator.
    #[must_use]
    pub fn indicator_text(&self) -> &str {
        self.indicator.text()
    }

    /// Text to size the indicator for; the formatted maximum.
    #[must_use]
    pub fn indicator_sizing_text(&self) -> &str {
        self.indicator.sizing_text()
    }

    /// Whether the track reverses under RTL.
    #[must_use]
    pub const fn mirror_for_rtl(&self) -> bool {
        self.mirror_for_rtl
    }

    /// Enable or disable input. Disabling ends a drag and hides the
    /// indicator.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.end_drag(true);
        }
        let transition = self.indicator.set_enabled(enabled);
        self.publish_transition(transition);
    }

    /// Focus changed.
    pub fn set_focused(&mut self, focused: bool) {
        let transition = self.indicator.set_focused(focused);
        self.publish_transition(transition);
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Take new track geometry and re-emit the thumb offset.
    pub fn on_size_changed(&mut self, metrics: LayoutMetrics) {
        log::debug!(
            "seek bar: layout span={} mirrored={}",
            metrics.available_span,
            metrics.mirrored
        );
        self.layout = metrics;
        let mapper = self.mapper();
        let offset = match self.animator.position() {
            Some(position) if self.animator.is_running() => mapper.position_to_offset(position),
            _ => mapper.value_to_offset(self.range.value()),
        };
        self.thumb_offset = offset;
        self.host.on_thumb_offset_changed(offset);
    }

    /// Derive the track from the view bounds and layout direction.
    pub fn on_view_resized(&mut self, view: ViewBounds, rtl: bool) {
        let metrics = LayoutMetrics::for_view(
            view,
            self.thumb_size,
            self.touch_target,
            rtl,
            self.mirror_for_rtl,
        );
        self.on_size_changed(metrics);
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Pointer pressed. Returns true if it grabbed the thumb.
    pub fn on_pointer_down(&mut self, position: Point) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let mapper = self.mapper();
        let thumb = mapper.thumb_rect(self.thumb_offset);
        let hit = mapper.hit_rect(self.thumb_offset);
        if !self.drag.pointer_down(position, hit, thumb.x) {
            return false;
        }
        if self.stop_animation() {
            self.sync_thumb();
        }
        let transition = self.indicator.set_pressed(true);
        self.publish_transition(transition);
        true
    }

    /// Pointer moved. Returns true while dragging.
    pub fn on_pointer_move(&mut self, position: Point) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let Some(value) = self.drag.pointer_move(position, &self.mapper()) else {
            return false;
        };
        let cancelled = self.stop_animation();
        self.apply_value(value, true);
        if cancelled {
            self.sync_thumb();
        }
        true
    }

    /// Pointer released. Returns true if a drag ended.
    pub fn on_pointer_up(&mut self) -> bool {
        self.end_drag(false)
    }

    /// Gesture taken away. Returns true if a drag ended.
    pub fn on_pointer_cancel(&mut self) -> bool {
        self.end_drag(true)
    }

    fn end_drag(&mut self, cancelled: bool) -> bool {
        let ended = if cancelled {
            self.drag.pointer_cancel()
        } else {
            self.drag.pointer_up()
        };
        if ended {
            let transition = self.indicator.set_pressed(false);
            self.publish_transition(transition);
        }
        ended
    }

    // =========================================================================
    // Keyboard input
    // =========================================================================

    /// Step one key increment. Returns true if the step was consumed.
    ///
    /// Steps build on the target of a running animation, so repeated presses
    /// accumulate. A step at the bound is consumed without effect.
    pub fn on_key_step(&mut self, direction: StepDirection) -> bool {
        if !self.is_enabled() {
            return false;
        }
        let running = self.animator.is_running();
        let base = match self.animator.target() {
            Some(target) if running => target,
            _ => self.range.value(),
        };
        let at_bound = match direction {
            StepDirection::Decrement => base <= self.range.min(),
            StepDirection::Increment => base >= self.range.max(),
        };
        if at_bound {
            log::trace!("seek bar: key step {direction:?} at bound {base}");
            return true;
        }
        let step = direction.sign() * self.range.key_increment();
        let target = self.range.clamp(base.saturating_add(step));
        let from = match self.animator.position() {
            Some(position) if running => position,
            _ => f64::from(self.range.value()),
        };
        self.animator.animate_to(from, target);
        if !running {
            self.host.request_animation_ticks(true);
        }
        true
    }

    /// Key pressed. Left and right arrows step; others are ignored.
    pub fn on_key_down(&mut self, key: Key) -> bool {
        key.step_direction()
            .is_some_and(|direction| self.on_key_step(direction))
    }

    /// Frame callback. Returns true while the animation produced a frame.
    pub fn on_animation_tick(&mut self, elapsed_ms: f64) -> bool {
        let Some(frame) = self.animator.tick(elapsed_ms) else {
            return false;
        };
        if let Some(change) = self.range.set_value(frame.value, true) {
            self.publish_value(change);
        }
        let offset = self.mapper().position_to_offset(frame.position);
        self.move_thumb(offset);
        if frame.finished {
            self.host.request_animation_ticks(false);
        }
        true
    }

    /// Route a host event. Returns true if the event was consumed.
    pub fn event(&mut self, event: &SeekEvent) -> bool {
        match *event {
            SeekEvent::PointerDown { position } => self.on_pointer_down(position),
            SeekEvent::PointerMove { position } => self.on_pointer_move(position),
            SeekEvent::PointerUp => self.on_pointer_up(),
            SeekEvent::PointerCancel => self.on_pointer_cancel(),
            SeekEvent::KeyDown { key } => self.on_key_down(key),
            SeekEvent::SizeChanged { metrics } => {
                self.on_size_changed(metrics);
                true
            }
            SeekEvent::AnimationTick { elapsed_ms } => self.on_animation_tick(elapsed_ms),
            SeekEvent::FocusIn => {
                self.set_focused(true);
                true
            }
            SeekEvent::FocusOut => {
                self.set_focused(false);
                true
            }
        }
    }

    // =========================================================================
    // Indicator
    // =========================================================================

    /// Transform values before they are formatted for the indicator.
    pub fn set_numeric_transformer(&mut self, transformer: impl NumericTransformer + 'static) {
        let text = self.indicator.set_transformer(
            Box::new(transformer),
            self.range.value(),
            self.range.max(),
        );
        self.publish_text(text);
    }

    /// Show raw values again.
    pub fn reset_numeric_transformer(&mut self) {
        self.set_numeric_transformer(IdentityTransformer);
    }

    /// Set the indicator pattern, e.g. `"%d%%"`. `None` restores `"%d"`.
    ///
    /// An invalid pattern is logged and replaced by the default.
    pub fn set_indicator_formatter(&mut self, pattern: Option<&str>) {
        let text = self
            .indicator
            .set_pattern(pattern, self.range.value(), self.range.max());
        self.publish_text(text);
    }

    /// Indicator pattern in use.
    #[must_use]
    pub fn indicator_formatter(&self) -> Option<&str> {
        self.indicator.pattern()
    }

    /// Format indicator text for a locale.
    pub fn set_locale(&mut self, locale: Locale) {
        let text = self
            .indicator
            .set_locale(locale, self.range.value(), self.range.max());
        self.publish_text(text);
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Curve for keyboard steps. Applies from the next step.
    pub fn set_easing(&mut self, easing: Easing) {
        self.animator.set_easing(easing);
    }

    /// Length of keyboard step animations. Applies from the next step.
    pub fn set_animation_duration(&mut self, duration_ms: f64) {
        self.animator.set_duration(duration_ms);
    }

    /// Curve for keyboard steps.
    #[must_use]
    pub const fn easing(&self) -> Easing {
        self.animator.easing()
    }

    /// Length of keyboard step animations.
    #[must_use]
    pub const fn animation_duration(&self) -> f64 {
        self.animator.duration_ms()
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Receive value changes.
    pub fn set_on_progress_change_listener(
        &mut self,
        listener: impl OnProgressChangeListener + 'static,
    ) {
        self.progress_listener = Some(Box::new(listener));
    }

    /// Stop receiving value changes.
    pub fn remove_on_progress_change_listener(&mut self) {
        self.progress_listener = None;
    }

    /// Receive indicator show and hide notifications.
    pub fn set_indicator_listener(&mut self, listener: impl IndicatorListener + 'static) {
        self.indicator_listener = Some(Box::new(listener));
    }

    /// Stop receiving indicator notifications.
    pub fn remove_indicator_listener(&mut self) {
        self.indicator_listener = None;
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Snapshot of value and bounds.
    #[must_use]
    pub const fn save_state(&self) -> SavedState {
        SavedState::new(self.range.value(), self.range.max(), self.range.min())
    }

    /// Apply a snapshot: `min`, then `max`, then the value.
    pub fn restore_state(&mut self, state: &SavedState) {
        log::debug!(
            "seek bar: restore min={} max={} progress={}",
            state.min,
            state.max,
            state.progress
        );
        self.set_min(state.min);
        self.set_max(state.max);
        self.set_progress(state.progress);
    }

    /// Restore from the 12-byte encoding.
    ///
    /// A malformed blob resets to 0..=100 at 0 and returns false.
    pub fn restore_from_bytes(&mut self, bytes: &[u8]) -> bool {
        self.restore_or_reset(SavedState::from_bytes(bytes))
    }

    /// Restore from the JSON encoding.
    ///
    /// Malformed JSON resets to 0..=100 at 0 and returns false.
    pub fn restore_from_json(&mut self, json: &str) -> bool {
        self.restore_or_reset(SavedState::from_json(json))
    }

    fn restore_or_reset(&mut self, state: Result<SavedState, StateError>) -> bool {
        match state {
            Ok(state) => {
                self.restore_state(&state);
                true
            }
            Err(err) => {
                log::warn!("seek bar: {err}; resetting to defaults");
                self.restore_state(&SavedState::new(DEFAULT_MIN, DEFAULT_MAX, DEFAULT_MIN));
                false
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    const fn mapper(&self) -> TrackMapper {
        TrackMapper::new(&self.range, self.layout)
    }

    fn apply_value(&mut self, value: i32, from_user: bool) {
        if let Some(change) = self.range.set_value(value, from_user) {
            self.publish_value(change);
            self.sync_thumb();
        }
    }

    fn publish_value(&mut self, change: ValueChange) {
        let ValueChange { value, from_user } = change;
        self.host.on_value_changed(value, from_user);
        if let Some(listener) = self.progress_listener.as_mut() {
            listener.on_progress_changed(value, from_user);
        }
        let text = self.indicator.update_text(value);
        self.publish_text(text);
    }

    fn publish_text(&mut self, text: Option<String>) {
        if let Some(text) = text {
            self.host.on_indicator_text_changed(&text);
        }
    }

    fn publish_transition(&mut self, transition: Option<IndicatorTransition>) {
        let Some(transition) = transition else {
            return;
        };
        self.host.on_indicator_visibility_changed(transition.visible());
        if let Some(listener) = self.indicator_listener.as_mut() {
            match transition {
                IndicatorTransition::Show => listener.on_show_bubble(),
                IndicatorTransition::Hide => listener.on_hide_bubble(),
            }
        }
    }

    /// Returns true if a running animation was cancelled. The thumb is
    /// left where the last frame put it; callers re-sync it.
    fn stop_animation(&mut self) -> bool {
        if !self.animator.is_running() {
            return false;
        }
        self.animator.cancel();
        self.host.request_animation_ticks(false);
        true
    }

    fn sync_thumb(&mut self) {
        let offset = self.mapper().value_to_offset(self.range.value());
        self.move_thumb(offset);
    }

    fn move_thumb(&mut self, offset: i32) {
        if offset != self.thumb_offset {
            self.thumb_offset = offset;
            self.host.on_thumb_offset_changed(offset);
        }
    }
}
