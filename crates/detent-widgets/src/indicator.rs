//! Floating value indicator: visibility and text.

use crate::listener::{IdentityTransformer, NumericTransformer};
use detent_core::{FormatterCache, IndicatorPattern, Locale, DEFAULT_PATTERN};

/// A change of indicator visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorTransition {
    /// Hidden to visible
    Show,
    /// Visible to hidden
    Hide,
}

impl IndicatorTransition {
    /// Visibility after the transition.
    #[must_use]
    pub const fn visible(self) -> bool {
        matches!(self, Self::Show)
    }
}

/// Decides when the indicator is shown and what it says.
///
/// The bubble is visible while the seek bar is enabled and either pressed
/// or focused. Text is the transformed value run through the configured
/// pattern, re-rendered whenever one of those inputs changes.
pub struct IndicatorCoordinator {
    pressed: bool,
    focused: bool,
    enabled: bool,
    visible: bool,
    text: String,
    sizing_text: String,
    pattern: Option<String>,
    locale: Locale,
    transformer: Box<dyn NumericTransformer>,
    cache: FormatterCache,
}

impl std::fmt::Debug for IndicatorCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndicatorCoordinator")
            .field("pressed", &self.pressed)
            .field("focused", &self.focused)
            .field("enabled", &self.enabled)
            .field("visible", &self.visible)
            .field("text", &self.text)
            .field("pattern", &self.pattern)
            .field("locale", &self.locale.tag)
            .finish_non_exhaustive()
    }
}

impl Default for IndicatorCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorCoordinator {
    /// Create a hidden, enabled indicator with the default pattern.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pressed: false,
            focused: false,
            enabled: true,
            visible: false,
            text: String::new(),
            sizing_text: String::new(),
            pattern: None,
            locale: Locale::default(),
            transformer: Box::new(IdentityTransformer),
            cache: FormatterCache::new(),
        }
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Whether the bubble is showing.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the seek bar is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the seek bar is pressed.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the seek bar has focus.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Update the pressed state.
    pub fn set_pressed(&mut self, pressed: bool) -> Option<IndicatorTransition> {
        self.pressed = pressed;
        self.refresh_visibility()
    }

    /// Update the focus state.
    pub fn set_focused(&mut self, focused: bool) -> Option<IndicatorTransition> {
        self.focused = focused;
        self.refresh_visibility()
    }

    /// Update the enabled state.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<IndicatorTransition> {
        self.enabled = enabled;
        self.refresh_visibility()
    }

    fn refresh_visibility(&mut self) -> Option<IndicatorTransition> {
        let visible = self.enabled && (self.pressed || self.focused);
        if visible == self.visible {
            return None;
        }
        self.visible = visible;
        log::debug!("indicator: visible={visible}");
        Some(if visible {
            IndicatorTransition::Show
        } else {
            IndicatorTransition::Hide
        })
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Text currently displayed.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text for the widest expected value, `max` after transformation.
    ///
    /// Hosts size the bubble from this so it does not resize while dragging.
    #[must_use]
    pub fn sizing_text(&self) -> &str {
        &self.sizing_text
    }

    /// Pattern in use, if one was set.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Locale in use.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Re-render for `value`. Returns the new text if it changed.
    pub fn update_text(&mut self, value: i32) -> Option<String> {
        let text = self.format(value);
        if text == self.text {
            return None;
        }
        self.text.clone_from(&text);
        Some(text)
    }

    /// Recompute the sizing text for a new upper bound.
    pub fn update_sizing(&mut self, max: i32) {
        self.sizing_text = self.format(max);
    }

    /// Replace the pattern. `None` or an invalid pattern means `%d`.
    ///
    /// Returns the new text for `value` if it changed.
    pub fn set_pattern(&mut self, pattern: Option<&str>, value: i32, max: i32) -> Option<String> {
        self.pattern = match pattern {
            Some(p) => match IndicatorPattern::parse(p) {
                Ok(_) => Some(p.to_string()),
                Err(err) => {
                    log::warn!("indicator: {err}; using {DEFAULT_PATTERN:?}");
                    None
                }
            },
            None => None,
        };
        self.update_sizing(max);
        self.update_text(value)
    }

    /// Replace the numeric transformer.
    pub fn set_transformer(
        &mut self,
        transformer: Box<dyn NumericTransformer>,
        value: i32,
        max: i32,
    ) -> Option<String> {
        self.transformer = transformer;
        self.update_sizing(max);
        self.update_text(value)
    }

    /// Switch locale. The cached formatter is rebuilt on next use.
    pub fn set_locale(&mut self, locale: Locale, value: i32, max: i32) -> Option<String> {
        self.locale = locale;
        self.update_sizing(max);
        self.update_text(value)
    }

    fn format(&mut self, value: i32) -> String {
        let shown = i64::from(self.transformer.transform(value));
        let pattern = self.pattern.as_deref().unwrap_or(DEFAULT_PATTERN);
        self.cache
            .format(pattern, &self.locale, shown)
            .unwrap_or_else(|_| shown.to_string())
    }
}
