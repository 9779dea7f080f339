//! Indicator text formatting: printf-style integer patterns and locales.
//!
//! A pattern is literal text with exactly one `%[flags][width]d`
//! conversion. Supported flags are `-` (left align), `0` (zero pad),
//! `+` (always show sign), ` ` (space before positives) and `,` (locale
//! digit grouping). `%%` produces a literal percent sign.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "%d";

/// Errors produced when parsing an indicator pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The pattern has no `%d` conversion.
    #[error("pattern {0:?} has no integer conversion")]
    MissingConversion(String),
    /// The pattern has more than one conversion.
    #[error("pattern {0:?} has more than one conversion")]
    MultipleConversions(String),
    /// A conversion other than `d` was used.
    #[error("unsupported conversion '%{conversion}' in pattern {pattern:?}")]
    UnsupportedConversion {
        /// The offending pattern
        pattern: String,
        /// The conversion character found
        conversion: char,
    },
    /// The pattern ends inside a conversion.
    #[error("pattern {0:?} ends inside a conversion")]
    Incomplete(String),
}

// =============================================================================
// Locale
// =============================================================================

/// Number symbols for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// BCP 47 tag, informational only
    pub tag: String,
    /// Separator inserted between digit groups
    pub grouping_separator: char,
    /// Digits per group
    pub grouping_size: usize,
    /// Sign placed before negative numbers
    pub minus_sign: char,
    /// Glyph for the digit zero; the other nine follow it
    pub zero_digit: char,
}

impl Default for Locale {
    fn default() -> Self {
        Self::root()
    }
}

impl Locale {
    /// Locale-neutral symbols.
    #[must_use]
    pub fn root() -> Self {
        Self::new("und")
    }

    /// US English.
    #[must_use]
    pub fn en_us() -> Self {
        Self::new("en-US")
    }

    /// German.
    #[must_use]
    pub fn de_de() -> Self {
        Self::new("de-DE").with_grouping('.', 3)
    }

    /// French, grouped with a narrow no-break space.
    #[must_use]
    pub fn fr_fr() -> Self {
        Self::new("fr-FR").with_grouping('\u{202f}', 3)
    }

    /// Egyptian Arabic, with Arabic-Indic digits.
    #[must_use]
    pub fn ar_eg() -> Self {
        Self::new("ar-EG")
            .with_grouping('\u{066c}', 3)
            .with_zero_digit('\u{0660}')
    }

    /// Create a locale with ASCII symbols and comma grouping.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            grouping_separator: ',',
            grouping_size: 3,
            minus_sign: '-',
            zero_digit: '0',
        }
    }

    /// Set the grouping separator and group size.
    #[must_use]
    pub fn with_grouping(mut self, separator: char, size: usize) -> Self {
        self.grouping_separator = separator;
        self.grouping_size = size;
        self
    }

    /// Set the minus sign.
    #[must_use]
    pub fn with_minus_sign(mut self, minus: char) -> Self {
        self.minus_sign = minus;
        self
    }

    /// Set the zero digit.
    #[must_use]
    pub fn with_zero_digit(mut self, zero: char) -> Self {
        self.zero_digit = zero;
        self
    }

    fn digit(&self, d: u32) -> char {
        char::from_u32(self.zero_digit as u32 + d)
            .or_else(|| char::from_digit(d, 10))
            .unwrap_or('?')
    }
}

// =============================================================================
// Pattern
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Conversion {
    left_align: bool,
    zero_pad: bool,
    plus: bool,
    space: bool,
    grouping: bool,
    width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Value(Conversion),
}

/// A parsed indicator pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorPattern {
    source: String,
    segments: Vec<Segment>,
}

impl Default for IndicatorPattern {
    fn default() -> Self {
        Self {
            source: DEFAULT_PATTERN.to_string(),
            segments: vec![Segment::Value(Conversion::default())],
        }
    }
}

impl IndicatorPattern {
    /// Parse a pattern.
    pub fn parse(pattern: &str) -> Result<Self, FormatError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut conversions = 0;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }

            let mut conversion = Conversion::default();
            while let Some(&flag) = chars.peek() {
                match flag {
                    '-' => conversion.left_align = true,
                    '0' => conversion.zero_pad = true,
                    '+' => conversion.plus = true,
                    ' ' => conversion.space = true,
                    ',' => conversion.grouping = true,
                    _ => break,
                }
                chars.next();
            }
            while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                conversion.width = conversion.width.saturating_mul(10).saturating_add(d as usize);
                chars.next();
            }
            match chars.next() {
                Some('d') => {}
                Some(other) => {
                    return Err(FormatError::UnsupportedConversion {
                        pattern: pattern.to_string(),
                        conversion: other,
                    })
                }
                None => return Err(FormatError::Incomplete(pattern.to_string())),
            }

            conversions += 1;
            if conversions > 1 {
                return Err(FormatError::MultipleConversions(pattern.to_string()));
            }
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Value(conversion));
        }

        if conversions == 0 {
            return Err(FormatError::MissingConversion(pattern.to_string()));
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// The pattern text this was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render `value` with the given locale.
    #[must_use]
    pub fn format(&self, value: i64, locale: &Locale) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Value(conversion) => write_value(&mut out, value, *conversion, locale),
            }
        }
        out
    }
}

fn write_value(out: &mut String, value: i64, conversion: Conversion, locale: &Locale) {
    let raw = value.unsigned_abs().to_string();

    let group = if conversion.grouping { locale.grouping_size } else { 0 };
    let mut digits = String::new();
    let len = raw.len();
    for (i, d) in raw.chars().enumerate() {
        if group > 0 && i > 0 && (len - i) % group == 0 {
            digits.push(locale.grouping_separator);
        }
        digits.push(locale.digit(d.to_digit(10).unwrap_or(0)));
    }

    let sign = if value < 0 {
        Some(locale.minus_sign)
    } else if conversion.plus {
        Some('+')
    } else if conversion.space {
        Some(' ')
    } else {
        None
    };

    let used = digits.chars().count() + usize::from(sign.is_some());
    let fill = conversion.width.saturating_sub(used);

    if conversion.left_align {
        out.extend(sign);
        out.push_str(&digits);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if conversion.zero_pad {
        out.extend(sign);
        out.extend(std::iter::repeat(locale.digit(0)).take(fill));
        out.push_str(&digits);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.extend(sign);
        out.push_str(&digits);
    }
}

// =============================================================================
// FormatterCache
// =============================================================================

/// Parsed pattern cached against the `(pattern, locale)` it was built for.
///
/// Lookups with the same key reuse the parsed pattern; a different pattern
/// or locale rebuilds it.
#[derive(Debug, Clone, Default)]
pub struct FormatterCache {
    entry: Option<(IndicatorPattern, Locale)>,
    rebuilds: usize,
}

impl FormatterCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Format `value`, rebuilding the cached formatter if the key changed.
    pub fn format(&mut self, pattern: &str, locale: &Locale, value: i64) -> Result<String, FormatError> {
        let stale = self
            .entry
            .as_ref()
            .map_or(true, |(p, l)| p.source() != pattern || l != locale);
        if stale {
            let parsed = IndicatorPattern::parse(pattern)?;
            log::debug!("formatter: rebuilt for {pattern:?} in {}", locale.tag);
            self.entry = Some((parsed, locale.clone()));
            self.rebuilds += 1;
        }
        match &self.entry {
            Some((parsed, locale)) => Ok(parsed.format(value, locale)),
            None => Ok(IndicatorPattern::default().format(value, locale)),
        }
    }

    /// How many times the formatter has been rebuilt.
    #[must_use]
    pub const fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    /// Drop the cached formatter.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
