// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for chart and word-cloud layout.
//!
//! Chart guides only need rough label extents, but the word-cloud layout builds a collision
//! sprite for every word from its measured box, so both depend on the small [`TextMeasurer`]
//! interface defined here. Glyph shaping stays downstream: a renderer-backed measurer can
//! implement the same trait.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers split on `\n` themselves.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a sans-serif, normal-weight style with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Impact"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns a named family.
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::Named(name.into())
    }

    /// Parses a CSS family name, recognizing the generic families.
    pub fn from_css(name: &str) -> Self {
        match name.trim() {
            "serif" => Self::Serif,
            "sans-serif" => Self::SansSerif,
            "monospace" => Self::Monospace,
            other => Self::named(other),
        }
    }

    /// Returns the family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }

    /// Rough average glyph advance for the family, in ems.
    fn average_advance_em(&self) -> f64 {
        match self {
            Self::Monospace => 0.6,
            Self::Serif => 0.52,
            Self::SansSerif => 0.55,
            Self::Named(name) => {
                if name.eq_ignore_ascii_case("impact") {
                    0.48
                } else {
                    0.55
                }
            }
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// Advance of an uppercase letter relative to the family average.
const UPPERCASE_ADVANCE: f64 = 1.25;

/// A heuristic text measurer: a per-family average advance and a baseline at 0.8em.
///
/// Bold text is widened by 10% and uppercase letters by 25%. Individual glyph shapes are not
/// modeled, so wide glyphs (`W`, `M`, CJK) in a short word can still extend past the measured
/// box; callers that need a tight fit should add padding or plug in a shaping measurer.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let mut em = style.font_family.average_advance_em();
        if style.font_weight >= FontWeight::BOLD {
            em *= 1.1;
        }
        let ems: f64 = text
            .chars()
            .map(|c| if c.is_uppercase() { UPPERCASE_ADVANCE } else { 1.0 })
            .sum();
        TextMetrics {
            advance_width: em * style.font_size * ems,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_width_scales_with_length_and_size() {
        let m = HeuristicTextMeasurer;
        let a = m.measure("ab", &TextStyle::new(10.0));
        let b = m.measure("abcd", &TextStyle::new(20.0));
        assert!((b.advance_width - 4.0 * a.advance_width).abs() < 1e-9);
        assert!((b.line_height() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn impact_is_narrower_than_sans_and_bold_is_wider() {
        let m = HeuristicTextMeasurer;
        let sans = m.measure("word", &TextStyle::new(10.0));
        let impact = m.measure(
            "word",
            &TextStyle::new(10.0).with_family(FontFamily::named("Impact")),
        );
        let bold = m.measure("word", &TextStyle::new(10.0).with_weight(FontWeight::BOLD));
        assert!(impact.advance_width < sans.advance_width);
        assert!(bold.advance_width > sans.advance_width);
    }

    #[test]
    fn uppercase_is_wider() {
        let m = HeuristicTextMeasurer;
        let impact = TextStyle::new(10.0).with_family(FontFamily::named("Impact"));
        let lower = m.measure("word", &impact);
        let upper = m.measure("WORD", &impact);
        let mixed = m.measure("Word", &impact);
        assert!((upper.advance_width - 1.25 * lower.advance_width).abs() < 1e-9);
        assert!(lower.advance_width < mixed.advance_width);
        assert!(mixed.advance_width < upper.advance_width);
    }

    #[test]
    fn css_family_names() {
        assert_eq!(FontFamily::SansSerif.as_css_family(), "sans-serif");
        assert_eq!(FontFamily::named("Impact").as_css_family(), "Impact");
        assert_eq!(FontFamily::from_css("sans-serif"), FontFamily::SansSerif);
        assert_eq!(FontFamily::from_css("Impact"), FontFamily::named("Impact"));
    }
}
