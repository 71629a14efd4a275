// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placed words to text marks.

use std::sync::Arc;

use cloudviz_charts::CLOUD_WORDS;
use cloudviz_core::{Mark, MarkId, TextAnchor};
use kurbo::Point;
use peniko::Color;

use crate::layout::LayoutOutput;
use crate::palette::CATEGORY10;

/// Turns a finished placement into text marks.
///
/// Word `i` (in placement order) gets id `id_base + i` and color `palette[i % palette.len()]`.
#[derive(Clone, Debug)]
pub struct CloudRenderer {
    /// Base id for the generated marks.
    pub id_base: MarkId,
    /// Word colors, cycled in placement order.
    pub palette: Arc<[Color]>,
    /// Z-index of every word.
    pub z_index: i32,
}

impl Default for CloudRenderer {
    fn default() -> Self {
        Self {
            id_base: MarkId::from_raw(0),
            palette: Arc::from(CATEGORY10.as_slice()),
            z_index: CLOUD_WORDS,
        }
    }
}

impl CloudRenderer {
    /// Creates a renderer with the category10 palette.
    pub fn new(id_base: MarkId) -> Self {
        Self {
            id_base,
            ..Self::default()
        }
    }

    /// Sets the palette. An empty palette draws every word black.
    #[must_use]
    pub fn with_palette(mut self, palette: impl Into<Arc<[Color]>>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Sets the z-index.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Color of the `i`-th word.
    pub fn color(&self, i: usize) -> Color {
        if self.palette.is_empty() {
            Color::BLACK
        } else {
            self.palette[i % self.palette.len()]
        }
    }

    /// Generates one middle-anchored text mark per placed word, positioned at the center of
    /// the layout area plus the word's offset.
    pub fn marks(&self, output: &LayoutOutput) -> Vec<Mark> {
        let center = Point::new(
            (output.size.width / 2.0).floor(),
            (output.size.height / 2.0).floor(),
        );
        let family = output.font_family.as_css_family();
        output
            .placed
            .iter()
            .enumerate()
            .map(|(i, p)| {
                Mark::builder(self.id_base.offset(i as u64))
                    .text()
                    .x(center.x + p.x)
                    .y(center.y + p.y)
                    .content(p.word.text.clone())
                    .font_size(p.word.font_size)
                    .font_family(family)
                    .angle(p.rotation)
                    .anchor(TextAnchor::Middle)
                    .fill(self.color(i))
                    .z_index(self.z_index)
                    .build()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use cloudviz_text::FontFamily;
    use kurbo::Size;
    use peniko::Brush;

    use super::*;
    use crate::layout::PlacedWord;
    use crate::size::SizedWord;

    fn placed(text: &str, x: f64, y: f64, rotation: f64) -> PlacedWord {
        PlacedWord {
            word: SizedWord {
                text: text.to_owned(),
                frequency: 1,
                factor: 5.5,
                font_size: 30.0,
            },
            x,
            y,
            rotation,
        }
    }

    fn output(words: Vec<PlacedWord>) -> LayoutOutput {
        LayoutOutput {
            size: Size::new(500.0, 500.0),
            font_family: FontFamily::named("Impact"),
            placed: words,
            skipped: Vec::new(),
        }
    }

    #[test]
    fn words_are_centered_rotated_and_colored_in_order() {
        let words: Vec<PlacedWord> = (0..12)
            .map(|i| placed("w", f64::from(i), -10.0, if i % 2 == 0 { 0.0 } else { 90.0 }))
            .collect();
        let marks = CloudRenderer::new(MarkId(100)).marks(&output(words));
        assert_eq!(marks.len(), 12);

        let first = marks[0].as_text().unwrap();
        assert_eq!(first.pos, Point::new(250.0, 240.0));
        assert_eq!(first.anchor, TextAnchor::Middle);
        assert_eq!(first.font_size, 30.0);
        assert_eq!(first.font_family.as_deref(), Some("Impact"));
        assert_eq!(first.fill, Brush::Solid(CATEGORY10[0]));
        assert_eq!(marks[0].id, MarkId(100));
        assert_eq!(marks[0].z_index, CLOUD_WORDS);

        assert_eq!(marks[1].as_text().unwrap().angle, 90.0);
        assert_eq!(marks[10].as_text().unwrap().fill, Brush::Solid(CATEGORY10[0]));
        assert_eq!(marks[11].as_text().unwrap().fill, Brush::Solid(CATEGORY10[1]));
    }

    #[test]
    fn empty_palette_draws_black() {
        let renderer = CloudRenderer::default().with_palette(Vec::<Color>::new());
        let marks = renderer.marks(&output(vec![placed("w", 0.0, 0.0, 0.0)]));
        assert_eq!(marks[0].as_text().unwrap().fill, Brush::Solid(Color::BLACK));
    }
}
