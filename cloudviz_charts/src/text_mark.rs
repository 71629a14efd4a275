// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

use cloudviz_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::Point;
use peniko::{Brush, Color};

/// A text mark spec.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// CSS font family; `None` inherits the renderer default.
    pub font_family: Option<Arc<str>>,
    /// Rotation in degrees, about `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TextMarkSpec {
    /// Creates a new text mark spec with default styling.
    pub fn new(id: MarkId, pos: impl Into<Point>, text: impl Into<String>) -> Self {
        Self {
            id,
            pos: pos.into(),
            text: text.into(),
            font_size: 10.0,
            font_family: None,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill: Brush::Solid(Color::BLACK),
            z_index: crate::z_order::AXIS_TITLES,
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the CSS font family.
    pub fn with_font_family(mut self, family: impl Into<Arc<str>>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the rotation angle (degrees).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the mark.
    pub fn mark(&self) -> Mark {
        let mut b = Mark::builder(self.id)
            .text()
            .z_index(self.z_index)
            .x(self.pos.x)
            .y(self.pos.y)
            .content(self.text.clone())
            .font_size(self.font_size)
            .fill(self.fill.clone())
            .anchor(self.anchor)
            .baseline(self.baseline)
            .angle(self.angle);
        if let Some(family) = &self.font_family {
            b = b.font_family(family.clone());
        }
        b.build()
    }
}
