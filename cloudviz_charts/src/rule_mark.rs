// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A rule is a straight stroked segment: axis ticks, gridlines, baselines.

use cloudviz_core::{Mark, MarkId};
use kurbo::{BezPath, Point};
use peniko::{Brush, Color};

use crate::z_order;

/// A rule mark spec (a stroked line segment).
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Start point in scene coordinates.
    pub from: Point,
    /// End point in scene coordinates.
    pub to: Point,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// Creates a new rule between two points.
    pub fn new(id: MarkId, from: impl Into<Point>, to: impl Into<Point>) -> Self {
        Self {
            id,
            from: from.into(),
            to: to.into(),
            stroke: Brush::Solid(Color::BLACK),
            stroke_width: 1.0,
            z_index: z_order::SERIES_STROKE,
        }
    }

    /// Creates a horizontal rule at `y` from `x0` to `x1`.
    pub fn horizontal(id: MarkId, y: f64, x0: f64, x1: f64) -> Self {
        Self::new(id, (x0, y), (x1, y))
    }

    /// Creates a vertical rule at `x` from `y0` to `y1`.
    pub fn vertical(id: MarkId, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(id, (x, y0), (x, y1))
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the rule mark.
    pub fn mark(&self) -> Mark {
        let mut p = BezPath::new();
        p.move_to(self.from);
        p.line_to(self.to);
        Mark::builder(self.id)
            .path()
            .shape(p)
            .z_index(self.z_index)
            .fill(Color::TRANSPARENT)
            .stroke(self.stroke.clone())
            .stroke_width(self.stroke_width)
            .build()
    }
}
