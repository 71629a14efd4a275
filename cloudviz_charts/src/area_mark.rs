// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area mark generation.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use cloudviz_core::{Mark, MarkId};
use kurbo::BezPath;
use peniko::{Brush, Color};

use crate::axis::StrokeStyle;
use crate::scale::ScaleContinuous;

/// A filled area between a series and a constant baseline.
///
/// This generates:
/// - one filled path mark for the area, and
/// - optionally one stroked path mark for the top outline.
///
/// Points are `(x, y)` in data units, drawn in the order given.
#[derive(Clone, Debug)]
pub struct AreaMarkSpec {
    /// Stable-id base for marks emitted by this mark.
    pub id_base: u64,
    /// Series points in data units.
    pub points: Arc<[(f64, f64)]>,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleContinuous,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleContinuous,
    /// Baseline in data units (typically `0.0`).
    pub baseline: f64,
    /// Fill paint for the area.
    pub fill: Brush,
    /// Optional stroke for the outline.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint for the filled area.
    pub z_index: i32,
}

impl AreaMarkSpec {
    /// Creates an area mark with a baseline at `0` and a black fill.
    pub fn new(
        id_base: u64,
        points: impl Into<Arc<[(f64, f64)]>>,
        x_scale: ScaleContinuous,
        y_scale: ScaleContinuous,
    ) -> Self {
        Self {
            id_base,
            points: points.into(),
            x_scale,
            y_scale,
            baseline: 0.0,
            fill: Brush::Solid(Color::BLACK),
            stroke: None,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the baseline in data units.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the z-index used for render ordering.
    ///
    /// The optional outline is drawn above the fill.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Returns the closed area outline in scene coordinates.
    ///
    /// Non-finite points are skipped. Fewer than one finite point yields an empty path.
    pub fn area_path(&self) -> BezPath {
        let y0 = self.y_scale.map(self.baseline);
        let mut p = BezPath::new();
        let mut first_x = None;
        let mut last_x = 0.0;
        for (x, y) in self.scaled() {
            if first_x.is_none() {
                p.move_to((x, y0));
                first_x = Some(x);
            }
            p.line_to((x, y));
            last_x = x;
        }
        if first_x.is_some() {
            p.line_to((last_x, y0));
            p.close_path();
        }
        p
    }

    /// Returns the open top outline in scene coordinates.
    pub fn line_path(&self) -> BezPath {
        let mut p = BezPath::new();
        for (i, pt) in self.scaled().enumerate() {
            if i == 0 {
                p.move_to(pt);
            } else {
                p.line_to(pt);
            }
        }
        p
    }

    fn scaled(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points
            .iter()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .map(|&(x, y)| (self.x_scale.map(x), self.y_scale.map(y)))
    }

    /// Generates marks for this area.
    pub fn marks(&self) -> Vec<Mark> {
        let area = Mark::builder(MarkId::from_raw(self.id_base))
            .path()
            .z_index(self.z_index)
            .shape(self.area_path())
            .fill(self.fill.clone())
            .stroke_width(0.0)
            .build();

        let mut out = alloc::vec![area];

        if let Some(stroke) = &self.stroke {
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + 1))
                    .path()
                    .z_index(self.z_index.saturating_add(crate::z_order::SERIES_STROKE))
                    .shape(self.line_path())
                    .fill(Color::TRANSPARENT)
                    .stroke(stroke.brush.clone())
                    .stroke_width(stroke.stroke_width)
                    .build(),
            );
        }

        out
    }
}
