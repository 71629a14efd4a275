// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A daily-close area chart.
//!
//! The x-axis is a UTC time scale over the extent of the series; the y-axis is linear over
//! `[0, max]`. The area is filled down to `y(0)`.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use cloudviz_core::{Mark, MarkId, TextAnchor, TextBaseline};
use peniko::Brush;
use peniko::color::palette::css;

use crate::area_mark::AreaMarkSpec;
use crate::axis::{AxisCaption, AxisSpec, GridStyle};
use crate::layout::{ChartLayout, Margins, Size};
use crate::scale::{
    ScaleContinuous, ScaleLinear, ScaleLinearSpec, ScaleTime, ScaleTimeSpec, extent,
};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// Whether the chart has data to draw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ChartStatus {
    /// Draw the series.
    #[default]
    Ready,
    /// Loading failed; draw this message instead of the series.
    Failed(String),
}

/// An area chart of `(utc_seconds, value)` points.
#[derive(Clone, Debug)]
pub struct AreaChartSpec {
    /// Stable-id base. The area uses `id_base`, the axes `+10_000` and `+20_000`, and the
    /// status message `+30_000`.
    pub id_base: u64,
    /// View size.
    pub size: Size,
    /// Plot margins.
    pub margins: Margins,
    /// Series points, `(utc_seconds, value)`, in date order.
    pub points: Arc<[(f64, f64)]>,
    /// Area fill.
    pub fill: Brush,
    /// Caption drawn above the y-axis.
    pub caption: String,
    /// Data status.
    pub status: ChartStatus,
}

impl AreaChartSpec {
    /// Creates a 928×500 chart over `points` with margins 20/30/30/40 (top/right/bottom/left).
    pub fn new(points: impl Into<Arc<[(f64, f64)]>>) -> Self {
        Self {
            id_base: 0,
            size: Size::new(928.0, 500.0),
            margins: Margins::new(20.0, 30.0, 30.0, 40.0),
            points: points.into(),
            fill: Brush::Solid(css::STEEL_BLUE),
            caption: String::from("↑ Daily close ($)"),
            status: ChartStatus::Ready,
        }
    }

    /// Creates a chart that shows `message` instead of a series.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(Vec::<(f64, f64)>::new()).with_status(ChartStatus::Failed(message.into()))
    }

    /// Sets the stable-id base.
    pub fn with_id_base(mut self, id_base: u64) -> Self {
        self.id_base = id_base;
        self
    }

    /// Sets the view size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the plot margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the area fill.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the y-axis caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Sets the data status.
    pub fn with_status(mut self, status: ChartStatus) -> Self {
        self.status = status;
        self
    }

    /// Computes the fixed-size layout.
    pub fn layout(&self) -> ChartLayout {
        ChartLayout::fixed(self.size, self.margins)
    }

    /// The x domain: the extent of the series dates, if any.
    pub fn x_domain(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|p| p.0))
    }

    /// The y domain: `[0, max value]`, if the series has values.
    pub fn y_domain(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|p| p.1)).map(|(_, max)| (0.0, max))
    }

    /// The bottom time axis: about one tick per 80px, no outer end caps.
    pub fn x_axis(&self, layout: &ChartLayout) -> AxisSpec {
        let axis = AxisSpec::bottom(
            self.id_base + 10_000,
            ScaleTimeSpec::new(self.x_domain().unwrap_or((0.0, 0.0))),
        )
        .with_tick_count(layout.view.width() / 80.0)
        .with_tick_size_outer(0.0);
        if self.x_domain().is_some() {
            axis
        } else {
            axis.with_ticks(false).with_labels(false)
        }
    }

    /// The left linear axis: about one tick per 40px, gridlines, no domain path, and a caption.
    pub fn y_axis(&self, layout: &ChartLayout) -> AxisSpec {
        let caption = AxisCaption::new(self.caption.clone(), -self.margins.left, 10.0)
            .with_anchor(TextAnchor::Start);
        let axis = AxisSpec::left(
            self.id_base + 20_000,
            ScaleLinearSpec::new(self.y_domain().unwrap_or((0.0, 0.0))),
        )
        .with_tick_count(layout.view.height() / 40.0)
        .with_domain(false)
        .with_caption(caption);
        if self.y_domain().is_some() {
            axis.with_grid(GridStyle::default())
        } else {
            axis.with_ticks(false).with_labels(false)
        }
    }

    /// The x scale for `layout`.
    pub fn x_scale(&self, layout: &ChartLayout) -> ScaleTime {
        ScaleTime::new(
            self.x_domain().unwrap_or((0.0, 0.0)),
            (layout.plot.x0, layout.plot.x1),
        )
    }

    /// The y scale for `layout`.
    pub fn y_scale(&self, layout: &ChartLayout) -> ScaleLinear {
        ScaleLinear::new(
            self.y_domain().unwrap_or((0.0, 0.0)),
            (layout.plot.y1, layout.plot.y0),
        )
    }

    /// Generates marks using the fixed-size layout.
    pub fn marks(&self) -> Vec<Mark> {
        self.marks_in(&self.layout())
    }

    /// Generates marks for an explicit layout.
    ///
    /// A failed chart yields only the status message.
    pub fn marks_in(&self, layout: &ChartLayout) -> Vec<Mark> {
        if let ChartStatus::Failed(message) = &self.status {
            return alloc::vec![self.status_mark(layout, message)];
        }

        let area = AreaMarkSpec::new(
            self.id_base,
            self.points.clone(),
            ScaleContinuous::Time(self.x_scale(layout)),
            ScaleContinuous::Linear(self.y_scale(layout)),
        )
        .with_fill(self.fill.clone());

        let mut out = Vec::new();
        if !self.points.is_empty() {
            out.extend(area.marks());
        }
        out.extend(self.x_axis(layout).marks(layout.plot));
        out.extend(self.y_axis(layout).marks(layout.plot));
        out
    }

    fn status_mark(&self, layout: &ChartLayout, message: &str) -> Mark {
        TextMarkSpec::new(
            MarkId::from_raw(self.id_base + 30_000),
            layout.view.center(),
            message,
        )
        .with_font_size(12.0)
        .with_font_family("sans-serif")
        .with_anchor(TextAnchor::Middle)
        .with_baseline(TextBaseline::Middle)
        .with_z_index(z_order::STATUS)
        .mark()
    }
}
