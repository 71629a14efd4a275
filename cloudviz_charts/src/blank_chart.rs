// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An empty chart frame: a UTC time x-axis and a linear y-axis with no data.

extern crate alloc;

use alloc::vec::Vec;

use cloudviz_core::Mark;

use crate::axis::AxisSpec;
use crate::layout::{ChartLayout, Margins, Size};
use crate::scale::{ScaleLinear, ScaleLinearSpec, ScaleTime, ScaleTimeSpec};

/// 2023-01-01T00:00:00Z.
const YEAR_2023_START: f64 = 1_672_531_200.0;
/// 2024-01-01T00:00:00Z.
const YEAR_2024_START: f64 = 1_704_067_200.0;

/// A blank chart scaffold.
///
/// Defaults to a 640×400 view with margins 20/20/30/40 (top/right/bottom/left), an x domain
/// covering calendar year 2023 and a y domain of `[0, 100]`.
#[derive(Clone, Debug, PartialEq)]
pub struct BlankChartSpec {
    /// Stable-id base; the x-axis uses `id_base` and the y-axis `id_base + 10_000`.
    pub id_base: u64,
    /// View size.
    pub size: Size,
    /// Plot margins.
    pub margins: Margins,
    /// X domain in UTC seconds.
    pub x_domain: (f64, f64),
    /// Y domain.
    pub y_domain: (f64, f64),
    /// Approximate x tick count.
    pub x_tick_count: f64,
    /// Approximate y tick count.
    pub y_tick_count: f64,
}

impl Default for BlankChartSpec {
    fn default() -> Self {
        Self {
            id_base: 0,
            size: Size::new(640.0, 400.0),
            margins: Margins::new(20.0, 20.0, 30.0, 40.0),
            x_domain: (YEAR_2023_START, YEAR_2024_START),
            y_domain: (0.0, 100.0),
            x_tick_count: 10.0,
            y_tick_count: 10.0,
        }
    }
}

impl BlankChartSpec {
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

    /// Sets the x domain (UTC seconds).
    pub fn with_x_domain(mut self, domain: (f64, f64)) -> Self {
        self.x_domain = domain;
        self
    }

    /// Sets the y domain.
    pub fn with_y_domain(mut self, domain: (f64, f64)) -> Self {
        self.y_domain = domain;
        self
    }

    /// Computes the fixed-size layout.
    pub fn layout(&self) -> ChartLayout {
        ChartLayout::fixed(self.size, self.margins)
    }

    /// The bottom time axis.
    pub fn x_axis(&self) -> AxisSpec {
        AxisSpec::bottom(self.id_base, ScaleTimeSpec::new(self.x_domain))
            .with_tick_count(self.x_tick_count)
    }

    /// The left linear axis.
    pub fn y_axis(&self) -> AxisSpec {
        AxisSpec::left(self.id_base + 10_000, ScaleLinearSpec::new(self.y_domain))
            .with_tick_count(self.y_tick_count)
    }

    /// The x scale for `layout`.
    pub fn x_scale(&self, layout: &ChartLayout) -> ScaleTime {
        ScaleTime::new(self.x_domain, (layout.plot.x0, layout.plot.x1))
    }

    /// The y scale for `layout`.
    pub fn y_scale(&self, layout: &ChartLayout) -> ScaleLinear {
        ScaleLinear::new(self.y_domain, (layout.plot.y1, layout.plot.y0))
    }

    /// Generates axis marks using the fixed-size layout.
    pub fn marks(&self) -> Vec<Mark> {
        self.marks_in(&self.layout())
    }

    /// Generates axis marks for an explicit layout (for example one from [`ChartLayout::fit`]).
    pub fn marks_in(&self, layout: &ChartLayout) -> Vec<Mark> {
        let mut out = self.x_axis().marks(layout.plot);
        out.extend(self.y_axis().marks(layout.plot));
        out
    }
}
