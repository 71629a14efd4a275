// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart frame layout: a view rectangle and a plot rectangle inset by margins.
//!
//! Charts either use fixed pixel dimensions ([`ChartLayout::fixed`]) or take the size of the
//! container they are shown in ([`ChartLayout::fit`]).

use kurbo::Rect;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_usable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Space reserved around the plot for axes and captions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Margins {
    /// Creates margins in CSS order: top, right, bottom, left.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Output of the layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds, anchored at the origin.
    pub view: Rect,
    /// The plot rectangle (view inset by margins).
    pub plot: Rect,
    /// The margins used.
    pub margins: Margins,
}

impl ChartLayout {
    /// Lays out a chart with fixed pixel dimensions.
    ///
    /// Margins larger than the view collapse the plot to zero size instead of inverting it.
    pub fn fixed(size: Size, margins: Margins) -> Self {
        let width = size.width.max(0.0);
        let height = size.height.max(0.0);
        let view = Rect::new(0.0, 0.0, width, height);
        let x0 = margins.left.min(width);
        let y0 = margins.top.min(height);
        let plot = Rect::new(
            x0,
            y0,
            (width - margins.right).max(x0),
            (height - margins.bottom).max(y0),
        );
        Self {
            view,
            plot,
            margins,
        }
    }

    /// Lays out a chart that fills an observed container.
    ///
    /// A container size that is zero, negative, or non-finite (not yet measured) falls back to
    /// `fallback`.
    pub fn fit(container: Size, fallback: Size, margins: Margins) -> Self {
        let size = if container.is_usable() {
            container
        } else {
            fallback
        };
        Self::fixed(size, margins)
    }

    /// Returns the view size.
    pub fn size(&self) -> Size {
        Size::new(self.view.width(), self.view.height())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn fixed_layout_insets_plot_by_margins() {
        let layout = ChartLayout::fixed(Size::new(640.0, 400.0), Margins::new(20.0, 20.0, 30.0, 40.0));
        assert_eq!(layout.view, Rect::new(0.0, 0.0, 640.0, 400.0));
        assert_eq!(layout.plot, Rect::new(40.0, 20.0, 620.0, 370.0));
    }

    #[test]
    fn oversized_margins_collapse_the_plot() {
        let layout = ChartLayout::fixed(Size::new(50.0, 40.0), Margins::new(20.0, 20.0, 30.0, 40.0));
        assert_eq!(layout.plot.width(), 0.0);
        assert_eq!(layout.plot.height(), 0.0);
    }

    #[test]
    fn fit_uses_container_when_measured() {
        let margins = Margins::new(20.0, 30.0, 30.0, 40.0);
        let fallback = Size::new(928.0, 500.0);
        let fitted = ChartLayout::fit(Size::new(1200.0, 600.0), fallback, margins);
        assert_eq!(fitted.size(), Size::new(1200.0, 600.0));
        let unmeasured = ChartLayout::fit(Size::new(0.0, 0.0), fallback, margins);
        assert_eq!(unmeasured.size(), fallback);
    }
}
