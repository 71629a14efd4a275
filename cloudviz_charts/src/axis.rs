// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! A single [`AxisSpec`] covers the four orientations. Geometry follows the familiar SVG axis
//! convention: ticks point away from the plot by `tick_size_inner`, the domain path has end caps
//! of `tick_size_outer`, and labels sit `tick_padding` beyond the tick ends. With `k = -1` for
//! top/left axes and `k = +1` for bottom/right axes, the domain path of a horizontal axis is
//! `M r0,k*outer V0 H r1 V k*outer` relative to the axis origin (vertical axes are the same
//! path with coordinates swapped).

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use cloudviz_core::{Mark, MarkId, TextAnchor, TextBaseline};
use cloudviz_text::{FontFamily, TextMeasurer, TextStyle};
use kurbo::{BezPath, Point, Rect, Vec2};
use peniko::Brush;
use peniko::color::palette::css;

use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleContinuous, ScaleSpec};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A paint + width pair for stroked paths (domain path, ticks, gridlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the domain path and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// CSS font family for tick labels.
    pub label_font_family: Arc<str>,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: StrokeStyle::default(),
            label_fill: Brush::Solid(css::BLACK),
            label_font_size: 10.0,
            label_font_family: Arc::from("sans-serif"),
        }
    }
}

/// Gridline styling.
///
/// Gridlines repeat each tick line across the whole plot.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::solid(css::BLACK.with_alpha(0.1), 1.0),
        }
    }
}

/// A free-standing text label attached to an axis (for example `"↑ Daily close ($)"`).
#[derive(Clone, Debug, PartialEq)]
pub struct AxisCaption {
    /// Caption text.
    pub text: String,
    /// Position relative to the axis origin (see [`AxisSpec::origin`]).
    pub offset: Vec2,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Font size.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
}

impl AxisCaption {
    /// Creates a start-anchored caption at `(dx, dy)` from the axis origin.
    pub fn new(text: impl Into<String>, dx: f64, dy: f64) -> Self {
        Self {
            text: text.into(),
            offset: Vec2::new(dx, dy),
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            font_size: 10.0,
            fill: Brush::Solid(css::BLACK),
        }
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }
}

/// Axis orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis along the top edge of the plot, ticks pointing up.
    Top,
    /// A horizontal axis along the bottom edge of the plot, ticks pointing down.
    Bottom,
    /// A vertical axis along the left edge of the plot, ticks pointing left.
    Left,
    /// A vertical axis along the right edge of the plot, ticks pointing right.
    Right,
}

impl AxisOrient {
    fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// `-1` for axes whose ticks point toward negative coordinates.
    fn k(self) -> f64 {
        match self {
            Self::Top | Self::Left => -1.0,
            Self::Bottom | Self::Right => 1.0,
        }
    }
}

/// Tick label formatter: receives the tick value and returns its label.
pub type TickFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// An axis specification.
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from this base.
    ///
    /// Offsets: domain `+0`, ticks `+1 + i`, labels `+1000 + i`, gridlines `+5000 + i`,
    /// caption `+9000`.
    pub id_base: u64,
    /// The axis scale specification.
    pub scale: ScaleSpec,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks (fractional counts are allowed, e.g. `width / 80`).
    pub tick_count: f64,
    /// Length of the tick lines.
    pub tick_size_inner: f64,
    /// Length of the end caps of the domain path.
    pub tick_size_outer: f64,
    /// Gap between the tick end and its label.
    pub tick_padding: f64,
    /// Whether to draw tick lines.
    pub ticks: bool,
    /// Whether to draw tick labels.
    pub labels: bool,
    /// Whether to draw the domain path.
    pub show_domain: bool,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional gridlines spanning the plot.
    pub grid: Option<GridStyle>,
    /// Optional caption.
    pub caption: Option<AxisCaption>,
    /// Optional tick label formatter; the scale's default format is used otherwise.
    pub tick_formatter: Option<TickFormatter>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size_inner", &self.tick_size_inner)
            .field("tick_size_outer", &self.tick_size_outer)
            .field("tick_padding", &self.tick_padding)
            .field("ticks", &self.ticks)
            .field("labels", &self.labels)
            .field("show_domain", &self.show_domain)
            .field("style", &self.style)
            .field("grid", &self.grid)
            .field("caption", &self.caption)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates a new axis specification.
    ///
    /// Defaults: 10 ticks, tick sizes 6, tick padding 3, domain path shown, no grid, no caption.
    pub fn new(id_base: u64, scale: impl Into<ScaleSpec>, orient: AxisOrient) -> Self {
        Self {
            id_base,
            scale: scale.into(),
            orient,
            tick_count: 10.0,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            ticks: true,
            labels: true,
            show_domain: true,
            style: AxisStyle::default(),
            grid: None,
            caption: None,
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `top` axis.
    pub fn top(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Top)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Convenience constructor for a `right` axis.
    pub fn right(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Right)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: f64) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set both the inner and outer tick size.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size_inner = tick_size;
        self.tick_size_outer = tick_size;
        self
    }

    /// Set the tick line length.
    pub fn with_tick_size_inner(mut self, tick_size: f64) -> Self {
        self.tick_size_inner = tick_size;
        self
    }

    /// Set the end-cap length of the domain path.
    pub fn with_tick_size_outer(mut self, tick_size: f64) -> Self {
        self.tick_size_outer = tick_size;
        self
    }

    /// Set the gap between tick ends and labels.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Enable or disable tick lines.
    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    /// Enable or disable tick labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Enable or disable the domain path.
    pub fn with_domain(mut self, domain: bool) -> Self {
        self.show_domain = domain;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Enable gridlines using the provided style.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Disable gridlines.
    pub fn without_grid(mut self) -> Self {
        self.grid = None;
        self
    }

    /// Attach a caption.
    pub fn with_caption(mut self, caption: AxisCaption) -> Self {
        self.caption = Some(caption);
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Enable or disable nice-domain behavior (linear scales only).
    pub fn with_nice_domain(mut self, nice: bool) -> Self {
        if let ScaleSpec::Linear(s) = &mut self.scale {
            s.nice = nice;
        }
        self
    }

    /// Returns the pixel range of the scale along the plot edge.
    ///
    /// Vertical axes map the domain bottom-up.
    pub fn range(&self, plot: Rect) -> (f64, f64) {
        if self.orient.is_horizontal() {
            (plot.x0, plot.x1)
        } else {
            (plot.y1, plot.y0)
        }
    }

    /// Instantiates the axis scale against `plot`.
    pub fn scale(&self, plot: Rect) -> ScaleContinuous {
        self.scale.instantiate(self.range(plot), self.tick_count)
    }

    /// Returns the axis origin: the point that captions are positioned relative to.
    ///
    /// Horizontal axes use `(0, edge)`, vertical axes `(edge, 0)`.
    pub fn origin(&self, plot: Rect) -> Point {
        match self.orient {
            AxisOrient::Top => Point::new(0.0, plot.y0),
            AxisOrient::Bottom => Point::new(0.0, plot.y1),
            AxisOrient::Left => Point::new(plot.x0, 0.0),
            AxisOrient::Right => Point::new(plot.x1, 0.0),
        }
    }

    fn edge(&self, plot: Rect) -> f64 {
        match self.orient {
            AxisOrient::Top => plot.y0,
            AxisOrient::Bottom => plot.y1,
            AxisOrient::Left => plot.x0,
            AxisOrient::Right => plot.x1,
        }
    }

    fn far_edge(&self, plot: Rect) -> f64 {
        match self.orient {
            AxisOrient::Top => plot.y1,
            AxisOrient::Bottom => plot.y0,
            AxisOrient::Left => plot.x1,
            AxisOrient::Right => plot.x0,
        }
    }

    /// Maps `(along, across)` axis coordinates into scene coordinates.
    fn point(&self, along: f64, across: f64) -> Point {
        if self.orient.is_horizontal() {
            Point::new(along, across)
        } else {
            Point::new(across, along)
        }
    }

    fn format_tick(&self, scale: &ScaleContinuous, v: f64) -> String {
        match &self.tick_formatter {
            Some(f) => f(v),
            None => scale.format_tick(v, self.tick_count),
        }
    }

    fn label_style(&self) -> TextStyle {
        TextStyle::new(self.style.label_font_size)
            .with_family(FontFamily::from_css(&self.style.label_font_family))
    }

    /// Returns the thickness the axis needs outside the plot (ticks + padding + labels).
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let tick_extent = if self.ticks {
            self.tick_size_inner.max(0.0)
        } else {
            0.0
        };
        if !self.labels {
            return tick_extent;
        }
        let scale = self.scale.instantiate((0.0, 1.0), self.tick_count);
        let style = self.label_style();
        let mut label_extent = 0.0_f64;
        for v in scale.ticks(self.tick_count) {
            let metrics = measurer.measure(&self.format_tick(&scale, v), &style);
            let extent = if self.orient.is_horizontal() {
                metrics.line_height()
            } else {
                metrics.advance_width
            };
            label_extent = label_extent.max(extent);
        }
        tick_extent + self.tick_padding.max(0.0) + label_extent
    }

    /// Generates axis marks for the given plot rectangle.
    pub fn marks(&self, plot: Rect) -> Vec<Mark> {
        let scale = self.scale(plot);
        let (r0, r1) = self.range(plot);
        let (lo, hi) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };
        let k = self.orient.k();
        let edge = self.edge(plot);
        let mut out = Vec::new();

        if self.show_domain {
            let outer = k * self.tick_size_outer;
            let mut domain = BezPath::new();
            if outer == 0.0 {
                domain.move_to(self.point(r0, edge));
                domain.line_to(self.point(r1, edge));
            } else {
                domain.move_to(self.point(r0, edge + outer));
                domain.line_to(self.point(r0, edge));
                domain.line_to(self.point(r1, edge));
                domain.line_to(self.point(r1, edge + outer));
            }
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base))
                    .path()
                    .shape(domain)
                    .z_index(z_order::AXIS_RULES)
                    .fill(peniko::Color::TRANSPARENT)
                    .stroke(self.style.rule.brush.clone())
                    .stroke_width(self.style.rule.stroke_width)
                    .build(),
            );
        }

        let (anchor, baseline) = match self.orient {
            AxisOrient::Top => (TextAnchor::Middle, TextBaseline::Alphabetic),
            AxisOrient::Bottom => (TextAnchor::Middle, TextBaseline::Hanging),
            AxisOrient::Left => (TextAnchor::End, TextBaseline::Middle),
            AxisOrient::Right => (TextAnchor::Start, TextBaseline::Middle),
        };
        let tick_end = edge + k * self.tick_size_inner;
        let label_at = edge + k * (self.tick_size_inner.max(0.0) + self.tick_padding);

        for (i, v) in scale.ticks(self.tick_count).into_iter().enumerate() {
            let pos = scale.map(v);
            if !pos.is_finite() || pos < lo - 1.0e-9 || pos > hi + 1.0e-9 {
                continue;
            }
            let i = i as u64;

            if let Some(grid) = &self.grid {
                out.push(
                    RuleMarkSpec::new(
                        MarkId::from_raw(self.id_base + 5000 + i),
                        self.point(pos, edge),
                        self.point(pos, self.far_edge(plot)),
                    )
                    .with_stroke(grid.stroke.brush.clone(), grid.stroke.stroke_width)
                    .with_z_index(z_order::GRID_LINES)
                    .mark(),
                );
            }

            if self.ticks {
                out.push(
                    RuleMarkSpec::new(
                        MarkId::from_raw(self.id_base + 1 + i),
                        self.point(pos, edge),
                        self.point(pos, tick_end),
                    )
                    .with_stroke(
                        self.style.rule.brush.clone(),
                        self.style.rule.stroke_width,
                    )
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
                );
            }

            if self.labels {
                out.push(
                    TextMarkSpec::new(
                        MarkId::from_raw(self.id_base + 1000 + i),
                        self.point(pos, label_at),
                        self.format_tick(&scale, v),
                    )
                    .with_font_size(self.style.label_font_size)
                    .with_font_family(self.style.label_font_family.clone())
                    .with_fill(self.style.label_fill.clone())
                    .with_anchor(anchor)
                    .with_baseline(baseline)
                    .with_z_index(z_order::AXIS_LABELS)
                    .mark(),
                );
            }
        }

        if let Some(caption) = &self.caption {
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + 9000),
                    self.origin(plot) + caption.offset,
                    caption.text.clone(),
                )
                .with_font_size(caption.font_size)
                .with_font_family(self.style.label_font_family.clone())
                .with_fill(caption.fill.clone())
                .with_anchor(caption.anchor)
                .with_baseline(caption.baseline)
                .with_z_index(z_order::AXIS_TITLES)
                .mark(),
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use cloudviz_core::MarkKind;
    use cloudviz_text::HeuristicTextMeasurer;
    use kurbo::PathEl;

    use super::*;
    use crate::scale::{ScaleLinearSpec, ScaleTimeSpec};
    use crate::time::utc_seconds;

    const PLOT: Rect = Rect::new(40.0, 20.0, 620.0, 370.0);

    fn labels(marks: &[Mark]) -> Vec<(String, Point, TextAnchor, TextBaseline)> {
        marks
            .iter()
            .filter(|m| (1000..2000).contains(&(m.id.0 % 10_000)))
            .filter_map(|m| m.as_text())
            .map(|t| (t.text.clone(), t.pos, t.anchor, t.baseline))
            .collect()
    }

    fn path_points(mark: &Mark) -> Vec<Point> {
        mark.as_path()
            .expect("path mark")
            .path
            .elements()
            .iter()
            .filter_map(|el| match el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn bottom_axis_labels_hang_below_ticks() {
        let axis = AxisSpec::bottom(0, ScaleLinearSpec::new((0.0, 100.0)));
        let marks = axis.marks(PLOT);
        let labels = labels(&marks);
        assert_eq!(labels.len(), 11);
        let (text, pos, anchor, baseline) = &labels[0];
        assert_eq!(text, "0");
        assert_eq!(*pos, Point::new(40.0, 379.0));
        assert_eq!(*anchor, TextAnchor::Middle);
        assert_eq!(*baseline, TextBaseline::Hanging);
        assert_eq!(labels[10].0, "100");
        assert_eq!(labels[10].1.x, 620.0);
    }

    #[test]
    fn left_axis_labels_end_before_ticks() {
        let axis = AxisSpec::left(0, ScaleLinearSpec::new((0.0, 100.0)));
        let marks = axis.marks(PLOT);
        let labels = labels(&marks);
        let (text, pos, anchor, baseline) = &labels[0];
        assert_eq!(text, "0");
        assert_eq!(*pos, Point::new(31.0, 370.0));
        assert_eq!(*anchor, TextAnchor::End);
        assert_eq!(*baseline, TextBaseline::Middle);
        assert_eq!(labels.last().unwrap().1, Point::new(31.0, 20.0));
    }

    #[test]
    fn top_axis_ticks_point_up() {
        let axis = AxisSpec::top(0, ScaleLinearSpec::new((0.0, 100.0)));
        let marks = axis.marks(PLOT);
        let tick = marks.iter().find(|m| m.id.0 == 1).expect("first tick");
        assert_eq!(path_points(tick), [Point::new(40.0, 20.0), Point::new(40.0, 14.0)]);
        assert_eq!(labels(&marks)[0].3, TextBaseline::Alphabetic);
    }

    #[test]
    fn domain_path_has_outer_end_caps() {
        let axis = AxisSpec::bottom(0, ScaleLinearSpec::new((0.0, 100.0)));
        let marks = axis.marks(PLOT);
        let domain = marks.iter().find(|m| m.id.0 == 0).expect("domain");
        assert_eq!(
            path_points(domain),
            [
                Point::new(40.0, 376.0),
                Point::new(40.0, 370.0),
                Point::new(620.0, 370.0),
                Point::new(620.0, 376.0),
            ]
        );

        let right = AxisSpec::right(0, ScaleLinearSpec::new((0.0, 100.0))).marks(PLOT);
        let domain = right.iter().find(|m| m.id.0 == 0).expect("domain");
        assert_eq!(path_points(domain)[0], Point::new(626.0, 370.0));
    }

    #[test]
    fn zero_outer_size_gives_a_plain_domain_line() {
        let axis = AxisSpec::bottom(0, ScaleLinearSpec::new((0.0, 100.0))).with_tick_size_outer(0.0);
        let marks = axis.marks(PLOT);
        let domain = marks.iter().find(|m| m.id.0 == 0).expect("domain");
        assert_eq!(
            path_points(domain),
            [Point::new(40.0, 370.0), Point::new(620.0, 370.0)]
        );
    }

    #[test]
    fn domain_can_be_removed() {
        let axis = AxisSpec::left(0, ScaleLinearSpec::new((0.0, 100.0))).with_domain(false);
        let marks = axis.marks(PLOT);
        assert!(marks.iter().all(|m| m.id.0 != 0));
        assert!(marks.iter().any(|m| m.kind() == MarkKind::Path));
    }

    #[test]
    fn gridlines_span_the_plot_faintly() {
        let axis =
            AxisSpec::left(0, ScaleLinearSpec::new((0.0, 100.0))).with_grid(GridStyle::default());
        let marks = axis.marks(PLOT);
        let grid: Vec<&Mark> = marks
            .iter()
            .filter(|m| m.z_index == z_order::GRID_LINES)
            .collect();
        assert_eq!(grid.len(), 11);
        for m in grid {
            let pts = path_points(m);
            assert_eq!(pts[0].x, PLOT.x0);
            assert_eq!(pts[1].x, PLOT.x1);
            let Brush::Solid(c) = &m.as_path().unwrap().stroke else {
                panic!("expected a solid stroke");
            };
            assert!((c.components[3] - 0.1).abs() < 1e-6);
        }
    }

    #[test]
    fn caption_is_positioned_from_the_axis_origin() {
        let axis = AxisSpec::left(0, ScaleLinearSpec::new((0.0, 100.0)))
            .with_caption(AxisCaption::new("↑ Daily close ($)", -40.0, 10.0));
        let marks = axis.marks(PLOT);
        let caption = marks
            .iter()
            .find(|m| m.id.0 == 9000)
            .and_then(|m| m.as_text())
            .expect("caption");
        assert_eq!(caption.pos, Point::new(0.0, 10.0));
        assert_eq!(caption.anchor, TextAnchor::Start);
        assert_eq!(caption.text, "↑ Daily close ($)");
    }

    #[test]
    fn time_axis_uses_calendar_labels() {
        let domain = (
            utc_seconds(2023, 1, 1).unwrap(),
            utc_seconds(2024, 1, 1).unwrap(),
        );
        let marks = AxisSpec::bottom(0, ScaleTimeSpec::new(domain)).marks(PLOT);
        let labels: Vec<String> = labels(&marks).into_iter().map(|l| l.0).collect();
        assert_eq!(labels.first().map(String::as_str), Some("2023"));
        assert_eq!(labels.get(1).map(String::as_str), Some("February"));
        assert_eq!(labels.last().map(String::as_str), Some("2024"));
    }

    #[test]
    fn custom_formatter_replaces_default_labels() {
        let axis = AxisSpec::bottom(0, ScaleLinearSpec::new((0.0, 10.0)))
            .with_tick_count(2.0)
            .with_tick_formatter(|v| alloc::format!("{v}%"));
        let labels: Vec<String> = labels(&axis.marks(PLOT)).into_iter().map(|l| l.0).collect();
        assert_eq!(labels, ["0%", "5%", "10%"]);
    }

    #[test]
    fn measure_respects_toggles() {
        let measurer = HeuristicTextMeasurer;
        let axis = AxisSpec::left(0, ScaleLinearSpec::new((0.0, 1000.0)));
        let full = axis.measure(&measurer);
        let no_labels = axis.clone().with_labels(false).measure(&measurer);
        let nothing = axis.clone().with_labels(false).with_ticks(false).measure(&measurer);
        assert!(full > no_labels);
        assert_eq!(no_labels, 6.0);
        assert_eq!(nothing, 0.0);
    }
}
