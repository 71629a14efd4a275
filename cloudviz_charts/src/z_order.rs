// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for generated marks.
//!
//! Every mark carries an explicit `z_index`; renderers sort by `(z_index, MarkId)`. The chart
//! and cloud builders use these values so callers never hand-tune paint order.

/// Plot background fills.
pub const PLOT_BACKGROUND: i32 = -100;
/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Filled series marks (areas).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (outlines, rules).
pub const SERIES_STROKE: i32 = 10;

/// Axis domain path and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis captions.
pub const AXIS_TITLES: i32 = 50;

/// Word-cloud text marks.
pub const CLOUD_WORDS: i32 = 60;

/// Status messages (load failures) drawn above everything else.
pub const STATUS: i32 = 90;
