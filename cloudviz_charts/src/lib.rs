// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks that generate [`cloudviz_core::Mark`]s.
//!
//! - **Scales** map data values into screen coordinates: linear scales with 1-2-5 ticks and
//!   UTC time scales with calendar ticks.
//! - **Axes** turn a scale into tick lines, labels, a domain path, gridlines and a caption.
//! - **Charts** ([`BlankChartSpec`], [`AreaChartSpec`]) compose a layout, scales, axes and
//!   series marks.
//!
//! Everything here is a pure function of its inputs: rendering the same spec twice yields the
//! same marks, with the same ids.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod area_chart;
mod area_mark;
mod axis;
mod blank_chart;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod rule_mark;
mod scale;
mod text_mark;
mod time;
mod z_order;

pub use area_chart::{AreaChartSpec, ChartStatus};
pub use area_mark::AreaMarkSpec;
pub use axis::{
    AxisCaption, AxisOrient, AxisSpec, AxisStyle, GridStyle, StrokeStyle, TickFormatter,
};
pub use blank_chart::BlankChartSpec;
pub use format::format_tick_with_step;
pub use layout::{ChartLayout, Margins, Size};
pub use rule_mark::RuleMarkSpec;
pub use scale::{
    ScaleContinuous, ScaleLinear, ScaleLinearSpec, ScaleSpec, ScaleTime, ScaleTimeSpec,
    extent, nice_domain,
};
pub use text_mark::TextMarkSpec;
pub use time::{TimeInterval, TimeUnit, format_utc_tick, utc_seconds, utc_tick_interval, utc_ticks};
pub use z_order::*;
