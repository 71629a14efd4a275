// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous scales.
//!
//! A scale spec carries a domain and options; instantiating it with a pixel range yields a
//! concrete scale. Tick generation follows the usual 1-2-5 "nice number" progression and never
//! returns ticks outside the domain.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::format::format_tick_with_step;
use crate::time;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = core::f64::consts::SQRT_2;

const MAX_TICKS: f64 = 10_000.0;

/// A scale specification (domain + options, no range yet).
#[derive(Clone, Copy, Debug)]
pub enum ScaleSpec {
    /// Continuous linear scale.
    Linear(ScaleLinearSpec),
    /// UTC time scale over seconds since the epoch.
    Time(ScaleTimeSpec),
}

impl ScaleSpec {
    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64), tick_count: f64) -> ScaleContinuous {
        match self {
            Self::Linear(s) => ScaleContinuous::Linear(s.instantiate_resolved(range, tick_count)),
            Self::Time(s) => ScaleContinuous::Time(s.instantiate(range)),
        }
    }
}

impl From<ScaleLinearSpec> for ScaleSpec {
    fn from(value: ScaleLinearSpec) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleTimeSpec> for ScaleSpec {
    fn from(value: ScaleTimeSpec) -> Self {
        Self::Time(value)
    }
}

/// A continuous scale instance.
#[derive(Clone, Copy, Debug)]
pub enum ScaleContinuous {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Time scale.
    Time(ScaleTime),
}

impl ScaleContinuous {
    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Time(s) => s.map(x),
        }
    }

    /// Returns tick values for roughly `count` ticks.
    pub fn ticks(&self, count: f64) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Time(s) => s.ticks(count),
        }
    }

    /// Formats a tick value produced by [`Self::ticks`] with the same `count`.
    pub fn format_tick(&self, value: f64, count: f64) -> String {
        match self {
            Self::Linear(s) => format_tick_with_step(value, s.tick_step(count)),
            Self::Time(_) => time::format_utc_tick(value),
        }
    }

    /// Returns the output range.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.range(),
            Self::Time(s) => s.range(),
        }
    }
}

impl From<ScaleLinear> for ScaleContinuous {
    fn from(value: ScaleLinear) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleTime> for ScaleContinuous {
    fn from(value: ScaleTime) -> Self {
        Self::Time(value)
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A degenerate domain maps everything to the midpoint of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return (r0 + r1) * 0.5;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a range value back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return (d0 + d1) * 0.5;
        }
        d0 + (y - r0) / denom * (d1 - d0)
    }

    /// Returns the domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns tick values for roughly `count` ticks, all inside the domain.
    pub fn ticks(&self, count: f64) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }

    /// Spacing between the ticks returned by [`Self::ticks`].
    pub fn tick_step(&self, count: f64) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }

    /// Returns a copy whose domain is extended to round tick values.
    #[must_use]
    pub fn nice(&self, count: f64) -> Self {
        Self::new(nice_domain(self.domain, count), self.range)
    }
}

/// Specification for a linear scale (domain + options, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Whether to "nice" the domain based on tick generation.
    pub nice: bool,
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
        }
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Returns the effective domain after applying `nice` (if enabled).
    pub fn resolved_domain(&self, tick_count: f64) -> (f64, f64) {
        if self.nice {
            nice_domain(self.domain, tick_count)
        } else {
            self.domain
        }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }

    /// Instantiates a concrete scale using the `resolved_domain` (respecting `nice`).
    pub fn instantiate_resolved(&self, range: (f64, f64), tick_count: f64) -> ScaleLinear {
        ScaleLinear::new(self.resolved_domain(tick_count), range)
    }
}

/// A UTC time scale: a linear mapping over seconds since the epoch with calendar ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTime {
    inner: ScaleLinear,
}

impl ScaleTime {
    /// Creates a new time scale; `domain` is in UTC seconds.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            inner: ScaleLinear::new(domain, range),
        }
    }

    /// Maps a timestamp into range space.
    pub fn map(&self, t: f64) -> f64 {
        self.inner.map(t)
    }

    /// Maps a range value back into a timestamp.
    pub fn invert(&self, y: f64) -> f64 {
        self.inner.invert(y)
    }

    /// Returns calendar-aligned tick timestamps.
    pub fn ticks(&self, count: f64) -> Vec<f64> {
        let (d0, d1) = self.inner.domain();
        time::utc_ticks(d0, d1, count)
    }

    /// Returns the domain in UTC seconds.
    pub fn domain(&self) -> (f64, f64) {
        self.inner.domain()
    }

    /// Returns the range.
    pub fn range(&self) -> (f64, f64) {
        self.inner.range()
    }
}

/// Specification for a time scale (domain, no range yet).
#[derive(Clone, Copy, Debug)]
pub struct ScaleTimeSpec {
    /// Domain in UTC seconds.
    pub domain: (f64, f64),
}

impl ScaleTimeSpec {
    /// Creates a new time scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleTime {
        ScaleTime::new(self.domain, range)
    }
}

/// Integer tick bounds and increment; a negative increment means "divide by `-inc`".
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / pow10(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = pow10(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        inc = pow10(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

fn pow10(power: f64) -> f64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "decimal exponents of finite f64 values fit in i32"
    )]
    let p = power.clamp(-400.0, 400.0) as i32;
    10_f64.powi(p)
}

fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count).2
}

/// Returns the signed distance between adjacent ticks for `count` ticks over `[start, stop]`.
pub(crate) fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reverse = stop < start;
    let inc = if reverse {
        tick_increment(stop, start, count)
    } else {
        tick_increment(start, stop, count)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}

/// Returns round tick values inside `[start, stop]`, in the same direction as the inputs.
pub(crate) fn linear_ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return alloc::vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count);
    if !(i2 >= i1) || !inc.is_finite() || inc == 0.0 {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0).min(MAX_TICKS);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "positive and capped at 10k"
    )]
    let n = n as usize;
    let value = |k: f64| if inc < 0.0 { k / -inc } else { k * inc };
    let mut out: Vec<f64> = (0..n).map(|i| value(i1 + i as f64)).collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Extends `domain` outward until its ends are multiples of the tick step.
pub fn nice_domain(domain: (f64, f64), count: f64) -> (f64, f64) {
    let (d0, d1) = domain;
    if !d0.is_finite() || !d1.is_finite() || d0 == d1 || !(count > 0.0) {
        return domain;
    }
    let reverse = d1 < d0;
    let (mut start, mut stop) = if reverse { (d1, d0) } else { (d0, d1) };
    let mut prestep = f64::NAN;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if step == prestep {
            break;
        } else if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            start = (start * step).ceil() / step;
            stop = (stop * step).floor() / step;
        } else {
            break;
        }
        prestep = step;
    }
    if reverse { (stop, start) } else { (start, stop) }
}

/// Returns the `(min, max)` of the finite values, or `None` if there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn linear_maps_endpoints_onto_flipped_range() {
        let y = ScaleLinear::new((0.0, 100.0), (370.0, 20.0));
        assert_eq!(y.map(0.0), 370.0);
        assert_eq!(y.map(100.0), 20.0);
        assert_eq!(y.map(50.0), 195.0);
        assert!((y.invert(195.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_range_midpoint() {
        let s = ScaleLinear::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(s.map(5.0), 50.0);
    }

    #[test]
    fn ticks_follow_nice_steps() {
        assert_eq!(
            linear_ticks(0.0, 100.0, 10.0),
            vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
        );
        assert_eq!(linear_ticks(0.0, 1.0, 5.0), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(linear_ticks(0.0, 100.0, 8.75), linear_ticks(0.0, 100.0, 10.0));
    }

    #[test]
    fn ticks_stay_inside_domain() {
        let ticks = linear_ticks(3.0, 97.0, 10.0);
        assert_eq!(ticks.first(), Some(&10.0));
        assert_eq!(ticks.last(), Some(&90.0));
        assert_eq!(linear_ticks(1.0, 1.0, 10.0), vec![1.0]);
        assert!(linear_ticks(0.0, 1.0, 0.0).is_empty());
    }

    #[test]
    fn reversed_ticks_descend() {
        assert_eq!(linear_ticks(10.0, 0.0, 2.0), vec![10.0, 5.0, 0.0]);
        assert_eq!(tick_step(10.0, 0.0, 2.0), -5.0);
    }

    #[test]
    fn nice_extends_domain_to_step_multiples() {
        assert_eq!(nice_domain((0.0, 96.7), 10.0), (0.0, 100.0));
        assert_eq!(nice_domain((1.1, 10.9), 10.0), (1.0, 11.0));
        assert_eq!(nice_domain((5.0, 5.0), 10.0), (5.0, 5.0));
    }

    #[test]
    fn linear_tick_labels_use_step_precision() {
        let s = ScaleContinuous::Linear(ScaleLinear::new((0.0, 1.0), (0.0, 100.0)));
        let labels: std::vec::Vec<String> =
            s.ticks(5.0).iter().map(|&v| s.format_tick(v, 5.0)).collect();
        assert_eq!(labels, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
    }

    #[test]
    fn extent_ignores_non_finite_values() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(extent([f64::INFINITY]), None);
    }
}
