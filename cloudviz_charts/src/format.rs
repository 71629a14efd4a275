// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric tick label formatting.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Number of fractional digits needed to distinguish ticks spaced `step` apart.
pub(crate) fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    let exponent = step.log10().floor();
    if exponent >= 0.0 {
        0
    } else {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "negative exponent of a finite step, capped at 20 digits"
        )]
        {
            (-exponent).min(20.0) as usize
        }
    }
}

/// Formats a tick value with fixed precision derived from the tick step, and comma-grouped
/// integer digits (`1,000`, `2.5`, `-0.25`).
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let precision = precision_for_step(step);
    let raw = alloc::format!("{:.*}", precision, v.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let is_zero = raw.bytes().all(|b| b == b'0' || b == b'.');
    let mut out = String::with_capacity(raw.len() + raw.len() / 3 + 1);
    if v < 0.0 && !is_zero {
        out.push('-');
    }
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
