// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! UTC calendar ticks and multi-scale tick labels.
//!
//! Time is modeled as **UTC seconds since the Unix epoch** (`f64`). Tick generation picks the
//! calendar interval (seconds up to years) whose duration is closest to `span / count`, then
//! enumerates interval boundaries inside the domain. Labels use the coarsest calendar field
//! that distinguishes the tick: `2023`, `April`, `Apr 09`, `Tue 04`, `03 PM`, `03:15`, `:30`.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::scale::{linear_ticks, tick_step};

const SECOND: f64 = 1.0;
const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const WEEK: f64 = 7.0 * DAY;
const MONTH: f64 = 30.0 * DAY;
const YEAR: f64 = 365.0 * DAY;

const MAX_TICKS: usize = 10_000;

/// Calendar unit of a tick interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Whole seconds.
    Second,
    /// Whole minutes.
    Minute,
    /// Whole hours.
    Hour,
    /// Midnight UTC.
    Day,
    /// Sunday midnight UTC.
    Week,
    /// First day of a month.
    Month,
    /// January 1st.
    Year,
}

/// A calendar interval: every `step`-th boundary of `unit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    /// Calendar unit.
    pub unit: TimeUnit,
    /// Boundary stride (for example `3` months for quarters).
    pub step: u32,
}

impl TimeInterval {
    const fn new(unit: TimeUnit, step: u32) -> Self {
        Self { unit, step }
    }

    fn approx_duration(self) -> f64 {
        let unit = match self.unit {
            TimeUnit::Second => SECOND,
            TimeUnit::Minute => MINUTE,
            TimeUnit::Hour => HOUR,
            TimeUnit::Day => DAY,
            TimeUnit::Week => WEEK,
            TimeUnit::Month => MONTH,
            TimeUnit::Year => YEAR,
        };
        unit * f64::from(self.step)
    }
}

const TICK_INTERVALS: [TimeInterval; 18] = [
    TimeInterval::new(TimeUnit::Second, 1),
    TimeInterval::new(TimeUnit::Second, 5),
    TimeInterval::new(TimeUnit::Second, 15),
    TimeInterval::new(TimeUnit::Second, 30),
    TimeInterval::new(TimeUnit::Minute, 1),
    TimeInterval::new(TimeUnit::Minute, 5),
    TimeInterval::new(TimeUnit::Minute, 15),
    TimeInterval::new(TimeUnit::Minute, 30),
    TimeInterval::new(TimeUnit::Hour, 1),
    TimeInterval::new(TimeUnit::Hour, 3),
    TimeInterval::new(TimeUnit::Hour, 6),
    TimeInterval::new(TimeUnit::Hour, 12),
    TimeInterval::new(TimeUnit::Day, 1),
    TimeInterval::new(TimeUnit::Day, 2),
    TimeInterval::new(TimeUnit::Week, 1),
    TimeInterval::new(TimeUnit::Month, 1),
    TimeInterval::new(TimeUnit::Month, 3),
    TimeInterval::new(TimeUnit::Year, 1),
];

/// Chooses the calendar interval for roughly `count` ticks over `[start, stop]`.
///
/// Returns `None` when the span calls for sub-second ticks.
pub fn utc_tick_interval(start: f64, stop: f64, count: f64) -> Option<TimeInterval> {
    if !(count > 0.0) {
        return None;
    }
    let target = (stop - start).abs() / count;
    let i = TICK_INTERVALS.partition_point(|iv| iv.approx_duration() <= target);
    if i == TICK_INTERVALS.len() {
        let years = tick_step(start / YEAR, stop / YEAR, count).max(1.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "year strides are small positive integers"
        )]
        let step = years.round().min(f64::from(u32::MAX)) as u32;
        return Some(TimeInterval::new(TimeUnit::Year, step.max(1)));
    }
    if i == 0 {
        return None;
    }
    let lo = TICK_INTERVALS[i - 1];
    let hi = TICK_INTERVALS[i];
    if target / lo.approx_duration() < hi.approx_duration() / target {
        Some(lo)
    } else {
        Some(hi)
    }
}

/// Returns calendar-aligned tick values inside `[start, stop]` (UTC seconds).
pub fn utc_ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || !(count > 0.0) {
        return Vec::new();
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let mut ticks = match utc_tick_interval(lo, hi, count) {
        Some(interval) => interval_range(interval, lo, hi),
        None => linear_ticks(lo, hi, count),
    };
    if reverse {
        ticks.reverse();
    }
    ticks
}

fn interval_range(interval: TimeInterval, start: f64, stop: f64) -> Vec<f64> {
    match interval.unit {
        TimeUnit::Second | TimeUnit::Minute | TimeUnit::Hour | TimeUnit::Day => {
            fixed_range(interval, start, stop)
        }
        TimeUnit::Week => week_range(interval.step, start, stop),
        TimeUnit::Month => month_range(interval.step, start, stop),
        TimeUnit::Year => year_range(interval.step, start, stop),
    }
}

fn to_whole_seconds(t: f64) -> i64 {
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i64 range")]
    {
        t.clamp(i64::MIN as f64, i64::MAX as f64) as i64
    }
}

fn fixed_range(interval: TimeInterval, start: f64, stop: f64) -> Vec<f64> {
    let unit: i64 = match interval.unit {
        TimeUnit::Second => 1,
        TimeUnit::Minute => 60,
        TimeUnit::Hour => 3_600,
        _ => 86_400,
    };
    let step = i64::from(interval.step.max(1));
    let mut t = to_whole_seconds((start / unit as f64).ceil()) * unit;
    let mut out = Vec::new();
    while (t as f64) <= stop && out.len() < MAX_TICKS {
        let field = match interval.unit {
            TimeUnit::Second => t.rem_euclid(60),
            TimeUnit::Minute => t.div_euclid(60).rem_euclid(60),
            TimeUnit::Hour => t.div_euclid(3_600).rem_euclid(24),
            _ => utc(t as f64).map_or(0, |d| i64::from(d.day0())),
        };
        if field % step == 0 {
            out.push(t as f64);
        }
        t += unit;
    }
    out
}

fn week_range(step: u32, start: f64, stop: f64) -> Vec<f64> {
    // 1970-01-01 was a Thursday; day `d` is a Sunday when `(d + 4) % 7 == 0`.
    let mut day = to_whole_seconds((start / DAY).ceil());
    day += (-(day + 4)).rem_euclid(7);
    let step = i64::from(step.max(1));
    let mut out = Vec::new();
    let mut week = 0_i64;
    while (day as f64) * DAY <= stop && out.len() < MAX_TICKS {
        if week % step == 0 {
            out.push(day as f64 * DAY);
        }
        day += 7;
        week += 1;
    }
    out
}

fn month_range(step: u32, start: f64, stop: f64) -> Vec<f64> {
    let Some(first) = utc(start.floor()) else {
        return Vec::new();
    };
    let mut year = first.year();
    let mut month0 = first.month0();
    let mut out = Vec::new();
    while out.len() < MAX_TICKS {
        let Some(t) = utc_seconds(year, month0 + 1, 1) else {
            break;
        };
        if t > stop {
            break;
        }
        if t >= start && month0 % step.max(1) == 0 {
            out.push(t);
        }
        month0 += 1;
        if month0 == 12 {
            month0 = 0;
            year += 1;
        }
    }
    out
}

fn year_range(step: u32, start: f64, stop: f64) -> Vec<f64> {
    let Some(first) = utc(start.floor()) else {
        return Vec::new();
    };
    #[allow(clippy::cast_possible_wrap, reason = "year strides are small")]
    let step = step.max(1) as i32;
    let mut year = first.year();
    let mut out = Vec::new();
    while out.len() < MAX_TICKS {
        let Some(t) = utc_seconds(year, 1, 1) else {
            break;
        };
        if t > stop {
            break;
        }
        if t >= start && year.rem_euclid(step) == 0 {
            out.push(t);
        }
        year += 1;
    }
    out
}

fn utc(t: f64) -> Option<DateTime<Utc>> {
    if !t.is_finite() {
        return None;
    }
    let secs = t.floor();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "sub-second remainder is in [0, 1e9)"
    )]
    let nanos = (((t - secs) * 1.0e9).round() as u32).min(999_999_999);
    DateTime::<Utc>::from_timestamp(to_whole_seconds(secs), nanos)
}

/// Returns UTC midnight of the given calendar date, in seconds since the epoch.
pub fn utc_seconds(year: i32, month: u32, day: u32) -> Option<f64> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().timestamp() as f64)
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats a UTC tick (seconds) using the coarsest field that is not at its boundary.
pub fn format_utc_tick(t: f64) -> String {
    let Some(dt) = utc(t) else {
        return alloc::format!("{t}");
    };
    let millis = dt.timestamp_subsec_millis();
    if millis != 0 {
        return alloc::format!(".{millis:03}");
    }
    let (second, minute, hour) = (dt.second(), dt.minute(), dt.hour());
    if second != 0 {
        return alloc::format!(":{second:02}");
    }
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    if minute != 0 {
        return alloc::format!("{hour12:02}:{minute:02}");
    }
    if hour != 0 {
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        return alloc::format!("{hour12:02} {meridiem}");
    }
    let month0 = dt.month0() as usize;
    if dt.day() != 1 {
        let weekday = dt.weekday();
        if weekday.num_days_from_sunday() != 0 {
            let name = WEEKDAYS[weekday.num_days_from_monday() as usize];
            return alloc::format!("{name} {:02}", dt.day());
        }
        return alloc::format!("{} {:02}", MONTHS_SHORT[month0], dt.day());
    }
    if month0 != 0 {
        return String::from(MONTHS_LONG[month0]);
    }
    alloc::format!("{}", dt.year())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> f64 {
        utc_seconds(y, m, d).expect("valid date")
    }

    #[test]
    fn one_year_span_ticks_on_months() {
        let ticks = utc_ticks(ymd(2023, 1, 1), ymd(2024, 1, 1), 10.0);
        assert_eq!(ticks.len(), 13);
        assert_eq!(ticks[0], ymd(2023, 1, 1));
        assert_eq!(ticks[1], ymd(2023, 2, 1));
        assert_eq!(*ticks.last().unwrap(), ymd(2024, 1, 1));
    }

    #[test]
    fn multi_year_span_ticks_on_years() {
        let ticks = utc_ticks(ymd(2007, 4, 23), ymd(2012, 5, 1), 11.6);
        let labels: vec::Vec<String> = ticks.iter().map(|&t| format_utc_tick(t)).collect();
        assert!(labels.contains(&String::from("2008")), "{labels:?}");
        assert!(labels.contains(&String::from("2012")), "{labels:?}");
        assert!(ticks.iter().all(|&t| t >= ymd(2007, 4, 23)));
    }

    #[test]
    fn interval_choice_tracks_span() {
        let day = utc_tick_interval(0.0, 10.0 * DAY, 10.0).expect("interval");
        assert_eq!(day, TimeInterval::new(TimeUnit::Day, 1));
        let minutes = utc_tick_interval(0.0, 3_600.0, 4.0).expect("interval");
        assert_eq!(minutes, TimeInterval::new(TimeUnit::Minute, 15));
        assert_eq!(utc_tick_interval(0.0, 1.0, 10.0), None);
    }

    #[test]
    fn week_ticks_fall_on_sundays() {
        // Jan 2023: Sundays are the 1st, 8th, 15th, 22nd, 29th.
        let ticks = utc_ticks(ymd(2023, 1, 2), ymd(2023, 2, 28), 8.0);
        assert!(ticks.contains(&ymd(2023, 1, 8)), "{ticks:?}");
        for t in ticks {
            let dt = utc(t).unwrap();
            assert_eq!(dt.weekday().num_days_from_sunday(), 0);
        }
    }

    #[test]
    fn reversed_domain_yields_descending_ticks() {
        let ticks = utc_ticks(ymd(2024, 1, 1), ymd(2023, 1, 1), 4.0);
        assert!(ticks.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn multi_scale_labels() {
        assert_eq!(format_utc_tick(ymd(2023, 1, 1)), "2023");
        assert_eq!(format_utc_tick(ymd(2023, 4, 1)), "April");
        // 2023-04-09 is a Sunday.
        assert_eq!(format_utc_tick(ymd(2023, 4, 9)), "Apr 09");
        assert_eq!(format_utc_tick(ymd(2023, 4, 4)), "Tue 04");
        assert_eq!(format_utc_tick(ymd(2023, 4, 4) + 15.0 * HOUR), "03 PM");
        assert_eq!(format_utc_tick(ymd(2023, 4, 4) + 15.0 * MINUTE), "12:15");
        assert_eq!(format_utc_tick(ymd(2023, 4, 4) + 30.0), ":30");
        assert_eq!(format_utc_tick(ymd(2023, 4, 4) + 0.25), ".250");
    }
}
