// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Daily-close observations and their chart coordinates.

use chrono::NaiveDate;

/// One observation of a daily-close series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeSeriesPoint {
    /// Calendar date (UTC).
    pub date: NaiveDate,
    /// Closing value; never negative.
    pub close: f64,
}

impl TimeSeriesPoint {
    /// UTC midnight of [`Self::date`], in seconds since the Unix epoch.
    pub fn utc_seconds(&self) -> f64 {
        date_to_utc_seconds(self.date)
    }
}

/// Returns UTC midnight of `date` in seconds since the Unix epoch.
pub fn date_to_utc_seconds(date: NaiveDate) -> f64 {
    date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp() as f64
}

/// A validated series: dates non-decreasing, closes non-negative.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimeSeries {
    points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    pub(crate) fn from_validated(points: Vec<TimeSeriesPoint>) -> Self {
        Self { points }
    }

    /// Returns the points in date order.
    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last date.
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.points.first()?.date, self.points.last()?.date))
    }

    /// Largest closing value.
    pub fn max_close(&self) -> Option<f64> {
        self.points.iter().map(|p| p.close).reduce(f64::max)
    }

    /// Chart input: `(utc_seconds, close)` pairs.
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.utc_seconds(), p.close))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(y: i32, m: u32, d: u32, close: f64) -> TimeSeriesPoint {
        TimeSeriesPoint {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            close,
        }
    }

    #[test]
    fn utc_seconds_of_known_dates() {
        assert_eq!(point(1970, 1, 2, 0.0).utc_seconds(), 86_400.0);
        assert_eq!(point(2023, 1, 1, 0.0).utc_seconds(), 1_672_531_200.0);
    }

    #[test]
    fn extent_and_max() {
        let series = TimeSeries::from_validated(vec![
            point(2024, 1, 2, 10.0),
            point(2024, 1, 3, 30.5),
            point(2024, 1, 4, 20.0),
        ]);
        assert_eq!(
            series.date_extent(),
            Some((
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 4).unwrap()
            ))
        );
        assert_eq!(series.max_close(), Some(30.5));
        assert_eq!(series.xy()[1], (1_704_240_000.0, 30.5));
    }

    #[test]
    fn empty_series_has_no_extent() {
        let series = TimeSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.date_extent(), None);
        assert_eq!(series.max_close(), None);
    }
}
