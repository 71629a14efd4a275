// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSV loading.
//!
//! The input needs a header with `date` and `close` columns (matched case-insensitively);
//! other columns are ignored. Dates are `YYYY-MM-DD` or RFC 3339 timestamps (converted to the
//! UTC calendar date).

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{LoadError, LoadResult};
use crate::series::{TimeSeries, TimeSeriesPoint};

const DATE: &str = "date";
const CLOSE: &str = "close";

#[derive(Debug, Deserialize)]
struct RawRow {
    date: String,
    close: String,
}

/// Parses a series from CSV text.
pub fn parse_str(text: &str) -> LoadResult<TimeSeries> {
    parse_reader(text.as_bytes())
}

/// Parses a series from any CSV byte stream.
pub fn parse_reader<R: Read>(reader: R) -> LoadResult<TimeSeries> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = normalized_headers(rdr.headers()?);
    for column in [DATE, CLOSE] {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut points: Vec<TimeSeriesPoint> = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let row = i + 1;
        let record = record?;
        let raw: RawRow = record.deserialize(Some(&headers))?;
        let point = TimeSeriesPoint {
            date: parse_date(row, &raw.date)?,
            close: parse_close(row, &raw.close)?,
        };
        if points.last().is_some_and(|prev| point.date < prev.date) {
            return Err(LoadError::OutOfOrder { row });
        }
        points.push(point);
    }

    Ok(TimeSeries::from_validated(points))
}

/// Loads a series from a CSV file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_path(path: impl AsRef<Path>) -> LoadResult<TimeSeries> {
    let file = std::fs::File::open(path.as_ref())?;
    let series = parse_reader(std::io::BufReader::new(file))?;
    debug!(rows = series.len(), "loaded time series");
    Ok(series)
}

/// Loads a series from a CSV file without blocking the async runtime on I/O.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub async fn load_path_async(path: impl AsRef<Path>) -> LoadResult<TimeSeries> {
    let text = tokio::fs::read_to_string(path.as_ref()).await?;
    let series = parse_str(&text)?;
    debug!(rows = series.len(), "loaded time series");
    Ok(series)
}

fn normalized_headers(headers: &csv::StringRecord) -> csv::StringRecord {
    headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_ascii_lowercase())
        .collect()
}

fn parse_date(row: usize, value: &str) -> LoadResult<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_utc().date())
        .map_err(|_| LoadError::InvalidDate {
            row,
            value: value.to_owned(),
        })
}

fn parse_close(row: usize, value: &str) -> LoadResult<f64> {
    let close: f64 = value
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| LoadError::InvalidClose {
            row,
            value: value.to_owned(),
        })?;
    if close < 0.0 {
        return Err(LoadError::NegativeClose { row, value: close });
    }
    Ok(close)
}
