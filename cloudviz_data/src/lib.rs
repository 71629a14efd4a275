// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading daily-close time series for cloudviz charts.
//!
//! [`parse_str`], [`load_path`] and [`load_path_async`] read a CSV with `date` and `close`
//! columns into a validated [`TimeSeries`]: dates never decrease and closes are never negative.
//! Every violation is a [`LoadError`] naming the offending row.
//!
//! ```
//! let series = cloudviz_data::parse_str("date,close\n2024-01-02,185.64\n").unwrap();
//! assert_eq!(series.max_close(), Some(185.64));
//! ```

mod error;
mod load;
mod series;

pub use error::{LoadError, LoadResult};
pub use load::{load_path, load_path_async, parse_reader, parse_str};
pub use series::{TimeSeries, TimeSeriesPoint, date_to_utc_seconds};
