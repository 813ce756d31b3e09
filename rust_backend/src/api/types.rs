//! Chart-facing Data Transfer Objects (DTOs).
//!
//! This module defines the row and metadata types handed to the chart
//! sinks: the Streamlit widget layer (as `#[pyclass]` objects when the
//! `python-bindings` feature is enabled) and the CLI JSON feed. They use
//! only boundary-friendly primitives and are isolated from internal
//! grouping state.
//!
//! ## Design Guidelines
//!
//! 1. **Primitives Only**: category codes as integers, labels as Strings,
//!    dates as calendar dates
//! 2. **Flat Structures**: one struct per chart row, no nesting beyond the
//!    trend point list
//! 3. **Serializable**: every type serializes to JSON for the CLI sink
//! 4. **Documented**: each field should be clear to dashboard authors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bar group of the season-performance chart: a (year, season) cell
/// with its summed counts.
#[cfg_attr(
    feature = "python-bindings",
    pyo3::pyclass(module = "bikeshare_rust", get_all)
)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonYearRow {
    /// Raw year category code as stored in the dataset
    pub year: u16,
    /// Display label for the year ("2011", "2012")
    pub year_label: String,
    /// Season code 1-4
    pub season_code: u8,
    /// Season display label ("Spring" .. "Winter")
    pub season: String,
    /// Summed rentals by unregistered riders
    pub casual: u64,
    /// Summed rentals by registered riders
    pub registered: u64,
    /// Summed total rentals
    pub cnt: u64,
}

/// One bar of the time-of-day chart.
#[cfg_attr(
    feature = "python-bindings",
    pyo3::pyclass(module = "bikeshare_rust", get_all)
)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOfDayRow {
    /// Day-part label ("pagi", "siang", "sore", "malam")
    pub day_part: String,
    /// Summed total rentals
    pub cnt: u64,
}

/// One bar of the weekday ranking chart.
#[cfg_attr(
    feature = "python-bindings",
    pyo3::pyclass(module = "bikeshare_rust", get_all)
)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekdayRow {
    /// Weekday code 0-6
    pub weekday_code: u8,
    /// Weekday display label ("Senin" .. "Minggu")
    pub weekday: String,
    /// Summed total rentals
    pub cnt: u64,
    /// True iff this row's cnt equals the minimum across the chart, for
    /// the downstream highlight color
    pub is_minimum: bool,
}

/// One point of the daily trend line.
#[cfg_attr(
    feature = "python-bindings",
    pyo3::pyclass(module = "bikeshare_rust", get_all)
)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Summed total rentals on that date
    pub cnt: u64,
}

/// The daily trend line plus the headline total.
#[cfg_attr(
    feature = "python-bindings",
    pyo3::pyclass(module = "bikeshare_rust", get_all)
)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Per-date totals, ordered by date ascending
    pub points: Vec<TrendPoint>,
    /// Total rentals over the whole window
    pub total_cnt: u64,
}

/// Shape of the loaded dataset, backing the sidebar widget bounds.
#[cfg_attr(
    feature = "python-bindings",
    pyo3::pyclass(module = "bikeshare_rust", get_all)
)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetOverview {
    /// Number of loaded observation records
    pub record_count: usize,
    /// Earliest observation date, absent for an empty dataset
    pub first_date: Option<NaiveDate>,
    /// Latest observation date, absent for an empty dataset
    pub last_date: Option<NaiveDate>,
    /// Total rentals across the dataset
    pub total_cnt: u64,
}

#[cfg(feature = "python-bindings")]
mod python {
    use super::*;
    use pyo3::prelude::*;

    #[pymethods]
    impl SeasonYearRow {
        fn __repr__(&self) -> String {
            format!(
                "SeasonYearRow(year={}, season='{}', casual={}, registered={}, cnt={})",
                self.year_label, self.season, self.casual, self.registered, self.cnt
            )
        }
    }

    #[pymethods]
    impl TimeOfDayRow {
        fn __repr__(&self) -> String {
            format!("TimeOfDayRow(day_part='{}', cnt={})", self.day_part, self.cnt)
        }
    }

    #[pymethods]
    impl WeekdayRow {
        fn __repr__(&self) -> String {
            format!(
                "WeekdayRow(weekday='{}', cnt={}, is_minimum={})",
                self.weekday, self.cnt, self.is_minimum
            )
        }
    }

    #[pymethods]
    impl TrendPoint {
        fn __repr__(&self) -> String {
            format!("TrendPoint(date={}, cnt={})", self.date, self.cnt)
        }
    }

    #[pymethods]
    impl TrendSummary {
        fn __repr__(&self) -> String {
            format!(
                "TrendSummary(points={}, total_cnt={})",
                self.points.len(),
                self.total_cnt
            )
        }
    }

    #[pymethods]
    impl DatasetOverview {
        fn __repr__(&self) -> String {
            format!(
                "DatasetOverview(record_count={}, first_date={:?}, last_date={:?}, total_cnt={})",
                self.record_count, self.first_date, self.last_date, self.total_cnt
            )
        }
    }
}
