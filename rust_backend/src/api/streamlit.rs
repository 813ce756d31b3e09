//! Streamlit API Functions.
//!
//! This module contains all `#[pyfunction]` exports for the Streamlit Python
//! application. Each function acts as a thin wrapper around the session
//! dataset store and the aggregation services, converting between chart DTOs
//! and internal models at the boundary.
//!
//! ## Design Patterns
//!
//! 1. Accept primitives or `datetime.date` values as parameters
//! 2. Resolve the session dataset from the global store
//! 3. Filter and summarize through the service layer
//! 4. Return chart DTOs with proper error handling
//!
//! Invalid user input (a reversed date range) raises `ValueError`; dataset
//! load and session failures raise `RuntimeError`.

use chrono::NaiveDate;
use pyo3::prelude::*;
use std::path::Path;

use crate::api::types as api;
use crate::core::domain::RentalRecord;
use crate::core::error::DashboardError;
use crate::dataset;
use crate::services;
use crate::transformations::filter_by_date_range;

/// Register all API functions with the Python module.
///
/// This function is called from lib.rs to populate the bikeshare_rust module
/// with all exported functions and classes.
pub fn register_api_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Dataset session management
    m.add_function(wrap_pyfunction!(init_dataset, m)?)?;
    m.add_function(wrap_pyfunction!(get_dataset_overview, m)?)?;

    // Chart data queries
    m.add_function(wrap_pyfunction!(get_daily_trend, m)?)?;
    m.add_function(wrap_pyfunction!(get_season_year_summary, m)?)?;
    m.add_function(wrap_pyfunction!(get_time_of_day_summary, m)?)?;
    m.add_function(wrap_pyfunction!(get_weekday_summary, m)?)?;

    // Register all API classes
    m.add_class::<api::SeasonYearRow>()?;
    m.add_class::<api::TimeOfDayRow>()?;
    m.add_class::<api::WeekdayRow>()?;
    m.add_class::<api::TrendPoint>()?;
    m.add_class::<api::TrendSummary>()?;
    m.add_class::<api::DatasetOverview>()?;

    Ok(())
}

/// Map a dashboard error onto the matching Python exception.
fn to_py_err(err: DashboardError) -> PyErr {
    match err {
        DashboardError::InvalidDateRange { .. } => {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
        }
        DashboardError::DataLoad(_) => {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(err.to_string())
        }
    }
}

/// Resolve the session dataset and filter it to the requested range.
fn filtered_records(start_date: NaiveDate, end_date: NaiveDate) -> PyResult<Vec<RentalRecord>> {
    let dataset = dataset::get_dataset()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!("{:#}", e)))?;
    filter_by_date_range(dataset.records(), start_date, end_date).map_err(to_py_err)
}

// =========================================================
// Dataset Session Management
// =========================================================

/// Load the rental dataset and cache it for the session.
///
/// The first successful load wins; later calls return the cached dataset.
///
/// Args:
///     path: CSV file path; the configured default when omitted
///
/// Returns:
///     DatasetOverview for the loaded data
#[pyfunction]
#[pyo3(signature = (path=None))]
fn init_dataset(path: Option<String>) -> PyResult<api::DatasetOverview> {
    match path {
        Some(path) => dataset::init_dataset(Path::new(&path)),
        None => dataset::init_dataset_from_config(),
    }
    .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!("{:#}", e)))?;

    get_dataset_overview()
}

/// Get the overview of the cached dataset.
///
/// Returns:
///     DatasetOverview with record count, date bounds and total rentals
#[pyfunction]
fn get_dataset_overview() -> PyResult<api::DatasetOverview> {
    let dataset = dataset::get_dataset()
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!("{:#}", e)))?;
    Ok(dataset.overview())
}

// =========================================================
// Chart Data Queries
// =========================================================

/// Get the daily rental trend for a date range.
///
/// Args:
///     start_date: First day of the range (inclusive)
///     end_date: Last day of the range (inclusive)
///
/// Returns:
///     TrendSummary with per-day points and the range total
#[pyfunction]
fn get_daily_trend(start_date: NaiveDate, end_date: NaiveDate) -> PyResult<api::TrendSummary> {
    let records = filtered_records(start_date, end_date)?;
    Ok(services::daily_trend(&records))
}

/// Get the season-by-year rental summary for a date range.
///
/// Args:
///     start_date: First day of the range (inclusive)
///     end_date: Last day of the range (inclusive)
///
/// Returns:
///     List of SeasonYearRow ordered by year and season
#[pyfunction]
fn get_season_year_summary(
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> PyResult<Vec<api::SeasonYearRow>> {
    let records = filtered_records(start_date, end_date)?;
    Ok(services::summarize_by_season_year(&records))
}

/// Get the time-of-day rental summary for a date range.
///
/// Args:
///     start_date: First day of the range (inclusive)
///     end_date: Last day of the range (inclusive)
///
/// Returns:
///     List of TimeOfDayRow in chronological day order
#[pyfunction]
fn get_time_of_day_summary(
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> PyResult<Vec<api::TimeOfDayRow>> {
    let records = filtered_records(start_date, end_date)?;
    Ok(services::summarize_by_time_of_day(&records))
}

/// Get the weekday rental ranking for a date range.
///
/// Args:
///     start_date: First day of the range (inclusive)
///     end_date: Last day of the range (inclusive)
///
/// Returns:
///     List of WeekdayRow sorted quietest day first
#[pyfunction]
fn get_weekday_summary(
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> PyResult<Vec<api::WeekdayRow>> {
    let records = filtered_records(start_date, end_date)?;
    Ok(services::summarize_by_weekday(&records))
}
