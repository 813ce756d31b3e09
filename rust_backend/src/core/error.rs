//! Error types for dashboard data operations.

use chrono::NaiveDate;

/// Result type for dashboard data operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Error type for dashboard data operations.
///
/// The taxonomy is intentionally small: a reversed date range is the only
/// recoverable user error, and a bad source file is fatal at startup.
/// Summaries never fail on a well-formed loaded table.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The requested window starts after it ends. Callers report this
    /// inline and skip summarizing and rendering for the interaction.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// The source file was missing or malformed. Raised once at startup,
    /// before any rendering.
    #[error("Failed to load rental data: {0}")]
    DataLoad(String),
}

impl From<anyhow::Error> for DashboardError {
    fn from(err: anyhow::Error) -> Self {
        DashboardError::DataLoad(format!("{err:#}"))
    }
}

impl From<String> for DashboardError {
    fn from(s: String) -> Self {
        DashboardError::DataLoad(s)
    }
}

impl From<&str> for DashboardError {
    fn from(s: &str) -> Self {
        DashboardError::DataLoad(s.to_string())
    }
}
