//! Service layer for the dashboard summaries.
//!
//! This module contains the aggregation services that sit between the loaded
//! record set and the chart-facing API. Services are pure functions over
//! record slices: they group, sum and order, and hand back the DTO rows the
//! charts consume.

pub mod seasonal;
pub mod time_of_day;
pub mod trends;
pub mod weekday;

pub use seasonal::summarize_by_season_year;
pub use time_of_day::summarize_by_time_of_day;
pub use trends::{daily_trend, dataset_overview};
pub use weekday::summarize_by_weekday;
