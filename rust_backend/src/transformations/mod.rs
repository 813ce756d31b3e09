//! Record transformations applied between loading and aggregation.
//!
//! The dashboard applies exactly one transformation: windowing the loaded
//! records to the user's date range. [`filtering`] implements it as a pure
//! function over the record slice.
//!
//! # Example
//!
//! ```
//! use bikeshare_rust::transformations::filter_by_date_range;
//!
//! let start = chrono::NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
//! let end = chrono::NaiveDate::from_ymd_opt(2011, 12, 31).unwrap();
//! let filtered = filter_by_date_range(&[], start, end).unwrap();
//! assert!(filtered.is_empty());
//! ```

pub mod filtering;

pub use filtering::{filter_by_date_range, filter_to_range};
