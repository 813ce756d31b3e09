//! Parsers for the dashboard's rental dataset.
//!
//! The dashboard reads a single merged CSV export with one row per
//! observation period. [`csv_parser`] turns that file into typed
//! [`RentalRecord`](crate::core::domain::RentalRecord)s, failing with row
//! context on any malformed cell.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_rust::parsing::csv_parser::parse_rentals_csv_to_records;
//! use std::path::Path;
//!
//! let records = parse_rentals_csv_to_records(Path::new("all_data.csv"))
//!     .expect("Failed to parse rental data");
//! ```

pub mod csv_parser;
