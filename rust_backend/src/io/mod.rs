//! High-level data loading utilities.
//!
//! This module provides the loader that combines CSV parsing with domain
//! record construction. It handles format detection, error context, and
//! produces the ready-to-use dataset handle.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare_rust::io::loaders::RentalDataLoader;
//! use std::path::Path;
//!
//! let dataset = RentalDataLoader::load_from_file(Path::new("all_data.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} records", dataset.len());
//! ```

pub mod loaders;


pub use loaders::RentalDataLoader;
