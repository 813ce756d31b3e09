//! # API Module
//!
//! This module is the boundary layer between the aggregation core and the
//! chart sinks: the Streamlit (PyO3) integration and the CLI JSON feed. It
//! provides a stable DTO surface that isolates those sinks from internal
//! implementations, allowing free evolution of:
//!
//! - Internal models and data structures
//! - Parsing and dataset storage
//! - Service-layer grouping internals
//!
//! ## Architecture
//!
//! - [`types`]: chart-facing DTOs (boundary-friendly primitives only, with
//!   `#[pyclass]` derives under the `python-bindings` feature)
//! - [`charts`]: chart selection metadata and summary dispatch
//! - [`streamlit`]: `#[pyfunction]` exports wrapping dataset/service calls
//!   (compiled only with the `python-bindings` feature)
//!
//! ## Design Principles
//!
//! 1. **Isolation**: PyO3 dependencies only in this module
//! 2. **Stability**: API changes are explicit and versioned
//! 3. **Conversion**: category codes → labels at the boundary
//! 4. **Simplicity**: DTOs mirror what the charts actually need, not internal
//!    complexity

pub mod charts;
#[cfg(feature = "python-bindings")]
pub mod streamlit;
pub mod types;

// Re-export for convenience
pub use charts::{chart_data, ChartData, ChartKind, ChartStyle};
#[cfg(feature = "python-bindings")]
pub use streamlit::register_api_functions;
pub use types::*;
