pub mod api;
pub mod core;
pub mod dataset;
pub mod io;
pub mod parsing;
pub mod services;
pub mod transformations;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Bikeshare Rust Backend - rental dashboard aggregation
#[cfg(feature = "python-bindings")]
#[pymodule]
fn bikeshare_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    api::streamlit::register_api_functions(m)
}
