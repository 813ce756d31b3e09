//! Global dataset singleton manager.
//!
//! This module manages the session-wide dataset instance shared by every
//! chart computation. It provides thread-safe initialization and access to
//! the loaded rental table.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::config::DashboardConfig;
use super::RentalDataset;
use crate::io::loaders::RentalDataLoader;

/// Global dataset instance initialized once per session
static DATASET: OnceLock<Arc<RentalDataset>> = OnceLock::new();

/// Initialize the global dataset singleton from a CSV file.
///
/// This function is idempotent - the first successful call wins and later
/// calls simply return success without reloading.
///
/// # Examples
///
/// ```no_run
/// use bikeshare_rust::dataset;
/// use std::path::Path;
///
/// fn main() -> anyhow::Result<()> {
///     dataset::init_dataset(Path::new("all_data.csv"))?;
///     Ok(())
/// }
/// ```
pub fn init_dataset(path: &Path) -> Result<()> {
    if DATASET.get().is_some() {
        return Ok(());
    }

    let dataset = RentalDataLoader::load_from_file(path)?;

    // If another thread won the race, its dataset stands.
    let _ = DATASET.set(Arc::new(dataset));

    Ok(())
}

/// Initialize the global dataset singleton from the configured location.
///
/// Resolves the data path via `dashboard_config.toml` and the
/// `BIKESHARE_DATA_PATH` environment override. Idempotent like
/// [`init_dataset`].
pub fn init_dataset_from_config() -> Result<()> {
    if DATASET.get().is_some() {
        return Ok(());
    }

    let config = DashboardConfig::from_default_location()?;
    init_dataset(&config.data_path())
}

/// Get a handle to the global dataset instance.
///
/// Lazily initializes from the configured location when no explicit
/// `init_dataset` call happened first.
///
/// # Errors
///
/// Returns an error if the dataset could not be loaded.
///
/// # Examples
///
/// ```no_run
/// use bikeshare_rust::dataset;
///
/// fn main() -> anyhow::Result<()> {
///     let dataset = dataset::get_dataset()?;
///     println!("{} records loaded", dataset.len());
///     Ok(())
/// }
/// ```
pub fn get_dataset() -> Result<&'static Arc<RentalDataset>> {
    if DATASET.get().is_none() {
        init_dataset_from_config().context("Failed to initialize dataset from configured path")?;
    }

    DATASET
        .get()
        .context("Dataset not initialized. Call init_dataset() first.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    // The store is process-global, so the full lifecycle lives in one test.
    #[test]
    fn test_init_and_get_lifecycle() {
        let mut file = NamedTempFile::with_suffix(".csv").unwrap();
        writeln!(file, "dteday,yr,season,weekday,hour_group,casual,registered,cnt").unwrap();
        writeln!(file, "2011-01-01,0,1,6,pagi,5,10,15").unwrap();
        writeln!(file, "2011-01-02,0,1,0,malam,2,3,5").unwrap();
        file.flush().unwrap();

        init_dataset(file.path()).unwrap();

        let dataset = get_dataset().unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.overview().total_cnt, 20);

        // Second init is a no-op even with a missing path.
        init_dataset(Path::new("does_not_exist.csv")).unwrap();
        assert_eq!(get_dataset().unwrap().len(), 2);
    }
}
