use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::dataset::RentalDataset;
use crate::parsing::csv_parser;

/// Unified interface for loading the rental table from disk
pub struct RentalDataLoader;

impl RentalDataLoader {
    /// Load rental data from a file (CSV is the only supported format)
    pub fn load_from_file(path: &Path) -> Result<RentalDataset> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "csv" => Self::load_from_csv(path),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Load rental data from a CSV file
    pub fn load_from_csv(csv_path: &Path) -> Result<RentalDataset> {
        let records = csv_parser::parse_rentals_csv_to_records(csv_path)
            .with_context(|| format!("Failed to load rental data from {}", csv_path.display()))?;

        let dataset = RentalDataset::new(records);

        match (dataset.first_date(), dataset.last_date()) {
            (Some(first), Some(last)) => info!(
                "Loaded {} rental records spanning {} to {}",
                dataset.len(),
                first,
                last
            ),
            _ => info!("Loaded an empty rental dataset"),
        }

        Ok(dataset)
    }
}
