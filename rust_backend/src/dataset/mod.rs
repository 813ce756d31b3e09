//! Loaded dataset handle and session store.
//!
//! This module owns the in-memory representation of the loaded rental table
//! (`RentalDataset`), the TOML/environment configuration that locates the
//! source file, and the process-wide singleton that caches the dataset for
//! the duration of a dashboard session.

pub mod config;
pub mod manager;

pub use config::DashboardConfig;
pub use manager::{get_dataset, init_dataset, init_dataset_from_config};

use chrono::NaiveDate;

use crate::api::types::DatasetOverview;
use crate::core::domain::RentalRecord;
use crate::services;

/// The loaded rental table, immutable for the session.
#[derive(Debug, Clone)]
pub struct RentalDataset {
    records: Vec<RentalRecord>,
}

impl RentalDataset {
    pub fn new(records: Vec<RentalRecord>) -> Self {
        Self { records }
    }

    /// All loaded records, in file order.
    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest observation date, `None` for an empty dataset.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|record| record.date).min()
    }

    /// Latest observation date, `None` for an empty dataset.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|record| record.date).max()
    }

    /// Shape summary backing the sidebar widget bounds.
    pub fn overview(&self) -> DatasetOverview {
        services::dataset_overview(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{DayPart, Season, Weekday};

    fn record(date: NaiveDate, cnt: u32) -> RentalRecord {
        RentalRecord {
            date,
            year: 0,
            season: Season::Winter,
            weekday: Weekday::Jumat,
            day_part: DayPart::Pagi,
            casual: 1,
            registered: cnt - 1,
            cnt,
        }
    }

    #[test]
    fn test_dataset_span_and_overview() {
        let records = vec![
            record(NaiveDate::from_ymd_opt(2011, 2, 10).unwrap(), 10),
            record(NaiveDate::from_ymd_opt(2011, 2, 8).unwrap(), 20),
        ];
        let dataset = RentalDataset::new(records);

        assert_eq!(dataset.len(), 2);
        assert!(!dataset.is_empty());
        assert_eq!(
            dataset.first_date(),
            Some(NaiveDate::from_ymd_opt(2011, 2, 8).unwrap())
        );
        assert_eq!(
            dataset.last_date(),
            Some(NaiveDate::from_ymd_opt(2011, 2, 10).unwrap())
        );

        let overview = dataset.overview();
        assert_eq!(overview.record_count, 2);
        assert_eq!(overview.total_cnt, 30);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = RentalDataset::new(Vec::new());

        assert!(dataset.is_empty());
        assert_eq!(dataset.first_date(), None);
        assert_eq!(dataset.last_date(), None);
    }
}
