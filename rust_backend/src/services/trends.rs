//! Daily rental trend and dataset overview summaries.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::api::types::{DatasetOverview, TrendPoint, TrendSummary};
use crate::core::domain::RentalRecord;

/// Sum rentals per calendar date and total them over the whole window.
///
/// Groups the records by date and sums the total count of each date. Points
/// come back ordered by date ascending for the trend line; `total_cnt` is
/// the sum over all input records and backs the headline metric.
pub fn daily_trend(records: &[RentalRecord]) -> TrendSummary {
    let mut groups: HashMap<NaiveDate, u64> = HashMap::new();

    for record in records {
        *groups.entry(record.date).or_insert(0) += u64::from(record.cnt);
    }

    let mut points: Vec<TrendPoint> = groups
        .into_iter()
        .map(|(date, cnt)| TrendPoint { date, cnt })
        .collect();

    points.sort_by_key(|point| point.date);

    let total_cnt = points.iter().map(|point| point.cnt).sum();

    TrendSummary { points, total_cnt }
}

/// Describe the shape of a record set for the sidebar widgets.
///
/// Reports the record count, the earliest and latest observation dates and
/// the total rental count. An empty set carries no dates.
pub fn dataset_overview(records: &[RentalRecord]) -> DatasetOverview {
    DatasetOverview {
        record_count: records.len(),
        first_date: records.iter().map(|record| record.date).min(),
        last_date: records.iter().map(|record| record.date).max(),
        total_cnt: records.iter().map(|record| u64::from(record.cnt)).sum(),
    }
}
