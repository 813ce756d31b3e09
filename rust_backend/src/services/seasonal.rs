//! Season-by-year rental summary backing the seasonal performance chart.

use std::collections::HashMap;

use crate::api::types::SeasonYearRow;
use crate::core::domain::{year_label, RentalRecord, Season};

/// Sum rentals per (year, season) cell.
///
/// Groups the records by year code and season, sums the casual, registered
/// and total counts of each group, and returns one row per populated cell.
/// Rows are ordered by (year code, season code) ascending so the grouped
/// bar chart renders years side by side and seasons in calendar order.
pub fn summarize_by_season_year(records: &[RentalRecord]) -> Vec<SeasonYearRow> {
    let mut groups: HashMap<(u16, Season), (u64, u64, u64)> = HashMap::new();

    for record in records {
        let entry = groups
            .entry((record.year, record.season))
            .or_insert((0, 0, 0));
        entry.0 += u64::from(record.casual);
        entry.1 += u64::from(record.registered);
        entry.2 += u64::from(record.cnt);
    }

    let mut rows: Vec<SeasonYearRow> = groups
        .into_iter()
        .map(|((year, season), (casual, registered, cnt))| SeasonYearRow {
            year,
            year_label: year_label(year),
            season_code: season.code(),
            season: season.label().to_string(),
            casual,
            registered,
            cnt,
        })
        .collect();

    rows.sort_by_key(|row| (row.year, row.season_code));

    rows
}
