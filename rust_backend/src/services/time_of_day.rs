//! Time-of-day rental summary backing the daily pattern chart.

use std::collections::HashMap;

use crate::api::types::TimeOfDayRow;
use crate::core::domain::{DayPart, RentalRecord};

/// Sum rentals per day part.
///
/// Groups the records by their `hour_group` day part and sums the total
/// count of each group. Rows come back in chronological day order (pagi,
/// siang, sore, malam) regardless of their counts; day parts with no
/// records in the input produce no row.
pub fn summarize_by_time_of_day(records: &[RentalRecord]) -> Vec<TimeOfDayRow> {
    let mut groups: HashMap<DayPart, u64> = HashMap::new();

    for record in records {
        *groups.entry(record.day_part).or_insert(0) += u64::from(record.cnt);
    }

    DayPart::ALL
        .iter()
        .filter_map(|part| {
            groups.get(part).map(|&cnt| TimeOfDayRow {
                day_part: part.label().to_string(),
                cnt,
            })
        })
        .collect()
}
