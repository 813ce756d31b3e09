//! Weekday rental ranking backing the quietest-day chart.

use std::collections::HashMap;

use crate::api::types::WeekdayRow;
use crate::core::domain::{RentalRecord, Weekday};

/// Sum rentals per weekday and rank the days from quietest to busiest.
///
/// Groups the records by weekday and sums the total count of each group.
/// Rows are sorted ascending by summed count so the quietest day leads the
/// chart; ties fall back to weekday code order. Every row whose count
/// equals the minimum is flagged `is_minimum` for the highlight color.
pub fn summarize_by_weekday(records: &[RentalRecord]) -> Vec<WeekdayRow> {
    let mut groups: HashMap<Weekday, u64> = HashMap::new();

    for record in records {
        *groups.entry(record.weekday).or_insert(0) += u64::from(record.cnt);
    }

    let mut rows: Vec<WeekdayRow> = groups
        .into_iter()
        .map(|(weekday, cnt)| WeekdayRow {
            weekday_code: weekday.code(),
            weekday: weekday.label().to_string(),
            cnt,
            is_minimum: false,
        })
        .collect();

    rows.sort_by_key(|row| (row.cnt, row.weekday_code));

    if let Some(min_cnt) = rows.first().map(|row| row.cnt) {
        for row in &mut rows {
            row.is_minimum = row.cnt == min_cnt;
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::core::domain::{DayPart, Season};

    fn record(weekday: Weekday, cnt: u32) -> RentalRecord {
        RentalRecord {
            date: NaiveDate::from_ymd_opt(2012, 3, 5).unwrap(),
            year: 1,
            season: Season::Spring,
            weekday,
            day_part: DayPart::Sore,
            casual: cnt / 3,
            registered: cnt - cnt / 3,
            cnt,
        }
    }

    #[test]
    fn test_quietest_day_leads_and_is_flagged() {
        let records = vec![
            record(Weekday::Senin, 10),
            record(Weekday::Senin, 5),
            record(Weekday::Minggu, 5),
            record(Weekday::Jumat, 40),
        ];

        let rows = summarize_by_weekday(&records);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].weekday, "Minggu");
        assert_eq!(rows[0].cnt, 5);
        assert!(rows[0].is_minimum);
        assert_eq!(rows[1].weekday, "Senin");
        assert_eq!(rows[1].cnt, 15);
        assert!(!rows[1].is_minimum);
        assert_eq!(rows[2].weekday, "Jumat");
        assert!(!rows[2].is_minimum);
    }

    #[test]
    fn test_ties_break_by_weekday_code() {
        let records = vec![
            record(Weekday::Sabtu, 20),
            record(Weekday::Selasa, 20),
            record(Weekday::Kamis, 20),
        ];

        let rows = summarize_by_weekday(&records);

        let codes: Vec<u8> = rows.iter().map(|r| r.weekday_code).collect();
        assert_eq!(codes, vec![1, 3, 5]);
    }

    #[test]
    fn test_all_tied_minimum_rows_flagged() {
        let records = vec![
            record(Weekday::Senin, 7),
            record(Weekday::Rabu, 7),
            record(Weekday::Minggu, 9),
        ];

        let rows = summarize_by_weekday(&records);

        assert!(rows[0].is_minimum);
        assert!(rows[1].is_minimum);
        assert!(!rows[2].is_minimum);
    }

    #[test]
    fn test_single_day_is_minimum() {
        let rows = summarize_by_weekday(&[record(Weekday::Kamis, 100)]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].weekday_code, 3);
        assert!(rows[0].is_minimum);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let rows = summarize_by_weekday(&[]);
        assert!(rows.is_empty());
    }
}
