use chrono::NaiveDate;

use crate::core::domain::{DateRange, RentalRecord};
use crate::core::error::DashboardResult;

/// Filter records to an inclusive date window.
///
/// Validates the window first: a start after the end is rejected with
/// [`InvalidDateRange`](crate::core::error::DashboardError::InvalidDateRange)
/// and the caller must skip summarizing and rendering. On success the
/// result keeps the original relative order, may be empty, and filtering
/// again with the same window returns the same records.
pub fn filter_by_date_range(
    records: &[RentalRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> DashboardResult<Vec<RentalRecord>> {
    let range = DateRange::new(start, end)?;
    Ok(filter_to_range(records, &range))
}

/// Filter records against an already-validated window.
pub fn filter_to_range(records: &[RentalRecord], range: &DateRange) -> Vec<RentalRecord> {
    records
        .iter()
        .filter(|r| range.contains(r.date))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{DayPart, Season, Weekday};
    use crate::core::error::DashboardError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(y: i32, m: u32, d: u32, cnt: u32) -> RentalRecord {
        RentalRecord {
            date: date(y, m, d),
            year: if y == 2011 { 0 } else { 1 },
            season: Season::Spring,
            weekday: Weekday::Senin,
            day_part: DayPart::Pagi,
            casual: cnt / 3,
            registered: cnt - cnt / 3,
            cnt,
        }
    }

    fn sample_records() -> Vec<RentalRecord> {
        vec![
            record(2011, 1, 1, 15),
            record(2011, 1, 2, 5),
            record(2011, 1, 3, 8),
            record(2011, 2, 1, 20),
        ]
    }

    #[test]
    fn test_filter_keeps_inclusive_endpoints() {
        let records = sample_records();
        let filtered =
            filter_by_date_range(&records, date(2011, 1, 1), date(2011, 1, 3)).unwrap();

        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].date, date(2011, 1, 1));
        assert_eq!(filtered[2].date, date(2011, 1, 3));
    }

    #[test]
    fn test_filter_preserves_order() {
        // Out-of-order input stays in input order, not date order
        let records = vec![
            record(2011, 1, 3, 8),
            record(2011, 1, 1, 15),
            record(2011, 1, 2, 5),
        ];
        let filtered =
            filter_by_date_range(&records, date(2011, 1, 1), date(2011, 1, 3)).unwrap();

        let dates: Vec<NaiveDate> = filtered.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![date(2011, 1, 3), date(2011, 1, 1), date(2011, 1, 2)]
        );
    }

    #[test]
    fn test_filter_no_match_is_empty_not_error() {
        let records = sample_records();
        let filtered =
            filter_by_date_range(&records, date(2012, 1, 1), date(2012, 12, 31)).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_empty_input() {
        let filtered =
            filter_by_date_range(&[], date(2011, 1, 1), date(2011, 12, 31)).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample_records();
        let start = date(2011, 1, 1);
        let end = date(2011, 1, 31);

        let once = filter_by_date_range(&records, start, end).unwrap();
        let twice = filter_by_date_range(&once, start, end).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let records = sample_records();
        let err =
            filter_by_date_range(&records, date(2011, 1, 2), date(2011, 1, 1)).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_filter_to_range_matches_checked_entry() {
        let records = sample_records();
        let range = DateRange::new(date(2011, 1, 1), date(2011, 1, 31)).unwrap();

        let direct = filter_to_range(&records, &range);
        let checked =
            filter_by_date_range(&records, range.start(), range.end()).unwrap();
        assert_eq!(direct, checked);
    }
}
