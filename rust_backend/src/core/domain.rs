//! Domain models for bike-rental observations and dashboard date windows.
//!
//! This module provides the core data structures behind the dashboard's
//! aggregation layer: individual rental observations, the categorical
//! dimensions they are sliced by (season, weekday, day part), and the
//! validated date range used to window them.

use chrono::NaiveDate;

use crate::core::error::DashboardError;

/// Calendar season category, encoded 1-4 in the dataset.
///
/// The dashboard presents seasons with English labels:
/// 1 "Spring", 2 "Summer", 3 "Fall", 4 "Winter".
///
/// # Examples
///
/// ```
/// use bikeshare_rust::core::domain::Season;
///
/// let season = Season::from_code(1).unwrap();
/// assert_eq!(season, Season::Spring);
/// assert_eq!(season.label(), "Spring");
/// assert_eq!(season.code(), 1);
/// assert!(Season::from_code(5).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Season {
    Spring = 1,
    Summer = 2,
    Fall = 3,
    Winter = 4,
}

impl Season {
    /// Maps a raw dataset code (1-4) to its season. Returns `None` for any
    /// other code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Season::Spring),
            2 => Some(Season::Summer),
            3 => Some(Season::Fall),
            4 => Some(Season::Winter),
            _ => None,
        }
    }

    /// The raw dataset code for this season.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The display label used by the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

/// Day-of-week category, encoded 0-6 in the dataset.
///
/// The dashboard labels days in Indonesian, with code 0 shown as "Senin"
/// through code 6 as "Minggu"; the variants carry those names so code,
/// variant, and label stay one concept.
///
/// # Examples
///
/// ```
/// use bikeshare_rust::core::domain::Weekday;
///
/// let day = Weekday::from_code(6).unwrap();
/// assert_eq!(day, Weekday::Minggu);
/// assert_eq!(day.label(), "Minggu");
/// assert!(Weekday::from_code(7).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Senin = 0,
    Selasa = 1,
    Rabu = 2,
    Kamis = 3,
    Jumat = 4,
    Sabtu = 5,
    Minggu = 6,
}

impl Weekday {
    /// Maps a raw dataset code (0-6) to its weekday. Returns `None` for any
    /// other code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Weekday::Senin),
            1 => Some(Weekday::Selasa),
            2 => Some(Weekday::Rabu),
            3 => Some(Weekday::Kamis),
            4 => Some(Weekday::Jumat),
            5 => Some(Weekday::Sabtu),
            6 => Some(Weekday::Minggu),
            _ => None,
        }
    }

    /// The raw dataset code for this weekday.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The display label used by the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            Weekday::Senin => "Senin",
            Weekday::Selasa => "Selasa",
            Weekday::Rabu => "Rabu",
            Weekday::Kamis => "Kamis",
            Weekday::Jumat => "Jumat",
            Weekday::Sabtu => "Sabtu",
            Weekday::Minggu => "Minggu",
        }
    }
}

/// Coarse time-of-day bucket for an observation period.
///
/// The dataset stores these as lowercase labels in the `hour_group` column.
/// Variant order is chronological within a day (pagi, siang, sore, malam),
/// which is also the presentation order of time-of-day summaries.
///
/// # Examples
///
/// ```
/// use bikeshare_rust::core::domain::DayPart;
///
/// assert_eq!(DayPart::parse_label("pagi"), Some(DayPart::Pagi));
/// assert_eq!(DayPart::from_hour(7), Some(DayPart::Pagi));
/// assert_eq!(DayPart::from_hour(23), Some(DayPart::Malam));
/// assert_eq!(DayPart::from_hour(24), None);
/// assert_eq!(DayPart::Sore.label(), "sore");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayPart {
    Pagi,
    Siang,
    Sore,
    Malam,
}

impl DayPart {
    /// All day parts in chronological presentation order.
    pub const ALL: [DayPart; 4] = [DayPart::Pagi, DayPart::Siang, DayPart::Sore, DayPart::Malam];

    /// Parses a canonical lowercase `hour_group` label. Returns `None` for
    /// anything outside the fixed label set.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label {
            "pagi" => Some(DayPart::Pagi),
            "siang" => Some(DayPart::Siang),
            "sore" => Some(DayPart::Sore),
            "malam" => Some(DayPart::Malam),
            _ => None,
        }
    }

    /// Buckets an hour of day (0-23) into its day part:
    /// pagi 05-10, siang 11-14, sore 15-18, malam 19-04.
    ///
    /// Returns `None` for hours above 23. Used when preparing datasets from
    /// raw hourly exports that carry an `hr` column instead of `hour_group`.
    pub fn from_hour(hour: u8) -> Option<Self> {
        match hour {
            5..=10 => Some(DayPart::Pagi),
            11..=14 => Some(DayPart::Siang),
            15..=18 => Some(DayPart::Sore),
            0..=4 | 19..=23 => Some(DayPart::Malam),
            _ => None,
        }
    }

    /// The lowercase label as stored in the dataset.
    pub fn label(self) -> &'static str {
        match self {
            DayPart::Pagi => "pagi",
            DayPart::Siang => "siang",
            DayPart::Sore => "sore",
            DayPart::Malam => "malam",
        }
    }
}

/// Display label for a raw year category code.
///
/// The dataset encodes years as small numeric codes (0 for 2011, 1 for
/// 2012); chart legends show the calendar year. Codes outside the known
/// pair are shown as-is so exports that store full years still render.
///
/// # Examples
///
/// ```
/// use bikeshare_rust::core::domain::year_label;
///
/// assert_eq!(year_label(0), "2011");
/// assert_eq!(year_label(1), "2012");
/// assert_eq!(year_label(2012), "2012");
/// ```
pub fn year_label(code: u16) -> String {
    match code {
        0 => "2011".to_string(),
        1 => "2012".to_string(),
        other => other.to_string(),
    }
}

/// A single rental observation period.
///
/// One record covers one day part of one calendar day and carries the
/// rider counts observed in it. Records are plain `Copy` values; the
/// aggregation layer never mutates them.
///
/// # Fields
///
/// * `date` - Calendar date of the observation
/// * `year` - Raw year category code as stored in the dataset (see
///   [`year_label`])
/// * `season` - Calendar season
/// * `weekday` - Day of the week
/// * `day_part` - Time-of-day bucket
/// * `casual` - Rentals by unregistered riders
/// * `registered` - Rentals by registered riders
/// * `cnt` - Total rentals, equal to `casual + registered` in well-formed
///   data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalRecord {
    pub date: NaiveDate,
    pub year: u16,
    pub season: Season,
    pub weekday: Weekday,
    pub day_part: DayPart,
    pub casual: u32,
    pub registered: u32,
    pub cnt: u32,
}

/// An inclusive calendar date window, valid by construction.
///
/// The dashboard's date filter is driven by two sidebar inputs; a start
/// after the end is a user-input error, so construction rejects it and the
/// caller reports the problem instead of rendering.
///
/// # Examples
///
/// ```
/// use bikeshare_rust::core::domain::DateRange;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2011, 12, 31).unwrap();
/// let range = DateRange::new(start, end).unwrap();
///
/// assert!(range.contains(NaiveDate::from_ymd_opt(2011, 6, 15).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2012, 1, 1).unwrap()));
/// assert!(DateRange::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end` with
    /// [`DashboardError::InvalidDateRange`].
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DashboardError> {
        if start > end {
            Err(DashboardError::InvalidDateRange { start, end })
        } else {
            Ok(Self { start, end })
        }
    }

    /// First date of the window.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last date of the window.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls within the window, both endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn season_codes_round_trip() {
        let expected = vec![
            (1, Season::Spring, "Spring"),
            (2, Season::Summer, "Summer"),
            (3, Season::Fall, "Fall"),
            (4, Season::Winter, "Winter"),
        ];

        for (code, season, label) in expected {
            let parsed = Season::from_code(code).unwrap();
            assert_eq!(parsed, season);
            assert_eq!(parsed.code(), code);
            assert_eq!(parsed.label(), label);
        }

        assert!(Season::from_code(0).is_none());
        assert!(Season::from_code(5).is_none());
    }

    #[test]
    fn weekday_codes_round_trip() {
        let labels = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];

        for (code, label) in labels.iter().enumerate() {
            let day = Weekday::from_code(code as u8).unwrap();
            assert_eq!(day.code(), code as u8);
            assert_eq!(day.label(), *label);
        }

        assert!(Weekday::from_code(7).is_none());
    }

    #[test]
    fn day_part_hour_boundaries() {
        let cases = vec![
            (0, DayPart::Malam),
            (4, DayPart::Malam),
            (5, DayPart::Pagi),
            (10, DayPart::Pagi),
            (11, DayPart::Siang),
            (14, DayPart::Siang),
            (15, DayPart::Sore),
            (18, DayPart::Sore),
            (19, DayPart::Malam),
            (23, DayPart::Malam),
        ];

        for (hour, expected) in cases {
            assert_eq!(DayPart::from_hour(hour), Some(expected), "hour {}", hour);
        }

        assert_eq!(DayPart::from_hour(24), None);
    }

    #[test]
    fn day_part_labels_round_trip() {
        for part in DayPart::ALL {
            assert_eq!(DayPart::parse_label(part.label()), Some(part));
        }
        assert_eq!(DayPart::parse_label("Pagi"), None);
        assert_eq!(DayPart::parse_label("midnight"), None);
    }

    #[test]
    fn date_range_endpoints_inclusive() {
        let range = DateRange::new(date(2011, 1, 1), date(2011, 1, 31)).unwrap();

        assert!(range.contains(date(2011, 1, 1)));
        assert!(range.contains(date(2011, 1, 31)));
        assert!(!range.contains(date(2010, 12, 31)));
        assert!(!range.contains(date(2011, 2, 1)));
    }

    #[test]
    fn single_day_range_is_valid() {
        let day = date(2012, 6, 1);
        let range = DateRange::new(day, day).unwrap();
        assert!(range.contains(day));
    }

    #[test]
    fn reversed_range_is_rejected() {
        let err = DateRange::new(date(2011, 1, 2), date(2011, 1, 1)).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::InvalidDateRange { start, end }
                if start == date(2011, 1, 2) && end == date(2011, 1, 1)
        ));
    }

    #[test]
    fn year_labels_cover_codes_and_full_years() {
        assert_eq!(year_label(0), "2011");
        assert_eq!(year_label(1), "2012");
        assert_eq!(year_label(2011), "2011");
    }
}
