//! Chart selection and dispatch.
//!
//! The dashboard offers one chart per question. `ChartKind` names the
//! selectable charts, knows their presentation metadata, and
//! [`chart_data`] computes the summary rows for whichever chart the user
//! picked. The daily trend is not selectable; the dashboard always renders
//! it above the selector.

use serde::{Deserialize, Serialize};

use crate::api::types::{SeasonYearRow, TimeOfDayRow, WeekdayRow};
use crate::core::domain::RentalRecord;
use crate::services;

/// The dashboard's selectable charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// Season totals per year, grouped bars with one hue per year
    SeasonalPerformance,
    /// Totals across the four day parts
    TimeOfDayPattern,
    /// Weekday ranking with the quietest day first
    QuietestWeekday,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::SeasonalPerformance,
        ChartKind::TimeOfDayPattern,
        ChartKind::QuietestWeekday,
    ];

    /// Parse a chart kind from its CLI form.
    ///
    /// # Arguments
    /// * `s` - String representation ("season", "time-of-day", "weekday")
    ///
    /// # Returns
    /// * `Ok(ChartKind)` if valid
    /// * `Err` if invalid
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "season" => Ok(Self::SeasonalPerformance),
            "time-of-day" => Ok(Self::TimeOfDayPattern),
            "weekday" => Ok(Self::QuietestWeekday),
            _ => Err(format!(
                "Unknown chart: {}. Use 'season', 'time-of-day' or 'weekday'",
                s
            )),
        }
    }

    /// The CLI form of this chart kind.
    pub fn cli_name(self) -> &'static str {
        match self {
            Self::SeasonalPerformance => "season",
            Self::TimeOfDayPattern => "time-of-day",
            Self::QuietestWeekday => "weekday",
        }
    }

    /// How the renderer should draw this chart.
    pub fn style(self) -> ChartStyle {
        match self {
            Self::SeasonalPerformance => ChartStyle::GroupedBars,
            Self::TimeOfDayPattern => ChartStyle::Bars,
            Self::QuietestWeekday => ChartStyle::HorizontalBars,
        }
    }

    /// The dashboard question this chart answers, used as the selector label.
    pub fn question(self) -> &'static str {
        match self {
            Self::SeasonalPerformance => {
                "Bagaimana performa peminjaman sepeda pada setiap musim di tahun 2011 dan 2012?"
            }
            Self::TimeOfDayPattern => {
                "Bagaimana pola peminjaman sepeda pada pagi, siang, sore, dan malam?"
            }
            Self::QuietestWeekday => "Pada hari apa peminjaman sepeda paling sedikit?",
        }
    }

    /// The chart title.
    pub fn title(self) -> &'static str {
        match self {
            Self::SeasonalPerformance => {
                "Performa Peminjaman Sepeda di Setiap Musim (2011 vs 2012)"
            }
            Self::TimeOfDayPattern => "Pola Peminjaman Berdasarkan Waktu",
            Self::QuietestWeekday => "Peminjaman Sepeda Berdasarkan Hari",
        }
    }
}

/// Rendering style of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartStyle {
    /// Vertical bar groups, one group per category and one hue per series
    GroupedBars,
    /// Plain vertical bars
    Bars,
    /// Horizontal bars, ranked top to bottom
    HorizontalBars,
}

/// Summary rows for one selected chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "chart", content = "rows")]
pub enum ChartData {
    SeasonYear(Vec<SeasonYearRow>),
    TimeOfDay(Vec<TimeOfDayRow>),
    Weekday(Vec<WeekdayRow>),
}

impl ChartData {
    /// The chart kind these rows belong to.
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::SeasonYear(_) => ChartKind::SeasonalPerformance,
            Self::TimeOfDay(_) => ChartKind::TimeOfDayPattern,
            Self::Weekday(_) => ChartKind::QuietestWeekday,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::SeasonYear(rows) => rows.len(),
            Self::TimeOfDay(rows) => rows.len(),
            Self::Weekday(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute the summary rows for the selected chart.
pub fn chart_data(records: &[RentalRecord], kind: ChartKind) -> ChartData {
    match kind {
        ChartKind::SeasonalPerformance => {
            ChartData::SeasonYear(services::summarize_by_season_year(records))
        }
        ChartKind::TimeOfDayPattern => {
            ChartData::TimeOfDay(services::summarize_by_time_of_day(records))
        }
        ChartKind::QuietestWeekday => {
            ChartData::Weekday(services::summarize_by_weekday(records))
        }
    }
}
