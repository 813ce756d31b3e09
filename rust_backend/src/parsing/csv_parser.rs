use anyhow::{Context, Result};
use chrono::NaiveDate;
use polars::prelude::*;
use std::path::Path;

use crate::core::domain::{DayPart, RentalRecord, Season, Weekday};

/// Parse a rental CSV file into a Polars DataFrame
pub fn parse_rentals_csv(csv_path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .context("Failed to parse CSV into DataFrame")
}

/// Parse a rental CSV file and convert to RentalRecord structures
pub fn parse_rentals_csv_to_records(csv_path: &Path) -> Result<Vec<RentalRecord>> {
    let df = parse_rentals_csv(csv_path)?;
    dataframe_to_records(&df)
}

/// Convert a Polars DataFrame to RentalRecord structures.
///
/// Expects the merged dashboard schema: `dteday`, `yr`, `season`,
/// `weekday`, `hour_group`, `casual`, `registered`, `cnt`. Integer columns
/// are cast to `Int64` first so plain integer CSV cells convert regardless
/// of the width Polars inferred. Any missing column, unparseable date,
/// unknown category, or negative count fails with row context.
pub fn dataframe_to_records(df: &DataFrame) -> Result<Vec<RentalRecord>> {
    let height = df.height();
    let mut records = Vec::with_capacity(height);

    let dates = df
        .column("dteday")
        .context("Missing 'dteday' column")?
        .str()
        .context("Column 'dteday' must contain dates as text")?;
    let hour_groups = df
        .column("hour_group")
        .context("Missing 'hour_group' column")?
        .str()
        .context("Column 'hour_group' must contain day-part labels")?;

    let years = int_column(df, "yr")?;
    let years = years.i64()?;
    let seasons = int_column(df, "season")?;
    let seasons = seasons.i64()?;
    let weekdays = int_column(df, "weekday")?;
    let weekdays = weekdays.i64()?;
    let casuals = int_column(df, "casual")?;
    let casuals = casuals.i64()?;
    let registereds = int_column(df, "registered")?;
    let registereds = registereds.i64()?;
    let cnts = int_column(df, "cnt")?;
    let cnts = cnts.i64()?;

    for i in 0..height {
        let date_str = dates
            .get(i)
            .with_context(|| format!("Missing dteday at row {}", i))?;
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .with_context(|| format!("Invalid dteday '{}' at row {}", date_str, i))?;

        let year = years
            .get(i)
            .with_context(|| format!("Missing yr at row {}", i))?;
        let year = u16::try_from(year)
            .ok()
            .with_context(|| format!("Invalid year code {} at row {}", year, i))?;

        let season_code = seasons
            .get(i)
            .with_context(|| format!("Missing season at row {}", i))?;
        let season = u8::try_from(season_code)
            .ok()
            .and_then(Season::from_code)
            .with_context(|| format!("Unknown season code {} at row {}", season_code, i))?;

        let weekday_code = weekdays
            .get(i)
            .with_context(|| format!("Missing weekday at row {}", i))?;
        let weekday = u8::try_from(weekday_code)
            .ok()
            .and_then(Weekday::from_code)
            .with_context(|| format!("Unknown weekday code {} at row {}", weekday_code, i))?;

        let label = hour_groups
            .get(i)
            .with_context(|| format!("Missing hour_group at row {}", i))?;
        let day_part = DayPart::parse_label(label)
            .with_context(|| format!("Unknown hour_group '{}' at row {}", label, i))?;

        let casual = count_value(casuals.get(i), "casual", i)?;
        let registered = count_value(registereds.get(i), "registered", i)?;
        let cnt = count_value(cnts.get(i), "cnt", i)?;

        records.push(RentalRecord {
            date,
            year,
            season,
            weekday,
            day_part,
            casual,
            registered,
            cnt,
        });
    }

    Ok(records)
}

/// Fetch a column and cast it to Int64 so downstream access is uniform.
fn int_column(df: &DataFrame, name: &str) -> Result<Column> {
    df.column(name)
        .with_context(|| format!("Missing '{}' column", name))?
        .cast(&DataType::Int64)
        .with_context(|| format!("Column '{}' must contain integers", name))
}

/// Convert one integer cell into a non-negative count.
fn count_value(value: Option<i64>, name: &str, row: usize) -> Result<u32> {
    let raw = value.with_context(|| format!("Missing {} at row {}", name, row))?;
    u32::try_from(raw)
        .ok()
        .with_context(|| format!("Invalid {} count {} at row {}", name, raw, row))
}
