//! Command-line chart feed.
//!
//! Loads the rental dataset, filters it to a date range and prints the
//! selected summary as pretty JSON on stdout. This is the non-Python sink
//! of the dashboard, useful for smoke tests and piping into other tools.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

use bikeshare_rust::api::charts::{chart_data, ChartData, ChartKind, ChartStyle};
use bikeshare_rust::dataset::{DashboardConfig, RentalDataset};
use bikeshare_rust::io::loaders::RentalDataLoader;
use bikeshare_rust::services;
use bikeshare_rust::transformations::filter_by_date_range;

const USAGE: &str = "\
Usage: render_charts [OPTIONS]

Options:
  --data PATH    CSV file to load (default: configured path or all_data.csv)
  --start DATE   Range start, YYYY-MM-DD (default: first dataset date)
  --end DATE     Range end, YYYY-MM-DD (default: last dataset date)
  --chart NAME   season | time-of-day | weekday | trend | overview
                 (default: overview; overview describes the whole dataset)
  -h, --help     Print this help";

/// Which output the CLI should print.
enum Output {
    Chart(ChartKind),
    Trend,
    Overview,
}

impl Output {
    fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "trend" => Ok(Self::Trend),
            "overview" => Ok(Self::Overview),
            _ => ChartKind::from_str(s).map(Self::Chart).map_err(|_| {
                format!(
                    "Unknown chart: {}. Use 'season', 'time-of-day', 'weekday', 'trend' or 'overview'",
                    s
                )
            }),
        }
    }
}

struct CliArgs {
    data: Option<PathBuf>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    output: Output,
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", value))
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut data = None;
    let mut start = None;
    let mut end = None;
    let mut output = Output::Overview;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--data" => {
                let value = iter.next().context("--data requires a file path")?;
                data = Some(PathBuf::from(value));
            }
            "--start" => {
                let value = iter.next().context("--start requires a date")?;
                start = Some(parse_date(value)?);
            }
            "--end" => {
                let value = iter.next().context("--end requires a date")?;
                end = Some(parse_date(value)?);
            }
            "--chart" => {
                let value = iter.next().context("--chart requires a chart name")?;
                output = Output::from_str(value).map_err(anyhow::Error::msg)?;
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other => bail!("Unknown argument: {}\n{}", other, USAGE),
        }
    }

    Ok(CliArgs {
        data,
        start,
        end,
        output,
    })
}

/// Chart rows bundled with their presentation metadata.
#[derive(Serialize)]
struct ChartFeed {
    title: &'static str,
    style: ChartStyle,
    #[serde(flatten)]
    data: ChartData,
}

fn load_dataset(cli: &CliArgs) -> Result<RentalDataset> {
    match &cli.data {
        Some(path) => RentalDataLoader::load_from_file(path),
        None => {
            let config = DashboardConfig::from_default_location()?;
            RentalDataLoader::load_from_file(&config.data_path())
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    let dataset = load_dataset(&cli)?;

    // The range defaults to the dataset span, matching the sidebar widgets.
    let start = cli.start.or_else(|| dataset.first_date());
    let end = cli.end.or_else(|| dataset.last_date());

    let records = match (start, end) {
        (Some(start), Some(end)) => filter_by_date_range(dataset.records(), start, end)?,
        _ => Vec::new(),
    };

    let json = match cli.output {
        Output::Chart(kind) => {
            let feed = ChartFeed {
                title: kind.title(),
                style: kind.style(),
                data: chart_data(&records, kind),
            };
            serde_json::to_string_pretty(&feed)?
        }
        Output::Trend => serde_json::to_string_pretty(&services::daily_trend(&records))?,
        Output::Overview => serde_json::to_string_pretty(&dataset.overview())?,
    };

    println!("{}", json);

    Ok(())
}

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        eprintln!("✗ {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_full_flag_set() {
        let cli = parse_args(&args(&[
            "--data",
            "rentals.csv",
            "--start",
            "2011-01-01",
            "--end",
            "2012-12-31",
            "--chart",
            "weekday",
        ]))
        .unwrap();

        assert_eq!(cli.data, Some(PathBuf::from("rentals.csv")));
        assert_eq!(cli.start, Some(NaiveDate::from_ymd_opt(2011, 1, 1).unwrap()));
        assert_eq!(cli.end, Some(NaiveDate::from_ymd_opt(2012, 12, 31).unwrap()));
        assert!(matches!(
            cli.output,
            Output::Chart(ChartKind::QuietestWeekday)
        ));
    }

    #[test]
    fn test_defaults_to_overview() {
        let cli = parse_args(&[]).unwrap();

        assert!(cli.data.is_none());
        assert!(cli.start.is_none());
        assert!(cli.end.is_none());
        assert!(matches!(cli.output, Output::Overview));
    }

    #[test]
    fn test_trend_output() {
        let cli = parse_args(&args(&["--chart", "trend"])).unwrap();
        assert!(matches!(cli.output, Output::Trend));
    }

    #[test]
    fn test_rejects_bad_date() {
        let result = parse_args(&args(&["--start", "01/02/2011"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_chart() {
        let result = parse_args(&args(&["--chart", "histogram"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        let result = parse_args(&args(&["--verbose"]));
        assert!(result.is_err());
    }

    #[test]
    fn test_flag_missing_value() {
        let result = parse_args(&args(&["--start"]));
        assert!(result.is_err());
    }
}
