//! `tzb` CLI - compute UTC period boundaries for local dates from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Start of the day, as a UTC instant
//! tzb --timezone America/Denver day 2018-09-01
//!
//! # Start of the week, weeks beginning on Monday
//! tzb -t America/Denver week 2018-09-01 --week-start monday
//!
//! # Timezone from the environment, JSON output
//! TZB_TIMEZONE=America/Denver tzb --format json month 2018-09-03
//!
//! # Project a naive local timestamp onto UTC
//! tzb -t America/New_York to-utc 2018-03-11T02:30:00
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tz_boundary::{Period, TemporalInput, WeekStart};

#[derive(Parser)]
#[command(
    name = "tzb",
    version,
    about = "Local date -> UTC instant of its day, week, month or year boundary"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// IANA timezone the input is read in (e.g. "America/Denver")
    #[arg(short, long, global = true, env = "TZB_TIMEZONE")]
    timezone: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log DST disambiguation decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Start of the day containing INPUT
    Day {
        /// YYYY-MM-DD date, YYYY-MM-DDTHH:MM:SS local time, or RFC 3339 timestamp
        input: String,
    },
    /// Start of the week containing INPUT
    Week {
        /// YYYY-MM-DD date, YYYY-MM-DDTHH:MM:SS local time, or RFC 3339 timestamp
        input: String,
        /// First day of the week: a day name or ISO number 1 (Monday) - 7 (Sunday)
        #[arg(short, long, env = "TZB_WEEK_START")]
        week_start: Option<String>,
    },
    /// Start of the month containing INPUT
    Month {
        /// YYYY-MM-DD date, YYYY-MM-DDTHH:MM:SS local time, or RFC 3339 timestamp
        input: String,
    },
    /// Start of the year containing INPUT
    Year {
        /// YYYY-MM-DD date, YYYY-MM-DDTHH:MM:SS local time, or RFC 3339 timestamp
        input: String,
    },
    /// Convert a local timestamp (YYYY-MM-DDTHH:MM:SS) to UTC
    ToUtc {
        /// Local wall-clock timestamp with no offset
        local: String,
    },
}

/// JSON shape of a computed boundary.
#[derive(Serialize)]
struct BoundaryReport {
    boundary: &'static str,
    input: String,
    timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    week_start: Option<WeekStart>,
    utc: String,
    local: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let timezone = cli
        .timezone
        .context("No timezone given. Pass --timezone or set TZB_TIMEZONE.")?;

    let (boundary, raw, week_start, utc) = match cli.command {
        Commands::Day { input } => {
            let utc = compute(&input, &timezone, Period::Day)?;
            ("day", input, None, utc)
        }
        Commands::Week { input, week_start } => {
            let week_start = match week_start.as_deref() {
                Some(raw) => raw.parse::<WeekStart>()?,
                None => WeekStart::default(),
            };
            let utc = compute(&input, &timezone, Period::Week(week_start))?;
            ("week", input, Some(week_start), utc)
        }
        Commands::Month { input } => {
            let utc = compute(&input, &timezone, Period::Month)?;
            ("month", input, None, utc)
        }
        Commands::Year { input } => {
            let utc = compute(&input, &timezone, Period::Year)?;
            ("year", input, None, utc)
        }
        Commands::ToUtc { local } => {
            let naive = parse_naive(&local)?;
            let utc = tz_boundary::to_utc(&timezone, naive)
                .with_context(|| format!("Failed to convert '{}' to UTC", local))?;
            ("to-utc", local, None, utc)
        }
    };

    let utc_text = utc.to_rfc3339_opts(SecondsFormat::AutoSi, true);
    match cli.format {
        OutputFormat::Text => println!("{}", utc_text),
        OutputFormat::Json => {
            let tz = tz_boundary::parse_timezone(&timezone)?;
            let report = BoundaryReport {
                boundary,
                input: raw,
                timezone,
                week_start,
                utc: utc_text,
                local: utc
                    .with_timezone(&tz)
                    .to_rfc3339_opts(SecondsFormat::AutoSi, false),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// `--verbose` forces debug level; otherwise `RUST_LOG` decides.
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn compute(raw: &str, timezone: &str, period: Period) -> Result<DateTime<Utc>> {
    let input = parse_input(raw)?;
    tz_boundary::start_of_period_utc(input, timezone, period)
        .with_context(|| format!("Failed to compute start of {} for '{}'", period.name(), raw))
}

/// Pick the input shape from the text.
///
/// - `2018-09-01` goes through the library's strict date parser
/// - `2018-09-01T10:00:00` is a naive local timestamp
/// - `2018-09-01T10:00:00+09:00` keeps its wall clock and drops the offset,
///   since zoned inputs are reinterpreted in `--timezone` anyway
///
/// The date part of a timestamp follows the same `YYYY-MM-DD` rule as a bare date.
fn parse_input(raw: &str) -> Result<TemporalInput> {
    if !raw.contains('T') {
        return Ok(TemporalInput::from(raw));
    }
    check_date_part(raw)?;
    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return Ok(TemporalInput::Local(zoned.naive_local()));
    }
    parse_naive(raw).map(TemporalInput::Local)
}

fn parse_naive(raw: &str) -> Result<NaiveDateTime> {
    check_date_part(raw)?;
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").with_context(|| {
        format!(
            "Invalid local timestamp '{}'. Expected YYYY-MM-DDTHH:MM:SS",
            raw
        )
    })
}

/// chrono's `%m` and `%d` accept unpadded fields; the date part must not.
fn check_date_part(raw: &str) -> Result<()> {
    let date = raw.split_once('T').map_or(raw, |(date, _)| date);
    tz_boundary::parse_date_string(date)?;
    Ok(())
}
