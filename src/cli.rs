//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`DateOrderArg`] - locale hint for ambiguous dates
//! - [`FormatArg`] - report format options
//!
//! The value enums convert into their library counterparts
//! ([`DateOrder`](crate::config::DateOrder),
//! [`ReportFormat`](crate::report::ReportFormat)) so the library itself
//! stays free of CLI framework types.

use clap::{Parser, ValueEnum};

use crate::config::DateOrder;
use crate::report::ReportFormat;

/// Analyze a plain-text chat export: message counts, activity histograms,
/// word and emoji frequencies, per-participant breakdowns.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt --date-order day-first
    chatlens chat.txt -d month-first --format json -o report.json
    chatlens chat.txt -d day-first --user Alice --after 2024-01-01
    chatlens chat.txt -d day-first --top 10 --skip-system")]
pub struct Args {
    /// Path to the exported chat file
    pub input: String,

    /// How the export writes ambiguous numeric dates (never guessed)
    #[arg(short = 'd', long, value_enum, value_name = "ORDER")]
    pub date_order: DateOrderArg,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Only analyze messages from this participant
    #[arg(long, value_name = "USER")]
    pub user: Option<String>,

    /// Only analyze messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only analyze messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Length of the word/emoji/participant ranking tables
    #[arg(long, default_value_t = 20, value_name = "N")]
    pub top: usize,

    /// Drop system notifications while parsing
    #[arg(long)]
    pub skip_system: bool,
}

/// Locale hint for ambiguous numeric dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum DateOrderArg {
    /// `31/12/23`: day, month, year
    #[value(alias = "dmy")]
    DayFirst,

    /// `12/31/23`: month, day, year
    #[value(alias = "mdy")]
    MonthFirst,
}

impl From<DateOrderArg> for DateOrder {
    fn from(arg: DateOrderArg) -> Self {
        match arg {
            DateOrderArg::DayFirst => DateOrder::DayFirst,
            DateOrderArg::MonthFirst => DateOrder::MonthFirst,
        }
    }
}

impl std::fmt::Display for DateOrderArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", DateOrder::from(*self))
    }
}

/// Report format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum FormatArg {
    /// Human-readable console report (default)
    #[default]
    Text,

    /// Pretty-printed JSON of every report section
    Json,

    /// Participant table as semicolon-delimited CSV
    Csv,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Csv => ReportFormat::Csv,
        }
    }
}

impl std::fmt::Display for FormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ReportFormat::from(*self))
    }
}
