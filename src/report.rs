//! Report rendering.
//!
//! A computed [`ChatReport`] can be rendered three ways:
//! - [`render_text`] — aligned console report (always available)
//! - [`to_json`] — pretty-printed JSON, feature `json-report`
//! - [`to_csv`] — the participant table as CSV with `;` delimiter,
//!   feature `csv-report`
//!
//! [`write_report`] dispatches on [`ReportFormat`] and writes to a file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
#[cfg(not(all(feature = "json-report", feature = "csv-report")))]
use crate::error::ChatlensError;
use crate::stats::ChatReport;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Human-readable console report (default).
    #[default]
    Text,

    /// Pretty-printed JSON of every report section.
    Json,

    /// Participant table as semicolon-delimited CSV.
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json", "csv"]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders the full report as an aligned console listing.
pub fn render_text(report: &ChatReport) -> String {
    let mut out = String::new();
    let s = &report.summary;

    out.push_str("💬 Chat report\n");
    out.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    out.push_str(&format!(
        "Messages:       {} ({} user, {} system)\n",
        s.total_messages, s.user_messages, s.system_messages
    ));
    out.push_str(&format!("Words:          {}\n", s.total_words));
    out.push_str(&format!("Media:          {}\n", s.media_messages));
    out.push_str(&format!("Links:          {}\n", s.link_count));
    out.push_str(&format!("Deleted:        {}\n", s.deleted_messages));
    out.push_str(&format!("Participants:   {}\n", s.unique_senders));
    if let (Some(first), Some(last)) = (s.first_message, s.last_message) {
        out.push_str(&format!(
            "Range:          {} – {} ({} days, {} active)\n",
            first.format("%Y-%m-%d %H:%M"),
            last.format("%Y-%m-%d %H:%M"),
            s.span_days,
            s.active_days
        ));
        out.push_str(&format!(
            "Pace:           {:.1} messages/day, {:.1} words/message\n",
            s.avg_messages_per_day, s.avg_words_per_message
        ));
    }

    let a = &report.activity;
    if let (Some(hour), Some(weekday)) = (a.peak_hour(), a.peak_weekday()) {
        out.push_str("\n⏰ Activity\n");
        out.push_str(&format!("Peak hour:      {hour:02}:00\n"));
        out.push_str(&format!("Peak weekday:   {weekday}\n"));
        if let Some(month) = a.peak_month() {
            out.push_str(&format!("Peak month:     {}\n", month.label()));
        }
        out.push_str(&format!(
            "Day split:      {} morning / {} afternoon / {} evening / {} night\n",
            a.periods.morning, a.periods.afternoon, a.periods.evening, a.periods.night
        ));
    }

    if !report.participants.entries.is_empty() {
        out.push_str("\n👥 Participants\n");
        for p in &report.participants.entries {
            out.push_str(&format!(
                "   {:<20} {:>6} messages  {:>5.1}%  {:>6} words\n",
                p.name, p.messages, p.share, p.words
            ));
        }
    }

    if !report.words.top.is_empty() {
        out.push_str("\n🔤 Top words\n");
        for w in &report.words.top {
            out.push_str(&format!("   {:<20} {:>6}\n", w.word, w.count));
        }
    }

    if !report.emoji.top.is_empty() {
        out.push_str(&format!("\n😀 Emoji ({} total)\n", report.emoji.total));
        for e in &report.emoji.top {
            out.push_str(&format!("   {:<4} {:>6}\n", e.emoji, e.count));
        }
    }

    out
}

/// Serializes the full report as pretty-printed JSON.
#[cfg(feature = "json-report")]
pub fn to_json(report: &ChatReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Renders the participant table as CSV with `;` delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Participant`, `Messages`, `Share`, `Words`, `Media`
/// - Encoding: UTF-8
#[cfg(feature = "csv-report")]
pub fn to_csv(report: &ChatReport) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(["Participant", "Messages", "Share", "Words", "Media"])?;

    for p in &report.participants.entries {
        writer.write_record([
            p.name.as_str(),
            &p.messages.to_string(),
            &format!("{:.2}", p.share),
            &p.words.to_string(),
            &p.media.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Renders the report in the requested format.
pub fn render(report: &ChatReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        #[cfg(feature = "json-report")]
        ReportFormat::Json => to_json(report),
        #[cfg(feature = "csv-report")]
        ReportFormat::Csv => to_csv(report),
        #[cfg(not(all(feature = "json-report", feature = "csv-report")))]
        other => Err(ChatlensError::invalid_format(format!(
            "report format {other} is not enabled in this build"
        ))),
    }
}

/// Renders the report and writes it to a file.
pub fn write_report(report: &ChatReport, path: &Path, format: ReportFormat) -> Result<()> {
    let rendered = render(report, format)?;
    fs::write(path, rendered)?;
    Ok(())
}
