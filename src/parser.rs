//! Chat export parser.
//!
//! Turns the raw text of an exported chat into an ordered `Vec<Message>`.
//! Exports vary by platform and locale; two line shapes are recognized:
//!
//! - Bracketed: `[1/15/24, 10:30:45 AM] Alice: Message`
//! - Dashed: `15/01/2024, 10:30 - Alice: Message`
//!
//! The shape (and 12h vs 24h clock, 2- vs 4-digit years, dot vs slash
//! separators) is detected from the first lines of the file. Day-first vs
//! month-first ordering is *not* detectable and must be supplied via
//! [`DateOrder`].
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::DateOrder;
//! use chatlens::parser::ExportParser;
//!
//! let export = "12/1/23, 10:05 AM - Alice: Hello\nworld";
//! let parser = ExportParser::new(DateOrder::MonthFirst);
//! let messages = parser.parse_str(export)?;
//!
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].content(), "Hello\nworld");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use log::warn;
use regex::Regex;

use crate::config::{DateOrder, ParserConfig};
use crate::error::{ChatlensError, Result};
use crate::message::{Message, Sender};

/// How many leading non-blank lines are sampled for shape detection.
const DETECT_SAMPLE: usize = 20;

/// Recognized message-start line shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineShape {
    /// `[date, time] Sender: Content`
    Bracketed,
    /// `date, time - Sender: Content`
    Dashed,
}

impl LineShape {
    /// Start-pattern regex for this shape.
    ///
    /// Captures: 1 = date, 2 = time, 3 = optional sender, 4 = content.
    /// A start line without a colon-delimited sender (group 3 absent) is a
    /// system notification.
    fn pattern(self) -> &'static str {
        match self {
            LineShape::Bracketed => {
                r"^\[(\d{1,2}[./]\d{1,2}[./]\d{2,4}|\d{4}-\d{2}-\d{2}), (\d{1,2}:\d{2}(?::\d{2})?(?: ?[AaPp][Mm])?)\] (?:([^:]+?): )?(.*)$"
            }
            LineShape::Dashed => {
                r"^(\d{1,2}[./]\d{1,2}[./]\d{2,4}|\d{4}-\d{2}-\d{2}), (\d{1,2}:\d{2}(?::\d{2})?(?: ?[AaPp][Mm])?) - (?:([^:]+?): )?(.*)$"
            }
        }
    }
}

/// Candidate chrono format strings for one date ordering.
///
/// Ordered roughly most-common-first; the first match wins. ISO dates are
/// unambiguous and accepted under either hint.
fn timestamp_formats(order: DateOrder) -> &'static [&'static str] {
    match order {
        DateOrder::DayFirst => &[
            "%d/%m/%y, %H:%M",
            "%d/%m/%y, %H:%M:%S",
            "%d/%m/%y, %I:%M %p",
            "%d/%m/%y, %I:%M:%S %p",
            "%d/%m/%Y, %H:%M",
            "%d/%m/%Y, %H:%M:%S",
            "%d/%m/%Y, %I:%M %p",
            "%d/%m/%Y, %I:%M:%S %p",
            "%d.%m.%y, %H:%M",
            "%d.%m.%y, %H:%M:%S",
            "%d.%m.%y, %I:%M %p",
            "%d.%m.%y, %I:%M:%S %p",
            "%d.%m.%Y, %H:%M",
            "%d.%m.%Y, %H:%M:%S",
            "%d.%m.%Y, %I:%M %p",
            "%d.%m.%Y, %I:%M:%S %p",
            "%Y-%m-%d, %H:%M",
            "%Y-%m-%d, %H:%M:%S",
        ],
        DateOrder::MonthFirst => &[
            "%m/%d/%y, %I:%M %p",
            "%m/%d/%y, %I:%M:%S %p",
            "%m/%d/%y, %H:%M",
            "%m/%d/%y, %H:%M:%S",
            "%m/%d/%Y, %I:%M %p",
            "%m/%d/%Y, %I:%M:%S %p",
            "%m/%d/%Y, %H:%M",
            "%m/%d/%Y, %H:%M:%S",
            "%m.%d.%y, %H:%M",
            "%m.%d.%y, %H:%M:%S",
            "%m.%d.%y, %I:%M %p",
            "%m.%d.%y, %I:%M:%S %p",
            "%m.%d.%Y, %H:%M",
            "%m.%d.%Y, %H:%M:%S",
            "%m.%d.%Y, %I:%M %p",
            "%m.%d.%Y, %I:%M:%S %p",
            "%Y-%m-%d, %H:%M",
            "%Y-%m-%d, %H:%M:%S",
        ],
    }
}

/// Strips invisible formatting characters some export platforms insert
/// around timestamps, and normalizes exotic spaces.
///
/// Removed: LRM/RLM, directional embeddings/overrides (U+202A..U+202E),
/// directional isolates (U+2066..U+2069), ALM, BOM, and stray control
/// characters such as `\r`. U+202F (narrow no-break space, iOS puts it
/// before AM/PM) and U+00A0 become plain spaces.
fn clean_line(line: &str) -> String {
    line.chars()
        .filter_map(|c| match c {
            '\u{200E}' | '\u{200F}' | '\u{061C}' | '\u{FEFF}' => None,
            '\u{202A}'..='\u{202E}' => None,
            '\u{2066}'..='\u{2069}' => None,
            '\u{202F}' | '\u{00A0}' => Some(' '),
            c if c.is_control() && c != '\t' => None,
            c => Some(c),
        })
        .collect()
}

/// Parse a `date, time` pair into a timestamp.
///
/// Exports carry wall-clock time with no zone; the naive value is fixed to
/// UTC unchanged so hour-of-day statistics stay faithful to the sender's
/// clock.
fn parse_timestamp(date_str: &str, time_str: &str, order: DateOrder) -> Option<DateTime<Utc>> {
    let datetime_str = format!("{date_str}, {time_str}");

    for format in timestamp_formats(order) {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&datetime_str, format) {
            return Some(naive.and_utc());
        }
    }

    None
}

/// Parser for plain-text chat exports.
///
/// Holds its compiled patterns and configuration; each [`parse_str`] call is
/// independent and side-effect-free, so re-parsing the same text yields an
/// identical sequence.
///
/// [`parse_str`]: ExportParser::parse_str
pub struct ExportParser {
    config: ParserConfig,
    bracketed: Regex,
    dashed: Regex,
}

impl ExportParser {
    /// Creates a parser with the given locale hint and default settings.
    pub fn new(date_order: DateOrder) -> Self {
        Self::with_config(ParserConfig::new(date_order))
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            bracketed: Regex::new(LineShape::Bracketed.pattern()).unwrap(),
            dashed: Regex::new(LineShape::Dashed.pattern()).unwrap(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses an export file.
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let content = fs::read_to_string(path)?;
        self.parse_content(&content).map_err(|e| match e {
            ChatlensError::Parse { message, .. } => {
                ChatlensError::parse(message, Some(path.to_path_buf()))
            }
            other => other,
        })
    }

    /// Parses export content from a string.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Message>> {
        self.parse_content(content)
    }

    fn regex_for(&self, shape: LineShape) -> &Regex {
        match shape {
            LineShape::Bracketed => &self.bracketed,
            LineShape::Dashed => &self.dashed,
        }
    }

    /// Detect the line shape by scoring a sample of leading non-blank lines.
    fn detect_shape(&self, lines: &[String]) -> Option<LineShape> {
        let mut bracketed_score = 0usize;
        let mut dashed_score = 0usize;

        for line in lines
            .iter()
            .filter(|l| !l.trim().is_empty())
            .take(DETECT_SAMPLE)
        {
            if self.bracketed.is_match(line) {
                bracketed_score += 1;
            }
            if self.dashed.is_match(line) {
                dashed_score += 1;
            }
        }

        if bracketed_score == 0 && dashed_score == 0 {
            return None;
        }
        if bracketed_score >= dashed_score {
            Some(LineShape::Bracketed)
        } else {
            Some(LineShape::Dashed)
        }
    }

    fn parse_content(&self, content: &str) -> Result<Vec<Message>> {
        let lines: Vec<String> = content.lines().map(clean_line).collect();

        // Empty export: empty sequence, not an error.
        if lines.iter().all(|l| l.trim().is_empty()) {
            return Ok(vec![]);
        }

        let shape = self.detect_shape(&lines).ok_or_else(|| {
            ChatlensError::parse(
                "no recognizable message lines found; \
                 expected `[date, time] Sender: text` or `date, time - Sender: text`",
                None,
            )
        })?;
        let regex = self.regex_for(shape);

        let mut messages: Vec<Message> = Vec::new();
        let mut recognized = 0usize;
        // Continuation lines after a dropped start line are dropped with it.
        let mut last_was_dropped = false;

        for (idx, line) in lines.iter().enumerate() {
            if line.trim().is_empty() && messages.is_empty() {
                continue;
            }

            if let Some(caps) = regex.captures(line) {
                recognized += 1;

                let date_str = caps.get(1).map_or("", |m| m.as_str());
                let time_str = caps.get(2).map_or("", |m| m.as_str());
                let sender = caps.get(3).map(|m| m.as_str().trim());
                let msg_content = caps.get(4).map_or("", |m| m.as_str());

                let Some(timestamp) = parse_timestamp(date_str, time_str, self.config.date_order)
                else {
                    warn!(
                        "line {}: timestamp '{date_str}, {time_str}' matches no known format, skipping",
                        idx + 1
                    );
                    last_was_dropped = true;
                    continue;
                };

                let sender = match sender {
                    Some(name) if !name.is_empty() => Sender::user(name),
                    _ => Sender::System,
                };

                if self.config.skip_system && sender.is_system() {
                    last_was_dropped = true;
                    continue;
                }

                messages.push(Message::new(timestamp, sender, msg_content));
                last_was_dropped = false;
            } else if last_was_dropped {
                continue;
            } else if let Some(last) = messages.last_mut() {
                // Continuation of a multi-line message.
                last.content.push('\n');
                last.content.push_str(line);
            }
            // Orphan lines before the first message (export headers) are
            // skipped silently.
        }

        if recognized == 0 {
            return Err(ChatlensError::parse(
                "no recognizable message lines found",
                None,
            ));
        }

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn parser(order: DateOrder) -> ExportParser {
        ExportParser::new(order)
    }

    #[test]
    fn test_single_line_message() {
        let messages = parser(DateOrder::MonthFirst)
            .parse_str("12/1/23, 10:05 AM - Alice: Hello")
            .unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender().name(), Some("Alice"));
        assert_eq!(messages[0].content(), "Hello");
        let ts = messages[0].timestamp();
        assert_eq!((ts.month(), ts.day(), ts.hour(), ts.minute()), (12, 1, 10, 5));
    }

    #[test]
    fn test_multiline_continuation() {
        let messages = parser(DateOrder::MonthFirst)
            .parse_str("12/1/23, 10:05 AM - Alice: Hello\nworld")
            .unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "Hello\nworld");
    }

    #[test]
    fn test_system_message_without_sender() {
        let messages = parser(DateOrder::MonthFirst)
            .parse_str("12/1/23, 10:06 AM - Bob created group \"Trip\"")
            .unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_system());
        assert_eq!(messages[0].content(), "Bob created group \"Trip\"");
    }

    #[test]
    fn test_date_order_resolves_ambiguity() {
        let line = "12/1/23, 10:05 - Alice: Hi";

        let month_first = parser(DateOrder::MonthFirst).parse_str(line).unwrap();
        assert_eq!(month_first[0].timestamp().month(), 12);
        assert_eq!(month_first[0].timestamp().day(), 1);

        let day_first = parser(DateOrder::DayFirst).parse_str(line).unwrap();
        assert_eq!(day_first[0].timestamp().month(), 1);
        assert_eq!(day_first[0].timestamp().day(), 12);
    }

    #[test]
    fn test_bracketed_shape() {
        let export = "[1/15/24, 10:30:45 AM] Alice: Hello\n[1/15/24, 10:31:00 AM] Bob: Hi";
        let messages = parser(DateOrder::MonthFirst).parse_str(export).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].timestamp().second(), 45);
        assert_eq!(messages[1].sender().name(), Some("Bob"));
    }

    #[test]
    fn test_dotted_dates_24h() {
        let export = "26.10.2025, 20:40 - Alice: Guten Abend";
        let messages = parser(DateOrder::DayFirst).parse_str(export).unwrap();
        assert_eq!(messages[0].timestamp().day(), 26);
        assert_eq!(messages[0].timestamp().month(), 10);
        assert_eq!(messages[0].timestamp().hour(), 20);
    }

    #[test]
    fn test_iso_dates_accepted_under_either_hint() {
        let export = "2023-12-01, 22:15 - Alice: late";
        for order in [DateOrder::DayFirst, DateOrder::MonthFirst] {
            let messages = parser(order).parse_str(export).unwrap();
            assert_eq!(messages[0].timestamp().month(), 12);
            assert_eq!(messages[0].timestamp().day(), 1);
        }
    }

    #[test]
    fn test_directional_marks_stripped() {
        // iOS wraps timestamps in LRM and uses narrow no-break space before AM.
        let export = "\u{200E}[1/15/24, 10:30\u{202F}AM] Alice: \u{200E}image omitted";
        let messages = parser(DateOrder::MonthFirst).parse_str(export).unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_media());
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(parser(DateOrder::DayFirst).parse_str("").unwrap().is_empty());
        assert!(parser(DateOrder::DayFirst).parse_str("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_unrecognizable_input_is_error() {
        let err = parser(DateOrder::DayFirst)
            .parse_str("just some notes\nnothing like a chat log")
            .unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_header_lines_skipped_silently() {
        let export = "Chat history with Alice\n\n12/1/23, 10:05 AM - Alice: Hello";
        let messages = parser(DateOrder::MonthFirst).parse_str(export).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "Hello");
    }

    #[test]
    fn test_invalid_timestamp_line_dropped() {
        // 31/2 is no calendar date under day-first: drop the line, keep going.
        let export = "31/2/23, 10:05 - Alice: bad date\n15/2/23, 10:06 - Bob: fine";
        let messages = parser(DateOrder::DayFirst).parse_str(export).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender().name(), Some("Bob"));
    }

    #[test]
    fn test_continuation_after_dropped_line_is_dropped() {
        let export = "31/2/23, 10:05 - Alice: bad date\nstray continuation\n15/2/23, 10:06 - Bob: fine";
        let messages = parser(DateOrder::DayFirst).parse_str(export).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content(), "fine");
    }

    #[test]
    fn test_skip_system_config() {
        let export = "12/1/23, 10:05 AM - Messages are end-to-end encrypted\n12/1/23, 10:06 AM - Alice: hi";
        let config = ParserConfig::new(DateOrder::MonthFirst).with_skip_system(true);
        let messages = ExportParser::with_config(config).parse_str(export).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender().name(), Some("Alice"));
    }

    #[test]
    fn test_content_with_colon_keeps_sender_split() {
        let messages = parser(DateOrder::MonthFirst)
            .parse_str("12/1/23, 10:05 AM - Alice: note: buy milk")
            .unwrap();
        assert_eq!(messages[0].sender().name(), Some("Alice"));
        assert_eq!(messages[0].content(), "note: buy milk");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let export = "12/1/23, 10:05 AM - Alice: Hello\nworld\n12/1/23, 10:06 AM - Bob created group \"Trip\"";
        let p = parser(DateOrder::MonthFirst);
        let first = p.parse_str(export).unwrap();
        let second = p.parse_str(export).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_timestamps_non_decreasing_in_chronological_export() {
        let export = "\
12/1/23, 10:05 AM - Alice: one
12/1/23, 10:05 AM - Bob: two
12/1/23, 10:07 AM - Alice: three";
        let messages = parser(DateOrder::MonthFirst).parse_str(export).unwrap();
        assert!(messages.windows(2).all(|w| w[0].timestamp() <= w[1].timestamp()));
    }

    #[test]
    fn test_clean_line() {
        assert_eq!(clean_line("a\u{200E}b\u{200F}c"), "abc");
        assert_eq!(clean_line("10:30\u{202F}AM"), "10:30 AM");
        assert_eq!(clean_line("text\r"), "text");
        assert_eq!(clean_line("\u{FEFF}start"), "start");
    }
}
