//! Filter messages by date range and participant.
//!
//! [`FilterConfig`] narrows a parsed sequence before statistics are
//! computed; this is what backs per-participant views and date-bounded
//! reports. Filters combine with AND logic.
//!
//! # Examples
//!
//! ```
//! use chatlens::filter::{FilterConfig, apply_filters};
//! use chatlens::Message;
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
//! let messages = vec![
//!     Message::user(ts, "Alice", "Hello"),
//!     Message::user(ts, "Bob", "Hi there"),
//!     Message::user(ts, "Alice", "How are you?"),
//! ];
//!
//! // Case-insensitive sender matching
//! let config = FilterConfig::new().with_sender("alice");
//! let filtered = apply_filters(messages, &config);
//!
//! assert_eq!(filtered.len(), 2);
//! ```
//!
//! # Behavior Notes
//!
//! - System messages are excluded when a sender filter is active
//! - Sender matching is ASCII case-insensitive
//! - Date bounds are inclusive whole days

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{ChatlensError, Result};
use crate::message::Message;

/// Configuration for filtering messages by date and sender.
///
/// # Example
///
/// ```
/// use chatlens::filter::FilterConfig;
///
/// # fn main() -> chatlens::error::Result<()> {
/// let config = FilterConfig::new()
///     .with_sender("Alice")
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
/// assert!(config.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only messages on or before this timestamp.
    pub before: Option<DateTime<Utc>>,

    /// Include only messages from this sender (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Format: `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date: &str) -> Result<Self> {
        let parsed = parse_date(date)?;
        // Start of the day to include the full day
        self.after = Some(parsed.and_hms_opt(0, 0, 0).unwrap().and_utc());
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Format: `YYYY-MM-DD`.
    pub fn with_date_to(mut self, date: &str) -> Result<Self> {
        let parsed = parse_date(date)?;
        // End of the day to include the full day
        self.before = Some(parsed.and_hms_opt(23, 59, 59).unwrap().and_utc());
        Ok(self)
    }

    /// Sets the sender filter (case-insensitive).
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    fn matches(&self, msg: &Message) -> bool {
        if let Some(after) = self.after {
            if msg.timestamp() < after {
                return false;
            }
        }

        if let Some(before) = self.before {
            if msg.timestamp() > before {
                return false;
            }
        }

        if let Some(ref from) = self.from {
            match msg.sender().name() {
                Some(name) => {
                    if !name.eq_ignore_ascii_case(from) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        true
    }
}

fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ChatlensError::invalid_date(date))
}

/// Filters messages according to the configuration.
///
/// Returns only the messages matching all active filters, preserving order.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect()
}
