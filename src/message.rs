//! Parsed message records.
//!
//! This module provides [`Message`], one parsed unit of a chat export, and
//! [`Sender`], the tagged origin of a message. The parser produces an ordered
//! `Vec<Message>`; the stats layer consumes it.
//!
//! # Overview
//!
//! A message consists of:
//! - `timestamp` — always present; a line without a parseable timestamp never
//!   becomes a record
//! - `sender` — [`Sender::User`] with a display name, or [`Sender::System`]
//!   for automated notifications (group changes, encryption notice)
//! - `content` — the text after the timestamp/sender prefix; multi-line
//!   messages keep their embedded newlines
//!
//! # Examples
//!
//! ```
//! use chatlens::{Message, Sender};
//! use chrono::{TimeZone, Utc};
//!
//! let ts = Utc.with_ymd_and_hms(2023, 12, 1, 10, 5, 0).unwrap();
//! let msg = Message::user(ts, "Alice", "Hello\nworld");
//!
//! assert_eq!(msg.sender().name(), Some("Alice"));
//! assert_eq!(msg.content(), "Hello\nworld");
//! assert_eq!(msg.word_count(), 2);
//! assert!(!msg.is_system());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Android export media placeholder.
const MEDIA_OMITTED: &str = "<Media omitted>";

/// iOS export media placeholders (whole-content matches after trimming).
const IOS_MEDIA_PLACEHOLDERS: [&str; 6] = [
    "image omitted",
    "video omitted",
    "audio omitted",
    "GIF omitted",
    "sticker omitted",
    "document omitted",
];

/// Who sent a message.
///
/// Chat exports interleave human messages with automated notifications
/// ("Bob created group \"Trip\"", the end-to-end encryption notice). Those
/// notification lines carry no colon-delimited sender name, so the parser
/// tags them [`Sender::System`] instead of smuggling a sentinel string
/// through a nullable field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// A human participant, identified by display name.
    User(String),
    /// An automated notification with no human sender.
    System,
}

impl Sender {
    /// Creates a user sender from a display name.
    pub fn user(name: impl Into<String>) -> Self {
        Sender::User(name.into())
    }

    /// Returns the display name for user senders, `None` for system.
    pub fn name(&self) -> Option<&str> {
        match self {
            Sender::User(name) => Some(name),
            Sender::System => None,
        }
    }

    /// Returns `true` for [`Sender::System`].
    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User(name) => write!(f, "{name}"),
            Sender::System => write!(f, "SYSTEM"),
        }
    }
}

/// One parsed unit of a chat export.
///
/// Records are created once during parsing, held in memory as an ordered
/// sequence for the duration of one analysis run, and discarded afterwards.
/// Timestamps follow export order, which is chronological.
///
/// Derived per-message facts (`word_count`, `is_media`, `is_deleted`) are
/// computed on demand rather than stored; the stats layer calls them while
/// aggregating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent. Exports carry wall-clock time without a
    /// zone; it is fixed to UTC unchanged.
    pub timestamp: DateTime<Utc>,

    /// Who sent the message.
    pub sender: Sender,

    /// Text content after the timestamp/sender prefix.
    ///
    /// Multi-line messages contain embedded newlines. Media attachments
    /// appear as text placeholders like `<Media omitted>`.
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(timestamp: DateTime<Utc>, sender: Sender, content: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender,
            content: content.into(),
        }
    }

    /// Creates a user message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::Message;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    /// let msg = Message::user(ts, "Alice", "Hello!");
    /// assert_eq!(msg.sender().name(), Some("Alice"));
    /// ```
    pub fn user(
        timestamp: DateTime<Utc>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::new(timestamp, Sender::User(name.into()), content)
    }

    /// Creates a system message.
    pub fn system(timestamp: DateTime<Utc>, content: impl Into<String>) -> Self {
        Self::new(timestamp, Sender::System, content)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the sender.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    // =========================================================================
    // Derived flags
    // =========================================================================

    /// Returns `true` if this is an automated notification.
    pub fn is_system(&self) -> bool {
        self.sender.is_system()
    }

    /// Returns `true` if the content is a media placeholder.
    ///
    /// Covers the Android `<Media omitted>` marker and the iOS
    /// `image omitted` family.
    pub fn is_media(&self) -> bool {
        if self.content.contains(MEDIA_OMITTED) {
            return true;
        }
        let trimmed = self.content.trim();
        IOS_MEDIA_PLACEHOLDERS
            .iter()
            .any(|placeholder| trimmed == *placeholder)
    }

    /// Returns `true` if the content is a deletion placeholder.
    pub fn is_deleted(&self) -> bool {
        let trimmed = self.content.trim();
        trimmed == "This message was deleted" || trimmed == "You deleted this message"
    }

    /// Number of whitespace-separated words in the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Returns `true` if the content is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
