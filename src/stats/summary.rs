//! Headline statistics: message, word, media, and link counts.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::message::Message;

/// URL pattern used for link counting.
const URL_PATTERN: &str = r"https?://[^\s]+";

/// Headline counts for one export.
///
/// Word, media, deleted, and link tallies cover user messages only; system
/// notifications are counted separately in `system_messages`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    /// All parsed records, user and system.
    pub total_messages: u64,
    /// Records with a human sender.
    pub user_messages: u64,
    /// Automated notifications.
    pub system_messages: u64,
    /// Whitespace-separated words across user messages.
    pub total_words: u64,
    /// Media placeholder messages.
    pub media_messages: u64,
    /// Deletion placeholder messages.
    pub deleted_messages: u64,
    /// URLs found across user messages.
    pub link_count: u64,
    /// Distinct human senders.
    pub unique_senders: u64,
    /// Distinct calendar days with at least one message.
    pub active_days: u64,
    /// Days between the first and last message, inclusive of both ends'
    /// calendar dates.
    pub span_days: i64,
    /// Timestamp of the first message.
    pub first_message: Option<DateTime<Utc>>,
    /// Timestamp of the last message.
    pub last_message: Option<DateTime<Utc>>,
    /// Messages per active day.
    pub avg_messages_per_day: f64,
    /// Words per user message.
    pub avg_words_per_message: f64,
}

/// Computes headline statistics over a message sequence.
pub fn summarize(messages: &[Message]) -> SummaryStats {
    let url_regex = Regex::new(URL_PATTERN).unwrap();

    let mut stats = SummaryStats {
        total_messages: messages.len() as u64,
        ..SummaryStats::default()
    };

    let mut senders = BTreeSet::new();
    let mut days = BTreeSet::new();

    for msg in messages {
        days.insert(msg.timestamp().date_naive());

        match msg.sender().name() {
            Some(name) => {
                stats.user_messages += 1;
                senders.insert(name.to_string());

                stats.total_words += msg.word_count() as u64;
                if msg.is_media() {
                    stats.media_messages += 1;
                }
                if msg.is_deleted() {
                    stats.deleted_messages += 1;
                }
                stats.link_count += url_regex.find_iter(msg.content()).count() as u64;
            }
            None => stats.system_messages += 1,
        }
    }

    stats.unique_senders = senders.len() as u64;
    stats.active_days = days.len() as u64;
    stats.first_message = messages.first().map(|m| m.timestamp());
    stats.last_message = messages.last().map(|m| m.timestamp());

    if let (Some(first), Some(last)) = (stats.first_message, stats.last_message) {
        stats.span_days = (last.date_naive() - first.date_naive()).num_days() + 1;
    }

    if stats.active_days > 0 {
        stats.avg_messages_per_day = stats.total_messages as f64 / stats.active_days as f64;
    }
    if stats.user_messages > 0 {
        stats.avg_words_per_message = stats.total_words as f64 / stats.user_messages as f64;
    }

    stats
}
