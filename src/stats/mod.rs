//! Descriptive statistics over parsed messages.
//!
//! Every function here is a pure pass over `&[Message]`; nothing is cached
//! between calls. The submodules mirror the sections of the final report:
//!
//! - [`summary`] — headline counts (messages, words, media, links)
//! - [`activity`] — when the chat is active (hours, weekdays, timelines)
//! - [`words`] — word frequency table
//! - [`emoji`] — emoji usage
//! - [`participants`] — per-sender breakdown
//!
//! [`ChatReport::compute`] runs all of them and bundles the results.

pub mod activity;
pub mod emoji;
pub mod participants;
pub mod summary;
pub mod words;

use serde::{Deserialize, Serialize};

use crate::message::Message;

pub use activity::ActivityStats;
pub use emoji::EmojiStats;
pub use participants::ParticipantStats;
pub use summary::SummaryStats;
pub use words::WordStats;

/// Default length of the word/emoji/participant ranking tables.
pub const DEFAULT_TOP: usize = 20;

/// All computed statistics for one export.
///
/// # Example
///
/// ```rust
/// use chatlens::config::DateOrder;
/// use chatlens::parser::ExportParser;
/// use chatlens::stats::ChatReport;
///
/// let export = "12/1/23, 10:05 AM - Alice: Hello world";
/// let messages = ExportParser::new(DateOrder::MonthFirst).parse_str(export)?;
/// let report = ChatReport::compute(&messages, 10);
///
/// assert_eq!(report.summary.total_messages, 1);
/// assert_eq!(report.summary.total_words, 2);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReport {
    pub summary: SummaryStats,
    pub activity: ActivityStats,
    pub words: WordStats,
    pub emoji: EmojiStats,
    pub participants: ParticipantStats,
}

impl ChatReport {
    /// Computes all report sections in one pass over the messages.
    ///
    /// `top_n` bounds the word, emoji, and participant ranking tables.
    pub fn compute(messages: &[Message], top_n: usize) -> Self {
        Self {
            summary: summary::summarize(messages),
            activity: activity::activity_stats(messages),
            words: words::word_frequencies(messages, top_n),
            emoji: emoji::emoji_frequencies(messages, top_n),
            participants: participants::participant_breakdown(messages),
        }
    }
}
