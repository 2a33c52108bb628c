//! Per-participant breakdown.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Aggregates for one human participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantEntry {
    pub name: String,
    /// Messages sent by this participant.
    pub messages: u64,
    /// Share of all user messages, in percent.
    pub share: f64,
    /// Words across this participant's messages.
    pub words: u64,
    /// Media placeholder messages sent.
    pub media: u64,
}

/// Per-sender statistics for one export.
///
/// System notifications have no participant and are not represented here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParticipantStats {
    /// All participants, busiest first; ties break alphabetically.
    pub entries: Vec<ParticipantEntry>,
}

impl ParticipantStats {
    /// The busiest participant, if any user messages exist.
    pub fn busiest(&self) -> Option<&ParticipantEntry> {
        self.entries.first()
    }
}

#[derive(Default)]
struct Tally {
    messages: u64,
    words: u64,
    media: u64,
}

/// Computes the per-participant breakdown over a message sequence.
pub fn participant_breakdown(messages: &[Message]) -> ParticipantStats {
    let mut tallies: HashMap<String, Tally> = HashMap::new();
    let mut user_total = 0u64;

    for msg in messages {
        let Some(name) = msg.sender().name() else {
            continue;
        };
        user_total += 1;

        let tally = tallies.entry(name.to_string()).or_default();
        tally.messages += 1;
        tally.words += msg.word_count() as u64;
        if msg.is_media() {
            tally.media += 1;
        }
    }

    let mut entries: Vec<ParticipantEntry> = tallies
        .into_iter()
        .map(|(name, tally)| ParticipantEntry {
            name,
            messages: tally.messages,
            share: tally.messages as f64 / user_total as f64 * 100.0,
            words: tally.words,
            media: tally.media,
        })
        .collect();
    entries.sort_by(|a, b| b.messages.cmp(&a.messages).then_with(|| a.name.cmp(&b.name)));

    ParticipantStats { entries }
}
