//! Emoji usage analysis.
//!
//! Detection is per-scalar over the main pictograph blocks. Joiners and
//! variation selectors are ignored, so a family emoji counts its visible
//! parts rather than the invisible glue.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Returns `true` for characters in the common emoji blocks.
pub fn is_emoji(c: char) -> bool {
    matches!(c,
        '\u{1F300}'..='\u{1F5FF}'   // symbols & pictographs
        | '\u{1F600}'..='\u{1F64F}' // emoticons
        | '\u{1F680}'..='\u{1F6FF}' // transport & map
        | '\u{1F780}'..='\u{1F7FF}' // geometric shapes extended
        | '\u{1F900}'..='\u{1F9FF}' // supplemental symbols
        | '\u{1FA70}'..='\u{1FAFF}' // symbols & pictographs extended-A
        | '\u{1F1E6}'..='\u{1F1FF}' // regional indicators (flags)
        | '\u{2600}'..='\u{26FF}'   // miscellaneous symbols
        | '\u{2700}'..='\u{27BF}'   // dingbats
        | '\u{2B05}'..='\u{2B55}'   // arrows, stars, circles
    )
}

/// One entry of the emoji ranking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: u64,
}

/// Emoji usage statistics for one export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmojiStats {
    /// Emoji occurrences across user messages.
    pub total: u64,
    /// User messages containing at least one emoji.
    pub messages_with_emoji: u64,
    /// Most frequent emoji, descending; ties break by code point.
    pub top: Vec<EmojiCount>,
}

/// Computes the emoji frequency table over a message sequence.
pub fn emoji_frequencies(messages: &[Message], top_n: usize) -> EmojiStats {
    let mut counts: HashMap<char, u64> = HashMap::new();
    let mut total = 0u64;
    let mut messages_with_emoji = 0u64;

    for msg in messages {
        if msg.is_system() {
            continue;
        }

        let mut found = false;
        for c in msg.content().chars() {
            if is_emoji(c) {
                found = true;
                total += 1;
                *counts.entry(c).or_insert(0) += 1;
            }
        }
        if found {
            messages_with_emoji += 1;
        }
    }

    let mut ranked: Vec<(char, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(top_n);

    EmojiStats {
        total,
        messages_with_emoji,
        top: ranked
            .into_iter()
            .map(|(c, count)| EmojiCount {
                emoji: c.to_string(),
                count,
            })
            .collect(),
    }
}
