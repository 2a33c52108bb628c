//! Word frequency analysis.
//!
//! Tokenization follows the usual chat-analysis recipe: lowercase, drop
//! URLs, treat punctuation as whitespace, ignore very short words and a
//! stop-word list. Media and deletion placeholders and system notifications
//! are skipped entirely.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Minimum token length; shorter words carry no signal.
const MIN_WORD_LEN: usize = 3;

/// English stop words plus export artifacts (`media`, `omitted`, ...).
const STOP_WORDS: [&str; 46] = [
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "her", "was", "one",
    "our", "out", "has", "had", "have", "this", "that", "these", "those", "with", "they", "them",
    "she", "his", "him", "its", "will", "would", "been", "were", "what", "when", "where", "who",
    "how", "why", "media", "omitted", "message", "deleted", "http", "https", "www",
];

/// One entry of the word ranking table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Word frequency statistics for one export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordStats {
    /// Tokens counted after filtering.
    pub counted_words: u64,
    /// Distinct tokens after filtering.
    pub distinct_words: u64,
    /// Most frequent words, descending; ties break alphabetically.
    pub top: Vec<WordCount>,
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Computes the word frequency table over a message sequence.
pub fn word_frequencies(messages: &[Message], top_n: usize) -> WordStats {
    let url_regex = Regex::new(r"https?://[^\s]+").unwrap();

    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut counted = 0u64;

    for msg in messages {
        if msg.is_system() || msg.is_media() || msg.is_deleted() {
            continue;
        }

        let lowered = msg.content().to_lowercase();
        let stripped = url_regex.replace_all(&lowered, " ");

        for token in stripped.split(|c: char| !c.is_alphanumeric()) {
            if token.chars().count() < MIN_WORD_LEN || is_stop_word(token) {
                continue;
            }
            counted += 1;
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    let distinct = counts.len() as u64;

    let mut ranked: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked.truncate(top_n);

    WordStats {
        counted_words: counted,
        distinct_words: distinct,
        top: ranked,
    }
}
