//! # Chatlens
//!
//! A Rust library for parsing plain-text chat exports and computing
//! descriptive statistics over them.
//!
//! ## Overview
//!
//! Chatlens is a single-pass pipeline: read text → parse into structured
//! [`Message`] records → aggregate → report. It handles the messy parts of
//! real exports — locale-variable timestamps, multi-line messages, system
//! notifications, invisible directional marks — and leaves rendering charts
//! to downstream consumers.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "\
//! 12/1/23, 10:05 AM - Alice: Hello
//! world
//! 12/1/23, 10:06 AM - Bob created group \"Trip\"";
//!
//!     // Exports don't say whether 12/1/23 is December 1 or January 12;
//!     // the caller must.
//!     let parser = ExportParser::new(DateOrder::MonthFirst);
//!     let messages = parser.parse_str(export)?;
//!
//!     assert_eq!(messages.len(), 2);
//!     assert_eq!(messages[0].content(), "Hello\nworld");
//!     assert!(messages[1].is_system());
//!
//!     // Aggregate into a report
//!     let report = ChatReport::compute(&messages, 20);
//!     assert_eq!(report.summary.total_messages, 2);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`ExportParser`](parser::ExportParser), the chat log parser
//! - [`config`] — [`ParserConfig`](config::ParserConfig) and the
//!   [`DateOrder`](config::DateOrder) locale hint
//! - [`message`] — [`Message`] and the [`Sender`](message::Sender) tag
//! - [`filter`] — [`FilterConfig`](filter::FilterConfig), [`apply_filters`](filter::apply_filters)
//! - [`stats`] — [`ChatReport`](stats::ChatReport) and its sections
//! - [`report`] — text/JSON/CSV rendering
//! - [`cli`] — CLI types (feature `cli`)
//! - [`error`] — [`ChatlensError`], [`Result`]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod message;
pub mod parser;
pub mod report;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::{Message, Sender};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core message types
    pub use crate::{Message, Sender};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parser and configuration
    pub use crate::config::{DateOrder, ParserConfig};
    pub use crate::parser::ExportParser;

    // Filtering
    pub use crate::filter::{FilterConfig, apply_filters};

    // Statistics
    pub use crate::stats::{
        ActivityStats, ChatReport, EmojiStats, ParticipantStats, SummaryStats, WordStats,
    };

    // Reporting
    pub use crate::report::{ReportFormat, render, render_text, write_report};
}
