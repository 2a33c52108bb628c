//! Parser configuration types.
//!
//! Configuration is parser-local and immutable: callers build a
//! [`ParserConfig`] and hand it to [`ExportParser`](crate::parser::ExportParser),
//! which compiles its patterns from it once. There are no module-level caches.
//!
//! # The locale hint
//!
//! Exports write dates the way the exporting phone was configured, so
//! `12/1/23` is ambiguous: December 1st in month-first locales, January 12th
//! in day-first ones. Nothing inside the file resolves this, so the parser
//! requires an explicit [`DateOrder`] and never guesses.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{DateOrder, ParserConfig};
//!
//! let config = ParserConfig::new(DateOrder::DayFirst)
//!     .with_skip_system(true);
//! assert_eq!(config.date_order, DateOrder::DayFirst);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;

/// Caller-supplied hint resolving day-first vs month-first dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `31/12/23` style: day, month, year.
    DayFirst,
    /// `12/31/23` style: month, day, year.
    MonthFirst,
}

impl DateOrder {
    /// Returns all accepted hint strings.
    pub fn all_names() -> &'static [&'static str] {
        &["day-first", "month-first"]
    }
}

impl std::fmt::Display for DateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateOrder::DayFirst => write!(f, "day-first"),
            DateOrder::MonthFirst => write!(f, "month-first"),
        }
    }
}

impl std::str::FromStr for DateOrder {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day-first" | "dayfirst" | "dmy" => Ok(DateOrder::DayFirst),
            "month-first" | "monthfirst" | "mdy" => Ok(DateOrder::MonthFirst),
            _ => Err(ChatlensError::invalid_date_order(s)),
        }
    }
}

/// Configuration for parsing a chat export.
///
/// # Example
///
/// ```rust
/// use chatlens::config::{DateOrder, ParserConfig};
///
/// let config = ParserConfig::new(DateOrder::MonthFirst);
/// assert!(!config.skip_system);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// How to read ambiguous numeric dates. Required; never auto-detected.
    pub date_order: DateOrder,

    /// Drop system records instead of tagging them (default: false, so the
    /// parsed sequence mirrors the export line for line).
    pub skip_system: bool,
}

impl ParserConfig {
    /// Creates a configuration with the given locale hint and defaults.
    pub fn new(date_order: DateOrder) -> Self {
        Self {
            date_order,
            skip_system: false,
        }
    }

    /// Sets whether system records are dropped during parsing.
    #[must_use]
    pub fn with_skip_system(mut self, skip: bool) -> Self {
        self.skip_system = skip;
        self
    }
}
