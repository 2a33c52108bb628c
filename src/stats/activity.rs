//! When the chat is active: hour histograms, weekday maps, timelines.
//!
//! All records, user and system, count toward activity; a notification still
//! marks the conversation as alive at that moment.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Weekday labels indexed by `Weekday::num_days_from_monday()`.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month labels indexed by `month0`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Message count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    pub count: u64,
}

impl MonthlyCount {
    /// `"January 2024"` style label.
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize - 1], self.year)
    }
}

/// Counts bucketed into coarse parts of the day.
///
/// Morning 05–11, afternoon 12–16, evening 17–20, night otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodCounts {
    pub morning: u64,
    pub afternoon: u64,
    pub evening: u64,
    pub night: u64,
}

/// Temporal activity statistics for one export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    /// Messages per hour of day.
    pub hourly: [u64; 24],
    /// Messages per weekday, Monday first.
    pub weekday: [u64; 7],
    /// Messages per part of day.
    pub periods: PeriodCounts,
    /// Messages per calendar day.
    pub daily: BTreeMap<NaiveDate, u64>,
    /// Messages per calendar month, chronological.
    pub monthly: Vec<MonthlyCount>,
    /// Messages per weekday and hour, `heatmap[weekday][hour]`.
    pub heatmap: [[u64; 24]; 7],
}

impl Default for ActivityStats {
    fn default() -> Self {
        Self {
            hourly: [0; 24],
            weekday: [0; 7],
            periods: PeriodCounts::default(),
            daily: BTreeMap::new(),
            monthly: Vec::new(),
            heatmap: [[0; 24]; 7],
        }
    }
}

impl ActivityStats {
    /// Hour of day with the most messages, if any messages exist.
    pub fn peak_hour(&self) -> Option<usize> {
        let (hour, &count) = self
            .hourly
            .iter()
            .enumerate()
            .max_by_key(|&(_, count)| count)?;
        (count > 0).then_some(hour)
    }

    /// Weekday with the most messages, if any messages exist.
    pub fn peak_weekday(&self) -> Option<&'static str> {
        let (day, &count) = self
            .weekday
            .iter()
            .enumerate()
            .max_by_key(|&(_, count)| count)?;
        (count > 0).then(|| WEEKDAY_NAMES[day])
    }

    /// Month with the most messages, if any messages exist.
    pub fn peak_month(&self) -> Option<&MonthlyCount> {
        self.monthly.iter().max_by_key(|m| m.count)
    }
}

fn period_slot(hour: u32) -> usize {
    match hour {
        5..=11 => 0,
        12..=16 => 1,
        17..=20 => 2,
        _ => 3,
    }
}

/// Computes temporal activity statistics over a message sequence.
pub fn activity_stats(messages: &[Message]) -> ActivityStats {
    let mut stats = ActivityStats::default();
    let mut monthly: BTreeMap<(i32, u32), u64> = BTreeMap::new();

    for msg in messages {
        let ts = msg.timestamp();
        let hour = ts.hour() as usize;
        let weekday = ts.weekday().num_days_from_monday() as usize;

        stats.hourly[hour] += 1;
        stats.weekday[weekday] += 1;
        stats.heatmap[weekday][hour] += 1;

        match period_slot(ts.hour()) {
            0 => stats.periods.morning += 1,
            1 => stats.periods.afternoon += 1,
            2 => stats.periods.evening += 1,
            _ => stats.periods.night += 1,
        }

        *stats.daily.entry(ts.date_naive()).or_insert(0) += 1;
        *monthly.entry((ts.year(), ts.month())).or_insert(0) += 1;
    }

    stats.monthly = monthly
        .into_iter()
        .map(|((year, month), count)| MonthlyCount { year, month, count })
        .collect();

    stats
}
