use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

pub const CHALLENGE_START: NaiveDate = ymd(2026, 1, 12);
pub const CHALLENGE_END: NaiveDate = ymd(2026, 4, 12);

/// Week start dates of the pre-populated seed entries.
pub const SEED_WEEKS: [NaiveDate; 3] = [ymd(2026, 1, 12), ymd(2026, 1, 19), ymd(2026, 1, 26)];

/// Upper bound on one week's steps, roughly 140,000 a day.
pub const MAX_WEEKLY_STEPS: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub steps: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub color: String,
    pub entries: Vec<Entry>,
}

impl Entry {
    pub fn within_challenge(&self) -> bool {
        self.week_start >= CHALLENGE_START && self.week_end <= CHALLENGE_END
    }
}

impl Participant {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            entries: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParticipantStats {
    pub total_steps: u64,
    pub total_points: u64,
    pub weeks: usize,
    pub avg_daily: u64,
}

#[derive(Debug, Clone)]
pub struct LeaderboardRow {
    pub name: String,
    pub color: String,
    pub total_steps: u64,
    pub total_points: u64,
    pub weeks: usize,
    pub avg_daily: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TeamSummary {
    pub total_steps: u64,
    pub total_weeks: usize,
    pub avg_weekly: u64,
    pub participants: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub week_start: NaiveDate,
    pub week: String,
    pub participant: String,
    pub steps: u64,
}
