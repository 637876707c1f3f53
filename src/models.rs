use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Typed view of one log record. Counters stay `Option` so that both
/// absent and `null` source values can default to zero at extraction time.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StudiedCounters {
    pub today_all: Option<u64>,
    pub today_vocab: Option<u64>,
    pub today_grammar: Option<u64>,
    pub today_kanji: Option<u64>,
    pub today_sent: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSnapshot {
    pub fetch_timestamp: String,
    #[serde(default)]
    pub studied: StudiedCounters,
    #[serde(default)]
    pub level_progress_percs: BTreeMap<String, BTreeMap<String, Option<u64>>>,
}

/// One row of the deduplicated day table: the last snapshot of its day.
#[derive(Debug, Clone)]
pub struct DayRecord {
    pub fetch_date: NaiveDate,
    pub snapshot: ProfileSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyActivityRow {
    pub fetch_date: NaiveDate,
    pub daily_all: u64,
    pub daily_vocab: u64,
    pub daily_grammar: u64,
    pub daily_kanji: u64,
    pub daily_sent: u64,
}

/// Long-format progress row: one per (date, category, level).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressRow {
    pub fetch_date: NaiveDate,
    pub category: String,
    pub level: String,
    pub percentage: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelPercentage {
    pub level: String,
    pub percentage: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySnapshot {
    pub category: String,
    pub levels: Vec<LevelPercentage>,
}

/// All three derived views; each may be empty but is always present.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Views {
    pub daily: Vec<DailyActivityRow>,
    pub progress: Vec<ProgressRow>,
    pub latest: Vec<CategorySnapshot>,
}
