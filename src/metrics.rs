use crate::config::Dimensions;
use crate::models::{
    CategorySnapshot, DailyActivityRow, DayRecord, LevelPercentage, ProfileSnapshot, ProgressRow,
    Views,
};

/// Daily activity counters, one row per date in table order.
pub fn extract_daily_activity(table: &[DayRecord]) -> Vec<DailyActivityRow> {
    table
        .iter()
        .map(|row| {
            let studied = &row.snapshot.studied;
            DailyActivityRow {
                fetch_date: row.fetch_date,
                daily_all: studied.today_all.unwrap_or(0),
                daily_vocab: studied.today_vocab.unwrap_or(0),
                daily_grammar: studied.today_grammar.unwrap_or(0),
                daily_kanji: studied.today_kanji.unwrap_or(0),
                daily_sent: studied.today_sent.unwrap_or(0),
            }
        })
        .collect()
}

/// Long-format level progress: every (category, level) pair for every date,
/// categories in declaration order, levels n5 to n1.
pub fn extract_level_progress(table: &[DayRecord], dims: &Dimensions) -> Vec<ProgressRow> {
    let mut rows = Vec::with_capacity(table.len() * dims.categories.len() * dims.levels.len());
    for record in table {
        for category in &dims.categories {
            for level in &dims.levels {
                rows.push(ProgressRow {
                    fetch_date: record.fetch_date,
                    category: category.clone(),
                    level: level.clone(),
                    percentage: progress_value(&record.snapshot, category, level),
                });
            }
        }
    }
    rows
}

/// Per-category level percentages for the most recent date only.
pub fn snapshot_latest(table: &[DayRecord], dims: &Dimensions) -> Vec<CategorySnapshot> {
    let Some(latest) = table.last() else {
        return Vec::new();
    };

    dims.categories
        .iter()
        .map(|category| CategorySnapshot {
            category: category.clone(),
            levels: dims
                .levels
                .iter()
                .map(|level| LevelPercentage {
                    level: level.clone(),
                    percentage: progress_value(&latest.snapshot, category, level),
                })
                .collect(),
        })
        .collect()
}

/// All three views in one pass; each is empty for an empty table, never absent.
pub fn build_views(table: &[DayRecord], dims: &Dimensions) -> Views {
    Views {
        daily: extract_daily_activity(table),
        progress: extract_level_progress(table, dims),
        latest: snapshot_latest(table, dims),
    }
}

fn progress_value(snapshot: &ProfileSnapshot, category: &str, level: &str) -> u64 {
    snapshot
        .level_progress_percs
        .get(category)
        .and_then(|levels| levels.get(level))
        .and_then(|value| *value)
        .unwrap_or(0)
}
