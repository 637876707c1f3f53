use crate::errors::{Result, TrackerError};
use crate::models::{DayRecord, ProfileSnapshot};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::collections::BTreeMap;

const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Builds the deduplicated day table: records sorted ascending by full
/// timestamp, then collapsed to the last snapshot of each calendar day.
/// Any record with a missing or malformed timestamp fails the whole run;
/// a silently skipped row would corrupt the downstream views.
pub fn build_day_table(records: &[Value]) -> Result<Vec<DayRecord>> {
    let mut parsed: Vec<(NaiveDateTime, ProfileSnapshot)> = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let snapshot: ProfileSnapshot = serde_json::from_value(record.clone())
            .map_err(|err| TrackerError::Malformed(format!("record {}: {err}", index + 1)))?;
        let timestamp =
            NaiveDateTime::parse_from_str(&snapshot.fetch_timestamp, TIMESTAMP_PARSE_FORMAT)
                .map_err(|err| {
                    TrackerError::Malformed(format!(
                        "record {}: bad fetch_timestamp {:?}: {err}",
                        index + 1,
                        snapshot.fetch_timestamp
                    ))
                })?;
        parsed.push((timestamp, snapshot));
    }

    parsed.sort_by_key(|(timestamp, _)| *timestamp);

    // Last insert per date wins; map iteration yields ascending dates.
    let mut by_date: BTreeMap<NaiveDate, ProfileSnapshot> = BTreeMap::new();
    for (timestamp, snapshot) in parsed {
        by_date.insert(timestamp.date(), snapshot);
    }

    Ok(by_date
        .into_iter()
        .map(|(fetch_date, snapshot)| DayRecord {
            fetch_date,
            snapshot,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(timestamp: &str, today_all: u64) -> Value {
        json!({
            "fetch_timestamp": timestamp,
            "studied": {"today_all": today_all}
        })
    }

    #[test]
    fn keeps_last_snapshot_per_day() {
        let records = vec![
            record("2024-06-01T09:00:00.000000", 5),
            record("2024-06-01T18:00:00.000000", 12),
            record("2024-06-02T10:00:00.000000", 3),
        ];

        let table = build_day_table(&records).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].fetch_date.to_string(), "2024-06-01");
        assert_eq!(table[0].snapshot.studied.today_all, Some(12));
        assert_eq!(table[1].snapshot.studied.today_all, Some(3));
    }

    #[test]
    fn sorts_before_deduplicating() {
        // Later fetch appears first in the file; it must still win.
        let records = vec![
            record("2024-06-01T18:00:00.000000", 12),
            record("2024-06-01T09:00:00.000000", 5),
        ];

        let table = build_day_table(&records).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[0].snapshot.studied.today_all, Some(12));
    }

    #[test]
    fn output_is_ascending_by_date() {
        let records = vec![
            record("2024-01-03T08:00:00.000000", 3),
            record("2024-01-01T08:00:00.000000", 1),
            record("2024-01-02T08:00:00.000000", 2),
        ];

        let dates: Vec<String> = build_day_table(&records)
            .unwrap()
            .iter()
            .map(|row| row.fetch_date.to_string())
            .collect();
        assert_eq!(dates, ["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn dedup_is_idempotent() {
        let full = vec![
            record("2024-06-01T09:00:00.000000", 5),
            record("2024-06-01T12:00:00.000000", 8),
            record("2024-06-01T18:00:00.000000", 12),
        ];
        let last_only = vec![record("2024-06-01T18:00:00.000000", 12)];

        let from_full = build_day_table(&full).unwrap();
        let from_last = build_day_table(&last_only).unwrap();
        assert_eq!(from_full.len(), from_last.len());
        assert_eq!(from_full[0].fetch_date, from_last[0].fetch_date);
        assert_eq!(
            from_full[0].snapshot.studied.today_all,
            from_last[0].snapshot.studied.today_all
        );
    }

    #[test]
    fn malformed_timestamp_fails_the_whole_run() {
        let records = vec![
            record("2024-06-01T09:00:00.000000", 5),
            record("yesterday-ish", 12),
        ];

        let err = build_day_table(&records).unwrap_err();
        assert!(matches!(err, TrackerError::Malformed(ref msg) if msg.contains("record 2")));
    }

    #[test]
    fn missing_timestamp_fails_the_whole_run() {
        let records = vec![json!({"studied": {"today_all": 1}})];
        assert!(matches!(
            build_day_table(&records),
            Err(TrackerError::Malformed(_))
        ));
    }

    #[test]
    fn empty_input_yields_empty_table() {
        assert!(build_day_table(&[]).unwrap().is_empty());
    }

    #[test]
    fn fractional_precision_may_vary() {
        let records = vec![
            record("2024-06-01T09:00:00.123", 5),
            record("2024-06-02T09:00:00", 3),
        ];
        assert_eq!(build_day_table(&records).unwrap().len(), 2);
    }
}
