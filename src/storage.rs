use crate::errors::{Result, TrackerError};
use chrono::Local;
use serde_json::Value;
use std::path::Path;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Appends one snapshot line to the log, stamping it with the current
/// local time. Existing lines are never read or rewritten.
pub async fn append_snapshot(path: &Path, mut record: Value) -> Result<()> {
    let Value::Object(fields) = &mut record else {
        return Err(TrackerError::Malformed(
            "snapshot must be a JSON object".to_string(),
        ));
    };
    let timestamp = Local::now().naive_local().format(TIMESTAMP_FORMAT);
    fields.insert(
        "fetch_timestamp".to_string(),
        Value::String(timestamp.to_string()),
    );

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut line = serde_json::to_vec(&record)
        .map_err(|err| TrackerError::Malformed(err.to_string()))?;
    line.push(b'\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(&line).await?;
    file.flush().await?;

    Ok(())
}

/// Reads the whole log in write order. A missing file or any line that is
/// not valid JSON fails the load; there is no partial recovery.
pub async fn load_snapshots(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path).await?;

    let mut records = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let record: Value = serde_json::from_str(line)
            .map_err(|err| TrackerError::Malformed(format!("line {}: {err}", index + 1)))?;
        records.push(record);
    }

    Ok(records)
}
