use crate::errors::{Result, TrackerError};
use crate::models::Views;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Writes each non-empty view as a JSON file under `out`. Empty views are
/// logged and skipped so the presentation layer can degrade gracefully.
pub async fn write_views(out: &Path, views: &Views) -> Result<()> {
    fs::create_dir_all(out).await?;

    if views.daily.is_empty() {
        info!("no daily activity data, skipping daily_metrics.json");
    } else {
        write_view(&out.join("daily_metrics.json"), &views.daily).await?;
    }

    if views.progress.is_empty() {
        info!("no progress data, skipping level_progress.json");
    } else {
        write_view(&out.join("level_progress.json"), &views.progress).await?;
    }

    if views.latest.is_empty() {
        info!("no progress snapshot, skipping latest_snapshot.json");
    } else {
        write_view(&out.join("latest_snapshot.json"), &views.latest).await?;
    }

    Ok(())
}

async fn write_view<T: Serialize>(path: &Path, view: &T) -> Result<()> {
    let payload = serde_json::to_vec_pretty(view)
        .map_err(|err| TrackerError::Malformed(err.to_string()))?;
    fs::write(path, payload).await?;
    info!("wrote {}", path.display());
    Ok(())
}
