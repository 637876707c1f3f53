pub mod config;
pub mod errors;
pub mod fetcher;
pub mod loader;
pub mod metrics;
pub mod models;
pub mod output;
pub mod storage;

pub use config::{Config, Dimensions};
pub use errors::TrackerError;
pub use fetcher::RenshuuClient;
pub use loader::build_day_table;
pub use metrics::{build_views, extract_daily_activity, extract_level_progress, snapshot_latest};
pub use output::write_views;
pub use storage::{append_snapshot, load_snapshots};
