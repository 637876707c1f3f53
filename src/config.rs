use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.renshuu.org/v1";
pub const DEFAULT_LOG_PATH: &str = "data/renshuu_logs.jsonl";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub log_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            api_key: env::var("RENSHUU_API_KEY").ok().filter(|key| !key.is_empty()),
            base_url: env::var("RENSHUU_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            log_path: env::var("RENSHUU_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_PATH)),
        }
    }
}

/// Ordered study dimensions: category order drives view column order,
/// level order runs from n5 (lowest) to n1 (highest).
#[derive(Debug, Clone)]
pub struct Dimensions {
    pub categories: Vec<String>,
    pub levels: Vec<String>,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            categories: ["vocab", "grammar", "kanji", "sent"]
                .map(String::from)
                .to_vec(),
            levels: ["n5", "n4", "n3", "n2", "n1"].map(String::from).to_vec(),
        }
    }
}
