use anyhow::Result;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
/// Every value has a default; the CLI runs with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub rust_log: String,
    /// Directory PDF exports land in when `--output` is a bare filename.
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            output_dir: std::env::var("DRILLSHEET_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        })
    }
}
