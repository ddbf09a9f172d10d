use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

const DEFAULT_BASE_URL: &str = "https://api.hume.ai";
const DEFAULT_VOICE: &str = "Shuhan2";
const DEFAULT_OUTPUT_DIR: &str = "out_tts";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub hume_api_key: String,
    pub hume_base_url: String,
    pub default_voice: String,
    pub output_dir: PathBuf,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    /// Load from the process environment, after reading `.env` if present
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let config = Config {
            hume_api_key: get("HUME_API_KEY").ok_or_else(|| {
                AppError::Config("Missing HUME_API_KEY in environment or .env".to_string())
            })?,
            hume_base_url: get("HUME_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            default_voice: get("HUME_VOICE").unwrap_or_else(|| DEFAULT_VOICE.to_string()),
            output_dir: get("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            log_format: get("LOG_FORMAT")
                .map(|s| match s.to_lowercase().as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })
                .unwrap_or(LogFormat::Pretty),
        };

        Ok(config)
    }
}
