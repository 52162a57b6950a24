//! Configuration resolved once at startup from environment variables, with an
//! optional JSON config file as fallback for each value.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const API_KEY_VAR: &str = "SOCKFORGE_API_KEY";
const API_BASE_VAR: &str = "SOCKFORGE_API_BASE";
const OUTPUT_DIR_VAR: &str = "SOCKFORGE_OUTPUT_DIR";
const CHAT_MODEL_VAR: &str = "SOCKFORGE_CHAT_MODEL";
const FAST_MODEL_VAR: &str = "SOCKFORGE_FAST_MODEL";
const REQUEST_TIMEOUT_VAR: &str = "SOCKFORGE_REQUEST_TIMEOUT_SECS";
const CONFIG_FILE_VAR: &str = "SOCKFORGE_CONFIG_FILE";

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_CHAT_MODEL: &str = "gpt-4";
const DEFAULT_FAST_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_OUTPUT_SUBDIR: &str = "sockforge";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub output_dir: PathBuf,
    /// Model used for profile generation and the sample tweet.
    pub chat_model: String,
    /// Cheaper model used for community suggestions.
    pub fast_model: String,
    /// Applies to chat and image generation calls; the image download has its
    /// own fixed bound.
    pub request_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_config()
    }
}

/// Optional JSON file pointed to by `SOCKFORGE_CONFIG_FILE`. Every key is
/// optional; environment variables win over file values.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_key: Option<String>,
    api_base: Option<String>,
    output_dir: Option<PathBuf>,
    chat_model: Option<String>,
    fast_model: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl ConfigFile {
    fn load() -> Result<Self> {
        let Some(path) = env::var_os(CONFIG_FILE_VAR) else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(&path).with_context(|| {
            format!("Failed to read the config file {path:?} (from {CONFIG_FILE_VAR})")
        })?;
        parse_config_file(&raw).with_context(|| format!("Config file {path:?} is not valid JSON"))
    }
}

fn parse_config_file(raw: &str) -> Result<ConfigFile> {
    Ok(serde_json::from_str(raw)?)
}

pub fn load_config() -> Result<Config> {
    dotenvy::dotenv().ok();
    let file = ConfigFile::load()?;

    let api_key = env::var(API_KEY_VAR).ok().or(file.api_key).context(
        "SOCKFORGE_API_KEY not found. Export it or add `api_key` to the JSON config file referenced by SOCKFORGE_CONFIG_FILE.",
    )?;

    let api_base = env::var(API_BASE_VAR)
        .ok()
        .or(file.api_base)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    let output_dir = env::var(OUTPUT_DIR_VAR)
        .map(PathBuf::from)
        .ok()
        .or(file.output_dir)
        .unwrap_or_else(default_output_dir);

    let chat_model = env::var(CHAT_MODEL_VAR)
        .ok()
        .or(file.chat_model)
        .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string());

    let fast_model = env::var(FAST_MODEL_VAR)
        .ok()
        .or(file.fast_model)
        .unwrap_or_else(|| DEFAULT_FAST_MODEL.to_string());

    let timeout_secs = match env::var(REQUEST_TIMEOUT_VAR) {
        Ok(raw) => raw.parse::<u64>().with_context(|| {
            format!("{REQUEST_TIMEOUT_VAR} `{raw}` is not a valid number of seconds")
        })?,
        Err(_) => file
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
    };

    Ok(Config {
        api_key,
        api_base,
        output_dir,
        chat_model,
        fast_model,
        request_timeout: Duration::from_secs(timeout_secs),
    })
}

fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_OUTPUT_SUBDIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_SUBDIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_parses_all_keys() {
        let raw = r#"{
            "api_key": "sk-test",
            "api_base": "http://localhost:8080/v1",
            "output_dir": "/tmp/puppets",
            "chat_model": "gpt-4",
            "fast_model": "gpt-3.5-turbo",
            "request_timeout_secs": 30
        }"#;
        let file = parse_config_file(raw).unwrap();
        assert_eq!(file.api_key.as_deref(), Some("sk-test"));
        assert_eq!(file.output_dir, Some(PathBuf::from("/tmp/puppets")));
        assert_eq!(file.request_timeout_secs, Some(30));
    }

    #[test]
    fn config_file_keys_are_all_optional() {
        let file = parse_config_file("{}").unwrap();
        assert!(file.api_key.is_none());
        assert!(file.output_dir.is_none());
    }

    #[test]
    fn config_file_rejects_invalid_json() {
        assert!(parse_config_file("not json").is_err());
    }

    #[test]
    fn default_output_dir_is_not_empty() {
        let dir = default_output_dir();
        assert!(dir.ends_with(DEFAULT_OUTPUT_SUBDIR));
    }
}
