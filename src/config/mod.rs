use crate::constants::{self, env_vars, generation, retry};
use crate::data_fetcher::api::RetryPolicy;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration for a single pipeline run.
///
/// Built once at the program boundary (config file, then environment, then
/// command line) and passed by reference into the aggregator, the preview
/// orchestrator and the artifact writer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Identifier of the league on the fantasy platform.
    #[serde(default)]
    pub league_id: String,
    /// Base URL of the platform read API, without trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Bearer credential for the generative service. Absent means no previews.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    /// Chat completions endpoint of the generative service.
    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Directory that receives previews.json, summary.json and games.json.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Path to the log file. If not specified, logs go to the platform log directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for every request.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Attempts per platform read before giving up.
    #[serde(default = "default_retry_attempts")]
    pub fetch_retry_attempts: u32,
    /// Backoff unit in milliseconds; attempt `i` waits `unit * i`.
    #[serde(default = "default_retry_base_delay")]
    pub retry_base_delay_ms: u64,
    /// Pause between successive generation calls in milliseconds.
    #[serde(default = "default_preview_delay")]
    pub preview_delay_ms: u64,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_openai_api_url() -> String {
    constants::DEFAULT_OPENAI_API_URL.to_string()
}

fn default_model() -> String {
    generation::DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    generation::DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    generation::DEFAULT_MAX_TOKENS
}

fn default_output_dir() -> String {
    constants::DEFAULT_OUTPUT_DIR.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_retry_attempts() -> u32 {
    retry::MAX_ATTEMPTS
}

fn default_retry_base_delay() -> u64 {
    retry::BASE_DELAY_MS
}

fn default_preview_delay() -> u64 {
    generation::DEFAULT_PREVIEW_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            league_id: String::new(),
            api_base_url: default_api_base_url(),
            openai_api_key: None,
            openai_api_url: default_openai_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            output_dir: default_output_dir(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            fetch_retry_attempts: default_retry_attempts(),
            retry_base_delay_ms: default_retry_base_delay(),
            preview_delay_ms: default_preview_delay(),
        }
    }
}

impl Config {
    /// Loads configuration for this process.
    ///
    /// Reads `path` when given (it must exist), otherwise the platform config
    /// file if present, otherwise starts from defaults. Environment variables
    /// are applied on top. The result is not validated yet because command
    /// line values may still override it; call [`Config::validate`] afterwards.
    ///
    /// # Environment Variables
    /// - `SLEEPER_LEAGUE_ID` - League identifier
    /// - `SLEEPER_API_BASE_URL` - Platform API base URL
    /// - `OPENAI_API_KEY` - Generative service credential
    /// - `PREVIEW_OUTPUT_DIR` - Artifact directory
    /// - `PREVIEW_LOG_FILE` - Log file path
    /// - `PREVIEW_HTTP_TIMEOUT` - HTTP timeout in seconds
    pub async fn load(path: Option<&str>) -> Result<Self, AppError> {
        let mut config = match path {
            Some(explicit) => Self::load_from_path(explicit).await?,
            None => {
                let default_path = get_config_path();
                if Path::new(&default_path).exists() {
                    Self::load_from_path(&default_path).await?
                } else {
                    debug!("No config file at {default_path}, using defaults");
                    Config::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Applies environment overrides using the given lookup.
    ///
    /// The lookup is injected so that only the program boundary touches the
    /// real process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(league_id) = lookup(env_vars::LEAGUE_ID) {
            self.league_id = league_id;
        }

        if let Some(base_url) = lookup(env_vars::API_BASE_URL) {
            self.api_base_url = base_url;
        }

        if let Some(key) = lookup(env_vars::OPENAI_API_KEY) {
            self.openai_api_key = Some(key);
        }

        if let Some(output_dir) = lookup(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok()) {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.league_id,
            &self.api_base_url,
            self.fetch_retry_attempts,
            &self.log_file_path,
        )
    }

    /// The generative service credential, treating an empty string as absent.
    pub fn credential(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Retry policy for platform reads.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.fetch_retry_attempts,
            Duration::from_millis(self.retry_base_delay_ms),
        )
    }

    /// Pause between successive generation calls.
    pub fn preview_delay(&self) -> Duration {
        Duration::from_millis(self.preview_delay_ms)
    }

    /// API base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }

    /// Saves configuration to a file path as pretty TOML.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a file path without applying overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
