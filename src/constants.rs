//! Application-wide constants and configuration defaults
//!
//! Centralizes endpoint defaults, retry budgets and pacing values so the
//! configuration layer and the pipeline agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Default base URL of the fantasy platform read API
pub const DEFAULT_API_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Default chat completions endpoint of the generative text service
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default directory for the produced artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "public/data";

/// Name of the log file written by the binary
pub const LOG_FILE_NAME: &str = "roast_previews.log";

/// Retry configuration for platform reads
pub mod retry {
    /// Number of attempts for a single logical read
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Backoff unit in milliseconds; attempt `i` waits `BASE_DELAY_MS * i`
    pub const BASE_DELAY_MS: u64 = 1000;
}

/// Generative service settings
pub mod generation {
    /// Model requested from the chat completions endpoint
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

    /// Sampling temperature
    pub const DEFAULT_TEMPERATURE: f32 = 0.9;

    /// Upper bound on tokens in a single preview
    pub const DEFAULT_MAX_TOKENS: u32 = 600;

    /// Pause between successive generation calls (milliseconds)
    pub const DEFAULT_PREVIEW_DELAY_MS: u64 = 1000;

    /// Roast level at which a player is called out in the prompt
    pub const ROAST_TARGET_THRESHOLD: u8 = 2;
}

/// Defaults applied when the remote data omits a value
pub mod defaults {
    /// Week used when league settings carry no `leg`
    pub const WEEK: u32 = 1;

    /// Injury status of a player without one
    pub const INJURY_STATUS: &str = "Healthy";

    /// Depth-chart order of a player without one
    pub const DEPTH_CHART_ORDER: u32 = 1;

    /// Display name of a roster owner that matches no league user
    pub const UNKNOWN_MANAGER: &str = "Unknown Manager";

    /// Position assigned to ids missing from the player catalog
    pub const UNKNOWN_POSITION: &str = "UNKNOWN";
}

/// Environment variable names read once at the program boundary
pub mod env_vars {
    /// League identifier override
    pub const LEAGUE_ID: &str = "SLEEPER_LEAGUE_ID";

    /// Platform API base URL override
    pub const API_BASE_URL: &str = "SLEEPER_API_BASE_URL";

    /// Generative service credential
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

    /// Artifact directory override
    pub const OUTPUT_DIR: &str = "PREVIEW_OUTPUT_DIR";

    /// Log file path override
    pub const LOG_FILE: &str = "PREVIEW_LOG_FILE";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "PREVIEW_HTTP_TIMEOUT";
}
