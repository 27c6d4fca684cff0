use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SpotifyError};
use crate::utils::constants::{
    DEFAULT_TIMEOUT_MS, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_REFRESH_TOKEN, ENV_TIMEOUT_MS,
    ENV_VERBOSE,
};

/// ================================
/// Full application configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub spotify: ClientConfig,
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// Spotify client
/// ================================
#[derive(Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default)]
    pub refresh_token: String,
    /// 0 disables the per-request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub verbose: bool,
}

impl ClientConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            verbose: false,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build from `SPOTIFY_*` environment variables. Unset required variables
    /// are left empty so validation reports them by field name.
    pub fn from_env() -> Result<Self> {
        let timeout_ms = match std::env::var(ENV_TIMEOUT_MS) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| SpotifyError::Configuration { field: "timeout_ms" })?,
            _ => DEFAULT_TIMEOUT_MS,
        };
        let verbose = std::env::var(ENV_VERBOSE)
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        let config = Self {
            client_id: std::env::var(ENV_CLIENT_ID).unwrap_or_default(),
            client_secret: std::env::var(ENV_CLIENT_SECRET).unwrap_or_default(),
            refresh_token: std::env::var(ENV_REFRESH_TOKEN).unwrap_or_default(),
            timeout_ms,
            verbose,
        };
        config.validate()?;
        Ok(config)
    }

    /// Fails on the first required field that is empty.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("refresh_token", &self.refresh_token),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(SpotifyError::Configuration { field: *field }),
            None => Ok(()),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

// secrets stay out of logs
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("refresh_token", &"***")
            .field("timeout_ms", &self.timeout_ms)
            .field("verbose", &self.verbose)
            .finish()
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info".to_owned(), LogFormat::Compact)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}
