//! Shared constants and invariants

pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const SPOTIFY_CURRENTLY_PLAYING_URL: &str = "https://api.spotify.com/v1/me/player/currently-playing";

/// Statuses treated as success for both request kinds.
pub const OK_HTTP_STATUS_CODES: [u16; 3] = [200, 204, 304];

/// At least one of these must be granted for the currently-playing endpoint.
pub const REQUIRED_SCOPES: [&str; 2] = ["user-read-playback-state", "user-read-currently-playing"];

pub const DEFAULT_TIMEOUT_MS: u64 = 0;

// Environment variables read by `ClientConfig::from_env`
pub const ENV_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const ENV_REFRESH_TOKEN: &str = "SPOTIFY_REFRESH_TOKEN";
pub const ENV_TIMEOUT_MS: &str = "SPOTIFY_TIMEOUT_MS";
pub const ENV_VERBOSE: &str = "SPOTIFY_VERBOSE";
