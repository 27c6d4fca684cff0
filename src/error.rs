use http::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`crate::SpotifyClient`].
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// A required configuration field is missing, empty or unparsable.
    #[error("missing or invalid option: {field}")]
    Configuration { field: &'static str },

    /// The API answered with a status outside 200/204/304.
    #[error("unexpected HTTP status: {status}")]
    UnexpectedStatus { status: StatusCode },

    /// The granted scopes contain none of the required ones.
    #[error("missing required scope: {} (granted: '{granted}')", required.join(" and/or "))]
    InsufficientScope {
        required: Vec<String>,
        granted: String,
    },

    /// Network, DNS or timeout failure of the underlying transport.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl SpotifyError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, SpotifyError::Transport(e) if e.is_timeout())
    }
}

pub type Result<T, E = SpotifyError> = std::result::Result<T, E>;
