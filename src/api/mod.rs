//! The two Spotify endpoints this crate talks to.

pub mod current_track;
pub mod token;

use http::StatusCode;

use crate::error::{Result, SpotifyError};
use crate::utils::constants::{
    OK_HTTP_STATUS_CODES, SPOTIFY_CURRENTLY_PLAYING_URL, SPOTIFY_TOKEN_URL,
};

/// Target URLs. Defaults to the public Spotify endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: String,
    pub currently_playing_url: String,
}

impl Endpoints {
    pub fn new(token_url: impl Into<String>, currently_playing_url: impl Into<String>) -> Self {
        Self {
            token_url: token_url.into(),
            currently_playing_url: currently_playing_url.into(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(SPOTIFY_TOKEN_URL, SPOTIFY_CURRENTLY_PLAYING_URL)
    }
}

pub(crate) fn ensure_ok_status(status: StatusCode) -> Result<()> {
    if OK_HTTP_STATUS_CODES.contains(&status.as_u16()) {
        Ok(())
    } else {
        Err(SpotifyError::UnexpectedStatus { status })
    }
}
