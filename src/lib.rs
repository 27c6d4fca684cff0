//! # Spotify current track
//!
//! Minimal Spotify Web API client: exchanges an OAuth2 refresh token for
//! short-lived access tokens and reads the currently playing track.
//!
//! Modules:
//! - `config` — client configuration, validation and YAML loading
//! - `session` — access token / market state and its transitions
//! - `api` — token refresh and currently-playing requests
//! - `client` — `SpotifyClient`, tying the above together

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod helpers;
pub mod session;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::api::current_track::CurrentTrack;
pub use crate::api::Endpoints;
pub use crate::client::SpotifyClient;
pub use crate::config::settings::ClientConfig;
pub use crate::error::SpotifyError;
pub use crate::session::{AccessToken, Market, SessionState};
