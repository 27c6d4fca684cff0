use http::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::api::ensure_ok_status;
use crate::error::{Result, SpotifyError};
use crate::session::market::Market;
use crate::session::state::AccessToken;

const IS_PLAYING: &str = "is_playing";

/// Currently playing payload. `is_playing` is derived from the response status;
/// every other field is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentTrack {
    pub is_playing: bool,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl CurrentTrack {
    pub fn from_response(status: StatusCode, body: &str) -> Result<Self> {
        let mut payload = if body.trim().is_empty() {
            Map::new()
        } else {
            match serde_json::from_str::<Value>(body) {
                Ok(Value::Object(map)) => map,
                Ok(other) => {
                    return Err(SpotifyError::MalformedResponse(format!(
                        "currently playing: expected a JSON object, got {}",
                        other
                    )))
                }
                Err(e) => {
                    return Err(SpotifyError::MalformedResponse(format!("currently playing: {}", e)))
                }
            }
        };
        payload.remove(IS_PLAYING);

        Ok(Self {
            is_playing: status != StatusCode::NO_CONTENT,
            payload,
        })
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.payload.get(field)
    }

    /// Track (or episode) object, absent when nothing is playing.
    pub fn item(&self) -> Option<&Value> {
        self.payload.get("item").filter(|v| !v.is_null())
    }

    /// Flattened view, `is_playing` included.
    pub fn to_value(&self) -> Value {
        let mut map = self.payload.clone();
        map.insert(IS_PLAYING.to_owned(), Value::Bool(self.is_playing));
        Value::Object(map)
    }
}

pub async fn request_current_track(
    client: &Client,
    currently_playing_url: &str,
    token: &AccessToken,
    market: Option<&Market>,
    timeout: Option<std::time::Duration>,
) -> Result<CurrentTrack> {
    let mut request = client
        .get(currently_playing_url)
        .header(ACCEPT, "application/json")
        .header(AUTHORIZATION, token.authorization_header());
    if let Some(market) = market {
        request = request.query(&[("market", market.as_str())]);
    }
    if let Some(timeout) = timeout {
        request = request.timeout(timeout);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("currently playing endpoint answered {}", status);
    ensure_ok_status(status)?;

    let body = response.text().await?;
    CurrentTrack::from_response(status, &body)
}
