use base64::prelude::*;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::api::ensure_ok_status;
use crate::config::settings::ClientConfig;
use crate::error::{Result, SpotifyError};
use crate::helpers::time::expires_at;
use crate::session::state::AccessToken;
use crate::utils::constants::REQUIRED_SCOPES;

/// Body of a refresh-token grant
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Seconds; any JSON number, truncated when applied
    pub expires_in: f64,
    #[serde(default)]
    pub scope: String,
}

impl TokenResponse {
    /// Fails unless at least one required scope was granted.
    pub fn ensure_scope(&self) -> Result<()> {
        let granted = has_required_scope(&self.scope);
        if granted {
            Ok(())
        } else {
            Err(SpotifyError::InsufficientScope {
                required: REQUIRED_SCOPES.iter().map(|s| s.to_string()).collect(),
                granted: self.scope.clone(),
            })
        }
    }

    pub fn into_access_token(self, now: i64) -> AccessToken {
        AccessToken::new(self.access_token, self.token_type, expires_at(now, self.expires_in))
    }
}

pub fn has_required_scope(scope: &str) -> bool {
    scope
        .split_whitespace()
        .any(|granted| REQUIRED_SCOPES.contains(&granted))
}

pub fn basic_authorization(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", BASE64_STANDARD.encode(credentials))
}

/// POST the refresh grant and decode the answer. Status and scope are checked in
/// that order and the first failure is returned.
pub async fn request_token(
    client: &Client,
    token_url: &str,
    config: &ClientConfig,
) -> Result<TokenResponse> {
    let params = [
        ("grant_type", "refresh_token"),
        ("refresh_token", config.refresh_token.as_str()),
    ];

    let mut request = client
        .post(token_url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(AUTHORIZATION, basic_authorization(&config.client_id, &config.client_secret))
        .form(&params);
    if let Some(timeout) = config.timeout() {
        request = request.timeout(timeout);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("token endpoint answered {}", status);
    ensure_ok_status(status)?;

    let body = response.text().await?;
    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| SpotifyError::MalformedResponse(format!("token response: {}", e)))?;
    token.ensure_scope()?;
    Ok(token)
}
