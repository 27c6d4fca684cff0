use reqwest::Client;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::api::current_track::{request_current_track, CurrentTrack};
use crate::api::token::request_token;
use crate::api::Endpoints;
use crate::config::settings::ClientConfig;
use crate::error::Result;
use crate::helpers::time::now_i64;
use crate::session::market::Market;
use crate::session::state::{AccessToken, SessionState};

/// Spotify Web API client bound to one refresh token.
///
/// The session (token triple and market) lives behind a lock owned by the
/// client. Refreshes are serialised so concurrent callers on an expired token
/// share a single refresh.
#[derive(Debug)]
pub struct SpotifyClient {
    config: ClientConfig,
    endpoints: Endpoints,
    http: Client,
    session: RwLock<SessionState>,
    refresh_lock: Mutex<()>,
}

impl SpotifyClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_endpoints(config, Endpoints::default())
    }

    pub fn with_endpoints(config: ClientConfig, endpoints: Endpoints) -> Result<Self> {
        config.validate()?;
        let http = Client::builder().build()?;
        debug!("spotify client created for client_id '{}'", config.client_id);
        Ok(Self {
            config,
            endpoints,
            http,
            session: RwLock::new(SessionState::new()),
            refresh_lock: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Snapshot of the current session.
    pub async fn session(&self) -> SessionState {
        self.session.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated(now_i64())
    }

    /// Stored market code, empty when unset.
    pub async fn market(&self) -> String {
        self.session
            .read()
            .await
            .market()
            .map(|m| m.as_str().to_owned())
            .unwrap_or_default()
    }

    /// Stores `code` uppercased if it is two letters; anything else is ignored.
    pub async fn set_market(&self, code: &str) {
        match Market::parse(code) {
            Some(market) => {
                debug!("market set to {}", market);
                self.session.write().await.set_market(Some(market));
            }
            None => debug!("ignoring invalid market code '{}'", code),
        }
    }

    pub async fn clear_market(&self) {
        self.session.write().await.set_market(None);
    }

    /// Exchange the refresh token for a new access token and store it.
    ///
    /// The session is only touched when the response passes both the status
    /// and the scope check.
    pub async fn refresh_access_token(&self) -> Result<AccessToken> {
        self.trace_entry("refresh_access_token");

        let response = request_token(&self.http, &self.endpoints.token_url, &self.config).await?;
        let token = response.into_access_token(now_i64());

        {
            let mut session = self.session.write().await;
            let next = session.with_grant(token.clone());
            *session = next;
        }
        info!(
            token_type = %token.token_type,
            expires_at = token.expires_at,
            "access token refreshed"
        );
        Ok(token)
    }

    /// Single GET of the currently playing endpoint with the stored token.
    pub async fn fetch_current_track(&self) -> Result<CurrentTrack> {
        self.trace_entry("fetch_current_track");

        let (token, market) = {
            let session = self.session.read().await;
            let token = session
                .token()
                .cloned()
                .unwrap_or_else(|| AccessToken::new(String::new(), String::new(), 0));
            (token, session.market().cloned())
        };

        request_current_track(
            &self.http,
            &self.endpoints.currently_playing_url,
            &token,
            market.as_ref(),
            self.config.timeout(),
        )
        .await
    }

    /// Currently playing track, refreshing the access token first when it is
    /// missing or expired.
    pub async fn current_track(&self) -> Result<CurrentTrack> {
        self.trace_entry("current_track");

        if !self.is_authenticated().await {
            let _guard = self.refresh_lock.lock().await;
            // another caller may have refreshed while we waited
            if !self.is_authenticated().await {
                self.refresh_access_token().await?;
            }
        }
        self.fetch_current_track().await
    }

    // verbose only raises the level of these diagnostics
    fn trace_entry(&self, operation: &'static str) {
        if self.config.verbose {
            info!(operation, "entering");
        } else {
            debug!(operation, "entering");
        }
    }
}
