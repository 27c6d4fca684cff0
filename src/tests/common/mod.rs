use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use crate::{ClientConfig, Endpoints, SpotifyClient};

pub const TOKEN_PATH: &str = "/api/token";
pub const TRACK_PATH: &str = "/v1/me/player/currently-playing";

pub fn test_config() -> ClientConfig {
    ClientConfig::new("client-id", "client-secret", "refresh-1")
}

pub fn endpoints_for(base_url: &str) -> Endpoints {
    Endpoints::new(format!("{}{}", base_url, TOKEN_PATH), format!("{}{}", base_url, TRACK_PATH))
}

pub fn client_for(base_url: &str, config: ClientConfig) -> SpotifyClient {
    SpotifyClient::with_endpoints(config, endpoints_for(base_url)).expect("valid test config")
}

pub fn token_body(expires_in: u64, scope: &str) -> Value {
    json!({
        "access_token": "A",
        "token_type": "Bearer",
        "expires_in": expires_in,
        "scope": scope,
    })
}

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

/// Fake Spotify that records every call in arrival order:
/// `token` for refreshes, `track?<query>` for currently-playing fetches.
#[derive(Clone)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<String>>>,
    expires_in: u64,
    token_delay: Duration,
}

impl Recorder {
    pub fn new(expires_in: u64) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            expires_in,
            token_delay: Duration::ZERO,
        }
    }

    pub fn with_token_delay(mut self, delay: Duration) -> Self {
        self.token_delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub async fn spawn(&self) -> (JoinHandle<()>, String) {
        let router = Router::new()
            .route(TOKEN_PATH, post(recorded_token))
            .route(TRACK_PATH, get(recorded_track))
            .with_state(self.clone());
        let (handle, addr) = spawn_axum(router).await;
        (handle, format!("http://{}", addr))
    }
}

async fn recorded_token(State(recorder): State<Recorder>) -> Json<Value> {
    recorder.calls.lock().unwrap().push("token".to_owned());
    if !recorder.token_delay.is_zero() {
        tokio::time::sleep(recorder.token_delay).await;
    }
    Json(token_body(recorder.expires_in, "user-read-currently-playing"))
}

async fn recorded_track(
    State(recorder): State<Recorder>,
    RawQuery(query): RawQuery,
) -> (StatusCode, Json<Value>) {
    recorder
        .calls
        .lock()
        .unwrap()
        .push(format!("track?{}", query.unwrap_or_default()));
    (StatusCode::OK, Json(json!({"item": {"name": "Song"}, "is_playing": true})))
}
