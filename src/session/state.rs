use std::fmt;

use crate::session::market::Market;

/// Token triple returned by a successful refresh.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub value: String,
    pub token_type: String,
    /// UNIX timestamp, seconds
    pub expires_at: i64,
}

impl AccessToken {
    pub fn new(value: String, token_type: String, expires_at: i64) -> Self {
        Self { value, token_type, expires_at }
    }

    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.value)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"***")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Mutable per-client session. The token triple is only ever replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<AccessToken>,
    market: Option<Market>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State after a successful refresh; market carries over.
    pub fn with_grant(&self, token: AccessToken) -> Self {
        Self {
            token: Some(token),
            market: self.market.clone(),
        }
    }

    pub fn access_token(&self) -> &str {
        self.token.as_ref().map(|t| t.value.as_str()).unwrap_or("")
    }

    pub fn access_token_type(&self) -> &str {
        self.token.as_ref().map(|t| t.token_type.as_str()).unwrap_or("")
    }

    /// 0 until the first refresh
    pub fn access_token_expiration(&self) -> i64 {
        self.token.as_ref().map(|t| t.expires_at).unwrap_or(0)
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Token usable at `now`: value and type set, expiration in the future.
    pub fn valid_token(&self, now: i64) -> Option<&AccessToken> {
        self.token
            .as_ref()
            .filter(|t| !t.value.is_empty() && !t.token_type.is_empty() && t.expires_at > now)
    }

    pub fn is_authenticated(&self, now: i64) -> bool {
        self.valid_token(now).is_some()
    }

    pub fn market(&self) -> Option<&Market> {
        self.market.as_ref()
    }

    pub fn set_market(&mut self, market: Option<Market>) {
        self.market = market;
    }
}
