use chrono::Utc;

pub fn now_i64() -> i64 {
    Utc::now().timestamp()
}

/// Absolute expiration for a token granted now with the given lifetime.
/// The lifetime is truncated to whole seconds; `as` saturates and maps NaN to 0.
pub fn expires_at(now: i64, expires_in_seconds: f64) -> i64 {
    now.saturating_add(expires_in_seconds.trunc() as i64)
}
