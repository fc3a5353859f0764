//! Fixed-window, per-client request limiter for the generation endpoint.
//!
//! State is in-process only; a restart resets every window.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

/// Expired windows are swept once the map grows past this many clients.
const PRUNE_THRESHOLD: usize = 1024;

const UNKNOWN_CLIENT: &str = "unknown";

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    /// Only set behind a proxy that overwrites `x-forwarded-for`; otherwise a
    /// client picks its own key.
    trust_forwarded_for: bool,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            trust_forwarded_for: false,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn trust_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }

    /// Records a request from `key`; returns false when it is over the limit.
    pub fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> bool {
        // counters stay consistent even if a holder panicked
        let mut windows = self.windows.lock().unwrap_or_else(PoisonError::into_inner);

        if windows.len() >= PRUNE_THRESHOLD {
            let window = self.window;
            windows.retain(|_, w| now.duration_since(w.started) < window);
        }

        let entry = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.window {
            *entry = Window {
                started: now,
                count: 0,
            };
        }

        if entry.count >= self.max_requests {
            return false;
        }
        entry.count += 1;
        true
    }
}

/// First `x-forwarded-for` hop when trusted, else the socket peer, else a
/// shared bucket.
fn client_key(request: &Request, trust_forwarded_for: bool) -> String {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .filter(|_| trust_forwarded_for)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    if let Some(ip) = forwarded {
        return ip.to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Middleware applied to rate-limited routes.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let key = client_key(&request, state.rate_limiter.trust_forwarded_for);
    if !state.rate_limiter.check(&key) {
        warn!(client = %key, "Rate limit exceeded");
        return Err(AppError::RateLimited);
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http};

    const WINDOW: Duration = Duration::from_secs(900);

    #[test]
    fn test_allows_up_to_max_then_blocks() {
        let limiter = RateLimiter::new(3, WINDOW);
        let now = Instant::now();
        assert!(limiter.check_at("1.2.3.4", now));
        assert!(limiter.check_at("1.2.3.4", now));
        assert!(limiter.check_at("1.2.3.4", now));
        assert!(!limiter.check_at("1.2.3.4", now));
    }

    #[test]
    fn test_clients_are_counted_separately() {
        let limiter = RateLimiter::new(1, WINDOW);
        let now = Instant::now();
        assert!(limiter.check_at("a", now));
        assert!(!limiter.check_at("a", now));
        assert!(limiter.check_at("b", now));
    }

    #[test]
    fn test_window_resets_after_expiry() {
        let limiter = RateLimiter::new(1, WINDOW);
        let start = Instant::now();
        assert!(limiter.check_at("a", start));
        assert!(!limiter.check_at("a", start + Duration::from_secs(899)));
        assert!(limiter.check_at("a", start + WINDOW));
    }

    #[test]
    fn test_expired_windows_are_pruned() {
        let limiter = RateLimiter::new(1, WINDOW);
        let start = Instant::now();
        for i in 0..PRUNE_THRESHOLD {
            limiter.check_at(&format!("client-{i}"), start);
        }
        assert!(limiter.check_at("late", start + WINDOW));
        let windows = limiter.windows.lock().unwrap();
        assert_eq!(windows.len(), 1);
    }

    fn from_peer(forwarded_for: &str) -> Request {
        let mut request = http::Request::builder()
            .header("x-forwarded-for", forwarded_for)
            .body(Body::empty())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([192, 0, 2, 1], 4000))));
        request
    }

    #[test]
    fn test_client_key_uses_forwarded_for_when_trusted() {
        let request = from_peer("203.0.113.7, 10.0.0.1");
        assert_eq!(client_key(&request, true), "203.0.113.7");
    }

    #[test]
    fn test_client_key_ignores_forwarded_for_by_default() {
        let request = from_peer("203.0.113.7");
        assert_eq!(client_key(&request, false), "192.0.2.1");
    }

    #[test]
    fn test_rotating_forwarded_for_cannot_escape_limit() {
        let limiter = RateLimiter::new(2, WINDOW);
        let now = Instant::now();
        let allowed = (0..50)
            .filter(|i| {
                let request = from_peer(&format!("10.0.0.{i}"));
                let key = client_key(&request, limiter.trust_forwarded_for);
                limiter.check_at(&key, now)
            })
            .count();
        assert_eq!(allowed, 2);
    }

    #[test]
    fn test_client_key_falls_back_to_shared_bucket() {
        let request = http::Request::builder().body(Body::empty()).unwrap();
        assert_eq!(client_key(&request, false), UNKNOWN_CLIENT);
        assert_eq!(client_key(&request, true), UNKNOWN_CLIENT);
    }
}
