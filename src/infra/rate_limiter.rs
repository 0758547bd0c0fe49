//! Fixed-window request counters behind the rate limiting middleware.
//!
//! Redis holds the counters when it is configured, so every instance shares
//! one window per client. Otherwise each process counts in memory.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::Mutex;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::cache::Cache;
use crate::config::RATE_LIMIT_LOCAL_MAX_KEYS;
use crate::errors::AppResult;

/// Counts one request against a client's current window.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Returns the count after this request and whether it is still allowed.
    async fn hit(
        &self,
        identifier: &str,
        max_requests: u64,
        window_seconds: u64,
    ) -> AppResult<(u64, bool)>;
}

#[async_trait]
impl RateLimitStore for Cache {
    async fn hit(
        &self,
        identifier: &str,
        max_requests: u64,
        window_seconds: u64,
    ) -> AppResult<(u64, bool)> {
        self.check_rate_limit(identifier, max_requests, window_seconds)
            .await
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    expires_at: Instant,
    count: u64,
}

/// Per-process limiter used when no Redis is configured.
#[derive(Debug, Default)]
pub struct InMemoryRateLimiter {
    windows: Mutex<HashMap<String, Window>>,
}

impl InMemoryRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateLimitStore for InMemoryRateLimiter {
    async fn hit(
        &self,
        identifier: &str,
        max_requests: u64,
        window_seconds: u64,
    ) -> AppResult<(u64, bool)> {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;

        if windows.len() >= RATE_LIMIT_LOCAL_MAX_KEYS {
            windows.retain(|_, window| window.expires_at > now);
        }

        let window = windows
            .entry(identifier.to_string())
            .and_modify(|window| {
                if window.expires_at <= now {
                    *window = Window {
                        expires_at: now + Duration::from_secs(window_seconds),
                        count: 0,
                    };
                }
            })
            .or_insert(Window {
                expires_at: now + Duration::from_secs(window_seconds),
                count: 0,
            });

        window.count += 1;

        Ok((window.count, window.count <= max_requests))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_requests_over_limit_are_refused() {
        let limiter = InMemoryRateLimiter::new();

        assert_eq!(limiter.hit("general:a", 2, 60).await.unwrap(), (1, true));
        assert_eq!(limiter.hit("general:a", 2, 60).await.unwrap(), (2, true));
        assert_eq!(limiter.hit("general:a", 2, 60).await.unwrap(), (3, false));
    }

    #[tokio::test]
    async fn test_clients_are_counted_separately() {
        let limiter = InMemoryRateLimiter::new();

        limiter.hit("auth:10.0.0.1", 1, 60).await.unwrap();
        let (_, allowed) = limiter.hit("auth:10.0.0.1", 1, 60).await.unwrap();
        assert!(!allowed);

        assert_eq!(limiter.hit("auth:10.0.0.2", 1, 60).await.unwrap(), (1, true));
    }

    #[tokio::test]
    async fn test_expired_window_starts_over() {
        let limiter = InMemoryRateLimiter::new();

        // A zero-length window has already expired on the next hit
        assert_eq!(limiter.hit("general:a", 1, 0).await.unwrap(), (1, true));
        assert_eq!(limiter.hit("general:a", 1, 0).await.unwrap(), (1, true));
    }
}
