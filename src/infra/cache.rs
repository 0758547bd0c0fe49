//! Redis cache implementation.
//!
//! Backs the per-client rate limiter and the health probe.

use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};

use crate::config::CACHE_PREFIX_RATE_LIMIT;
use crate::errors::{AppError, AppResult};

/// Redis cache wrapper with connection pooling.
#[derive(Clone)]
pub struct Cache {
    connection: ConnectionManager,
}

impl Cache {
    /// Create a new cache instance and connect to Redis.
    pub async fn connect(redis_url: &str) -> AppResult<Self> {
        let client = Client::open(redis_url).map_err(cache_error)?;
        let connection = ConnectionManager::new(client).await.map_err(cache_error)?;

        tracing::info!("Redis cache connected");

        Ok(Self { connection })
    }

    /// Check if a key exists in cache.
    pub async fn exists(&self, key: &str) -> AppResult<bool> {
        let mut conn = self.connection.clone();
        let exists: bool = conn.exists(key).await.map_err(cache_error)?;
        Ok(exists)
    }

    /// Check and increment a fixed-window rate limit counter.
    /// Returns (current_count, is_allowed) tuple.
    ///
    /// The increment and the expiry run as one script, so a window can never
    /// be left without a TTL.
    pub async fn check_rate_limit(
        &self,
        identifier: &str,
        max_requests: u64,
        window_seconds: u64,
    ) -> AppResult<(u64, bool)> {
        let key = rate_limit_key(identifier);
        let mut conn = self.connection.clone();

        let count: i64 = redis::Script::new(FIXED_WINDOW_SCRIPT)
            .key(&key)
            .arg(window_seconds)
            .invoke_async(&mut conn)
            .await
            .map_err(cache_error)?;
        let count = u64::try_from(count).unwrap_or(0);

        Ok((count, count <= max_requests))
    }

    /// Remaining TTL of a rate limit window in seconds (-1 without expiry, -2 when absent).
    pub async fn rate_limit_ttl(&self, identifier: &str) -> AppResult<i64> {
        let mut conn = self.connection.clone();
        let ttl: i64 = conn
            .ttl(rate_limit_key(identifier))
            .await
            .map_err(cache_error)?;
        Ok(ttl)
    }
}

/// INCR the window counter and (re)arm its expiry whenever it has none.
const FIXED_WINDOW_SCRIPT: &str = r"
local count = redis.call('incr', KEYS[1])
if redis.call('ttl', KEYS[1]) < 0 then
    redis.call('expire', KEYS[1], ARGV[1])
end
return count
";

fn rate_limit_key(identifier: &str) -> String {
    format!("{}{}", CACHE_PREFIX_RATE_LIMIT, identifier)
}

/// Convert Redis error to AppError.
fn cache_error(e: RedisError) -> AppError {
    tracing::error!("Redis error: {}", e);
    AppError::internal(format!("Cache error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Run with: REDIS_URL=redis://127.0.0.1:6379 cargo test -- --ignored

    async fn test_cache() -> Cache {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".into());
        Cache::connect(&url).await.unwrap()
    }

    #[test]
    fn test_rate_limit_key_prefix() {
        assert_eq!(rate_limit_key("auth:10.0.0.1"), "rate_limit:auth:10.0.0.1");
    }

    #[tokio::test]
    #[ignore = "Requires running Redis instance"]
    async fn test_first_hit_opens_window_with_expiry() {
        let cache = test_cache().await;
        let identifier = format!("test:{}", uuid::Uuid::new_v4());

        assert_eq!(cache.check_rate_limit(&identifier, 2, 60).await.unwrap(), (1, true));
        assert_eq!(cache.check_rate_limit(&identifier, 2, 60).await.unwrap(), (2, true));
        assert_eq!(cache.check_rate_limit(&identifier, 2, 60).await.unwrap(), (3, false));

        let ttl = cache.rate_limit_ttl(&identifier).await.unwrap();
        assert!((1..=60).contains(&ttl), "ttl was {ttl}");
    }

    #[tokio::test]
    #[ignore = "Requires running Redis instance"]
    async fn test_counter_without_expiry_is_rearmed() {
        let cache = test_cache().await;
        let identifier = format!("test:{}", uuid::Uuid::new_v4());

        let mut conn = cache.connection.clone();
        let _: () = conn.set(rate_limit_key(&identifier), 50i64).await.unwrap();
        assert_eq!(cache.rate_limit_ttl(&identifier).await.unwrap(), -1);

        let (count, allowed) = cache.check_rate_limit(&identifier, 10, 60).await.unwrap();

        assert_eq!(count, 51);
        assert!(!allowed);
        assert!(cache.rate_limit_ttl(&identifier).await.unwrap() > 0);
    }
}
