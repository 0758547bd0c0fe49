//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::domain::{Admin, Member};
use crate::infra::{Cache, Database, InMemoryRateLimiter, RateLimitStore};
use crate::services::{AlertService, IdentityService, SafeHouseService, ServiceContainer};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Administrator service
    pub administrators: Arc<dyn IdentityService<Admin>>,
    /// User service
    pub users: Arc<dyn IdentityService<Member>>,
    /// Safe house service
    pub safe_houses: Arc<dyn SafeHouseService>,
    /// Severity prediction service
    pub alerts: Arc<dyn AlertService>,
    /// Redis cache, when configured
    pub cache: Option<Arc<Cache>>,
    /// Rate limit counters: Redis when configured, otherwise in-process
    pub rate_limiter: Arc<dyn RateLimitStore>,
    /// Database connection; absent when running on in-memory stores
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state from a service container.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self {
            administrators: container.administrators(),
            users: container.users(),
            safe_houses: container.safe_houses(),
            alerts: container.alerts(),
            cache: None,
            rate_limiter: Arc::new(InMemoryRateLimiter::new()),
            database: None,
        }
    }

    /// Attach Redis; its counters replace the in-process ones.
    pub fn with_cache(mut self, cache: Option<Arc<Cache>>) -> Self {
        if let Some(cache) = &cache {
            let counters: Arc<dyn RateLimitStore> = cache.clone();
            self.rate_limiter = counters;
        }
        self.cache = cache;
        self
    }

    pub fn with_rate_limiter(mut self, rate_limiter: Arc<dyn RateLimitStore>) -> Self {
        self.rate_limiter = rate_limiter;
        self
    }

    pub fn with_database(mut self, database: Option<Arc<Database>>) -> Self {
        self.database = database;
        self
    }
}
