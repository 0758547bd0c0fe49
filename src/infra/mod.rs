//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections, migrations and repositories
//! - Caching (Redis) and the rate limit counters
//! - The severity model weights file

pub mod cache;
pub mod db;
pub mod persistence;
pub mod rate_limiter;
pub mod repositories;
pub mod severity;

pub use cache::Cache;
pub use db::{Database, Migrator};
pub use persistence::{Persistence, Repositories};
pub use rate_limiter::{InMemoryRateLimiter, RateLimitStore};
pub use repositories::{
    AdministratorStore, IdentityRepository, InMemoryIdentityRepository,
    InMemorySafeHouseRepository, SafeHouseRepository, SafeHouseStore, UserStore,
};
pub use severity::LinearSeverityModel;

#[cfg(any(test, feature = "test-utils"))]
pub use rate_limiter::MockRateLimitStore;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockIdentityRepository, MockSafeHouseRepository};
