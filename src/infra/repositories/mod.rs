//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod identity_repository;
mod memory;
mod safe_house_repository;

pub use identity_repository::{AdministratorStore, IdentityRepository, UserStore};
pub use memory::{InMemoryIdentityRepository, InMemorySafeHouseRepository};
pub use safe_house_repository::{SafeHouseRepository, SafeHouseStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use identity_repository::MockIdentityRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use safe_house_repository::MockSafeHouseRepository;
