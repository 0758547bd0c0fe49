//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod alert_service;
pub mod container;
mod identity_service;
mod safe_house_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use alert_service::{AlertPredictor, AlertService};
pub use identity_service::{AdministratorManager, IdentityManager, IdentityService, UserManager};
pub use safe_house_service::{SafeHouseManager, SafeHouseService};
