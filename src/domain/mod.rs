//! Domain layer - Core business entities and logic
//!
//! This module contains the registry's records and their invariants,
//! independent of infrastructure concerns. No instance of an entity can
//! exist in an invalid state: construction and mutation both validate.

pub mod alert;
pub mod credential;
pub mod identity;
pub mod safe_house;

pub use alert::{AlertFeatures, SeverityModel, SeverityResponse};
pub use credential::PasswordHash;
pub use identity::{
    normalize_email, Admin, Administrator, Identity, IdentityKind, IdentityResponse, Member, User,
};
pub use safe_house::{SafeHouse, SafeHouseResponse};

#[cfg(any(test, feature = "test-utils"))]
pub use alert::MockSeverityModel;
