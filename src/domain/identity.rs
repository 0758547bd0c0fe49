//! Identity entities - administrators and users.
//!
//! Both roles share one shape and one behaviour contract; the role is a
//! type parameter so an `Administrator` can never be handed to code that
//! expects a `User`.

use std::marker::PhantomData;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::credential::PasswordHash;
use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// Role capability shared by the identity kinds.
pub trait IdentityKind: std::fmt::Debug + Clone + PartialEq + Eq + Send + Sync + 'static {
    /// Lowercase role label used in logs
    const LABEL: &'static str;

    /// Message reported when a lookup by id finds nothing
    const NOT_FOUND: &'static str;

    /// Message reported when the email is already taken
    const DUPLICATE_EMAIL: &'static str;
}

/// Administrator role marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Admin;

impl IdentityKind for Admin {
    const LABEL: &'static str = "administrator";
    const NOT_FOUND: &'static str = "Administrator not found.";
    const DUPLICATE_EMAIL: &'static str = "An administrator with this email already exists.";
}

/// Ordinary user role marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member;

impl IdentityKind for Member {
    const LABEL: &'static str = "user";
    const NOT_FOUND: &'static str = "User not found.";
    const DUPLICATE_EMAIL: &'static str = "A user with this email already exists.";
}

/// Administrator entity
pub type Administrator = Identity<Admin>;

/// User entity
pub type User = Identity<Member>;

/// Normalize an email the way it is stored: trimmed, lowercase.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Identity entity.
///
/// Every live instance satisfies its invariants: fields are private and
/// only change through setters that validate first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity<K: IdentityKind> {
    id: Uuid,
    name: String,
    email: String,
    password_hash: PasswordHash,
    kind: PhantomData<K>,
}

impl<K: IdentityKind> Identity<K> {
    /// Create a new identity with a fresh id.
    ///
    /// # Errors
    /// Returns a validation error for the first invalid field.
    pub fn new(name: &str, email: &str, password: &str) -> AppResult<Self> {
        let mut identity = Self {
            id: Uuid::new_v4(),
            name: String::new(),
            email: String::new(),
            password_hash: PasswordHash::from_digest(String::new()),
            kind: PhantomData,
        };

        identity.set_name(name)?;
        identity.set_email(email)?;
        identity.set_password(password)?;

        Ok(identity)
    }

    /// Rebuild an identity from stored state without re-validating.
    pub(crate) fn restore(id: Uuid, name: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            email,
            password_hash: PasswordHash::from_digest(password_hash),
            kind: PhantomData,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Set the display name (trimmed, required).
    pub fn set_name(&mut self, name: &str) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Name is required."));
        }

        self.name = name.to_string();
        Ok(())
    }

    /// Set the email (trimmed, lowercased, required).
    pub fn set_email(&mut self, email: &str) -> AppResult<()> {
        if email.trim().is_empty() {
            return Err(AppError::validation("Email is required."));
        }

        self.email = normalize_email(email);
        Ok(())
    }

    /// Replace the password. Only the digest is kept.
    pub fn set_password(&mut self, password: &str) -> AppResult<()> {
        if password.trim().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters.",
                MIN_PASSWORD_LENGTH
            )));
        }

        self.password_hash = PasswordHash::from_raw(password);
        Ok(())
    }

    /// Check a candidate password. Empty candidates never match.
    pub fn verify_password(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }

        self.password_hash.matches(candidate)
    }
}

/// Identity response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IdentityResponse {
    /// Unique identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// Display name
    #[schema(example = "Admin A")]
    pub name: String,
    /// Normalized email address
    #[schema(example = "a@ex.com")]
    pub email: String,
}

impl<K: IdentityKind> From<Identity<K>> for IdentityResponse {
    fn from(identity: Identity<K>) -> Self {
        Self {
            id: identity.id,
            name: identity.name,
            email: identity.email,
        }
    }
}
