//! Identity service - administrator and user use cases.
//!
//! One manager type serves both roles; the role is fixed by the
//! repository it is built with.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{normalize_email, Admin, Identity, IdentityKind, Member};
use crate::errors::{AppError, AppResult};
use crate::infra::IdentityRepository;

/// Identity service trait for dependency injection.
#[async_trait]
pub trait IdentityService<K: IdentityKind>: Send + Sync {
    /// List every identity of this role
    async fn get_all(&self) -> AppResult<Vec<Identity<K>>>;

    /// Get identity by ID
    async fn get_by_id(&self, id: Uuid) -> AppResult<Identity<K>>;

    /// Register a new identity; the email must not be taken
    async fn create(&self, name: &str, email: &str, password: &str) -> AppResult<Identity<K>>;

    /// Replace name, email and password of an existing identity
    async fn update(&self, id: Uuid, name: &str, email: &str, password: &str) -> AppResult<()>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Verify credentials.
    ///
    /// An unknown email and a wrong password fail with the same error.
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<Identity<K>>;
}

/// Administrator service
pub type AdministratorManager = IdentityManager<Admin>;

/// User service
pub type UserManager = IdentityManager<Member>;

/// Concrete implementation of IdentityService.
pub struct IdentityManager<K: IdentityKind> {
    repo: Arc<dyn IdentityRepository<K>>,
}

impl<K: IdentityKind> IdentityManager<K> {
    pub fn new(repo: Arc<dyn IdentityRepository<K>>) -> Self {
        Self { repo }
    }
}

/// The store's unique index is the real guarantee; a rejection there
/// surfaces as the same conflict the pre-check reports.
fn duplicate_email<K: IdentityKind>(err: AppError) -> AppError {
    match err {
        AppError::UniqueViolation(_) => AppError::conflict(K::DUPLICATE_EMAIL),
        other => other,
    }
}

#[async_trait]
impl<K: IdentityKind> IdentityService<K> for IdentityManager<K> {
    async fn get_all(&self) -> AppResult<Vec<Identity<K>>> {
        self.repo.get_all().await
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Identity<K>> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(K::NOT_FOUND))
    }

    async fn create(&self, name: &str, email: &str, password: &str) -> AppResult<Identity<K>> {
        let email = normalize_email(email);

        if self.repo.get_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(K::DUPLICATE_EMAIL));
        }

        let identity = Identity::<K>::new(name, &email, password)?;
        self.repo
            .add(&identity)
            .await
            .map_err(duplicate_email::<K>)?;

        tracing::info!(id = %identity.id(), kind = K::LABEL, "Identity created");
        Ok(identity)
    }

    async fn update(&self, id: Uuid, name: &str, email: &str, password: &str) -> AppResult<()> {
        let mut identity = self.get_by_id(id).await?;

        identity.set_name(name)?;
        identity.set_email(email)?;
        identity.set_password(password)?;

        self.repo
            .update(&identity)
            .await
            .map_err(duplicate_email::<K>)?;

        tracing::info!(id = %id, kind = K::LABEL, "Identity updated");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repo.exists(id).await? {
            return Err(AppError::not_found(K::NOT_FOUND));
        }

        self.repo.delete(id).await?;

        tracing::info!(id = %id, kind = K::LABEL, "Identity deleted");
        Ok(())
    }

    async fn authenticate(&self, email: &str, password: &str) -> AppResult<Identity<K>> {
        let email = normalize_email(email);

        match self.repo.get_by_email(&email).await? {
            Some(identity) if identity.verify_password(password) => {
                tracing::debug!(id = %identity.id(), kind = K::LABEL, "Authentication succeeded");
                Ok(identity)
            }
            _ => {
                tracing::warn!(kind = K::LABEL, "Authentication failed");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Administrator, User};
    use crate::infra::MockIdentityRepository;

    #[tokio::test]
    async fn test_create_normalizes_email_before_lookup() {
        let mut repo = MockIdentityRepository::<Admin>::new();
        repo.expect_get_by_email()
            .withf(|email| email == "a@ex.com")
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_add()
            .withf(|admin: &Administrator| admin.email() == "a@ex.com")
            .times(1)
            .returning(|_| Ok(()));

        let manager = AdministratorManager::new(Arc::new(repo));
        let admin = manager.create("Admin A", " A@Ex.com ", "secret1").await.unwrap();

        assert_eq!(admin.name(), "Admin A");
    }

    #[tokio::test]
    async fn test_invalid_fields_never_reach_repository() {
        let mut repo = MockIdentityRepository::<Member>::new();
        repo.expect_get_by_email().returning(|_| Ok(None));
        repo.expect_add().never();

        let manager = UserManager::new(Arc::new(repo));
        let result = manager.create("User", "u@ex.com", "12345").await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_fail_alike() {
        let stored = User::new("User", "x@ex.com", "secret1").unwrap();

        let mut repo = MockIdentityRepository::<Member>::new();
        repo.expect_get_by_email().returning(move |email| {
            Ok((email == "x@ex.com").then(|| stored.clone()))
        });

        let manager = UserManager::new(Arc::new(repo));
        let wrong = manager.authenticate("x@ex.com", "wrong").await.unwrap_err();
        let missing = manager.authenticate("missing@ex.com", "anything").await.unwrap_err();

        assert!(matches!(wrong, AppError::InvalidCredentials));
        assert!(matches!(missing, AppError::InvalidCredentials));
        assert_eq!(wrong.to_string(), missing.to_string());
    }
}
