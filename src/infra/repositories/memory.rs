//! In-memory repositories for development and tests.
//!
//! Same contracts as the PostgreSQL stores, including the email
//! uniqueness rule the database enforces with a unique index.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{IdentityRepository, SafeHouseRepository};
use crate::domain::{Identity, IdentityKind, SafeHouse};
use crate::errors::{AppError, AppResult};

/// In-memory implementation of IdentityRepository
#[derive(Debug, Clone)]
pub struct InMemoryIdentityRepository<K: IdentityKind> {
    records: Arc<RwLock<HashMap<Uuid, Identity<K>>>>,
}

impl<K: IdentityKind> InMemoryIdentityRepository<K> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn unique_violation() -> AppError {
        AppError::UniqueViolation(format!("ux_{}s_email", K::LABEL))
    }
}

impl<K: IdentityKind> Default for InMemoryIdentityRepository<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K: IdentityKind> IdentityRepository<K> for InMemoryIdentityRepository<K> {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Identity<K>>> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<Identity<K>>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<Identity<K>>> {
        let records = self.records.read().await;
        Ok(records.values().find(|r| r.email() == email).cloned())
    }

    async fn add(&self, identity: &Identity<K>) -> AppResult<()> {
        let mut records = self.records.write().await;

        if records.values().any(|r| r.email() == identity.email()) {
            return Err(Self::unique_violation());
        }

        records.insert(identity.id(), identity.clone());
        Ok(())
    }

    async fn update(&self, identity: &Identity<K>) -> AppResult<()> {
        let mut records = self.records.write().await;

        if !records.contains_key(&identity.id()) {
            return Ok(());
        }

        let taken = records
            .values()
            .any(|r| r.id() != identity.id() && r.email() == identity.email());
        if taken {
            return Err(Self::unique_violation());
        }

        records.insert(identity.id(), identity.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut records = self.records.write().await;
        records.remove(&id);
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let records = self.records.read().await;
        Ok(records.contains_key(&id))
    }
}

/// In-memory implementation of SafeHouseRepository
#[derive(Debug, Default, Clone)]
pub struct InMemorySafeHouseRepository {
    records: Arc<RwLock<HashMap<Uuid, SafeHouse>>>,
}

impl InMemorySafeHouseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SafeHouseRepository for InMemorySafeHouseRepository {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<SafeHouse>> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<SafeHouse>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn add(&self, safe_house: &SafeHouse) -> AppResult<()> {
        let mut records = self.records.write().await;
        records.insert(safe_house.id(), safe_house.clone());
        Ok(())
    }

    async fn update(&self, safe_house: &SafeHouse) -> AppResult<()> {
        let mut records = self.records.write().await;
        if let Some(existing) = records.get_mut(&safe_house.id()) {
            *existing = safe_house.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut records = self.records.write().await;
        records.remove(&id);
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let records = self.records.read().await;
        Ok(records.contains_key(&id))
    }
}
