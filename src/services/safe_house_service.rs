//! Safe house service - Handles safe house use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::SafeHouse;
use crate::errors::{AppError, AppResult};
use crate::infra::SafeHouseRepository;

const NOT_FOUND: &str = "Safe house not found.";

/// Safe house service trait for dependency injection.
#[async_trait]
pub trait SafeHouseService: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<SafeHouse>>;

    async fn get_by_id(&self, id: Uuid) -> AppResult<SafeHouse>;

    async fn create(
        &self,
        postal_code: &str,
        number: &str,
        complement: Option<&str>,
    ) -> AppResult<SafeHouse>;

    async fn update(
        &self,
        id: Uuid,
        postal_code: &str,
        number: &str,
        complement: Option<&str>,
    ) -> AppResult<()>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of SafeHouseService.
pub struct SafeHouseManager {
    repo: Arc<dyn SafeHouseRepository>,
}

impl SafeHouseManager {
    pub fn new(repo: Arc<dyn SafeHouseRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SafeHouseService for SafeHouseManager {
    async fn get_all(&self) -> AppResult<Vec<SafeHouse>> {
        self.repo.get_all().await
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<SafeHouse> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND))
    }

    async fn create(
        &self,
        postal_code: &str,
        number: &str,
        complement: Option<&str>,
    ) -> AppResult<SafeHouse> {
        let safe_house = SafeHouse::new(postal_code, number, complement)?;
        self.repo.add(&safe_house).await?;

        tracing::info!(id = %safe_house.id(), "Safe house created");
        Ok(safe_house)
    }

    async fn update(
        &self,
        id: Uuid,
        postal_code: &str,
        number: &str,
        complement: Option<&str>,
    ) -> AppResult<()> {
        let mut safe_house = self.get_by_id(id).await?;

        safe_house.set_postal_code(postal_code)?;
        safe_house.set_number(number)?;
        safe_house.set_complement(complement);

        self.repo.update(&safe_house).await?;

        tracing::info!(id = %id, "Safe house updated");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.repo.exists(id).await? {
            return Err(AppError::not_found(NOT_FOUND));
        }

        self.repo.delete(id).await?;

        tracing::info!(id = %id, "Safe house deleted");
        Ok(())
    }
}
