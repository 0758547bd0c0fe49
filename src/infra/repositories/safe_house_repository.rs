//! Safe house repository contract and its PostgreSQL store.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, UpdateMany,
};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::safe_house;
use crate::domain::SafeHouse;
use crate::errors::AppResult;

/// Persistence contract for safe houses.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SafeHouseRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<SafeHouse>>;

    async fn get_all(&self) -> AppResult<Vec<SafeHouse>>;

    async fn add(&self, safe_house: &SafeHouse) -> AppResult<()>;

    /// No-op when the id is absent.
    async fn update(&self, safe_house: &SafeHouse) -> AppResult<()>;

    /// No-op when the id is absent.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn exists(&self, id: Uuid) -> AppResult<bool>;
}

/// Safe house store backed by the `safe_houses` table
#[derive(Clone)]
pub struct SafeHouseStore {
    db: DatabaseConnection,
}

impl SafeHouseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn update_statement(house: &SafeHouse) -> UpdateMany<safe_house::Entity> {
        safe_house::Entity::update_many()
            .set(safe_house::ActiveModel::from(house))
            .filter(safe_house::Column::Id.eq(house.id()))
    }
}

#[async_trait]
impl SafeHouseRepository for SafeHouseStore {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<SafeHouse>> {
        let model = safe_house::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(SafeHouse::from))
    }

    async fn get_all(&self) -> AppResult<Vec<SafeHouse>> {
        let models = safe_house::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(SafeHouse::from).collect())
    }

    async fn add(&self, house: &SafeHouse) -> AppResult<()> {
        safe_house::Entity::insert(safe_house::ActiveModel::from(house))
            .exec(&self.db)
            .await?;
        Ok(())
    }

    async fn update(&self, house: &SafeHouse) -> AppResult<()> {
        Self::update_statement(house).exec(&self.db).await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        safe_house::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let count = safe_house::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }
}
