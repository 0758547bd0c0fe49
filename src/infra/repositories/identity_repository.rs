//! Identity repository contract and its PostgreSQL stores.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, UpdateMany,
};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::{administrator, user};
use crate::domain::{Admin, Identity, IdentityKind, Member};
use crate::errors::AppResult;

/// Persistence contract for one identity kind.
///
/// `update` and `delete` are silent no-ops when the id is absent; callers
/// check existence first. A write that would duplicate an email fails with
/// `AppError::UniqueViolation`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait IdentityRepository<K: IdentityKind>: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Identity<K>>>;

    async fn get_all(&self) -> AppResult<Vec<Identity<K>>>;

    /// Exact match on the stored (normalized) email.
    async fn get_by_email(&self, email: &str) -> AppResult<Option<Identity<K>>>;

    async fn add(&self, identity: &Identity<K>) -> AppResult<()>;

    async fn update(&self, identity: &Identity<K>) -> AppResult<()>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn exists(&self, id: Uuid) -> AppResult<bool>;
}

/// Generates a SeaORM-backed store for one identity table.
macro_rules! identity_store {
    ($(#[$meta:meta])* $store:ident, $kind:ty, $table:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $store {
            db: DatabaseConnection,
        }

        impl $store {
            pub fn new(db: DatabaseConnection) -> Self {
                Self { db }
            }

            /// Overwrite every column of the row with the identity's id.
            fn update_statement(identity: &Identity<$kind>) -> UpdateMany<$table::Entity> {
                $table::Entity::update_many()
                    .set($table::ActiveModel::from(identity))
                    .filter($table::Column::Id.eq(identity.id()))
            }
        }

        #[async_trait]
        impl IdentityRepository<$kind> for $store {
            async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Identity<$kind>>> {
                let model = $table::Entity::find_by_id(id).one(&self.db).await?;
                Ok(model.map(Into::into))
            }

            async fn get_all(&self) -> AppResult<Vec<Identity<$kind>>> {
                let models = $table::Entity::find().all(&self.db).await?;
                Ok(models.into_iter().map(Into::into).collect())
            }

            async fn get_by_email(&self, email: &str) -> AppResult<Option<Identity<$kind>>> {
                let model = $table::Entity::find()
                    .filter($table::Column::Email.eq(email))
                    .one(&self.db)
                    .await?;
                Ok(model.map(Into::into))
            }

            async fn add(&self, identity: &Identity<$kind>) -> AppResult<()> {
                $table::Entity::insert($table::ActiveModel::from(identity))
                    .exec(&self.db)
                    .await?;
                Ok(())
            }

            async fn update(&self, identity: &Identity<$kind>) -> AppResult<()> {
                Self::update_statement(identity).exec(&self.db).await?;
                Ok(())
            }

            async fn delete(&self, id: Uuid) -> AppResult<()> {
                $table::Entity::delete_by_id(id).exec(&self.db).await?;
                Ok(())
            }

            async fn exists(&self, id: Uuid) -> AppResult<bool> {
                let count = $table::Entity::find_by_id(id).count(&self.db).await?;
                Ok(count > 0)
            }
        }
    };
}

identity_store!(
    /// Administrator store backed by the `administrators` table
    AdministratorStore,
    Admin,
    administrator
);

identity_store!(
    /// User store backed by the `users` table
    UserStore,
    Member,
    user
);
