//! Repository hub.
//!
//! Hands out one shared repository per aggregate, either backed by a
//! PostgreSQL connection or held in process memory.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::repositories::{
    AdministratorStore, IdentityRepository, InMemoryIdentityRepository,
    InMemorySafeHouseRepository, SafeHouseRepository, SafeHouseStore, UserStore,
};
use crate::domain::{Admin, Member};

/// Access to every repository the services need.
pub trait Repositories: Send + Sync {
    fn administrators(&self) -> Arc<dyn IdentityRepository<Admin>>;

    fn users(&self) -> Arc<dyn IdentityRepository<Member>>;

    fn safe_houses(&self) -> Arc<dyn SafeHouseRepository>;
}

/// Concrete repository hub.
#[derive(Clone)]
pub struct Persistence {
    administrators: Arc<dyn IdentityRepository<Admin>>,
    users: Arc<dyn IdentityRepository<Member>>,
    safe_houses: Arc<dyn SafeHouseRepository>,
}

impl Persistence {
    /// Stores backed by the given database connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            administrators: Arc::new(AdministratorStore::new(db.clone())),
            users: Arc::new(UserStore::new(db.clone())),
            safe_houses: Arc::new(SafeHouseStore::new(db)),
        }
    }

    /// Empty in-memory stores; contents are lost on shutdown.
    pub fn in_memory() -> Self {
        Self {
            administrators: Arc::new(InMemoryIdentityRepository::<Admin>::new()),
            users: Arc::new(InMemoryIdentityRepository::<Member>::new()),
            safe_houses: Arc::new(InMemorySafeHouseRepository::new()),
        }
    }
}

impl Repositories for Persistence {
    fn administrators(&self) -> Arc<dyn IdentityRepository<Admin>> {
        self.administrators.clone()
    }

    fn users(&self) -> Arc<dyn IdentityRepository<Member>> {
        self.users.clone()
    }

    fn safe_houses(&self) -> Arc<dyn SafeHouseRepository> {
        self.safe_houses.clone()
    }
}
