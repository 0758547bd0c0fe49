//! Service Container - Centralized service access.
//!
//! SOLID (DIP): Depends on service traits, not implementations.

use std::sync::Arc;

use super::{
    AlertPredictor, AlertService, IdentityManager, IdentityService, SafeHouseManager,
    SafeHouseService,
};
use crate::domain::{Admin, Member, SeverityModel};
use crate::infra::Repositories;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    fn administrators(&self) -> Arc<dyn IdentityService<Admin>>;

    fn users(&self) -> Arc<dyn IdentityService<Member>>;

    fn safe_houses(&self) -> Arc<dyn SafeHouseService>;

    fn alerts(&self) -> Arc<dyn AlertService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    administrators: Arc<dyn IdentityService<Admin>>,
    users: Arc<dyn IdentityService<Member>>,
    safe_houses: Arc<dyn SafeHouseService>,
    alerts: Arc<dyn AlertService>,
}

impl Services {
    /// Wire every service to the given repositories and severity model
    pub fn new(repos: &dyn Repositories, model: Arc<dyn SeverityModel>) -> Self {
        Self {
            administrators: Arc::new(IdentityManager::new(repos.administrators())),
            users: Arc::new(IdentityManager::new(repos.users())),
            safe_houses: Arc::new(SafeHouseManager::new(repos.safe_houses())),
            alerts: Arc::new(AlertPredictor::new(model)),
        }
    }
}

impl ServiceContainer for Services {
    fn administrators(&self) -> Arc<dyn IdentityService<Admin>> {
        self.administrators.clone()
    }

    fn users(&self) -> Arc<dyn IdentityService<Member>> {
        self.users.clone()
    }

    fn safe_houses(&self) -> Arc<dyn SafeHouseService> {
        self.safe_houses.clone()
    }

    fn alerts(&self) -> Arc<dyn AlertService> {
        self.alerts.clone()
    }
}
