//! Safe house service tests against a mocked repository.

use std::sync::Arc;

use mockall::predicate::eq;
use uuid::Uuid;

use safehouse_registry::domain::SafeHouse;
use safehouse_registry::errors::AppError;
use safehouse_registry::infra::MockSafeHouseRepository;
use safehouse_registry::services::{SafeHouseManager, SafeHouseService};

#[tokio::test]
async fn test_create_persists_validated_record() {
    let mut repo = MockSafeHouseRepository::new();
    repo.expect_add()
        .withf(|h: &SafeHouse| {
            h.postal_code() == "01310-100" && h.number() == "42" && h.complement().is_empty()
        })
        .times(1)
        .returning(|_| Ok(()));

    let manager = SafeHouseManager::new(Arc::new(repo));
    let house = manager.create(" 01310-100 ", "42", None).await.unwrap();

    assert_eq!(house.number(), "42");
}

#[tokio::test]
async fn test_create_invalid_never_persists() {
    let mut repo = MockSafeHouseRepository::new();
    repo.expect_add().never();

    let manager = SafeHouseManager::new(Arc::new(repo));
    let result = manager.create("01310-100", " ", Some("Back")).await;

    assert!(matches!(result, Err(AppError::Validation(msg)) if msg == "Number is required."));
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let id = Uuid::new_v4();

    let mut repo = MockSafeHouseRepository::new();
    repo.expect_get_by_id()
        .with(eq(id))
        .returning(|_| Ok(None));
    repo.expect_update().never();

    let manager = SafeHouseManager::new(Arc::new(repo));
    let result = manager.update(id, "01310-100", "42", None).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Safe house not found."));
}

#[tokio::test]
async fn test_update_clears_complement() {
    let stored = SafeHouse::new("01310-100", "42", Some("Block B")).unwrap();
    let id = stored.id();

    let mut repo = MockSafeHouseRepository::new();
    repo.expect_get_by_id()
        .returning(move |_| Ok(Some(stored.clone())));
    repo.expect_update()
        .withf(move |h: &SafeHouse| h.id() == id && h.complement().is_empty())
        .times(1)
        .returning(|_| Ok(()));

    let manager = SafeHouseManager::new(Arc::new(repo));
    manager.update(id, "01310-100", "42", None).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let mut repo = MockSafeHouseRepository::new();
    repo.expect_exists().returning(|_| Ok(false));
    repo.expect_delete().never();

    let manager = SafeHouseManager::new(Arc::new(repo));

    assert!(matches!(
        manager.delete(Uuid::new_v4()).await,
        Err(AppError::NotFound(_))
    ));
}
