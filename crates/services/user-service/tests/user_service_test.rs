//! User service tests against the in-memory repository.
//!
//! The repository handle is shared with the service so tests can seed and
//! inspect state directly, the way a caller sharing the same store would.

use std::sync::Arc;

use common::AppError;
use domain::{CreateUser, UpdateUser};
use user_service_lib::repository::{MemoryUserStore, UserRepository};
use user_service_lib::service::{UserManager, UserService};

struct Fixture {
    repo: Arc<MemoryUserStore>,
    service: UserManager,
}

impl Fixture {
    fn new() -> Self {
        let repo = Arc::new(MemoryUserStore::new());
        let service = UserManager::new(repo.clone());
        Self { repo, service }
    }
}

#[tokio::test]
async fn test_save_user() {
    let fx = Fixture::new();

    fx.service.save_user(CreateUser::new("김명지", None)).await.unwrap();

    let results = fx.repo.list().await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "김명지");
    assert_eq!(results[0].age, None);
}

#[tokio::test]
async fn test_save_user_rejects_empty_name() {
    let fx = Fixture::new();

    let result = fx.service.save_user(CreateUser::new("", Some(30))).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(fx.repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_users() {
    let fx = Fixture::new();
    fx.repo
        .create_many(vec![CreateUser::new("A", Some(20)), CreateUser::new("B", None)])
        .await
        .unwrap();

    let results = fx.service.get_users().await.unwrap();

    assert_eq!(results.len(), 2);

    let mut names: Vec<_> = results.iter().map(|u| u.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["A", "B"]);

    let mut ages: Vec<_> = results.iter().map(|u| u.age).collect();
    ages.sort_unstable();
    assert_eq!(ages, vec![None, Some(20)]);
}

#[tokio::test]
async fn test_save_users_is_all_or_nothing() {
    let fx = Fixture::new();

    let result = fx
        .service
        .save_users(vec![CreateUser::new("A", None), CreateUser::new("", Some(1))])
        .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(fx.repo.list().await.unwrap().is_empty());

    fx.service
        .save_users(vec![CreateUser::new("A", None), CreateUser::new("B", Some(1))])
        .await
        .unwrap();
    assert_eq!(fx.repo.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_user_name() {
    let fx = Fixture::new();
    let saved = fx.repo.create("A".to_string(), None).await.unwrap();

    fx.service
        .update_user_name(UpdateUser::new(saved.id, "B"))
        .await
        .unwrap();

    let results = fx.repo.list().await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "B");
    assert_eq!(results[0].id, saved.id);
}

#[tokio::test]
async fn test_update_user_name_can_repeat() {
    let fx = Fixture::new();
    let saved = fx.repo.create("A".to_string(), Some(5)).await.unwrap();

    for name in ["B", "C", "D"] {
        fx.service
            .update_user_name(UpdateUser::new(saved.id, name))
            .await
            .unwrap();
    }

    let user = fx.repo.find_by_id(saved.id).await.unwrap().unwrap();
    assert_eq!(user.name, "D");
    assert_eq!(user.age, Some(5));
}

#[tokio::test]
async fn test_update_user_name_unknown_id() {
    let fx = Fixture::new();
    fx.repo.create("A".to_string(), None).await.unwrap();

    let result = fx
        .service
        .update_user_name(UpdateUser::new(uuid::Uuid::new_v4(), "B"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
    assert_eq!(fx.repo.list().await.unwrap()[0].name, "A");
}

#[tokio::test]
async fn test_update_user_name_rejects_empty_name() {
    let fx = Fixture::new();
    let saved = fx.repo.create("A".to_string(), None).await.unwrap();

    let result = fx.service.update_user_name(UpdateUser::new(saved.id, "")).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(fx.repo.list().await.unwrap()[0].name, "A");
}

#[tokio::test]
async fn test_delete_user() {
    let fx = Fixture::new();
    fx.repo.create("A".to_string(), None).await.unwrap();

    fx.service.delete_user("A").await.unwrap();

    assert!(fx.repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_missing_user() {
    let fx = Fixture::new();
    fx.repo.create("A".to_string(), None).await.unwrap();

    let result = fx.service.delete_user("Z").await;

    assert!(matches!(result, Err(AppError::NotFound)));
    assert_eq!(fx.repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_all_is_idempotent() {
    let fx = Fixture::new();
    fx.service.save_user(CreateUser::new("A", None)).await.unwrap();
    fx.service.save_user(CreateUser::new("B", Some(2))).await.unwrap();

    fx.repo.delete_all().await.unwrap();
    assert!(fx.repo.list().await.unwrap().is_empty());

    fx.repo.delete_all().await.unwrap();
    assert!(fx.service.get_users().await.unwrap().is_empty());
}
