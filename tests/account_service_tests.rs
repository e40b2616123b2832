mod common;

use common::{memory_store, rex, token_rows};
use pawbook::{AccountService, PawbookError};

async fn service() -> AccountService {
    AccountService::new(memory_store().await)
}

#[tokio::test]
async fn register_then_login_issues_resolvable_token() {
    let svc = service().await;
    svc.register("a@x.com", "pw").await.unwrap();

    let token = svc.login("a@x.com", "pw").await.unwrap();
    assert_eq!(svc.authenticate(&token).await.unwrap(), "a@x.com");
}

#[tokio::test]
async fn register_twice_is_conflict() {
    let svc = service().await;
    svc.register("a@x.com", "pw").await.unwrap();
    let err = svc.register("a@x.com", "other").await.unwrap_err();
    assert!(matches!(err, PawbookError::Conflict(_)));
}

#[tokio::test]
async fn wrong_password_or_unknown_email_is_rejected() {
    let svc = service().await;
    svc.register("a@x.com", "pw").await.unwrap();

    assert!(matches!(
        svc.login("a@x.com", "nope").await.unwrap_err(),
        PawbookError::InvalidCredentials
    ));
    assert!(matches!(
        svc.login("b@x.com", "pw").await.unwrap_err(),
        PawbookError::InvalidCredentials
    ));
    assert_eq!(token_rows(svc.store(), "a@x.com").await, 0);
}

#[tokio::test]
async fn new_login_invalidates_previous_token() {
    let svc = service().await;
    svc.register("a@x.com", "pw").await.unwrap();

    let first = svc.login("a@x.com", "pw").await.unwrap();
    let second = svc.login("a@x.com", "pw").await.unwrap();
    assert_ne!(first, second);

    assert!(matches!(
        svc.authenticate(&first).await.unwrap_err(),
        PawbookError::Unauthorized
    ));
    assert_eq!(svc.authenticate(&second).await.unwrap(), "a@x.com");
    assert_eq!(token_rows(svc.store(), "a@x.com").await, 1);
}

#[tokio::test]
async fn logout_is_idempotent() {
    let svc = service().await;
    svc.register("a@x.com", "pw").await.unwrap();
    let token = svc.login("a@x.com", "pw").await.unwrap();

    svc.logout("a@x.com").await.unwrap();
    svc.logout("a@x.com").await.unwrap();
    assert!(svc.authenticate(&token).await.is_err());
}

#[tokio::test]
async fn remove_account_clears_all_three_tables() {
    let svc = service().await;
    svc.register("a@x.com", "pw").await.unwrap();
    svc.create_profile(&rex("a@x.com")).await.unwrap();
    let token = svc.login("a@x.com", "pw").await.unwrap();

    svc.remove_account("a@x.com").await.unwrap();

    assert!(svc.authenticate(&token).await.is_err());
    assert!(matches!(
        svc.profile("a@x.com").await.unwrap_err(),
        PawbookError::NotFound(_)
    ));
    assert!(!svc.store().validate_credential("a@x.com", "pw").await.unwrap());

    let err = svc.remove_account("a@x.com").await.unwrap_err();
    assert!(matches!(err, PawbookError::NotFound(_)));
}

#[tokio::test]
async fn profile_outcomes_map_to_errors() {
    let svc = service().await;
    svc.create_profile(&rex("a@x.com")).await.unwrap();

    assert!(matches!(
        svc.create_profile(&rex("a@x.com")).await.unwrap_err(),
        PawbookError::Conflict(_)
    ));
    assert!(matches!(
        svc.update_profile(&rex("b@x.com")).await.unwrap_err(),
        PawbookError::NotFound(_)
    ));
    assert!(matches!(
        svc.delete_profile("b@x.com").await.unwrap_err(),
        PawbookError::NotFound(_)
    ));

    svc.delete_profile("a@x.com").await.unwrap();
    assert!(svc.profile("a@x.com").await.is_err());
}
