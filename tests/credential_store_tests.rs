mod common;

use common::memory_store;

#[tokio::test]
async fn validate_accepts_only_the_registered_password() {
    let store = memory_store().await;
    assert!(store.add_credential("a@x.com", "pa55word").await.unwrap());

    assert!(store.validate_credential("a@x.com", "pa55word").await.unwrap());
    assert!(!store.validate_credential("a@x.com", "pa55wordx").await.unwrap());
    assert!(!store.validate_credential("a@x.com", "PA55WORD").await.unwrap());
    assert!(!store.validate_credential("a@x.com", "").await.unwrap());
}

#[tokio::test]
async fn validate_unknown_email_is_false() {
    let store = memory_store().await;
    assert!(!store.validate_credential("nobody@x.com", "anything").await.unwrap());
}

#[tokio::test]
async fn duplicate_credential_is_rejected_and_first_password_kept() {
    let store = memory_store().await;
    assert!(store.add_credential("a@x.com", "first").await.unwrap());
    assert!(!store.add_credential("a@x.com", "second").await.unwrap());

    assert!(store.validate_credential("a@x.com", "first").await.unwrap());
    assert!(!store.validate_credential("a@x.com", "second").await.unwrap());
}

#[tokio::test]
async fn stored_value_is_a_salted_hash() {
    let store = memory_store().await;
    store.add_credential("a@x.com", "same").await.unwrap();
    store.add_credential("b@x.com", "same").await.unwrap();

    let hashes: Vec<String> = sqlx::query_scalar::<_, String>("SELECT password FROM auth ORDER BY email")
        .fetch_all(store.pool())
        .await
        .unwrap();
    assert_eq!(hashes.len(), 2);
    assert!(hashes.iter().all(|h| h.starts_with("$argon2") && h != "same"));
    assert_ne!(hashes[0], hashes[1]);
}

#[tokio::test]
async fn delete_credential_disables_login() {
    let store = memory_store().await;
    store.add_credential("a@x.com", "pw").await.unwrap();

    assert!(store.delete_credential("a@x.com").await.unwrap());
    assert!(!store.delete_credential("a@x.com").await.unwrap());
    assert!(!store.validate_credential("a@x.com", "pw").await.unwrap());
}

#[tokio::test]
async fn corrupt_stored_hash_surfaces_as_error() {
    let store = memory_store().await;
    sqlx::query("INSERT INTO auth (email, password) VALUES (?, ?)")
        .bind("a@x.com")
        .bind("plaintext")
        .execute(store.pool())
        .await
        .unwrap();

    let err = store.validate_credential("a@x.com", "plaintext").await.unwrap_err();
    assert!(matches!(err, pawbook::PawbookError::PasswordHash(_)));
}
