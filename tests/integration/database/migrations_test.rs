//! Database migration tests
//!
//! Tests to ensure migrations run correctly and the schema enforces what
//! the sign-in flow relies on.

use pretty_assertions::assert_eq;
use tokengate::backend::auth::users::UserId;

use crate::common::{create_test_user, TestDatabase};

#[tokio::test]
async fn test_tables_exist() {
    let db = TestDatabase::new().await;

    for table in ["users", "tokens"] {
        let result = sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1", table))
            .execute(db.pool())
            .await;
        assert!(result.is_ok(), "{} table should exist", table);
    }
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = TestDatabase::new().await;
    let result = sqlx::migrate!("./migrations").run(db.pool()).await;
    assert!(result.is_ok(), "Re-running migrations should be a no-op");
}

#[tokio::test]
async fn test_usernames_are_unique() {
    let db = TestDatabase::new().await;
    create_test_user(db.pool(), "alice", "Secret12").await;

    let result = sqlx::query(
        "INSERT INTO users (id, username, password_hash, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(UserId::generate())
    .bind("alice")
    .bind("hash")
    .bind(chrono::Utc::now())
    .execute(db.pool())
    .await;

    let err = result.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert!(db_err.is_unique_violation());
}

#[tokio::test]
async fn test_tokens_are_unique() {
    let db = TestDatabase::new().await;
    let user = create_test_user(db.pool(), "alice", "Secret12").await;
    let token = "t".repeat(128);

    let insert = || {
        sqlx::query("INSERT INTO tokens (token, user_id, created_at) VALUES (?, ?, ?)")
            .bind(token.clone())
            .bind(user.id.clone())
            .bind(chrono::Utc::now())
            .execute(db.pool())
    };

    insert().await.unwrap();
    let err = insert().await.unwrap_err();
    assert!(err.as_database_error().unwrap().is_unique_violation());
    assert_eq!(db.tokens_for(&user.id).await, vec![token]);
}

#[tokio::test]
async fn test_tokens_reference_existing_users() {
    let db = TestDatabase::new().await;

    let result = sqlx::query("INSERT INTO tokens (token, user_id, created_at) VALUES (?, ?, ?)")
        .bind("t".repeat(128))
        .bind(UserId::generate())
        .bind(chrono::Utc::now())
        .execute(db.pool())
        .await;

    assert!(result.is_err(), "Orphan token should be rejected");
}
