//! Database test fixtures and utilities
//!
//! Provides migrated SQLite databases for tests, either in memory or in a
//! temporary file, plus a few queries for checking what was persisted.

use std::time::Duration;

use sqlx::SqlitePool;
use tempfile::TempDir;
use tokengate::backend::auth::users::UserId;
use tokengate::backend::server::config::connect_database;

/// Test database fixture
///
/// A file-backed fixture keeps its temporary directory alive for as long as
/// the fixture exists.
pub struct TestDatabase {
    pool: SqlitePool,
    _dir: Option<TempDir>,
}

impl TestDatabase {
    /// Fresh migrated in-memory database on a single connection
    pub async fn new() -> Self {
        let pool = connect_database("sqlite::memory:", Duration::from_secs(5))
            .await
            .expect("Failed to create in-memory test database");
        Self { pool, _dir: None }
    }

    /// Fresh migrated database file, for tests that need several connections
    pub async fn file() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = format!("sqlite://{}", dir.path().join("tokengate.db").display());
        let pool = connect_database(&url, Duration::from_secs(5))
            .await
            .expect("Failed to create file test database");
        Self {
            pool,
            _dir: Some(dir),
        }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run a raw statement, used to break the schema on purpose
    pub async fn execute(&self, sql: &str) {
        sqlx::query(sql)
            .execute(&self.pool)
            .await
            .unwrap_or_else(|e| panic!("Failed to execute `{}`: {:?}", sql, e));
    }

    /// Number of persisted tokens
    pub async fn token_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM tokens")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count tokens")
    }

    /// Tokens persisted for one user
    pub async fn tokens_for(&self, user_id: &UserId) -> Vec<String> {
        sqlx::query_scalar("SELECT token FROM tokens WHERE user_id = ? ORDER BY created_at")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .expect("Failed to list tokens")
    }
}
