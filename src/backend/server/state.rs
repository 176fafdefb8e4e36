/**
 * Application State Management
 *
 * This module defines the state shared by every request handler.
 *
 * # Thread Safety
 *
 * `SqlitePool` is internally reference counted and safe to share. The
 * issuer is plain configuration and the hasher shares its decoy hash
 * behind an `Arc`, so cloning the state per request is cheap.
 */

use std::time::Duration;

use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::shared::AppConfig;

/// Application state
///
/// # Fields
///
/// * `db_pool` - Credential and token store, `None` if it failed to open
/// * `hasher` - Password hasher
/// * `issuer` - Session token issuer
/// * `request_timeout` - Deadline for the storage work of one sign-in
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database could not be opened at startup.
    /// Handlers report a connection failure in that case.
    pub db_pool: Option<SqlitePool>,

    pub hasher: PasswordHasher,

    pub issuer: TokenIssuer,

    pub request_timeout: Duration,
}

impl AppState {
    /// Build the state from configuration and an optional pool
    pub fn new(db_pool: Option<SqlitePool>, config: &AppConfig) -> Self {
        Self {
            db_pool,
            hasher: PasswordHasher::new(config.password_cost),
            issuer: TokenIssuer::new(config.token_max_attempts),
            request_timeout: config.request_timeout,
        }
    }
}
