/**
 * Database Configuration
 *
 * This module opens the SQLite connection pool behind the credential and
 * token store and applies the embedded migrations.
 *
 * # Error Handling
 *
 * A database that cannot be opened does not prevent server startup. The
 * server runs without a pool and every sign-in reports a connection
 * failure until it is restarted against a working database.
 */

use std::str::FromStr;
use std::time::Duration;

use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::shared::AppConfig;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<SqlitePool>;

/// Failure opening or migrating the database
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("failed to open database: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Open a pool for `database_url` and run migrations
///
/// `acquire_timeout` bounds how long a request waits for a connection.
pub async fn connect_database(
    database_url: &str,
    acquire_timeout: Duration,
) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    // An in-memory database lives and dies with its connection
    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = SqlitePoolOptions::new().acquire_timeout(acquire_timeout);
    let pool_options = if in_memory {
        pool_options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options
    };

    let pool = pool_options.connect_with(options).await?;
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// Load and initialize the database connection pool
///
/// # Returns
///
/// - `Some(SqlitePool)` if the database is opened and migrated
/// - `None` if opening or migrating fails
///
/// # Errors
///
/// Errors are logged but do not prevent server startup.
pub async fn load_database(config: &AppConfig) -> DatabaseConfig {
    tracing::info!("Connecting to database...");

    match connect_database(&config.database_url, config.request_timeout).await {
        Ok(pool) => {
            tracing::info!("Database ready, migrations applied");
            Some(pool)
        }
        Err(e) => {
            tracing::error!("Failed to initialise database: {}", e);
            tracing::warn!("Sign-in will report connection failures until restart");
            None
        }
    }
}
