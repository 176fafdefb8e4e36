/**
 * Server Initialization
 *
 * This module handles the setup of the Axum HTTP server: database loading,
 * state creation and route configuration.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated service configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Error Handling
///
/// A database that fails to open is logged and the server starts anyway.
/// Sign-in requests then report a connection failure.
pub async fn create_app(config: &AppConfig) -> Router<()> {
    tracing::info!("Initializing tokengate server");

    let db_pool = load_database(config).await;
    let app_state = AppState::new(db_pool, config);

    // Otherwise the first unknown-user sign-in would also pay for the hash
    if let Err(e) = app_state.hasher.prepare_decoy().await {
        tracing::error!("Failed to prepare decoy password hash: {}", e);
    }

    tracing::info!(
        "Password cost {}, token attempts {}, request timeout {:?}",
        config.password_cost,
        config.token_max_attempts,
        config.request_timeout
    );

    create_router(app_state)
}

/// Create the application around an already opened pool
///
/// Integration tests use this to serve a database they prepared
pub fn create_app_with_pool(pool: sqlx::SqlitePool, config: &AppConfig) -> Router<()> {
    create_router(AppState::new(Some(pool), config))
}
