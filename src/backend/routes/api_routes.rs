/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/sign-in` - Verify credentials and issue a session token
 */

use axum::Router;

use crate::backend::auth::sign_in;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/api/auth/sign-in", axum::routing::post(sign_in))
}
