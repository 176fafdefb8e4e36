/**
 * Sign-In Handler
 *
 * This module implements the handler for POST /api/auth/sign-in.
 *
 * # Authentication Process
 *
 * 1. Validate the submitted fields
 * 2. Acquire one storage connection for the rest of the request
 * 3. Look up the stored hash by username and verify the password
 * 4. Issue a unique session token and persist it
 * 5. Return the status, and the token on success
 *
 * Any failure ends the request at the step it happened in. The connection
 * is released when it goes out of scope, on every path.
 *
 * # Deadline
 *
 * One deadline, `request_timeout` after validation, covers the connection
 * wait, the credential check and the token stage together. The token is
 * committed after the deadline check, so a token is either committed and
 * returned or rolled back.
 *
 * # Security
 *
 * - Unknown usernames and wrong passwords yield the same status
 * - Passwords and tokens are never logged
 * - Storage faults are never retried within a request
 */

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use tokio::time::{timeout_at, Instant};

use crate::backend::auth::handlers::types::SignInRequest;
use crate::backend::auth::sessions::{TokenGenerator, TokenSource};
use crate::backend::auth::users::find_user_id;
use crate::backend::auth::validation::validate_sign_in;
use crate::backend::error::{AuthError, Stage};
use crate::backend::server::state::AppState;
use crate::shared::SignInResponse;

/// Sign-in handler
///
/// Always answers `200 OK` with a JSON status body. A body that cannot be
/// read as a form is treated as a request with both fields missing.
///
/// # Example Request
///
/// ```http
/// POST /api/auth/sign-in HTTP/1.1
/// Content-Type: application/x-www-form-urlencoded
///
/// username=alice&password=Secret12
/// ```
///
/// # Example Response
///
/// ```json
/// {"status": 0, "token": "q3ZL...128 characters..."}
/// ```
pub async fn sign_in(
    State(state): State<AppState>,
    form: Result<Form<SignInRequest>, FormRejection>,
) -> SignInResponse {
    let request = match form {
        Ok(Form(request)) => request,
        Err(rejection) => {
            tracing::warn!("Unreadable sign-in body: {}", rejection);
            SignInRequest::default()
        }
    };
    let username = request.username.as_deref();

    match authenticate(&state, &mut TokenGenerator, username, request.password.as_deref()).await {
        Ok(token) => SignInResponse::success(token),
        Err(e) => {
            // Debug formatting escapes control characters in unvalidated input
            if e.is_storage_fault() {
                tracing::error!("Sign-in failed for {:?}: {}", username, e);
            } else {
                tracing::warn!("Sign-in rejected for {:?}: {}", username, e);
            }
            SignInResponse::from(&e)
        }
    }
}

/// Run the sign-in flow without the HTTP layer
///
/// # Arguments
///
/// * `state` - Pool, hasher, issuer and timeout
/// * `source` - Where candidate tokens come from
/// * `username`, `password` - Raw submitted fields
///
/// # Returns
///
/// The issued token.
pub async fn authenticate<S>(
    state: &AppState,
    source: &mut S,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<String, AuthError>
where
    S: TokenSource + ?Sized,
{
    let (username, password) = validate_sign_in(username, password)?;

    let pool = state.db_pool.as_ref().ok_or(AuthError::DatabaseUnavailable)?;
    let deadline = Instant::now() + state.request_timeout;

    let mut conn = timeout_at(deadline, pool.acquire())
        .await
        .map_err(|_| AuthError::Timeout {
            stage: Stage::Connect,
        })?
        .map_err(|e| match e {
            sqlx::Error::PoolTimedOut => AuthError::Timeout {
                stage: Stage::Connect,
            },
            other => AuthError::Connect(other),
        })?;

    let user_id = timeout_at(
        deadline,
        find_user_id(&mut conn, &state.hasher, username, password),
    )
    .await
    .map_err(|_| AuthError::Timeout {
        stage: Stage::Credentials,
    })??
    .ok_or(AuthError::InvalidCredentials)?;

    let pending = timeout_at(
        deadline,
        state.issuer.issue_pending(&mut conn, source, &user_id),
    )
    .await
    .map_err(|_| AuthError::Timeout {
        stage: Stage::Token,
    })??;
    let token = pending.commit().await?;

    tracing::info!("Issued session token for user {} ({})", username, user_id);
    Ok(token)
}
