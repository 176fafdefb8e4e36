/**
 * Error Conversion
 *
 * This module converts sign-in outcomes into HTTP responses.
 *
 * # Response Format
 *
 * Every outcome, success or failure, is sent as `200 OK` with content type
 * `application/json; charset=utf-8`. The outcome itself lives in the body:
 *
 * ```json
 * {"status": 7}
 * ```
 */

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::backend::error::types::AuthError;
use crate::shared::SignInResponse;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

impl From<&AuthError> for SignInResponse {
    fn from(err: &AuthError) -> Self {
        SignInResponse::failure(err.status())
    }
}

impl From<AuthError> for SignInResponse {
    fn from(err: AuthError) -> Self {
        SignInResponse::from(&err)
    }
}

impl IntoResponse for SignInResponse {
    fn into_response(self) -> Response {
        // Only the status is needed to form a valid body
        let body = serde_json::to_vec(&self)
            .unwrap_or_else(|_| format!(r#"{{"status":{}}}"#, self.status().code()).into_bytes());

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(Body::from(body))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        SignInResponse::from(&self).into_response()
    }
}
