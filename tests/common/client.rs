//! In-process HTTP client
//!
//! Sends requests straight into an axum `Router` with
//! `tower::ServiceExt::oneshot`, no socket involved.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

/// What came back from the sign-in endpoint
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

impl Reply {
    /// The `status` field of the JSON body
    pub fn code(&self) -> u64 {
        self.body["status"]
            .as_u64()
            .unwrap_or_else(|| panic!("No numeric status in {}", self.body))
    }

    /// The `token` field, if any
    pub fn token(&self) -> Option<&str> {
        self.body.get("token").and_then(|t| t.as_str())
    }
}

/// POST an urlencoded form body to `/api/auth/sign-in`
pub async fn post_sign_in(app: &Router, form: &str) -> Reply {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/sign-in")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_owned()))
        .expect("Failed to build request");
    send(app, request).await
}

/// Send any request and decode the JSON body
pub async fn send(app: &Router, request: Request<Body>) -> Reply {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router is infallible");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    Reply {
        status,
        content_type,
        body,
    }
}
