//! Tokengate - Main Library
//!
//! Tokengate is a small sign-in service: it checks a username and password
//! against a credential store and, on success, issues an opaque random
//! session token that it persists for later lookup.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types that make up the external contract
//!   - Sign-in status codes and the JSON response body
//!   - Service configuration
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and routing
//!   - Input validation, password verification, token issuance
//!   - SQLite persistence via sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use tokengate::backend::server::init::create_app;
//! use tokengate::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server_port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Wire Contract
//!
//! `POST /api/auth/sign-in` takes a form body with `username` and
//! `password` and always answers `200 OK` with
//! `{"status": <0..=7>}` or, on success, `{"status": 0, "token": "..."}`.
//!
//! # Error Handling
//!
//! - `Result<T, E>` for fallible operations
//! - `thiserror` error types in `backend::error` and `shared::config`
//! - Every failure is reported as exactly one status code

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
