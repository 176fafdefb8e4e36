//! Backend Module
//!
//! This module contains all server-side code for the sign-in service.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, database setup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Validation, password verification, token issuance
//! - **`error`** - Sign-in and provisioning error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Handlers share an `AppState` holding the optional SQLite pool, the
//! password hasher, the token issuer and the request deadline. Each
//! sign-in acquires one connection from the pool and holds it until the
//! response is produced.
//!
//! # Error Handling
//!
//! - `AuthError` for sign-in failures, one status code per variant
//! - `ProvisionError` for the user provisioning tool
//! - Propagation with the `?` operator throughout

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;


/// Re-export commonly used types
pub use server::create_app;
pub use error::{AuthError, ProvisionError};
