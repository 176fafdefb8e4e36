//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request types
//! └── sign_in.rs  - Credential check and token issuance
//! ```
//!
//! # Handlers
//!
//! - **`sign_in`** - POST /api/auth/sign-in - verify credentials, issue a session token

/// Request types
pub mod types;

/// Sign-in handler
pub mod sign_in;

pub use types::SignInRequest;
pub use sign_in::{authenticate, sign_in};
