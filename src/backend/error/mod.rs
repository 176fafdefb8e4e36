//! Backend Error Module
//!
//! This module defines the error types of the sign-in flow and how they are
//! turned into HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and the status mapping
//! - **`conversion`** - `IntoResponse` implementations
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # HTTP Response Conversion
//!
//! `AuthError` implements `IntoResponse`, so handlers can return it
//! directly. The body is the JSON status object of the sign-in contract.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, ProvisionError, Stage};
pub use conversion::JSON_CONTENT_TYPE;
