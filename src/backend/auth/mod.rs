//! Authentication Module
//!
//! This module verifies submitted credentials and issues session tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`validation`** - Ordered input rules, first failure wins
//! - **`password`** - bcrypt hashing and verification
//! - **`users`** - User model and credential store
//! - **`sessions`** - Token generation and issuance
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── validation.rs   - Sign-in input rules
//! ├── password.rs     - Password hasher
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Session token generation and persistence
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request types
//!     └── sign_in.rs  - Sign-in handler
//! ```
//!
//! # Sign-In Flow
//!
//! 1. **Validate**: fields present, lengths in bounds, username letters only
//! 2. **Check credentials**: fetch the stored hash by username, verify the password
//! 3. **Issue**: generate a random token, make sure it is unused, persist it
//!
//! # Security
//!
//! - Passwords are stored as bcrypt hashes (cost 12 by default)
//! - Tokens come from the OS CSPRNG
//! - Unknown users and wrong passwords are indistinguishable to the caller

/// Sign-in input validation
pub mod validation;

/// Password hashing
pub mod password;

/// User data model and database operations
pub mod users;

/// Session token generation and issuance
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{authenticate, sign_in, SignInRequest};
pub use password::{PasswordError, PasswordHasher};
pub use sessions::{TokenGenerator, TokenIssuer, TokenSource, TOKEN_LENGTH};
pub use users::{provision_user, User, UserId};
