/**
 * Backend Error Types
 *
 * This module defines the failures a sign-in attempt can end in, plus the
 * failures of the out-of-band user provisioning path.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * Missing fields, out-of-range lengths, illegal username characters and
 * wrong credentials. These are reported to the caller with a specific
 * status code and are never retried.
 *
 * ## Storage Errors
 *
 * Connection, query and token failures. Each is reported with the code of
 * the stage that failed so operators can localize the fault. They always
 * end the request immediately.
 */

use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::shared::SignInStatus;

/// Storage stage a timeout fired in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Acquiring the per-request connection
    Connect,
    /// Looking up and verifying credentials
    Credentials,
    /// Checking and inserting the session token
    Token,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect => f.write_str("connect"),
            Self::Credentials => f.write_str("credential check"),
            Self::Token => f.write_str("token issuance"),
        }
    }
}

/// Sign-in failure
///
/// Every variant maps to exactly one non-success [`SignInStatus`] via
/// [`AuthError::status`].
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password field missing from the request
    #[error("username and password are required")]
    InvalidInput,

    /// Username or password length out of bounds
    #[error("username or password length out of bounds")]
    InvalidLength,

    /// Username contains something other than ASCII letters
    #[error("username may contain only letters")]
    InvalidUsernameRegex,

    /// Unknown username or wrong password; deliberately indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The database failed to open at startup
    #[error("database not configured")]
    DatabaseUnavailable,

    /// No storage connection could be obtained
    #[error("storage connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    /// The credential lookup failed
    #[error("credential query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// The stored hash could not be verified against
    #[error("password verification failed: {0}")]
    Verification(#[source] PasswordError),

    /// Checking whether a candidate token exists failed
    #[error("token uniqueness check failed: {0}")]
    TokenCheck(#[source] sqlx::Error),

    /// Persisting the issued token failed
    #[error("token insert failed: {0}")]
    TokenInsert(#[source] sqlx::Error),

    /// Every generated candidate collided
    #[error("no unique token after {attempts} attempts")]
    TokenExhausted {
        /// Number of candidates tried
        attempts: u32,
    },

    /// A storage stage exceeded the request timeout
    #[error("{stage} timed out")]
    Timeout {
        /// Stage that was running when the timeout fired
        stage: Stage,
    },
}

impl AuthError {
    /// Wire status for this failure
    ///
    /// Never returns `SignInStatus::Success`.
    pub fn status(&self) -> SignInStatus {
        match self {
            Self::InvalidInput => SignInStatus::InvalidInput,
            Self::InvalidLength => SignInStatus::InvalidLength,
            Self::InvalidUsernameRegex => SignInStatus::InvalidUsernameRegex,
            Self::InvalidCredentials => SignInStatus::InvalidCredentials,
            Self::DatabaseUnavailable
            | Self::Connect(_)
            | Self::Timeout {
                stage: Stage::Connect,
            } => SignInStatus::CommunicationErrorConnect,
            Self::Query(_)
            | Self::Verification(_)
            | Self::Timeout {
                stage: Stage::Credentials,
            } => SignInStatus::CommunicationErrorQuery,
            Self::TokenCheck(_)
            | Self::TokenInsert(_)
            | Self::TokenExhausted { .. }
            | Self::Timeout { stage: Stage::Token } => SignInStatus::CommunicationErrorToken,
        }
    }

    /// Whether this is an infrastructure fault rather than a client error
    pub fn is_storage_fault(&self) -> bool {
        matches!(
            self.status(),
            SignInStatus::CommunicationErrorConnect
                | SignInStatus::CommunicationErrorQuery
                | SignInStatus::CommunicationErrorToken
        )
    }
}

/// User provisioning failure
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Username or password fails the sign-in input rules
    #[error("invalid user: {0}")]
    Invalid(#[source] AuthError),

    /// A user with this username already exists
    #[error("username already taken: {0}")]
    UserExists(String),

    /// The password could not be hashed
    #[error("failed to hash password: {0}")]
    Hashing(#[from] PasswordError),

    /// The user could not be stored
    #[error("failed to store user: {0}")]
    Storage(#[source] sqlx::Error),
}
