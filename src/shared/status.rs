//! Sign-In Status Codes
//!
//! This module defines the wire-level outcome of a sign-in attempt. The
//! status is a closed enumeration serialized as a bare integer, and the
//! response body carries a token only when the status is `Success`.
//!
//! # Wire Format
//!
//! ```json
//! {"status": 2}
//! {"status": 0, "token": "<128 alphanumeric characters>"}
//! ```
//!
//! # Status Codes
//!
//! | Code | Status                      |
//! |------|-----------------------------|
//! | 0    | `Success`                   |
//! | 1    | `InvalidInput`              |
//! | 2    | `InvalidLength`             |
//! | 3    | `InvalidUsernameRegex`      |
//! | 4    | `CommunicationErrorConnect` |
//! | 5    | `CommunicationErrorQuery`   |
//! | 6    | `CommunicationErrorToken`   |
//! | 7    | `InvalidCredentials`        |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a sign-in attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SignInStatus {
    /// Credentials matched and a token was issued
    Success,
    /// One or both fields were missing
    InvalidInput,
    /// Username or password length out of bounds
    InvalidLength,
    /// Username contains a non-letter character
    InvalidUsernameRegex,
    /// No storage connection could be obtained
    CommunicationErrorConnect,
    /// The credential lookup failed
    CommunicationErrorQuery,
    /// The token uniqueness check or insert failed
    CommunicationErrorToken,
    /// Unknown username or wrong password
    InvalidCredentials,
}

impl SignInStatus {
    /// Every status, in code order
    pub const ALL: [SignInStatus; 8] = [
        SignInStatus::Success,
        SignInStatus::InvalidInput,
        SignInStatus::InvalidLength,
        SignInStatus::InvalidUsernameRegex,
        SignInStatus::CommunicationErrorConnect,
        SignInStatus::CommunicationErrorQuery,
        SignInStatus::CommunicationErrorToken,
        SignInStatus::InvalidCredentials,
    ];

    /// Numeric code sent on the wire
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::InvalidInput => 1,
            Self::InvalidLength => 2,
            Self::InvalidUsernameRegex => 3,
            Self::CommunicationErrorConnect => 4,
            Self::CommunicationErrorQuery => 5,
            Self::CommunicationErrorToken => 6,
            Self::InvalidCredentials => 7,
        }
    }

    /// Look up a status by its wire code
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

/// A status code outside the closed enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown sign-in status code: {0}")]
pub struct UnknownStatus(pub u8);

impl From<SignInStatus> for u8 {
    fn from(status: SignInStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u8> for SignInStatus {
    type Error = UnknownStatus;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(UnknownStatus(code))
    }
}

/// Sign-in response body
///
/// Construct with [`SignInResponse::success`] or by converting a sign-in
/// error. The token is present if and only if the status is `Success`;
/// deserializing a body that breaks this fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSignInResponse")]
pub struct SignInResponse {
    status: SignInStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// A body whose token does not agree with its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedResponse {
    #[error("success response without a token")]
    MissingToken,
    #[error("failure status {0} carries a token")]
    UnexpectedToken(u8),
}

/// Unchecked wire shape, only used while deserializing
#[derive(Deserialize)]
struct RawSignInResponse {
    status: SignInStatus,
    #[serde(default)]
    token: Option<String>,
}

impl TryFrom<RawSignInResponse> for SignInResponse {
    type Error = MalformedResponse;

    fn try_from(raw: RawSignInResponse) -> Result<Self, Self::Error> {
        match (raw.status, raw.token) {
            (SignInStatus::Success, Some(token)) => Ok(Self::success(token)),
            (SignInStatus::Success, None) => Err(MalformedResponse::MissingToken),
            (status, None) => Ok(Self::failure(status)),
            (status, Some(_)) => Err(MalformedResponse::UnexpectedToken(status.code())),
        }
    }
}

impl SignInResponse {
    /// Successful sign-in carrying the freshly issued token
    pub fn success(token: String) -> Self {
        Self {
            status: SignInStatus::Success,
            token: Some(token),
        }
    }

    /// Failed sign-in. `status` must not be `Success`.
    pub(crate) fn failure(status: SignInStatus) -> Self {
        debug_assert!(!status.is_success(), "a failure cannot carry Success");
        Self {
            status,
            token: None,
        }
    }

    pub fn status(&self) -> SignInStatus {
        self.status
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
