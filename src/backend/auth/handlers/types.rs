/**
 * Authentication Handler Types
 *
 * Request types for the sign-in handler. The response body lives in
 * `shared::status` so clients can reuse it.
 */

use serde::{Deserialize, Serialize};

/// Sign-in request
///
/// Form-encoded body of `POST /api/auth/sign-in`. Both fields are optional
/// at the type level so a missing field is reported as `InvalidInput`
/// instead of being rejected by the extractor.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignInRequest {
    /// Username as submitted, untrimmed
    pub username: Option<String>,
    /// Password as submitted; verified against the stored hash
    pub password: Option<String>,
}
