/**
 * Sign-In Input Validation
 *
 * Rules are checked in order and the first failure wins:
 *
 * 1. Both fields present
 * 2. Username 3-21 bytes, password 8-255 bytes
 * 3. Username made of ASCII letters only
 *
 * Input is taken as submitted. Nothing is trimmed or case folded.
 */

use crate::backend::error::AuthError;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 21;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 255;

/// Validate raw sign-in fields
///
/// # Returns
///
/// The username and password, unchanged, once every rule passes.
///
/// # Errors
///
/// * `InvalidInput` - a field is missing
/// * `InvalidLength` - a length is out of bounds
/// * `InvalidUsernameRegex` - the username has a non-letter character
pub fn validate_sign_in<'a>(
    username: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<(&'a str, &'a str), AuthError> {
    let (Some(username), Some(password)) = (username, password) else {
        return Err(AuthError::InvalidInput);
    };

    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&username.len())
        || !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&password.len())
    {
        return Err(AuthError::InvalidLength);
    }

    if !is_valid_username(username) {
        return Err(AuthError::InvalidUsernameRegex);
    }

    Ok((username, password))
}

/// Usernames are letters only: `^[A-Za-z]*$`
fn is_valid_username(username: &str) -> bool {
    username.chars().all(|c| c.is_ascii_alphabetic())
}
