//! Property-based tests for sign-in input validation

use proptest::prelude::*;
use tokengate::backend::auth::validation::{
    validate_sign_in, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, USERNAME_MAX_LEN, USERNAME_MIN_LEN,
};
use tokengate::backend::error::AuthError;

fn valid_password() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), PASSWORD_MIN_LEN..=PASSWORD_MIN_LEN + 40)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .prop_filter("byte length in bounds", |p| {
            (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&p.len())
        })
}

proptest! {
    #[test]
    fn test_letters_within_bounds_are_accepted(
        username in "[A-Za-z]{3,21}",
        password in valid_password(),
    ) {
        let result = validate_sign_in(Some(username.as_str()), Some(password.as_str()));
        prop_assert_eq!(result.ok(), Some((username.as_str(), password.as_str())));
    }

    #[test]
    fn test_missing_field_wins_over_everything(value in ".*") {
        prop_assert!(matches!(validate_sign_in(None, Some(value.as_str())), Err(AuthError::InvalidInput)));
        prop_assert!(matches!(validate_sign_in(Some(value.as_str()), None), Err(AuthError::InvalidInput)));
    }

    #[test]
    fn test_out_of_range_username_is_length_error(
        username in prop_oneof!["[A-Za-z0-9 ]{0,2}", "[A-Za-z0-9 ]{22,40}"],
        password in valid_password(),
    ) {
        prop_assert!(matches!(
            validate_sign_in(Some(username.as_str()), Some(password.as_str())),
            Err(AuthError::InvalidLength)
        ));
    }

    #[test]
    fn test_out_of_range_password_is_length_error(
        username in "[A-Za-z]{3,21}",
        password in prop_oneof!["[a-z]{0,7}", "[a-z]{256,300}"],
    ) {
        prop_assert!(matches!(
            validate_sign_in(Some(username.as_str()), Some(password.as_str())),
            Err(AuthError::InvalidLength)
        ));
    }

    #[test]
    fn test_any_non_letter_is_rejected(
        prefix in "[A-Za-z]{1,9}",
        bad in "[^A-Za-z]",
        suffix in "[A-Za-z]{1,9}",
        password in valid_password(),
    ) {
        let username = format!("{}{}{}", prefix, bad, suffix);
        prop_assume!((USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&username.len()));
        prop_assert!(matches!(
            validate_sign_in(Some(username.as_str()), Some(password.as_str())),
            Err(AuthError::InvalidUsernameRegex)
        ));
    }
}
