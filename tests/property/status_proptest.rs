//! Property-based tests for the sign-in status codes

use proptest::prelude::*;
use tokengate::shared::{SignInResponse, SignInStatus};

proptest! {
    #[test]
    fn test_codes_outside_range_are_rejected(code in 8u8..=255) {
        prop_assert!(SignInStatus::from_code(code).is_none());
        let parsed: Result<SignInStatus, _> = serde_json::from_str(&code.to_string());
        prop_assert!(parsed.is_err());
    }

    #[test]
    fn test_failure_bodies_never_carry_a_token(code in 1u8..=7) {
        let status = SignInStatus::from_code(code).unwrap();
        let body = serde_json::to_value(
            serde_json::from_str::<SignInResponse>(&format!(r#"{{"status":{}}}"#, code)).unwrap(),
        )
        .unwrap();
        prop_assert_eq!(body, serde_json::json!({ "status": status.code() }));
    }

    #[test]
    fn test_failure_with_token_is_rejected(code in 1u8..=7, token in "[A-Za-z0-9]{0,128}") {
        let body = serde_json::json!({ "status": code, "token": token });
        prop_assert!(serde_json::from_value::<SignInResponse>(body).is_err());
    }

    #[test]
    fn test_success_needs_a_token(token in "[A-Za-z0-9]{1,128}") {
        let with_token = serde_json::json!({ "status": 0, "token": token });
        let parsed = serde_json::from_value::<SignInResponse>(with_token).unwrap();
        prop_assert_eq!(parsed.token(), Some(token.as_str()));

        let without_token = serde_json::json!({ "status": 0 });
        prop_assert!(serde_json::from_value::<SignInResponse>(without_token).is_err());
    }
}

#[test]
fn test_every_code_is_distinct() {
    let codes: std::collections::HashSet<u8> = SignInStatus::ALL.iter().map(|s| s.code()).collect();
    assert_eq!(codes.len(), SignInStatus::ALL.len());
}
