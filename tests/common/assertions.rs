//! Custom assertion macros and utilities
//!
//! Provides assertion macros for the sign-in reply shape with more
//! descriptive failure messages.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert a failed sign-in: the given status and no token in the body
#[macro_export]
macro_rules! assert_rejected {
    ($reply:expr, $code:expr) => {{
        let reply = &$reply;
        assert_eq!(reply.status, axum::http::StatusCode::OK, "HTTP status");
        assert_eq!(reply.code(), $code as u64, "body: {}", reply.body);
        assert!(
            reply.token().is_none(),
            "Expected no token with status {}, got body {}",
            $code,
            reply.body
        );
    }};
}

/// Assert a successful sign-in and return the token
#[macro_export]
macro_rules! assert_signed_in {
    ($reply:expr) => {{
        let reply = &$reply;
        assert_eq!(reply.status, axum::http::StatusCode::OK, "HTTP status");
        assert_eq!(reply.code(), 0, "body: {}", reply.body);
        match reply.token() {
            Some(token) => token.to_owned(),
            None => panic!("Expected a token, got body {}", reply.body),
        }
    }};
}
