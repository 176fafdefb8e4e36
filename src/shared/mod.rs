//! Shared Module
//!
//! This module contains types that describe the service's external contract
//! and its configuration. They carry no storage or HTTP dependencies, so a
//! client of the sign-in endpoint can reuse them to parse responses.
//!
//! # Overview
//!
//! - **`status`** - Sign-in status codes and the JSON response body
//! - **`config`** - Service configuration and its builder

/// Sign-in status codes and response body
pub mod status;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use status::{MalformedResponse, SignInResponse, SignInStatus, UnknownStatus};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
