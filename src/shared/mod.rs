//! Shared Module
//!
//! Types that are not tied to the HTTP layer: the process-wide
//! configuration and the validation error produced by the credential
//! store's field validators.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
