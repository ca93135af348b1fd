//! Error types for client construction.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation: a client is never partially constructed.
//!
//! # Example
//!
//! ```rust
//! use bln_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::MissingToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while constructing a client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No API token was supplied and none was found in the environment.
    #[error("No API token provided. Pass one explicitly or set the BLN_API_TOKEN environment variable.")]
    MissingToken,

    /// The tier name is not one of the recognized deployment tiers.
    #[error("Unknown tier '{tier}'. Expected 'local', 'dev' or 'prod'.")]
    UnknownTier {
        /// The unrecognized tier name that was provided.
        tier: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_error_message() {
        let error = ConfigError::MissingToken;
        let message = error.to_string();
        assert!(message.contains("No API token provided"));
        assert!(message.contains("BLN_API_TOKEN"));
    }

    #[test]
    fn test_unknown_tier_error_message() {
        let error = ConfigError::UnknownTier {
            tier: "staging".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("staging"));
        assert!(message.contains("'local', 'dev' or 'prod'"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingToken;
        let _: &dyn std::error::Error = &error;
    }
}
