//! Error types for GraphQL API calls.
//!
//! The SDK never retries: every call makes a single attempt and surfaces a
//! tagged error. The taxonomy mirrors how failures reach the caller:
//!
//! - [`ApiError::Response`]: the server answered with a non-2xx status
//! - [`ApiError::Mutation`]: the server executed a mutation but returned a
//!   populated `err` field in the mutation envelope
//! - [`ApiError::Network`]: DNS, TLS, connection or body-decode failures
//!
//! # Example
//!
//! ```rust,ignore
//! match client.user().await {
//!     Ok(user) => println!("{user}"),
//!     Err(ApiError::Response { code, reason }) => {
//!         eprintln!("HTTP {code}: {reason}");
//!     }
//!     Err(ApiError::Mutation(err)) => eprintln!("rejected: {err}"),
//!     Err(ApiError::Network(e)) => eprintln!("network: {e}"),
//! }
//! ```

use thiserror::Error;

/// Unified error type for GraphQL API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The GraphQL endpoint answered with a non-2xx HTTP status.
    ///
    /// `reason` is the canonical reason phrase for the status code,
    /// e.g. `"Unauthorized"` for 401.
    #[error("{reason}")]
    Response {
        /// The HTTP status code of the response.
        code: u16,
        /// The canonical reason phrase for the status code.
        reason: String,
    },

    /// A mutation executed but reported an application-level error.
    #[error("{0}")]
    Mutation(String),

    /// A convenience lookup matched zero or several entities.
    #[error("{0}")]
    Lookup(String),

    /// A payload did not match the shape a typed call expected.
    #[error("Unexpected payload shape: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a local bulk-config file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Network or connection error, including body-decode failures.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Builds a [`ApiError::Response`] from a status code, resolving the
    /// canonical reason phrase.
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Response {
            code: status.as_u16(),
            reason: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_carries_reason_phrase() {
        let error = ApiError::from_status(reqwest::StatusCode::UNAUTHORIZED);
        assert!(matches!(
            &error,
            ApiError::Response { code: 401, reason } if reason == "Unauthorized"
        ));
        assert_eq!(error.to_string(), "Unauthorized");
    }

    #[test]
    fn test_not_found_reason_phrase() {
        let error = ApiError::from_status(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(error.to_string(), "Not Found");
    }

    #[test]
    fn test_mutation_error_displays_server_message() {
        let error = ApiError::Mutation("name already taken".to_string());
        assert_eq!(error.to_string(), "name already taken");
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &ApiError::Mutation("boom".to_string());
        let _ = error;
    }
}
