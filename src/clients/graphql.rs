//! GraphQL transport for the Big Local News API.
//!
//! This module provides the [`GraphqlClient`] type, a thin authenticated
//! POST wrapper. It knows nothing about individual queries; the response
//! envelope handling lives in [`crate::graphql`].

use serde_json::Value;

use crate::clients::errors::ApiError;
use crate::config::{ApiToken, Tier};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Low-level GraphQL transport.
///
/// Issues one authenticated HTTP POST per call, carrying the query string
/// and a variables payload. There is no retry, no backoff and no request
/// timeout: a call makes exactly one attempt and blocks until the round
/// trip completes.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Clone`, `Send` and `Sync`; clones share the
/// underlying connection pool.
#[derive(Clone, Debug)]
pub struct GraphqlClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full URL of the GraphQL endpoint.
    endpoint: String,
    /// Value of the `Authorization` header, `JWT <token>`.
    auth_header: String,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a transport for the given tier's fixed endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created, which
    /// only happens on TLS initialization failure.
    #[must_use]
    pub fn new(tier: Tier, token: &ApiToken) -> Self {
        Self::with_endpoint(tier.endpoint_url(), token)
    }

    /// Creates a transport against an explicit endpoint URL.
    ///
    /// This exists for tests and proxy setups; normal construction goes
    /// through [`GraphqlClient::new`] with a [`Tier`].
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>, token: &ApiToken) -> Self {
        let user_agent = format!("BLN API Library v{SDK_VERSION} | Rust");
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: endpoint.into(),
            auth_header: format!("JWT {}", token.as_ref()),
        }
    }

    /// Returns the endpoint URL this transport posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Executes a GraphQL document and returns the raw response body.
    ///
    /// The body is the untouched response envelope; callers normalize it
    /// with [`crate::graphql::normalize`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Response`] with the status's canonical reason
    /// phrase for any non-2xx answer, or [`ApiError::Network`] if the
    /// request or the JSON body decode fails.
    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, "executing GraphQL document");

        let body = serde_json::json!({
            "query": query,
            "variables": variables,
        });

        let res = self
            .client
            .post(&self.endpoint)
            .header("Authorization", &self.auth_header)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status));
        }

        Ok(res.json::<Value>().await?)
    }
}
