//! HTTP transport for the Big Local News API.
//!
//! This module contains the low-level GraphQL transport and its error
//! types. Most callers never touch it directly; [`crate::Client`] wraps it
//! with the full SDK surface.

mod errors;
mod graphql;

pub use errors::ApiError;
pub use graphql::{GraphqlClient, SDK_VERSION};
