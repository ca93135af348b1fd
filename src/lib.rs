//! # Big Local News API Rust SDK
//!
//! A Rust SDK for the Big Local News data-publishing platform, covering
//! authentication, the GraphQL query/mutation surface (users, groups,
//! projects, files, OAuth2 clients and tokens) and file transfer to and
//! from cloud storage via pre-signed URIs.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Fail-fast client construction via [`Client::builder`], with token
//!   fallback to the `BLN_API_TOKEN` environment variable
//! - Tier selection (`local`/`dev`/`prod`) mapping to fixed endpoints
//! - Response normalization that strips the GraphQL envelope (`data`,
//!   `user`, Relay `edges`/`node` wrappers) into plain nested values
//! - The platform's `{ok, err}` mutation convention resolved into
//!   `Result` values with tagged errors
//! - Bulk file upload with configurable bounded concurrency, plus
//!   streamed downloads
//! - PKCE verifier/challenge generation for the OAuth2 plugin flow
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bln_api::{Client, Tier};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! // Token from the BLN_API_TOKEN environment variable
//! let client = Client::builder().tier(Tier::Prod).build()?;
//!
//! let me = client.user().await?;
//! println!("logged in as {}", me["name"]);
//!
//! let projects = client.open_projects().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Uploading and downloading files
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use bln_api::Client;
//!
//! # async fn run(client: Client) -> Result<(), Box<dyn std::error::Error>> {
//! let outcomes = client
//!     .upload_files("UHJvamVjdDox", &[PathBuf::from("data.csv")])
//!     .await;
//! for outcome in &outcomes {
//!     if let Err(error) = &outcome.result {
//!         eprintln!("{} failed: {error}", outcome.path.display());
//!     }
//! }
//!
//! let saved = client
//!     .download_file("UHJvamVjdDox", "data.csv", None)
//!     .await?;
//! println!("saved to {}", saved.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: credentials and endpoints are instance-based
//! - **Fail-fast validation**: tokens and tiers validate on construction
//! - **Thread-safe**: [`Client`] is `Clone + Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Single attempt**: no retries, no backoff; every failure surfaces
//!   as a tagged error

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod graphql;
pub mod inputs;
pub mod transfer;

mod client;

// Re-export public types at crate root for convenience
pub use client::{Client, ClientBuilder};
pub use clients::ApiError;
pub use config::{ApiToken, ConcurrencyPolicy, Tier, TOKEN_ENV_VAR};
pub use error::ConfigError;
pub use inputs::{
    CreateGroupInput, CreateOauth2ClientInput, CreateProjectInput, UpdateGroupInput,
    UpdateOauth2ClientInput, UpdateProjectInput, UpdateUserInput,
};
pub use transfer::{Ticket, TransferError, UploadOutcome};
