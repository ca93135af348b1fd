//! OAuth2 helpers for clients (plugins) built on the platform.
//!
//! The authorize/exchange/revoke mutations themselves live on
//! [`crate::Client`]; this module holds the client-side material they
//! need, currently PKCE verifier/challenge generation.

mod pkce;

pub use pkce::PkcePair;
