//! PKCE code verifier and challenge generation.
//!
//! The platform's OAuth2 flow for mobile apps and SPAs requires PKCE:
//! the client authorizes with a code challenge and later exchanges the
//! code together with the matching verifier. This module generates the
//! pair; the mutations that consume it are
//! `authorize_with_pkce_oauth2_client` and
//! `exchange_oauth2_code_with_pkce_for_token` on [`crate::Client`].

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of the generated code verifier, within RFC 7636's 43-128 range.
const VERIFIER_LENGTH: usize = 64;

/// A PKCE code verifier and its S256 challenge.
///
/// # Example
///
/// ```rust
/// use bln_api::auth::PkcePair;
///
/// let pair = PkcePair::generate();
/// assert_eq!(pair.verifier.len(), 64);
/// assert!(!pair.challenge.contains('='));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PkcePair {
    /// The random code verifier, kept client-side until token exchange.
    pub verifier: String,
    /// `base64url(sha256(verifier))`, sent with the authorize call.
    pub challenge: String,
}

impl PkcePair {
    /// Generates a fresh verifier/challenge pair.
    #[must_use]
    pub fn generate() -> Self {
        let verifier: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(VERIFIER_LENGTH)
            .map(char::from)
            .collect();
        let challenge = Self::challenge_for(&verifier);
        Self {
            verifier,
            challenge,
        }
    }

    /// Computes the S256 challenge for an existing verifier.
    #[must_use]
    pub fn challenge_for(verifier: &str) -> String {
        let digest = Sha256::digest(verifier.as_bytes());
        URL_SAFE_NO_PAD.encode(digest)
    }
}
