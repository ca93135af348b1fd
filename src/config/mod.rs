//! Configuration types for the Big Local News SDK.
//!
//! The main types in this module are:
//!
//! - [`Tier`]: deployment tier selector mapping to a fixed GraphQL endpoint
//! - [`ApiToken`]: a validated personal API token with masked debug output
//! - [`ConcurrencyPolicy`]: fan-out strategy for bulk file uploads
//!
//! # Example
//!
//! ```rust
//! use bln_api::Tier;
//!
//! let tier: Tier = "prod".parse().unwrap();
//! assert_eq!(tier.endpoint_url(), "https://api.biglocalnews.org/graphql");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, TOKEN_ENV_VAR};

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::ConfigError;

/// A deployment tier, selecting one of the three fixed API endpoints.
///
/// Only `prod` is reachable for external developers; `local` and `dev`
/// exist for platform development.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tier {
    /// Local development server.
    Local,
    /// Development deployment.
    Dev,
    /// Production deployment.
    #[default]
    Prod,
}

impl Tier {
    /// Returns the GraphQL endpoint URL for this tier.
    #[must_use]
    pub const fn endpoint_url(self) -> &'static str {
        match self {
            Self::Local => "http://localhost:8080/graphql",
            Self::Dev => "https://dev-api.biglocalnews.org/graphql",
            Self::Prod => "https://api.biglocalnews.org/graphql",
        }
    }
}

impl FromStr for Tier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => Err(ConfigError::UnknownTier {
                tier: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Prod => "prod",
        };
        f.write_str(name)
    }
}

/// Fan-out strategy for bulk file uploads.
///
/// Transfers are network-bound, so the bounded variant limits in-flight
/// uploads with a semaphore over Tokio tasks rather than spawning worker
/// processes. `Serial` runs one file at a time in the order given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConcurrencyPolicy {
    /// At most this many transfers in flight at once.
    Bounded(NonZeroUsize),
    /// One transfer at a time, in input order.
    Serial,
}

impl ConcurrencyPolicy {
    /// Returns the maximum number of transfers allowed in flight.
    #[must_use]
    pub fn limit(self) -> usize {
        match self {
            Self::Bounded(n) => n.get(),
            Self::Serial => 1,
        }
    }
}

impl Default for ConcurrencyPolicy {
    /// Bounded by the number of available processors, falling back to one.
    fn default() -> Self {
        let parallelism =
            std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
        Self::Bounded(parallelism)
    }
}
