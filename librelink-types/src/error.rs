use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the librelink workspace.
///
/// The three transport-facing kinds (`Authentication`, `Connection`, `Api`) are
/// what the HTTP client produces. The remaining variants describe vendor-level
/// status pass-through, input-contract violations, and configuration problems.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LibreError {
    /// Credentials were rejected, or the bearer token is missing or no longer accepted.
    ///
    /// Terminal for the current session: the operator has to re-enter credentials.
    #[error("invalid credentials")]
    Authentication,

    /// Timeout, DNS failure, or another transport-level failure.
    #[error("connection error: {0}")]
    Connection(String),

    /// Any other unexpected failure (non-2xx status, undecodable body, ...).
    #[error("api error: {0}")]
    Api(String),

    /// The vendor answered with a non-zero embedded status code.
    #[error("vendor status {status}")]
    VendorStatus {
        /// Raw vendor status code as found in the response body.
        status: i64,
    },

    /// A record violated its input contract (trend arrow out of range, bad timestamp, ...).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument or configuration value.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A patient or resource could not be found in the current snapshot.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "patient 42".
        what: String,
    },
}

impl LibreError {
    /// Helper: build a `Connection` error from any displayable cause.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Helper: build an `Api` error from any displayable cause.
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Returns true for authentication failures.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Authentication)
    }

    /// Returns true if the next scheduled poll may succeed without operator action.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Api(_) | Self::VendorStatus { .. }
        )
    }
}
