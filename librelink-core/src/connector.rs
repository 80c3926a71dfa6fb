use async_trait::async_trait;

use crate::LibreError;
use crate::snapshot::PollSnapshot;

/// Result of one successful round-trip to the connections endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Vendor status was zero; the patient list sorted by `patientId`.
    Patients(PollSnapshot),
    /// Vendor status was non-zero; the response body is passed through untouched.
    ///
    /// Vendor codes other than the login "bad credentials" code are not enumerated,
    /// so callers should treat this as "data currently unavailable".
    VendorStatus {
        /// Embedded vendor status code.
        status: i64,
        /// Raw response body for diagnostics.
        raw: serde_json::Value,
    },
}

/// Focused role trait for connectors that hold a vendor session.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Exchange credentials for a bearer token and keep it for later calls.
    ///
    /// # Errors
    /// `Authentication` on rejected credentials, `Connection`/`Api` on transport failures.
    async fn login(&self, username: &str, password: &str) -> Result<(), LibreError>;

    /// Whether a token is currently held.
    fn is_authenticated(&self) -> bool;
}

/// Focused role trait for connectors that list the patients shared with the account.
#[async_trait]
pub trait ConnectionsProvider: Send + Sync {
    /// Fetch the current patient list.
    ///
    /// # Errors
    /// `Authentication`, `Connection` or `Api` as classified by the transport.
    async fn connections(&self) -> Result<FetchOutcome, LibreError>;
}

/// Primary connector interface.
///
/// Capabilities are advertised through the `as_*` accessors so that fixtures
/// without a login step can still feed a coordinator.
pub trait LibreConnector: Send + Sync {
    /// A stable identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise session handling when supported.
    fn as_authenticator(&self) -> Option<&dyn Authenticator> {
        None
    }

    /// Advertise the connections listing when supported.
    fn as_connections_provider(&self) -> Option<&dyn ConnectionsProvider> {
        None
    }
}
