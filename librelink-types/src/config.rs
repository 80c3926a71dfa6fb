//! Integration configuration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{LibreError, Region, UnitOfMeasurement};

/// Shortest allowed polling period; the vendor rate-limits faster clients.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

const fn default_poll_interval() -> Duration {
    MIN_POLL_INTERVAL
}

const fn default_request_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}

/// Durations stored as whole seconds.
mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

/// Configuration of one integration instance.
///
/// Produced by the host's configuration flow and consumed once at setup.
#[derive(Clone, Serialize, Deserialize)]
pub struct LibreConfig {
    /// Account e-mail.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Regional API deployment the account belongs to.
    #[serde(default)]
    pub region: Region,
    /// Display unit for glucose values.
    #[serde(default)]
    pub unit_of_measurement: UnitOfMeasurement,
    /// Restrict exposed entities to a single patient.
    #[serde(default)]
    pub patient_id: Option<String>,
    /// Polling period in seconds; values below [`MIN_POLL_INTERVAL`] are raised to it.
    #[serde(default = "default_poll_interval", with = "duration_secs")]
    pub poll_interval: Duration,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout", with = "duration_secs")]
    pub request_timeout: Duration,
}

impl LibreConfig {
    /// Configuration with defaults for everything but the credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            region: Region::default(),
            unit_of_measurement: UnitOfMeasurement::default(),
            patient_id: None,
            poll_interval: MIN_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Polling period after applying the minimum.
    #[must_use]
    pub fn effective_poll_interval(&self) -> Duration {
        self.poll_interval.max(MIN_POLL_INTERVAL)
    }

    /// Reject configurations that cannot possibly log in.
    ///
    /// # Errors
    /// Returns `InvalidArg` when credentials are blank or the request timeout is zero.
    pub fn validate(&self) -> Result<(), LibreError> {
        if self.username.trim().is_empty() {
            return Err(LibreError::InvalidArg("username must not be empty".into()));
        }
        if self.password.is_empty() {
            return Err(LibreError::InvalidArg("password must not be empty".into()));
        }
        if self.request_timeout.is_zero() {
            return Err(LibreError::InvalidArg("request timeout must be non-zero".into()));
        }
        Ok(())
    }
}

impl fmt::Debug for LibreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LibreConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("region", &self.region)
            .field("unit_of_measurement", &self.unit_of_measurement)
            .field("patient_id", &self.patient_id)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
