//! librelink-client
//!
//! LibreLinkUp connector implementing `LibreConnector` on top of `reqwest`.
//! Owns the vendor session (base URL plus bearer token), performs the login
//! exchange, and fetches the patient list the account follows.
#![warn(missing_docs)]

mod builder;
mod session;
/// Request plumbing, vendor headers, and failure classification.
pub mod transport;

use std::time::Duration;

use async_trait::async_trait;
use librelink_core::{
    LibreError, LoginRequest, LoginResponse, PatientRecord, PollSnapshot, Region,
    STATUS_BAD_CREDENTIALS,
    connector::{Authenticator, ConnectionsProvider, FetchOutcome, LibreConnector},
};
use serde_json::Value;

pub use builder::LibreLinkClientBuilder;
use session::Session;
pub use transport::{PRODUCT, VERSION_APP};

/// Path of the login endpoint, relative to the regional base URL.
pub const LOGIN_PATH: &str = "/llu/auth/login";
/// Path of the connections (followed patients) endpoint.
pub const CONNECTIONS_PATH: &str = "/llu/connections";

/// Authenticated HTTP client for one LibreLinkUp region.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
#[derive(Debug)]
pub struct LibreLinkClient {
    http: reqwest::Client,
    session: Session,
    timeout: Duration,
}

impl LibreLinkClient {
    /// Start configuring a client. Defaults to the global region and a 20 s timeout.
    #[must_use]
    pub fn builder() -> LibreLinkClientBuilder {
        LibreLinkClientBuilder::default()
    }

    /// Client for `region` with default settings.
    ///
    /// # Errors
    /// Returns `Api` if the underlying HTTP client cannot be constructed.
    pub fn for_region(region: Region) -> Result<Self, LibreError> {
        Self::builder().region(region).build()
    }

    pub(crate) fn from_parts(http: reqwest::Client, base_url: String, timeout: Duration) -> Self {
        Self {
            http,
            session: Session::new(base_url),
            timeout,
        }
    }

    /// Base URL every path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.session.base_url()
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.timeout
    }

    /// Forget the stored token. The next authenticated request fails until a new login.
    pub async fn logout(&self) {
        self.session.clear().await;
    }

    /// Perform one JSON request against the vendor.
    ///
    /// `GET` without a body, `POST` with one. When `authenticated` is set the
    /// stored bearer token is attached; a missing token is an `Authentication`
    /// error without any network traffic.
    ///
    /// # Errors
    /// - `Authentication` on HTTP 401/403 (the stored token is cleared).
    /// - `Connection` on timeout or when the host cannot be reached.
    /// - `Api` on any other non-2xx status or an undecodable body.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "librelink_client::request", skip(self, body))
    )]
    pub async fn request(
        &self,
        path: &str,
        body: Option<&Value>,
        authenticated: bool,
    ) -> Result<Value, LibreError> {
        let url = self.session.url(path);
        let result = if authenticated {
            let guard = self.session.read().await;
            let Some(token) = guard.as_deref() else {
                return Err(LibreError::Authentication);
            };
            transport::send_json(&self.http, &url, path, body, Some(token), self.timeout).await
        } else {
            transport::send_json(&self.http, &url, path, body, None, self.timeout).await
        };

        if authenticated && matches!(result, Err(LibreError::Authentication)) {
            #[cfg(feature = "tracing")]
            tracing::warn!(path, "token rejected by vendor; clearing session");
            self.session.clear().await;
        }
        result
    }

    async fn login_inner(&self, username: &str, password: &str) -> Result<(), LibreError> {
        // Held for the whole exchange so concurrent requests never observe a stale token.
        let mut token = self.session.write().await;
        *token = None;

        let body = serde_json::to_value(LoginRequest {
            email: username,
            password,
        })
        .map_err(|e| LibreError::api(format!("cannot encode login body: {e}")))?;
        let url = self.session.url(LOGIN_PATH);
        let raw =
            transport::send_json(&self.http, &url, LOGIN_PATH, Some(&body), None, self.timeout)
                .await?;

        let resp: LoginResponse = serde_json::from_value(raw)
            .map_err(|e| LibreError::api(format!("unexpected login response: {e}")))?;
        if resp.status == STATUS_BAD_CREDENTIALS {
            return Err(LibreError::Authentication);
        }
        let status = resp.status;
        let issued = resp
            .into_token()
            .ok_or_else(|| LibreError::api(format!("login response without token (status {status})")))?;
        *token = Some(issued);
        Ok(())
    }

    async fn connections_inner(&self) -> Result<FetchOutcome, LibreError> {
        let raw = self.request(CONNECTIONS_PATH, None, true).await?;
        let status = raw
            .get("status")
            .and_then(Value::as_i64)
            .ok_or_else(|| LibreError::api("connections response without status"))?;
        if status != 0 {
            #[cfg(feature = "tracing")]
            tracing::warn!(status, "connections returned non-zero vendor status");
            return Ok(FetchOutcome::VendorStatus { status, raw });
        }
        let data = raw
            .get("data")
            .cloned()
            .ok_or_else(|| LibreError::api("connections response without data"))?;
        let patients: Vec<PatientRecord> = serde_json::from_value(data)
            .map_err(|e| LibreError::api(format!("unexpected connections payload: {e}")))?;
        Ok(FetchOutcome::Patients(PollSnapshot::new(patients)))
    }
}

#[async_trait]
impl Authenticator for LibreLinkClient {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "librelink_client::login", skip(self, username, password), fields(base_url = %self.base_url()))
    )]
    async fn login(&self, username: &str, password: &str) -> Result<(), LibreError> {
        self.login_inner(username, password).await
    }

    fn is_authenticated(&self) -> bool {
        self.session.has_token()
    }
}

#[async_trait]
impl ConnectionsProvider for LibreLinkClient {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "librelink_client::connections", skip(self))
    )]
    async fn connections(&self) -> Result<FetchOutcome, LibreError> {
        self.connections_inner().await
    }
}

impl LibreConnector for LibreLinkClient {
    fn name(&self) -> &'static str {
        "librelink-client"
    }

    fn vendor(&self) -> &'static str {
        "Abbott LibreLinkUp"
    }

    fn as_authenticator(&self) -> Option<&dyn Authenticator> {
        Some(self as &dyn Authenticator)
    }

    fn as_connections_provider(&self) -> Option<&dyn ConnectionsProvider> {
        Some(self as &dyn ConnectionsProvider)
    }
}
