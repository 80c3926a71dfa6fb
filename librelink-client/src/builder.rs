use std::time::Duration;

use librelink_core::{DEFAULT_REQUEST_TIMEOUT, LibreError, Region};
use url::Url;

use crate::LibreLinkClient;

/// Builder for [`LibreLinkClient`].
///
/// An explicit `base_url` wins over `region`; it exists for proxies and tests.
#[derive(Debug, Default)]
pub struct LibreLinkClientBuilder {
    region: Region,
    base_url: Option<String>,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl LibreLinkClientBuilder {
    /// Vendor region to talk to.
    #[must_use]
    pub const fn region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Override the base URL derived from the region.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-request timeout (default 20 s).
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxies, custom TLS roots).
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// - `InvalidArg` for a malformed base URL or a zero timeout.
    /// - `Api` if the default HTTP client cannot be constructed.
    pub fn build(self) -> Result<LibreLinkClient, LibreError> {
        let base = match self.base_url {
            Some(raw) => {
                let parsed = Url::parse(&raw)
                    .map_err(|e| LibreError::InvalidArg(format!("invalid base url '{raw}': {e}")))?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(LibreError::InvalidArg(format!(
                        "unsupported scheme in base url '{raw}'"
                    )));
                }
                raw.trim_end_matches('/').to_string()
            }
            None => self.region.base_url().to_string(),
        };

        let timeout = self.timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        if timeout.is_zero() {
            return Err(LibreError::InvalidArg("request timeout must be non-zero".into()));
        }

        let http = match self.http {
            Some(c) => c,
            None => reqwest::Client::builder()
                .build()
                .map_err(|e| LibreError::api(format!("cannot build http client: {e}")))?,
        };
        Ok(LibreLinkClient::from_parts(http, base, timeout))
    }
}
