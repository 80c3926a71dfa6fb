//! Request plumbing and failure classification.

use std::time::Duration;

use librelink_core::LibreError;
use reqwest::StatusCode;
use serde_json::Value;

/// Application identifier the vendor expects in the `product` header.
pub const PRODUCT: &str = "llu.android";
/// Application version the vendor expects in the `version` header.
pub const VERSION_APP: &str = "4.7";

/// Map a transport-level `reqwest` failure onto the error taxonomy.
///
/// Timeouts and connect failures (DNS, refused, reset) are `Connection`;
/// everything else, including undecodable bodies, is `Api`.
pub(crate) fn map_reqwest_err(e: &reqwest::Error, path: &str) -> LibreError {
    if e.is_timeout() {
        LibreError::connection(format!("timeout calling {path}"))
    } else if e.is_connect() {
        LibreError::connection(format!("cannot reach {path}: {e}"))
    } else if e.is_decode() {
        LibreError::api(format!("undecodable response from {path}: {e}"))
    } else {
        LibreError::api(format!("request to {path} failed: {e}"))
    }
}

/// Map an HTTP status onto the error taxonomy; `None` for 2xx.
pub(crate) fn map_status(status: StatusCode, path: &str) -> Option<LibreError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Some(LibreError::Authentication)
    } else if status.is_success() {
        None
    } else {
        Some(LibreError::api(format!("HTTP {} from {path}", status.as_u16())))
    }
}

/// One JSON round-trip. `token` is attached as a bearer when present.
pub(crate) async fn send_json(
    http: &reqwest::Client,
    url: &str,
    path: &str,
    body: Option<&Value>,
    token: Option<&str>,
    timeout: Duration,
) -> Result<Value, LibreError> {
    let mut req = match body {
        Some(b) => http.post(url).json(b),
        None => http.get(url),
    }
    .header("product", PRODUCT)
    .header("version", VERSION_APP)
    .timeout(timeout);
    if let Some(t) = token {
        req = req.bearer_auth(t);
    }

    let resp = req.send().await.map_err(|e| map_reqwest_err(&e, path))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path, status = resp.status().as_u16(), "librelink response");

    if let Some(err) = map_status(resp.status(), path) {
        return Err(err);
    }
    resp.json::<Value>()
        .await
        .map_err(|e| map_reqwest_err(&e, path))
}
