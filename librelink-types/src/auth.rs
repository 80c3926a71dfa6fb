//! Login endpoint payloads.

use serde::{Deserialize, Serialize};

/// Vendor status returned by the login endpoint for rejected credentials.
pub const STATUS_BAD_CREDENTIALS: i64 = 2;

/// Body posted to `/llu/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Account e-mail.
    pub email: &'a str,
    /// Account password.
    pub password: &'a str,
}

/// Response of `/llu/auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Embedded vendor status; zero on success.
    pub status: i64,
    /// Payload, absent on most failures.
    #[serde(default)]
    pub data: Option<LoginData>,
}

/// `data` member of a login response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// Bearer token envelope.
    #[serde(default)]
    pub auth_ticket: Option<AuthTicket>,
}

/// Bearer token issued at login.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthTicket {
    /// Token to present as `Authorization: Bearer <token>`.
    pub token: String,
    /// Expiry epoch seconds; informational only.
    #[serde(default)]
    pub expires: Option<i64>,
}

impl LoginResponse {
    /// Extract the bearer token, if present.
    #[must_use]
    pub fn into_token(self) -> Option<String> {
        self.data.and_then(|d| d.auth_ticket).map(|t| t.token)
    }
}
