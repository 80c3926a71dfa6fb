use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Base URL and bearer token of one vendor session.
///
/// The token is written by login and read by every authenticated request. A
/// request holds the read guard for its whole round-trip, so a login waits for
/// in-flight requests and no request ever sees a half-replaced token.
#[derive(Debug)]
pub(crate) struct Session {
    base_url: String,
    token: RwLock<Option<String>>,
}

impl Session {
    pub(crate) fn new(base_url: String) -> Self {
        Self {
            base_url,
            token: RwLock::new(None),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Option<String>> {
        self.token.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Option<String>> {
        self.token.write().await
    }

    pub(crate) async fn clear(&self) {
        *self.token.write().await = None;
    }

    /// Non-blocking check; reports `false` while a login is replacing the token.
    pub(crate) fn has_token(&self) -> bool {
        self.token.try_read().is_ok_and(|t| t.is_some())
    }
}
