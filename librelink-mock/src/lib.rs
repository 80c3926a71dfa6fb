//! librelink-mock
//!
//! Connectors for tests and demos that never touch the network.
//!
//! - [`MockConnector`]: static fixture account with three patients.
//! - [`DynamicMockConnector`]: behavior scripted at runtime through a controller.
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use librelink_core::connector::{
    Authenticator, ConnectionsProvider, FetchOutcome, LibreConnector,
};
use librelink_core::{LibreError, PollSnapshot};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Password the fixture account rejects.
pub const WRONG_PASSWORD: &str = "wrong";
/// Username that makes login fail as if the vendor were unreachable.
pub const OFFLINE_USER: &str = "offline";

/// Mock connector for CI-safe demos. Serves deterministic patients from static fixtures.
#[derive(Debug, Default)]
pub struct MockConnector {
    authenticated: AtomicBool,
}

impl MockConnector {
    /// Fresh, logged-out connector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            authenticated: AtomicBool::new(false),
        }
    }

    /// Fixture patients in vendor order (unsorted).
    #[must_use]
    pub fn fixture_patients() -> Vec<librelink_core::PatientRecord> {
        fixtures::patients::all()
    }
}

impl LibreConnector for MockConnector {
    fn name(&self) -> &'static str {
        "librelink-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_authenticator(&self) -> Option<&dyn Authenticator> {
        Some(self as &dyn Authenticator)
    }
    fn as_connections_provider(&self) -> Option<&dyn ConnectionsProvider> {
        Some(self as &dyn ConnectionsProvider)
    }
}

#[async_trait]
impl Authenticator for MockConnector {
    async fn login(&self, username: &str, password: &str) -> Result<(), LibreError> {
        self.authenticated.store(false, Ordering::SeqCst);
        if username == OFFLINE_USER {
            return Err(LibreError::connection("mock vendor unreachable"));
        }
        if password == WRONG_PASSWORD {
            return Err(LibreError::Authentication);
        }
        self.authenticated.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConnectionsProvider for MockConnector {
    async fn connections(&self) -> Result<FetchOutcome, LibreError> {
        if !self.is_authenticated() {
            return Err(LibreError::Authentication);
        }
        Ok(FetchOutcome::Patients(PollSnapshot::new(
            fixtures::patients::all(),
        )))
    }
}
