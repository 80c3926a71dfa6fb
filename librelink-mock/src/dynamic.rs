use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use librelink_core::LibreError;
use librelink_core::connector::{
    Authenticator, ConnectionsProvider, FetchOutcome, LibreConnector,
};

/// Instruction for how a call should behave.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value.
    Return(T),
    /// Fail with the provided error.
    Fail(LibreError),
    /// Hang indefinitely (simulate a stalled vendor).
    Hang,
}

#[derive(Default)]
struct InternalState {
    login_rule: Option<MockBehavior<()>>,
    connections_rule: Option<MockBehavior<FetchOutcome>>,
    // One-shot behaviors consumed before `connections_rule`.
    connections_queue: VecDeque<MockBehavior<FetchOutcome>>,
    delay: Option<Duration>,
    login_calls: usize,
    connections_calls: usize,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
    authenticated: Arc<AtomicBool>,
}

impl DynamicMockController {
    /// Set the behavior for `login` calls. Without a rule, login succeeds.
    pub async fn set_login_behavior(&self, behavior: MockBehavior<()>) {
        self.state.lock().await.login_rule = Some(behavior);
    }

    /// Set the standing behavior for `connections` calls.
    pub async fn set_connections_behavior(&self, behavior: MockBehavior<FetchOutcome>) {
        self.state.lock().await.connections_rule = Some(behavior);
    }

    /// Queue one-shot behaviors served, in order, before the standing rule.
    pub async fn enqueue_connections(
        &self,
        behaviors: impl IntoIterator<Item = MockBehavior<FetchOutcome>>,
    ) {
        self.state.lock().await.connections_queue.extend(behaviors);
    }

    /// Delay every call by `delay` before it resolves.
    pub async fn set_delay(&self, delay: Option<Duration>) {
        self.state.lock().await.delay = delay;
    }

    /// Number of `login` calls observed so far.
    pub async fn login_calls(&self) -> usize {
        self.state.lock().await.login_calls
    }

    /// Number of `connections` calls observed so far.
    pub async fn connections_calls(&self) -> usize {
        self.state.lock().await.connections_calls
    }

    /// Clear all configured behaviors, counters, and the session flag.
    pub async fn clear_all_behaviors(&self) {
        *self.state.lock().await = InternalState::default();
        self.authenticated.store(false, Ordering::Release);
    }
}

/// A connector that defers all behavior to an external controller.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
    // Outside the mutex so `is_authenticated` never waits on the controller.
    authenticated: Arc<AtomicBool>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn LibreConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let authenticated = Arc::new(AtomicBool::new(false));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
            authenticated: Arc::clone(&authenticated),
        };
        let me = Arc::new(Self {
            name,
            state,
            authenticated,
        });
        (me as Arc<dyn LibreConnector>, controller)
    }
}

async fn resolve<T>(behavior: MockBehavior<T>, delay: Option<Duration>) -> Result<T, LibreError> {
    if let Some(d) = delay {
        tokio::time::sleep(d).await;
    }
    match behavior {
        MockBehavior::Return(v) => Ok(v),
        MockBehavior::Fail(e) => Err(e),
        MockBehavior::Hang => std::future::pending().await,
    }
}

impl LibreConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_authenticator(&self) -> Option<&dyn Authenticator> {
        Some(self as &dyn Authenticator)
    }

    fn as_connections_provider(&self) -> Option<&dyn ConnectionsProvider> {
        Some(self as &dyn ConnectionsProvider)
    }
}

#[async_trait]
impl Authenticator for DynamicMockConnector {
    async fn login(&self, _username: &str, _password: &str) -> Result<(), LibreError> {
        // Snapshot the behavior without holding the lock across the await.
        self.authenticated.store(false, Ordering::Release);
        let (behavior, delay) = {
            let mut guard = self.state.lock().await;
            guard.login_calls += 1;
            (
                guard.login_rule.clone().unwrap_or(MockBehavior::Return(())),
                guard.delay,
            )
        };
        resolve(behavior, delay).await?;
        self.authenticated.store(true, Ordering::Release);
        Ok(())
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Acquire)
    }
}

#[async_trait]
impl ConnectionsProvider for DynamicMockConnector {
    async fn connections(&self) -> Result<FetchOutcome, LibreError> {
        let (behavior, delay) = {
            let mut guard = self.state.lock().await;
            guard.connections_calls += 1;
            let next = guard
                .connections_queue
                .pop_front()
                .or_else(|| guard.connections_rule.clone());
            (next, guard.delay)
        };
        let Some(behavior) = behavior else {
            return Err(LibreError::not_found(format!(
                "connections behavior for {}",
                self.name
            )));
        };
        let result = resolve(behavior, delay).await;
        if matches!(result, Err(LibreError::Authentication)) {
            self.authenticated.store(false, Ordering::Release);
        }
        result
    }
}
