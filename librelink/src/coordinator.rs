use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use librelink_core::connector::{FetchOutcome, LibreConnector};
use librelink_core::{LibreError, MIN_POLL_INTERVAL, PatientRecord, PollSnapshot, PollerHandle};
use tokio::sync::{Mutex, oneshot};
use tokio::time::{Instant, MissedTickBehavior};

/// Consecutive failures after which poll errors are logged at `error` level.
const ESCALATE_AFTER: u32 = 5;

/// Result of a successful [`Coordinator::refresh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// This call performed the fetch and published a new snapshot.
    Updated {
        /// Number of patients in the new snapshot.
        patients: usize,
    },
    /// Another fetch was in flight; this call waited for it instead of issuing its own.
    Coalesced,
}

#[derive(Debug, Default)]
struct PollState {
    snapshot: Option<Arc<PollSnapshot>>,
    last_error: Option<LibreError>,
    last_success: Option<DateTime<Utc>>,
}

/// Polling coordinator: owns the refresh cadence and the latest snapshot.
///
/// Snapshot and error state sit behind a `std::sync::RwLock` that is never held
/// across an await. Fetches are serialized by an async mutex; a generation
/// counter lets callers that queued behind a fetch detect that it completed
/// while they waited.
pub struct Coordinator {
    connector: Arc<dyn LibreConnector>,
    interval: Duration,
    fetch_lock: Mutex<()>,
    generation: AtomicU64,
    state: RwLock<PollState>,
}

/// Builder for a [`Coordinator`].
pub struct CoordinatorBuilder {
    connector: Arc<dyn LibreConnector>,
    interval: Duration,
}

impl CoordinatorBuilder {
    /// Polling period. Values below one minute are raised to one minute.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(MIN_POLL_INTERVAL);
        self
    }

    /// Build the coordinator, shared so it can be handed to the polling task.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the connector cannot fetch connections.
    pub fn build(self) -> Result<Arc<Coordinator>, LibreError> {
        if self.connector.as_connections_provider().is_none() {
            return Err(LibreError::InvalidArg(format!(
                "connector '{}' does not provide connections",
                self.connector.name()
            )));
        }
        Ok(Arc::new(Coordinator {
            connector: self.connector,
            interval: self.interval,
            fetch_lock: Mutex::new(()),
            generation: AtomicU64::new(0),
            state: RwLock::new(PollState::default()),
        }))
    }
}

impl Coordinator {
    /// Start building a coordinator over `connector`.
    #[must_use]
    pub fn builder(connector: Arc<dyn LibreConnector>) -> CoordinatorBuilder {
        CoordinatorBuilder {
            connector,
            interval: MIN_POLL_INTERVAL,
        }
    }

    /// Effective polling period.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetch once, unless a fetch is already running.
    ///
    /// A caller that arrives while a fetch is in flight waits for it and
    /// reports its result as [`RefreshOutcome::Coalesced`] (or its error)
    /// without another network call.
    ///
    /// # Errors
    /// Returns the fetch error. The previous snapshot is kept and the error is
    /// recorded as [`last_error`](Self::last_error). A non-zero vendor status
    /// surfaces as `VendorStatus`.
    pub async fn refresh(&self) -> Result<RefreshOutcome, LibreError> {
        let seen = self.generation.load(Ordering::Acquire);
        let _guard = self.fetch_lock.lock().await;
        if self.generation.load(Ordering::Acquire) != seen {
            return self.last_error().map_or(Ok(RefreshOutcome::Coalesced), Err);
        }

        // Nothing below publishes until the fetch resolves, so a dropped
        // refresh leaves the state untouched.
        let result = self.fetch().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.publish(result)
    }

    /// First fetch during setup; the caller aborts setup on error.
    ///
    /// # Errors
    /// Returns the fetch error unchanged.
    pub async fn first_refresh(&self) -> Result<Arc<PollSnapshot>, LibreError> {
        self.refresh().await?;
        self.current_snapshot()
            .ok_or_else(|| LibreError::api("first refresh produced no snapshot"))
    }

    async fn fetch(&self) -> Result<PollSnapshot, LibreError> {
        let provider = self.connector.as_connections_provider().ok_or_else(|| {
            LibreError::InvalidArg(format!(
                "connector '{}' does not provide connections",
                self.connector.name()
            ))
        })?;
        match provider.connections().await? {
            FetchOutcome::Patients(snapshot) => Ok(snapshot),
            FetchOutcome::VendorStatus { status, .. } => Err(LibreError::VendorStatus { status }),
        }
    }

    fn publish(&self, result: Result<PollSnapshot, LibreError>) -> Result<RefreshOutcome, LibreError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        match result {
            Ok(snapshot) => {
                let patients = snapshot.len();
                #[cfg(feature = "tracing")]
                tracing::debug!(patients, connector = self.connector.name(), "published snapshot");
                state.snapshot = Some(Arc::new(snapshot));
                state.last_error = None;
                state.last_success = Some(Utc::now());
                Ok(RefreshOutcome::Updated { patients })
            }
            Err(e) => {
                state.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Latest successfully fetched snapshot, if any.
    #[must_use]
    pub fn current_snapshot(&self) -> Option<Arc<PollSnapshot>> {
        self.read().snapshot.clone()
    }

    /// Error of the most recent fetch; `None` once a fetch succeeds.
    #[must_use]
    pub fn last_error(&self) -> Option<LibreError> {
        self.read().last_error.clone()
    }

    /// Wall-clock time of the most recent successful fetch.
    #[must_use]
    pub fn last_success(&self) -> Option<DateTime<Utc>> {
        self.read().last_success
    }

    /// True once any fetch has succeeded.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.read().snapshot.is_some()
    }

    /// True when a snapshot exists and the most recent fetch succeeded.
    #[must_use]
    pub fn is_available(&self) -> bool {
        let state = self.read();
        state.snapshot.is_some() && state.last_error.is_none()
    }

    /// True when the session was rejected and the operator must re-enter credentials.
    #[must_use]
    pub fn needs_reauth(&self) -> bool {
        self.read().last_error.as_ref().is_some_and(LibreError::is_auth)
    }

    /// Clone of one patient from the current snapshot.
    ///
    /// # Errors
    /// Returns `NotFound` when there is no snapshot or the id is absent from it.
    pub fn patient(&self, patient_id: &str) -> Result<PatientRecord, LibreError> {
        let snapshot = self
            .current_snapshot()
            .ok_or_else(|| LibreError::not_found("snapshot"))?;
        snapshot.require(patient_id).cloned()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, PollState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start the background polling loop.
    ///
    /// The first tick fires one interval from now; missed ticks are skipped.
    /// Transient failures are retried on the next tick. An authentication
    /// failure ends the loop.
    #[must_use]
    pub fn spawn(self: &Arc<Self>) -> PollerHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let me = Arc::clone(self);
        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + me.interval, me.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut consecutive_failures: u32 = 0;

            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {}
                }
                let result = tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    r = me.refresh() => r,
                };
                match result {
                    Ok(_) => consecutive_failures = 0,
                    Err(e) if e.is_auth() => {
                        #[cfg(feature = "tracing")]
                        tracing::error!(connector = me.connector.name(), "session rejected; polling stopped until re-authentication");
                        break;
                    }
                    Err(e) => {
                        consecutive_failures = consecutive_failures.saturating_add(1);
                        #[cfg(feature = "tracing")]
                        if consecutive_failures >= ESCALATE_AFTER {
                            tracing::error!(error = %e, consecutive_failures, "poll failed repeatedly, will retry next tick");
                        } else {
                            tracing::warn!(error = %e, "poll failed, will retry next tick");
                        }
                        #[cfg(not(feature = "tracing"))]
                        let _ = (e, ESCALATE_AFTER);
                    }
                }
            }
        });
        PollerHandle::new(join, stop_tx)
    }
}
