//! librelink-core
//!
//! Core types, traits, and derivation logic shared across the librelink workspace.
//!
//! - `connector`: the `LibreConnector` trait and its role traits.
//! - `snapshot`: the sorted patient list published by each successful poll.
//! - `metrics`: pure functions turning one patient record into display values.
//! - `handle`: the owner handle of a background polling task.
//!
//! Async runtime (Tokio)
//! ---------------------
//! `handle::PollerHandle` wraps `tokio::task::JoinHandle<()>` and a
//! `tokio::sync::oneshot::Sender<()>`; code that spawns pollers must run under a
//! Tokio 1.x runtime.
#![warn(missing_docs)]

/// Connector capability traits and the primary `LibreConnector` interface.
pub mod connector;
/// Owner handle for background polling tasks.
pub mod handle;
pub mod metrics;
/// Sorted patient list snapshot.
pub mod snapshot;

pub use connector::{Authenticator, ConnectionsProvider, FetchOutcome, LibreConnector};
pub use handle::PollerHandle;
pub use metrics::{Metric, MetricKind, MetricValue, Trend};
pub use snapshot::PollSnapshot;

pub use librelink_types::{
    AuthTicket, DEFAULT_REQUEST_TIMEOUT, GlucoseMeasurement, LibreConfig, LibreError, LoginData,
    LoginRequest, LoginResponse, MG_DL_PER_MMOL_L, MIN_POLL_INTERVAL, PatientId, PatientRecord, Region,
    STATUS_BAD_CREDENTIALS, SensorInfo, SerialPart, UnitOfMeasurement,
};
