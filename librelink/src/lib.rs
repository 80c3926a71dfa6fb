//! librelink
//!
//! Polls the LibreLinkUp API for the patients an account follows and exposes a
//! normalized per-patient view for a host automation platform.
//!
//! Overview
//! - [`Coordinator`] owns the refresh cadence: one fetch at a time, concurrent
//!   triggers coalesce onto the in-flight fetch, failures keep the previous
//!   snapshot and record the error.
//! - [`Integration`] is the setup/teardown context: validate configuration,
//!   log in, perform the first refresh, start background polling.
//! - [`PatientEntities`] reads one patient out of the current snapshot and
//!   evaluates every [`Metric`] for it.
//!
//! Quickstart
//! ```rust,ignore
//! use librelink::{Integration, LibreConfig, Metric};
//!
//! let integration = Integration::start(LibreConfig::new("me@example.com", "secret")).await?;
//! for patient in integration.entities()? {
//!     println!("{} {:?}", patient.device_name()?, patient.value(Metric::Measurement)?);
//! }
//! integration.stop().await;
//! ```
//!
//! Async runtime (Tokio)
//! ---------------------
//! Background polling spawns onto the ambient Tokio 1.x runtime; call
//! [`Integration::start`] and [`Coordinator::spawn`] from within one.
#![warn(missing_docs)]

mod coordinator;
mod entities;
mod integration;

pub use coordinator::{Coordinator, CoordinatorBuilder, RefreshOutcome};
pub use entities::{PatientEntities, SensorAttributes};
pub use integration::Integration;

pub use librelink_client::LibreLinkClient;
pub use librelink_core::{
    LibreConfig, LibreError, Metric, MetricKind, MetricValue, PatientRecord, PollSnapshot,
    PollerHandle, Region, Trend, UnitOfMeasurement,
};
