//! LibreLink-specific data transfer objects, configuration primitives, and errors.
#![warn(missing_docs)]

mod auth;
mod config;
mod error;
mod patient;
mod patient_id;
mod region;
mod unit;

pub use auth::{AuthTicket, LoginData, LoginRequest, LoginResponse, STATUS_BAD_CREDENTIALS};
pub use config::{DEFAULT_REQUEST_TIMEOUT, LibreConfig, MIN_POLL_INTERVAL};
pub use error::LibreError;
pub use patient::{GlucoseMeasurement, PatientRecord, SensorInfo, SerialPart};
pub use patient_id::{PatientId, patient_id_key};
pub use region::Region;
pub use unit::{MG_DL_PER_MMOL_L, UnitOfMeasurement};
