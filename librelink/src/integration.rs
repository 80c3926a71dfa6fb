use std::sync::Arc;

use librelink_client::LibreLinkClient;
use librelink_core::connector::LibreConnector;
use librelink_core::{LibreConfig, LibreError, PollerHandle};

use crate::coordinator::Coordinator;
use crate::entities::PatientEntities;

/// One configured account: its connector, coordinator, and background poller.
///
/// Created by [`start`](Self::start) and torn down by [`stop`](Self::stop);
/// there is no global registry of running integrations.
pub struct Integration {
    config: LibreConfig,
    connector: Arc<dyn LibreConnector>,
    coordinator: Arc<Coordinator>,
    poller: Option<PollerHandle>,
}

impl Integration {
    /// Validate `config`, log in against its region, fetch once, then poll in the background.
    ///
    /// # Errors
    /// - `InvalidArg` for an unusable configuration.
    /// - `Authentication` when the credentials are rejected.
    /// - `Connection`/`Api`/`VendorStatus` when the first fetch fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "librelink::integration::start", skip(config), fields(region = %config.region))
    )]
    pub async fn start(config: LibreConfig) -> Result<Self, LibreError> {
        let client = LibreLinkClient::builder()
            .region(config.region)
            .request_timeout(config.request_timeout)
            .build()?;
        Self::start_with_connector(config, Arc::new(client)).await
    }

    /// Like [`start`](Self::start), with a caller-provided connector.
    ///
    /// # Errors
    /// Same as [`start`](Self::start).
    pub async fn start_with_connector(
        config: LibreConfig,
        connector: Arc<dyn LibreConnector>,
    ) -> Result<Self, LibreError> {
        config.validate()?;
        if let Some(auth) = connector.as_authenticator() {
            auth.login(&config.username, &config.password).await?;
            #[cfg(feature = "tracing")]
            tracing::info!(connector = connector.name(), "logged in");
        }

        let coordinator = Coordinator::builder(Arc::clone(&connector))
            .interval(config.effective_poll_interval())
            .build()?;
        let snapshot = coordinator.first_refresh().await?;
        #[cfg(feature = "tracing")]
        tracing::info!(patients = snapshot.len(), "first refresh complete");
        #[cfg(not(feature = "tracing"))]
        let _ = snapshot;

        let poller = coordinator.spawn();
        Ok(Self {
            config,
            connector,
            coordinator,
            poller: Some(poller),
        })
    }

    /// Configuration the integration was started with.
    #[must_use]
    pub const fn config(&self) -> &LibreConfig {
        &self.config
    }

    /// Connector used for login and fetches.
    #[must_use]
    pub fn connector(&self) -> &Arc<dyn LibreConnector> {
        &self.connector
    }

    /// Coordinator owning the snapshot.
    #[must_use]
    pub const fn coordinator(&self) -> &Arc<Coordinator> {
        &self.coordinator
    }

    /// True while the background loop is running.
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(|p| !p.is_finished())
    }

    /// Entity views for every exposed patient, in snapshot order.
    ///
    /// When the configuration names a `patient_id`, only that patient is exposed.
    ///
    /// # Errors
    /// Returns `NotFound` when there is no snapshot, or when the configured
    /// patient is absent from it.
    pub fn entities(&self) -> Result<Vec<PatientEntities>, LibreError> {
        let snapshot = self
            .coordinator
            .current_snapshot()
            .ok_or_else(|| LibreError::not_found("snapshot"))?;
        let unit = self.config.unit_of_measurement;

        if let Some(id) = &self.config.patient_id {
            snapshot.require(id)?;
            return Ok(vec![PatientEntities::new(
                Arc::clone(&self.coordinator),
                id.clone(),
                unit,
            )]);
        }
        Ok(snapshot
            .ids()
            .map(|id| PatientEntities::new(Arc::clone(&self.coordinator), id.to_string(), unit))
            .collect())
    }

    /// Entity view for one patient.
    ///
    /// # Errors
    /// Returns `NotFound` if the patient is not exposed by this integration.
    pub fn patient_entities(&self, patient_id: &str) -> Result<PatientEntities, LibreError> {
        if let Some(only) = &self.config.patient_id
            && only != patient_id
        {
            return Err(LibreError::not_found(format!("patient {patient_id}")));
        }
        self.coordinator.patient(patient_id)?;
        Ok(PatientEntities::new(
            Arc::clone(&self.coordinator),
            patient_id.to_string(),
            self.config.unit_of_measurement,
        ))
    }

    /// Stop background polling and wait for the loop to exit.
    pub async fn stop(mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop().await;
        }
        #[cfg(feature = "tracing")]
        tracing::info!(connector = self.connector.name(), "integration stopped");
    }
}
