//! HTTP implementation of the remote store.

use async_trait::async_trait;
use tracing::debug;

use wardbook_core::models::{PatientDraft, PatientRecord};

use super::{RemoteError, RemoteOp, RemoteResult, RemoteStore};
use crate::config::ClientConfig;

/// Reqwest-backed store speaking JSON against `{base}/patients`.
///
/// No client-side timeout is layered on top of reqwest's own defaults,
/// and an in-flight request cannot be cancelled.
pub struct HttpRemoteStore {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpRemoteStore {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn list(&self) -> RemoteResult<Vec<PatientRecord>> {
        let url = self.config.patients_url();
        debug!(%url, "fetching patient list");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| RemoteError::new(RemoteOp::List, e))?;
        response
            .json()
            .await
            .map_err(|e| RemoteError::new(RemoteOp::List, e))
    }

    async fn create(&self, draft: &PatientDraft) -> RemoteResult<PatientRecord> {
        let url = self.config.patients_url();
        debug!(%url, patient = %draft.name, "creating patient");
        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| RemoteError::new(RemoteOp::Create, e))?;
        response
            .json()
            .await
            .map_err(|e| RemoteError::new(RemoteOp::Create, e))
    }

    async fn update(&self, id: i64, draft: &PatientDraft) -> RemoteResult<PatientRecord> {
        let url = self.config.patient_url(id);
        debug!(%url, "updating patient");
        let response = self
            .client
            .put(&url)
            .json(draft)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| RemoteError::new(RemoteOp::Update, e))?;
        response
            .json()
            .await
            .map_err(|e| RemoteError::new(RemoteOp::Update, e))
    }

    async fn delete(&self, id: i64) -> RemoteResult<()> {
        let url = self.config.patient_url(id);
        debug!(%url, "deleting patient");
        self.client
            .delete(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| RemoteError::new(RemoteOp::Delete, e))?;
        Ok(())
    }
}
