//! Session controller.
//!
//! One `Session` owns everything that used to be ambient state in the
//! browser client: the roster, the connection state, and the notice
//! queue. Mutations take `&mut self`, so within a session the
//! request → apply → re-derive sequence for one operation cannot
//! interleave with another; overlapping form submissions from two
//! handles to the same remote roster remain last-write-wins.

use thiserror::Error;
use tracing::{info, warn};

use wardbook_core::models::{DomainError, PatientDraft, PatientRecord};
use wardbook_core::notify::{Notice, NoticeLevel, NoticeQueue};
use wardbook_core::roster::{aggregate, filter, Roster, RosterStats};
use wardbook_core::sample::sample_patients;

use crate::remote::{RemoteError, RemoteStore};

/// Outcome of the bootstrap probe. Terminal once left `Probing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    /// Initial state, before the probe has run
    Probing,
    /// The remote store answered the probe
    Connected,
    /// The probe failed; roster holds the demo dataset
    Fallback,
}

/// Failures surfaced by session operations. None of them end the session.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("no patient with id {0} in the roster")]
    NotFound(i64),
}

/// A single-user editing session over the remote patient roster.
pub struct Session<S: RemoteStore> {
    store: S,
    connection: Connection,
    roster: Roster,
    notices: NoticeQueue,
}

impl<S: RemoteStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            connection: Connection::Probing,
            roster: Roster::new(),
            notices: NoticeQueue::new(),
        }
    }

    /// Populate the roster from the store, or fall back to demo data.
    ///
    /// Runs the probe once; calling again after the session has settled
    /// into `Connected` or `Fallback` is a no-op. There is no automatic
    /// re-probing.
    pub async fn bootstrap(&mut self) -> Connection {
        if self.connection != Connection::Probing {
            return self.connection;
        }
        match self.store.list().await {
            Ok(records) => {
                info!(count = records.len(), "connected to the patients API");
                self.roster.replace(records);
                self.connection = Connection::Connected;
            }
            Err(err) => {
                warn!(%err, "bootstrap probe failed, using demo data");
                self.roster.replace(sample_patients());
                self.connection = Connection::Fallback;
                self.notices.push(
                    NoticeLevel::Warning,
                    "Cannot connect to the API server. Using demo data.",
                );
            }
        }
        self.connection
    }

    /// Submit a new patient. Returns the server-assigned id.
    pub async fn create_patient(&mut self, mut draft: PatientDraft) -> Result<i64, ClientError> {
        draft.recompute_bmi()?;
        match self.store.create(&draft).await {
            Ok(record) => {
                let id = record.id;
                self.roster.apply_create(record);
                self.notices
                    .push(NoticeLevel::Success, "Patient added successfully!");
                Ok(id)
            }
            Err(err) => {
                warn!(%err, "create aborted, roster unchanged");
                self.notices
                    .push(NoticeLevel::Error, "Failed to save patient. Please try again.");
                Err(err.into())
            }
        }
    }

    /// Submit an edit for an existing patient.
    ///
    /// The roster keeps `id` even if the server echo carries a different
    /// or missing one.
    pub async fn update_patient(
        &mut self,
        id: i64,
        mut draft: PatientDraft,
    ) -> Result<(), ClientError> {
        draft.recompute_bmi()?;
        match self.store.update(id, &draft).await {
            Ok(record) => {
                self.roster.apply_update(id, record);
                self.notices
                    .push(NoticeLevel::Success, "Patient updated successfully!");
                Ok(())
            }
            Err(err) => {
                warn!(%err, "update aborted, roster unchanged");
                self.notices
                    .push(NoticeLevel::Error, "Failed to save patient. Please try again.");
                Err(err.into())
            }
        }
    }

    /// Delete a patient after the store confirms.
    pub async fn delete_patient(&mut self, id: i64) -> Result<(), ClientError> {
        match self.store.delete(id).await {
            Ok(()) => {
                self.roster.apply_delete(id);
                self.notices
                    .push(NoticeLevel::Success, "Patient deleted successfully!");
                Ok(())
            }
            Err(err) => {
                warn!(%err, "delete aborted, roster unchanged");
                self.notices.push(
                    NoticeLevel::Error,
                    "Failed to delete patient. Please try again.",
                );
                Err(err.into())
            }
        }
    }

    /// Full record for the detail view.
    pub fn patient_detail(&self, id: i64) -> Result<&PatientRecord, ClientError> {
        self.roster.find_by_id(id).ok_or(ClientError::NotFound(id))
    }

    /// Search view over the roster.
    pub fn search(&self, query: &str) -> Vec<&PatientRecord> {
        filter(self.roster.patients(), query)
    }

    /// Counts for the stats panel.
    pub fn stats(&self) -> RosterStats {
        aggregate(self.roster.patients())
    }

    /// The roster in display order.
    pub fn patients(&self) -> &[PatientRecord] {
        self.roster.patients()
    }

    pub fn connection(&self) -> Connection {
        self.connection
    }

    /// Notices still within their display window.
    pub fn visible_notices(&self) -> Vec<&Notice> {
        self.notices.visible()
    }

    /// Drop expired notices from the queue.
    pub fn sweep_notices(&mut self) {
        self.notices.sweep();
    }
}
