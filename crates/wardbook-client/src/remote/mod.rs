//! Remote store adapter for the patients REST resource.
//!
//! The adapter is a stateless boundary: one request-response exchange
//! per operation, no retries, no caching. Transport failures and
//! non-success statuses collapse into the same [`RemoteError`]; the
//! caller decides whether that means fallback data (bootstrap) or an
//! error notice (mutations).

mod http;

pub use http::*;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use wardbook_core::models::{PatientDraft, PatientRecord};

/// Which CRUD exchange failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOp {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for RemoteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RemoteOp::List => "list",
            RemoteOp::Create => "create",
            RemoteOp::Update => "update",
            RemoteOp::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// A failed exchange with the remote store.
#[derive(Error, Debug, Clone)]
#[error("remote {operation} failed: {cause}")]
pub struct RemoteError {
    pub operation: RemoteOp,
    pub cause: String,
}

impl RemoteError {
    pub fn new(operation: RemoteOp, cause: impl fmt::Display) -> Self {
        Self {
            operation,
            cause: cause.to_string(),
        }
    }
}

pub type RemoteResult<T> = Result<T, RemoteError>;

/// The four CRUD calls the session controller needs.
///
/// A trait so the controller can be driven by an in-memory fake in
/// tests; the production implementation is [`HttpRemoteStore`].
#[async_trait]
pub trait RemoteStore {
    /// Fetch every patient record.
    async fn list(&self) -> RemoteResult<Vec<PatientRecord>>;

    /// Submit a draft; the store assigns the id and echoes the record.
    async fn create(&self, draft: &PatientDraft) -> RemoteResult<PatientRecord>;

    /// Replace the record behind a previously returned id.
    async fn update(&self, id: i64, draft: &PatientDraft) -> RemoteResult<PatientRecord>;

    /// Remove the record behind a previously returned id.
    async fn delete(&self, id: i64) -> RemoteResult<()>;
}
