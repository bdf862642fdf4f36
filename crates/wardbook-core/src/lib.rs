//! Wardbook Core Library
//!
//! Pure state and derivation layer for a patient roster client.
//!
//! # Architecture
//!
//! ```text
//! UI event ──► Session controller (wardbook-client)
//!                      │
//!              Remote store adapter ──► REST API
//!                      │
//!              ┌───────▼───────┐
//!              │    Roster     │  in-memory collection
//!              └───────┬───────┘
//!          ┌───────────┼───────────┐
//!          ▼           ▼           ▼
//!       filter()   aggregate()  notices
//!      (search)     (stats)    (transient)
//! ```
//!
//! This crate holds everything that can be computed without I/O: the
//! patient model and its derived BMI, the roster mutations applied after
//! a confirmed remote call, the search projection, the statistics
//! aggregation, the expiring notice queue, and the fixed demo roster
//! used when the remote store is unreachable.
//!
//! # Modules
//!
//! - [`models`]: Domain types (PatientRecord, PatientDraft) and derivations
//! - [`roster`]: In-memory collection state with filter and stats views
//! - [`notify`]: Transient user-facing notices with a fixed lifetime
//! - [`sample`]: The built-in demo roster for offline fallback

pub mod models;
pub mod notify;
pub mod roster;
pub mod sample;

// Re-export commonly used types
pub use models::{
    compute_bmi, parse_medical_history, serialize_medical_history, DomainError, PatientDraft,
    PatientRecord,
};
pub use notify::{Notice, NoticeLevel, NoticeQueue};
pub use roster::{aggregate, filter, Roster, RosterStats};
pub use sample::sample_patients;
