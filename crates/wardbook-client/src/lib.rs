//! Wardbook client library.
//!
//! Glue between the pure roster layer in `wardbook-core` and a remote
//! patients REST resource: a thin HTTP adapter for the four CRUD calls,
//! and a session controller that owns the roster, runs the bootstrap
//! probe with demo-data fallback, and queues user-facing notices.
//!
//! # Modules
//!
//! - [`config`]: Base-endpoint configuration
//! - [`remote`]: The `RemoteStore` capability set and its reqwest implementation
//! - [`controller`]: The `Session` owning roster, connection state, and notices

pub mod config;
pub mod controller;
pub mod remote;

pub use config::ClientConfig;
pub use controller::{ClientError, Connection, Session};
pub use remote::{HttpRemoteStore, RemoteError, RemoteOp, RemoteStore};
