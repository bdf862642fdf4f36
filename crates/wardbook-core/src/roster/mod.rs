//! In-memory roster state and its derived views.

mod collection;
mod filter;
mod stats;

pub use collection::*;
pub use filter::*;
pub use stats::*;
