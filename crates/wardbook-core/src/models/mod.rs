//! Domain models for the wardbook roster.

mod patient;

pub use patient::*;
