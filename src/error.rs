//! Errors returned by `ProbingMap` construction

use thiserror::Error;

/// Errors returned by this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbingMapError {
    /// A map needs at least one slot to probe.
    #[error("probing map capacity must be greater than zero")]
    ZeroCapacity,
}
