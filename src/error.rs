// Library error type
// Malformed venue data is never an error here; only programmer mistakes are.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgendaError {
    /// A negative projection horizon is a caller bug, not bad data.
    #[error("horizon_days must be non-negative, got {0}")]
    NegativeHorizon(i64),
}
