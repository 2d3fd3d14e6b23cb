//! Typed failures surfaced by the loader and the pipeline boundary.

use thiserror::Error;

use crate::schema::NO_DELAY;

/// Errors that can occur while loading the trip table.
///
/// Read failures from the underlying reader arrive wrapped in `csv::Error`.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to parse trip CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed trip at row {row} (id {trip_id}): {reason}")]
    Malformed {
        row: usize,
        trip_id: String,
        #[source]
        reason: MalformedReason,
    },
}

/// Why a trip row failed validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MalformedReason {
    #[error("price must be non-negative, got {0}")]
    NegativePrice(f64),

    #[error("delay class is \"{NO_DELAY}\" but delay is {0} minutes")]
    MinutesWhileOnTime(f64),

    #[error("delay class is \"{0}\" but delay minutes are missing")]
    MissingMinutes(String),

    #[error("delay minutes must be non-negative, got {0}")]
    NegativeMinutes(f64),
}

/// Outcomes of a pipeline run other than a complete dashboard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The combined selection matched no trips. Informational, not fatal.
    #[error("Please ensure that all filters have at least one value selected!")]
    EmptySelection,
}
