//! Error types for feature aggregation and summarization.

use crate::models::FeatureId;
use thiserror::Error;

/// Result type for aggregation operations
pub type Result<T> = std::result::Result<T, AggregationError>;

/// Errors surfaced by the aggregation and summarization services.
///
/// These are pure computations, so every error returns straight to the
/// caller; there is no retry and no partial result. A failed summarization
/// produces no stats at all and the caller decides what to display.
#[derive(Error, Debug)]
pub enum AggregationError {
    /// Summarization was requested over zero features
    #[error("Cannot summarize an empty feature set")]
    EmptyInput,

    /// A feature's zone has no registered display color
    #[error("No display color registered for zone '{zone}'")]
    UnknownZone { zone: String },

    /// A date-valued property failed to parse
    #[error("Invalid date '{value}' in attribute '{attribute}' of feature {feature_id}: {reason}")]
    InvalidDate {
        feature_id: FeatureId,
        attribute: String,
        value: String,
        reason: chrono::ParseError,
    },

    /// The named property is absent, or is not a string where a date is required
    #[error("Feature {feature_id} has no usable '{attribute}' attribute")]
    MissingAttribute {
        feature_id: FeatureId,
        attribute: String,
    },
}
