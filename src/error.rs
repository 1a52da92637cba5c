//! Error types for cleaver.

use crate::registry::StrategyKind;

/// Errors raised while validating a chunking request.
///
/// Every failure here is deterministic and raised before any text is
/// scanned; there are no transient or partial-result failures in this
/// crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Requested strategy name is not registered.
    ///
    /// The message enumerates the valid names so callers can self-correct.
    #[error("unknown chunking strategy '{0}' (valid strategies: {valid})", valid = StrategyKind::name_list())]
    UnknownStrategy(String),

    /// `max_chunk_size` outside the accepted range.
    #[error("max chunk size {0} out of range (expected 100..=10000)")]
    MaxSizeOutOfRange(usize),

    /// `min_chunk_size` outside the accepted range.
    #[error("min chunk size {0} out of range (expected 10..=1000)")]
    MinSizeOutOfRange(usize),

    /// `min_chunk_size` must be strictly below `max_chunk_size`.
    #[error("min chunk size {min} must be less than max chunk size {max}")]
    MinNotBelowMax {
        /// The minimum that was too large.
        min: usize,
        /// The maximum it collided with.
        max: usize,
    },
}

/// Result type for cleaver operations.
pub type Result<T> = std::result::Result<T, Error>;
