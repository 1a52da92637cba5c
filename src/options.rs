//! Validated size bounds for a chunking call.
//!
//! ## The Tension
//!
//! Chunk sizing pulls in two directions:
//!
//! - Too small: fragments meaning, poor embeddings, noisy retrieval
//! - Too large: dilutes semantics, blows past model context budgets
//!
//! On top of the ceiling there is a floor: a trailing 12-byte fragment is
//! worthless as a retrieval unit, so strategies fold it into its
//! predecessor instead of emitting it. That gives two knobs:
//!
//! - `max_size`: the ceiling a strategy accumulates toward. Only an
//!   oversized atomic unit (a single huge sentence) may exceed it.
//! - `min_size`: the floor below which a *final* chunk is merged backward
//!   rather than emitted.
//!
//! Both are validated once, up front, before any text is scanned. The
//! accepted ranges are wide but deliberate: a max below 100 bytes produces
//! confetti, one above 10k outgrows every embedding model this engine
//! feeds.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Default ceiling in bytes when a caller supplies none.
///
/// This is the historical window size of the plain-text path; changing it
/// would re-chunk every document ingested before strategies existed.
pub const DEFAULT_MAX_SIZE: usize = 1200;

/// Default floor in bytes when a caller supplies none.
///
/// Kept at the bottom of the accepted range: records chunked before the
/// minimum existed saw no merging at all, so the default stays close to
/// that behavior and only folds truly degenerate tails.
pub const DEFAULT_MIN_SIZE: usize = 10;

/// Accepted range for `max_size`.
pub const MAX_SIZE_RANGE: RangeInclusive<usize> = 100..=10_000;

/// Accepted range for `min_size`.
pub const MIN_SIZE_RANGE: RangeInclusive<usize> = 10..=1_000;

/// Validated size bounds, immutable once constructed.
///
/// # Examples
///
/// ```rust
/// use cleaver::ChunkOptions;
///
/// let opts = ChunkOptions::new(800, 100)?;
/// assert_eq!(opts.max(), 800);
/// assert_eq!(opts.min(), 100);
///
/// // Out-of-range or inverted bounds never construct
/// assert!(ChunkOptions::new(99, 50).is_err());
/// assert!(ChunkOptions::new(500, 500).is_err());
/// # Ok::<(), cleaver::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkOptions {
    max_size: usize,
    min_size: usize,
}

impl ChunkOptions {
    /// Create validated options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MaxSizeOutOfRange`] when `max_size` falls outside
    /// [`MAX_SIZE_RANGE`], [`Error::MinSizeOutOfRange`] when `min_size`
    /// falls outside [`MIN_SIZE_RANGE`], and [`Error::MinNotBelowMax`]
    /// when `min_size >= max_size`.
    pub fn new(max_size: usize, min_size: usize) -> Result<Self> {
        if !MAX_SIZE_RANGE.contains(&max_size) {
            return Err(Error::MaxSizeOutOfRange(max_size));
        }
        if !MIN_SIZE_RANGE.contains(&min_size) {
            return Err(Error::MinSizeOutOfRange(min_size));
        }
        if min_size >= max_size {
            return Err(Error::MinNotBelowMax {
                min: min_size,
                max: max_size,
            });
        }
        Ok(Self { max_size, min_size })
    }

    /// Bypass validation. The legacy plain-text path historically accepted
    /// any window size, so it must not be range-checked retroactively.
    pub(crate) const fn unchecked(max_size: usize, min_size: usize) -> Self {
        Self { max_size, min_size }
    }

    /// The ceiling a strategy accumulates toward.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max_size
    }

    /// The floor below which a trailing chunk is merged backward.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min_size
    }
}

impl Default for ChunkOptions {
    fn default() -> Self {
        // Defaults sit inside the validated ranges by construction.
        Self::unchecked(DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE)
    }
}
