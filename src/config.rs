//! Call configuration for the metadata chunking path.
//!
//! Callers arrive with two conventions for the same settings. Older ones
//! pass sizes directly on the config object, newer ones nest them under
//! `options`:
//!
//! ```json
//! { "strategy": "sentence", "max_chunk_size": 800 }
//! { "strategy": "sentence", "options": { "max_chunk_size": 800 } }
//! ```
//!
//! Both shapes are accepted. Resolution is per field: the nested value
//! wins over the flat one, and the documented default fills whatever
//! neither supplies. The merge lives in one pure function
//! ([`ChunkingConfig::resolved_options`]) and validation runs on the
//! *effective* values it produces, so a config is judged by what would
//! actually be used, shape notwithstanding.
//!
//! An omitted `strategy` silently means `character` (the historical
//! behavior). A present-but-unknown strategy is an error, never a silent
//! fallback.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::options::{ChunkOptions, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
use crate::registry::StrategyKind;

/// Sizing overrides nested under [`ChunkingConfig::options`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOverrides {
    /// Ceiling override in bytes.
    #[serde(default)]
    pub max_chunk_size: Option<usize>,
    /// Floor override in bytes.
    #[serde(default)]
    pub min_chunk_size: Option<usize>,
}

/// Configuration accepted by the metadata chunking path.
///
/// Every field is optional; the empty config chunks with the `character`
/// strategy at the documented default sizes.
///
/// ## Example
///
/// ```rust
/// use cleaver::ChunkingConfig;
///
/// let config: ChunkingConfig =
///     serde_json::from_str(r#"{ "strategy": "paragraph", "max_chunk_size": 800 }"#)?;
/// let opts = config.resolved_options()?;
/// assert_eq!(opts.max(), 800);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Strategy wire name; `None` means `character`.
    pub strategy: Option<String>,
    /// Nested sizing shape. Wins over the flat fields per field.
    pub options: Option<SizeOverrides>,
    /// Flat sizing shape: ceiling in bytes.
    pub max_chunk_size: Option<usize>,
    /// Flat sizing shape: floor in bytes.
    pub min_chunk_size: Option<usize>,
}

impl ChunkingConfig {
    /// Resolve the strategy selection.
    ///
    /// # Errors
    ///
    /// [`crate::Error::UnknownStrategy`] when a strategy is named but not
    /// registered. An absent strategy resolves to
    /// [`StrategyKind::Character`] without error.
    pub fn strategy_kind(&self) -> Result<StrategyKind> {
        match self.strategy.as_deref() {
            None => Ok(StrategyKind::Character),
            Some(name) => name.parse(),
        }
    }

    /// Merge both shapes into effective sizes and validate them.
    ///
    /// Precedence per field: nested, then flat, then the default
    /// (`DEFAULT_MAX_SIZE` / `DEFAULT_MIN_SIZE`).
    ///
    /// # Errors
    ///
    /// Size errors from [`ChunkOptions::new`] on the effective values.
    pub fn resolved_options(&self) -> Result<ChunkOptions> {
        let nested = self.options.unwrap_or_default();
        let max = nested
            .max_chunk_size
            .or(self.max_chunk_size)
            .unwrap_or(DEFAULT_MAX_SIZE);
        let min = nested
            .min_chunk_size
            .or(self.min_chunk_size)
            .unwrap_or(DEFAULT_MIN_SIZE);
        ChunkOptions::new(max, min)
    }

    /// Validate strategy name and effective sizes without chunking.
    ///
    /// # Errors
    ///
    /// The first failure among: unknown strategy, ceiling out of range,
    /// floor out of range, floor not below ceiling.
    pub fn validate(&self) -> Result<()> {
        self.strategy_kind()?;
        self.resolved_options()?;
        Ok(())
    }
}
