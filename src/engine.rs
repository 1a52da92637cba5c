//! The chunking engine: strategy resolution and output adaptation.
//!
//! This is the front door. Callers hand over text plus an optional
//! config; the engine resolves the strategy and sizes, runs the chunker,
//! and adapts the output to the caller's shape:
//!
//! ```text
//! (text, config)
//!      │ resolve: strategy name → kind, sizes → ChunkOptions
//!      │ (validation happens here, before any text is scanned)
//!      ▼
//! registry.get(kind).chunk(text, opts)
//!      │
//!      ▼
//! Vec<Chunk> ──┬── chunk()                → Vec<String>  (legacy)
//!              └── chunk_with_metadata()  → Vec<AnnotatedChunk>
//! ```
//!
//! ## Two Paths, One Engine
//!
//! The legacy path predates strategy selection: plain character windows,
//! plain strings out, no validation of the window size. Callers that
//! persist provenance use the metadata path instead, which carries the
//! strategy name and source offsets alongside each chunk. Records written
//! by the legacy path simply have no metadata; both generations of
//! records coexist downstream.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::character;
use crate::chunk::{Boundary, Chunk};
use crate::config::ChunkingConfig;
use crate::error::Result;
use crate::registry::{StrategyKind, StrategyRegistry};

/// Provenance attached to each chunk on the metadata path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Strategy requested by the caller (not necessarily the boundary
    /// rule that cut this chunk; see [`ChunkMetadata::boundary`]).
    pub strategy: StrategyKind,
    /// Byte offset of the chunk start in the source text.
    pub start: usize,
    /// Byte offset one past the chunk end in the source text.
    pub end: usize,
    /// The boundary rule that actually produced this chunk. Differs from
    /// `strategy` when the paragraph strategy fell back to sentences.
    pub boundary: Boundary,
}

/// A chunk plus its provenance, the metadata path's output shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedChunk {
    /// The chunk text, an exact slice of the source.
    pub text: String,
    /// Where it came from and how it was cut.
    pub metadata: ChunkMetadata,
}

impl AnnotatedChunk {
    fn new(strategy: StrategyKind, chunk: Chunk) -> Self {
        Self {
            metadata: ChunkMetadata {
                strategy,
                start: chunk.start,
                end: chunk.end,
                boundary: chunk.boundary,
            },
            text: chunk.text,
        }
    }
}

/// Stateless chunking front door.
///
/// Holds a reference to the process-wide [`StrategyRegistry`]; cheap to
/// construct anywhere, safe to share across threads.
///
/// ## Example
///
/// ```rust
/// use cleaver::{ChunkEngine, ChunkingConfig};
///
/// let engine = ChunkEngine::new();
///
/// // Legacy path: plain strings, character windows.
/// let plain = engine.chunk("some document text", 1200);
/// assert_eq!(plain, vec!["some document text"]);
///
/// // Metadata path: strategy plus offsets on every chunk.
/// let config: ChunkingConfig = serde_json::from_str(r#"{ "strategy": "sentence" }"#)?;
/// let annotated = engine.chunk_with_metadata("One. Two.", &config)?;
/// assert_eq!(annotated[0].metadata.start, 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ChunkEngine {
    registry: &'static StrategyRegistry,
}

impl ChunkEngine {
    /// Create an engine backed by the shared registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: StrategyRegistry::global(),
        }
    }

    /// Legacy chunking: fixed character windows, plain strings.
    ///
    /// Always the `character` strategy regardless of any configured
    /// default; `max_len` is taken as-is (clamped to at least 1, not
    /// range-validated) because callers of this path predate size
    /// validation. The historical default window is
    /// [`crate::DEFAULT_MAX_SIZE`] (1200).
    #[must_use]
    pub fn chunk(&self, text: &str, max_len: usize) -> Vec<String> {
        let windows = character::windows(text, max_len);
        debug!(bytes = text.len(), max_len, chunks = windows.len(), "legacy chunking");
        windows.into_iter().map(|chunk| chunk.text).collect()
    }

    /// Chunk with strategy selection and per-chunk provenance.
    ///
    /// Resolves `config` (strategy name, then sizes under the
    /// nested-over-flat precedence), validates the effective values, and
    /// only then scans the text.
    ///
    /// # Errors
    ///
    /// [`crate::Error::UnknownStrategy`] for a named but unregistered
    /// strategy, or a size error from [`crate::ChunkOptions::new`] on the
    /// effective sizes. No partial output: an invalid config never
    /// chunks.
    pub fn chunk_with_metadata(
        &self,
        text: &str,
        config: &ChunkingConfig,
    ) -> Result<Vec<AnnotatedChunk>> {
        let kind = config.strategy_kind()?;
        let opts = config.resolved_options()?;
        debug!(
            strategy = %kind,
            max = opts.max(),
            min = opts.min(),
            bytes = text.len(),
            "chunking with metadata"
        );

        let chunks = self.registry.get(kind).chunk(text, &opts);
        Ok(chunks
            .into_iter()
            .map(|chunk| AnnotatedChunk::new(kind, chunk))
            .collect())
    }

    /// Validate a config without chunking anything.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Self::chunk_with_metadata`]; the first failing
    /// rule wins.
    pub fn validate_config(&self, config: &ChunkingConfig) -> Result<()> {
        config.validate()
    }

    /// Wire names of the registered strategies, in stable order.
    #[must_use]
    pub fn available_strategies(&self) -> [&'static str; 3] {
        self.registry.available().map(StrategyKind::as_str)
    }
}

impl Default for ChunkEngine {
    fn default() -> Self {
        Self::new()
    }
}
