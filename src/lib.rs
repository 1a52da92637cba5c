//! # cleaver
//!
//! Offset-accurate document chunking for retrieval-augmented generation
//! (RAG) ingestion.
//!
//! ## The Problem
//!
//! Embedding models want bounded inputs. Documents are not bounded. You
//! need to split them into pieces ("chunks") small enough to embed, large
//! enough to mean something, and traceable back to the exact place in the
//! source they came from.
//!
//! Splitting every N characters satisfies only the first requirement:
//!
//! - A cut mid-word embeds garbage at both edges
//! - A cut mid-sentence strands a clause with no subject
//! - A cut mid-section mixes two topics into one vector
//! - A chunk with wrong offsets can never be highlighted in the source
//!
//! The strategies here trade a little size uniformity for boundaries that
//! fall where the text already breaks.
//!
//! ## Chunking Strategies
//!
//! ### Character (Baseline)
//!
//! Consecutive fixed-size windows, no boundary awareness. This is the
//! historical behavior and the default when no strategy is named.
//!
//! ```text
//! Document: "The quick brown fox jumps over the lazy dog."
//! Window: 20
//!
//! Chunk 0: "The quick brown fox "  [0..20]
//! Chunk 1: "jumps over the lazy "  [20..40]
//! Chunk 2: "dog."                  [40..44]
//! ```
//!
//! **When to use**: homogeneous content, legacy pipelines, baselines.
//! **Weakness**: cuts mid-word without apology.
//!
//! ### Sentence
//!
//! Find sentence terminators (`.` `!` `?` followed by whitespace or end of
//! input), then pack whole sentences greedily up to a byte budget. A
//! sentence that alone exceeds the budget is emitted whole rather than
//! split mid-word, and a final fragment shorter than the floor merges into
//! its predecessor.
//!
//! ```text
//! "First sentence. Second sentence. Third."    max_size = 35
//!
//! Chunk 0: "First sentence. Second sentence."  [0..32]
//! Chunk 1: "Third."                            [33..39]
//! ```
//!
//! **When to use**: prose, articles, transcripts.
//! **Weakness**: the terminator rule is positional, so abbreviations like
//! "Dr." can split early. Bounded damage: a weird split is still a split
//! at a period, never inside a word.
//!
//! ### Paragraph
//!
//! Split on blank lines and Markdown headings, pack whole paragraphs to
//! the same budget. A heading closes the running chunk and opens a
//! `section` chunk. A paragraph that alone exceeds the budget is handed to
//! the sentence strategy and its chunks spliced in place, offsets intact.
//!
//! ```text
//! "intro...\n\n# Setup\n\nbody..."
//!
//! Chunk 0: "intro..."              boundary: paragraph
//! Chunk 1: "# Setup\n\nbody..."    boundary: section
//! ```
//!
//! **When to use**: structured documents, Markdown, anything with headings.
//! **Weakness**: degenerates to the sentence strategy on wall-of-text
//! input with no blank lines.
//!
//! ## Offsets Are the Contract
//!
//! Every chunk's `text` is an exact slice of the source: `text ==
//! &source[start..end]`, always, for every strategy. Chunks are emitted in
//! order and never overlap. Adjacent chunks may leave a small gap where
//! separator whitespace was trimmed; the gap bytes are always whitespace.
//! Downstream consumers rely on this to highlight retrieval hits in the
//! original document, so it is tested as a property, not an example.
//!
//! ## Quick Start
//!
//! ```rust
//! use cleaver::{ChunkEngine, ChunkingConfig};
//!
//! let engine = ChunkEngine::new();
//! let text = "First sentence here. Second sentence there.\n\n# Notes\n\nThird one.";
//!
//! // Legacy path: plain strings, fixed windows.
//! let plain = engine.chunk(text, 1200);
//! assert_eq!(plain.len(), 1);
//!
//! // Metadata path: pick a strategy, get offsets and provenance back.
//! let config: ChunkingConfig = serde_json::from_str(
//!     r#"{ "strategy": "paragraph", "options": { "max_chunk_size": 500 } }"#,
//! )?;
//! for chunk in engine.chunk_with_metadata(text, &config)? {
//!     assert_eq!(chunk.text, &text[chunk.metadata.start..chunk.metadata.end]);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Strategies are also usable directly, without the engine:
//!
//! ```rust
//! use cleaver::{ChunkOptions, SentenceChunker};
//!
//! let chunker = SentenceChunker::new();
//! let opts = ChunkOptions::new(800, 100)?;
//! let chunks = chunker.chunk("One. Two. Three.", &opts);
//! assert_eq!(chunks.len(), 1);
//! # Ok::<(), cleaver::Error>(())
//! ```
//!
//! ## Choosing a Strategy
//!
//! | Strategy | Cost | Boundary quality | Reach for it when |
//! |-----------|------|------------------|-------------------|
//! | character | O(n), no scan | None | Compatibility, baselines |
//! | sentence | O(n) regex scan | Good | Prose without structure |
//! | paragraph | O(n) regex scan | Best available | Markdown, structured docs |
//!
//! All three are synchronous, allocation-light, and hold no mutable state;
//! one instance may serve any number of threads.

mod boundary;
mod character;
mod chunk;
mod config;
mod engine;
mod error;
mod options;
mod paragraph;
mod registry;
mod sentence;

pub use character::CharacterChunker;
pub use chunk::{Boundary, Chunk};
pub use config::{ChunkingConfig, SizeOverrides};
pub use engine::{AnnotatedChunk, ChunkEngine, ChunkMetadata};
pub use error::{Error, Result};
pub use options::{
    ChunkOptions, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE, MAX_SIZE_RANGE, MIN_SIZE_RANGE,
};
pub use paragraph::ParagraphChunker;
pub use registry::{Strategy, StrategyKind, StrategyRegistry};
pub use sentence::SentenceChunker;
