//! Strategy registry: name resolution for the closed strategy set.
//!
//! The strategy set is fixed at compile time. Callers pick a strategy by
//! name (`"character"`, `"sentence"`, `"paragraph"`); the registry turns
//! that name into a [`StrategyKind`] or a precise error listing what would
//! have been accepted. Lookups never allocate and the registry is
//! immutable, so one lazily-built instance is shared process-wide.
//!
//! ## Why an Enum and Not a Trait Object?
//!
//! An open `dyn Chunker` registry invites strategies registered in one
//! code path and missed in another. With three strategies and no plugin
//! story, a closed enum gives exhaustive matches: adding a fourth strategy
//! is a compile error at every dispatch site until it is handled.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::character::CharacterChunker;
use crate::chunk::Chunk;
use crate::error::Error;
use crate::options::ChunkOptions;
use crate::paragraph::ParagraphChunker;
use crate::sentence::SentenceChunker;

/// Identifier for a chunking strategy.
///
/// Serializes to the lowercase wire name used in configs and metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Fixed-size byte windows, no boundary awareness.
    Character,
    /// Whole sentences packed to the byte budget.
    Sentence,
    /// Whole paragraphs packed to the byte budget, sentences as fallback.
    Paragraph,
}

impl StrategyKind {
    /// Every strategy, in registry order.
    pub const ALL: [StrategyKind; 3] = [Self::Character, Self::Sentence, Self::Paragraph];

    /// The wire name for this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
        }
    }

    /// Comma-separated wire names, for error messages.
    pub(crate) const fn name_list() -> &'static str {
        "character, sentence, paragraph"
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    /// Parse a wire name. Matching is exact: names are lowercase.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "character" => Ok(Self::Character),
            "sentence" => Ok(Self::Sentence),
            "paragraph" => Ok(Self::Paragraph),
            other => Err(Error::UnknownStrategy(other.to_string())),
        }
    }
}

/// A chunking strategy, ready to run.
#[derive(Debug, Clone)]
pub enum Strategy {
    /// See [`CharacterChunker`].
    Character(CharacterChunker),
    /// See [`SentenceChunker`].
    Sentence(SentenceChunker),
    /// See [`ParagraphChunker`].
    Paragraph(ParagraphChunker),
}

impl Strategy {
    /// The identifier this strategy answers to.
    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Character(_) => StrategyKind::Character,
            Self::Sentence(_) => StrategyKind::Sentence,
            Self::Paragraph(_) => StrategyKind::Paragraph,
        }
    }

    /// Chunk `text` under `opts` with this strategy.
    #[must_use]
    pub fn chunk(&self, text: &str, opts: &ChunkOptions) -> Vec<Chunk> {
        match self {
            Self::Character(chunker) => chunker.chunk(text, opts),
            Self::Sentence(chunker) => chunker.chunk(text, opts),
            Self::Paragraph(chunker) => chunker.chunk(text, opts),
        }
    }
}

static GLOBAL: Lazy<StrategyRegistry> = Lazy::new(StrategyRegistry::new);

/// Immutable registry holding one instance of each strategy.
///
/// ## Example
///
/// ```rust
/// use cleaver::{ChunkOptions, StrategyKind, StrategyRegistry};
///
/// let registry = StrategyRegistry::global();
/// let kind = registry.get_kind("sentence")?;
/// assert_eq!(kind, StrategyKind::Sentence);
///
/// let opts = ChunkOptions::default();
/// let chunks = registry.get(kind).chunk("One. Two.", &opts);
/// assert_eq!(chunks.len(), 1);
/// # Ok::<(), cleaver::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    // Indexed by StrategyKind discriminant, same order as ALL.
    strategies: [Strategy; 3],
}

impl StrategyRegistry {
    /// Build a registry with all strategies.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: [
                Strategy::Character(CharacterChunker::new()),
                Strategy::Sentence(SentenceChunker::new()),
                Strategy::Paragraph(ParagraphChunker::new()),
            ],
        }
    }

    /// The shared process-wide registry.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Look up a strategy by kind. Total: every kind is registered.
    #[must_use]
    pub fn get(&self, kind: StrategyKind) -> &Strategy {
        &self.strategies[kind as usize]
    }

    /// Resolve a wire name to a kind.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownStrategy`] when the name is not a registered
    /// strategy; the message lists the accepted names.
    pub fn get_kind(&self, name: &str) -> Result<StrategyKind, Error> {
        name.parse()
    }

    /// Whether `name` resolves to a registered strategy.
    #[must_use]
    pub fn is_valid(&self, name: &str) -> bool {
        self.get_kind(name).is_ok()
    }

    /// Registered strategy kinds, in stable registry order.
    #[must_use]
    pub fn available(&self) -> [StrategyKind; 3] {
        StrategyKind::ALL
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
