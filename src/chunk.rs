//! The Chunk type: a bounded segment of text with position metadata.

use serde::{Deserialize, Serialize};

/// The kind of semantic unit a chunk's extent corresponds to.
///
/// Every chunk records which boundary rule produced it, so downstream
/// consumers (storage, retrieval UIs, debugging) can tell a raw character
/// window from a sentence group or a section opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// Fixed-width window; no semantic alignment.
    Character,
    /// Ends at a sentence terminator.
    Sentence,
    /// Ends at a paragraph break.
    Paragraph,
    /// Begins at a markdown header line.
    Section,
}

impl Boundary {
    /// The lowercase wire name of this boundary kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
            Self::Section => "section",
        }
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chunk of text with its position in the original document.
///
/// ## Byte Offsets
///
/// `start` and `end` are byte offsets into the original text, not character
/// indices. This matches Rust's string slicing semantics:
///
/// ```rust
/// use cleaver::{Boundary, Chunk};
///
/// let text = "Hello, world!";
/// let chunk = Chunk::new("world", 7, 12, Boundary::Character);
///
/// // The offsets let you recover the original position
/// assert_eq!(&text[chunk.start..chunk.end], "world");
/// ```
///
/// ## Gaps
///
/// Chunks from one call never overlap, but consecutive chunks may leave a
/// small gap: the separator whitespace a semantic strategy trimmed away.
///
/// ```text
/// Original: "First sentence.   Second sentence."
/// Chunk 0:  "First sentence."   [0..15]
/// Chunk 1:  "Second sentence."  [18..35]
///                      gap [15..18] = trimmed "   "
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk text, always an exact slice of the source.
    pub text: String,
    /// Byte offset where this chunk starts in the original document.
    pub start: usize,
    /// Byte offset where this chunk ends (exclusive) in the original document.
    pub end: usize,
    /// The boundary rule that closed (or opened, for sections) this chunk.
    pub boundary: Boundary,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, boundary: Boundary) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            boundary,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span of this chunk in the original document.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ span: {}..{}, len: {}, boundary: {} }}",
            self.start,
            self.end,
            self.len(),
            self.boundary
        )
    }
}

/// Merge a short trailing chunk backward into its predecessor.
///
/// Applied by the sentence and paragraph strategies after greedy
/// accumulation: a final fragment shorter than `min_size` is absorbed into
/// the previous chunk rather than emitted on its own. The merged text is
/// re-sliced from `source`, restoring the separator between the two
/// regions, and the predecessor keeps its boundary tag. The result may
/// exceed the max size by a bounded amount; that trade is intentional.
pub(crate) fn merge_trailing_fragment(source: &str, chunks: &mut Vec<Chunk>, min_size: usize) {
    if chunks.len() < 2 {
        return;
    }
    if chunks.last().is_some_and(|tail| tail.len() >= min_size) {
        return;
    }
    let Some(tail) = chunks.pop() else { return };
    let Some(prev) = chunks.last_mut() else { return };
    prev.end = tail.end;
    prev.text = source[prev.start..prev.end].to_string();
}
