//! Sentence-based chunking.
//!
//! Splits text on sentence boundaries, then packs consecutive sentences
//! into chunks up to a byte budget.
//!
//! ## The Hard Part: Packing, Not Splitting
//!
//! Finding terminators is the easy half (see [`crate::boundary`]). The
//! interesting decisions are about what to do with the pieces:
//!
//! ```text
//! "First sentence. Second sentence. Third."    max_size = 35
//!  └─────────────┘ └──────────────┘ └────┘
//!        15               16           6
//!
//! chunk 1: "First sentence. Second sentence."   (32 bytes, fits)
//! chunk 2: "Third."                             (would overflow, starts fresh)
//! ```
//!
//! Three rules govern the packing:
//!
//! 1. **Measure the real region.** The budget check uses the distance from
//!    the running chunk's start to the candidate sentence's end, so the
//!    whitespace between sentences counts against the budget. A chunk's
//!    text is always an exact slice of the source, never a re-join.
//! 2. **Never split a sentence.** A single sentence longer than the budget
//!    is emitted whole as its own chunk. Oversized output beats a chunk
//!    that ends mid-word.
//! 3. **Fold degenerate tails.** When the final chunk comes out shorter
//!    than `min_size` it is merged into its predecessor, budget
//!    notwithstanding. A three-byte chunk helps nobody downstream.
//!
//! ## Why a Byte Budget?
//!
//! Grouping a fixed *count* of sentences gives wildly uneven chunks:
//! legal prose runs 300-byte sentences, chat transcripts run 20-byte ones.
//! Budgeted packing keeps chunks near the embedding sweet spot regardless
//! of the prose style.

use tracing::debug;

use crate::boundary;
use crate::chunk::{merge_trailing_fragment, Boundary, Chunk};
use crate::options::ChunkOptions;

/// Sentence-packing chunker.
///
/// Accumulates whole sentences greedily until the next one would push the
/// chunk past `max_size`, then starts a new chunk. Offsets on the output
/// are byte offsets into the input.
///
/// ## Example
///
/// ```rust
/// use cleaver::{ChunkOptions, SentenceChunker};
///
/// let chunker = SentenceChunker::new();
/// let opts = ChunkOptions::new(100, 10)?;
/// let chunks = chunker.chunk("One. Two. Three.", &opts);
///
/// // All three sentences fit inside one 100-byte budget.
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].text, "One. Two. Three.");
/// # Ok::<(), cleaver::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SentenceChunker;

impl SentenceChunker {
    /// Create a new sentence chunker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Chunk `text` into sentence-aligned chunks within `opts`.
    #[must_use]
    pub fn chunk(&self, text: &str, opts: &ChunkOptions) -> Vec<Chunk> {
        self.chunk_at(text, 0, opts)
    }

    /// Chunk a slice of a larger document, shifting offsets by `base`.
    ///
    /// The paragraph strategy hands oversized paragraphs here; `base` is
    /// the slice's byte offset in the full document so the returned chunks
    /// carry document-level offsets.
    pub(crate) fn chunk_at(&self, text: &str, base: usize, opts: &ChunkOptions) -> Vec<Chunk> {
        let mut chunks: Vec<Chunk> = Vec::new();
        // Running chunk as a content region [start, end) in slice offsets.
        let mut current: Option<(usize, usize)> = None;

        for span in boundary::sentence_spans(text) {
            if span.is_blank() {
                continue;
            }

            // Rule 2: a sentence that alone exceeds the budget goes out
            // whole. Flush whatever was accumulating first so order holds.
            if span.content_len() > opts.max() {
                if let Some((start, end)) = current.take() {
                    chunks.push(slice_chunk(text, start, end));
                }
                debug!(
                    len = span.content_len(),
                    max = opts.max(),
                    "sentence exceeds budget, emitting unsplit"
                );
                chunks.push(slice_chunk(text, span.content_start, span.content_end));
                continue;
            }

            current = match current {
                None => Some((span.content_start, span.content_end)),
                // Rule 1: measure the resulting region, separators included.
                Some((start, _)) if span.content_end - start <= opts.max() => {
                    Some((start, span.content_end))
                }
                Some((start, end)) => {
                    chunks.push(slice_chunk(text, start, end));
                    Some((span.content_start, span.content_end))
                }
            };
        }

        if let Some((start, end)) = current {
            chunks.push(slice_chunk(text, start, end));
        }

        // Rule 3: fold a degenerate tail into its predecessor. Runs on
        // slice-local offsets, before the base shift below.
        merge_trailing_fragment(text, &mut chunks, opts.min());

        if base > 0 {
            for chunk in &mut chunks {
                chunk.start += base;
                chunk.end += base;
            }
        }

        debug!(chunks = chunks.len(), bytes = text.len(), "sentence chunking done");
        chunks
    }
}

fn slice_chunk(text: &str, start: usize, end: usize) -> Chunk {
    Chunk::new(&text[start..end], start, end, Boundary::Sentence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(max: usize, min: usize) -> ChunkOptions {
        ChunkOptions::new(max, min).unwrap()
    }

    #[test]
    fn test_packs_sentences_under_budget() {
        let chunker = SentenceChunker::new();
        let chunks = chunker.chunk("One. Two. Three.", &opts(100, 10));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "One. Two. Three.");
        assert_eq!(chunks[0].span(), 0..16);
        assert_eq!(chunks[0].boundary, Boundary::Sentence);
    }

    #[test]
    fn test_splits_when_budget_exceeded() {
        // Three sentences of 39 bytes each.
        let s1 = "The first sentence is forty bytes long.";
        let s2 = "The second one is also forty bytes, ok.";
        let s3 = "The third finishes at forty bytes too..";
        assert_eq!(s1.len(), 39);
        assert_eq!(s2.len(), 39);
        assert_eq!(s3.len(), 39);
        let text = format!("{s1} {s2} {s3}");

        let chunker = SentenceChunker::new();
        let chunks = chunker.chunk(&text, &opts(100, 10));
        // 39 + 1 + 39 = 79 fits in 100; adding the third (119) does not.
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, format!("{s1} {s2}"));
        assert_eq!(chunks[1].text, s3);
    }

    #[test]
    fn test_one_sentence_per_chunk_when_pairs_overflow() {
        let s1 = "The first sentence is forty bytes long.";
        let s2 = "The second one is also forty bytes, ok.";
        let s3 = "The third finishes at forty bytes too..";
        let text = format!("{s1} {s2} {s3}");

        let chunker = SentenceChunker::new();
        // A 50-byte budget holds one 39-byte sentence but not a pair.
        // Below the validated floor, so built unchecked like the legacy path.
        let singles = chunker.chunk(&text, &ChunkOptions::unchecked(50, 10));

        assert_eq!(singles.len(), 3);
        for (chunk, expected) in singles.iter().zip([s1, s2, s3]) {
            assert_eq!(chunk.text, expected);
        }
    }

    #[test]
    fn test_oversized_sentence_emitted_unsplit() {
        let long = format!("This sentence rambles on {} and never stops.", "and on ".repeat(30));
        let text = format!("Short lead. {long} Short tail follows here.");

        let chunker = SentenceChunker::new();
        let chunks = chunker.chunk(&text, &opts(100, 10));

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text, "Short lead.");
        assert_eq!(chunks[1].text, long);
        assert!(chunks[1].len() > 100, "oversized sentence kept whole");
        assert_eq!(chunks[2].text, "Short tail follows here.");
    }

    #[test]
    fn test_trailing_fragment_merges_into_predecessor() {
        let s1 = "This sentence is exactly forty eight bytes long.";
        let s2 = "Another one that also runs forty eight bytes in.";
        assert_eq!(s1.len(), 48);
        assert_eq!(s2.len(), 48);
        let text = format!("{s1} {s2} Tiny.");

        let chunker = SentenceChunker::new();
        // The 97-byte pair fills the 100 budget, so "Tiny." overflows into
        // its own chunk, lands under the 50-byte floor, and folds back in.
        let chunks = chunker.chunk(&text, &opts(100, 50));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
        assert_eq!(chunks[0].end, text.len());
    }

    #[test]
    fn test_text_is_exact_source_slice() {
        let text = "Padded start.   Middle sentence here!   End?";
        let chunker = SentenceChunker::new();
        for chunk in chunker.chunk(text, &opts(100, 10)) {
            assert_eq!(chunk.text, &text[chunk.start..chunk.end]);
        }
    }

    #[test]
    fn test_unterminated_tail_becomes_chunk() {
        let chunker = SentenceChunker::new();
        let chunks = chunker.chunk("Complete sentence here. trailing fragment without end", &opts(100, 10));

        // 23 + 1 + 29 = 53 bytes, packs into one chunk.
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].text.ends_with("without end"));
    }

    #[test]
    fn test_base_offset_shifts_spans() {
        let doc = "PREFIX__Alpha beta. Gamma delta.";
        let slice = &doc[8..];
        let chunker = SentenceChunker::new();
        let chunks = chunker.chunk_at(slice, 8, &opts(100, 10));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].span(), 8..32);
        assert_eq!(chunks[0].text, &doc[8..32]);
    }

    #[test]
    fn test_empty_text() {
        let chunker = SentenceChunker::new();
        assert!(chunker.chunk("", &opts(100, 10)).is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        let chunker = SentenceChunker::new();
        assert!(chunker.chunk("   \n\t  ", &opts(100, 10)).is_empty());
    }
}
