//! Paragraph-based chunking with sentence fallback.
//!
//! Splits on blank lines and Markdown headings, packing whole paragraphs
//! into chunks up to a byte budget. Structure is preserved at the coarsest
//! level that fits:
//!
//! ```text
//! paragraph fits the budget      → pack it (boundary: paragraph)
//! paragraph starts with "# ..."  → close the running chunk, start a
//!                                  section (boundary: section)
//! paragraph exceeds the budget   → hand it to the sentence chunker
//!                                  (boundary: sentence on those chunks)
//! ```
//!
//! ## Why Fall Back Instead of Truncate?
//!
//! A 5000-byte paragraph under a 1000-byte budget has to split *somewhere*.
//! Sentence boundaries are the least damaging interior cut: every output
//! chunk is still a run of complete sentences, and the offsets still map
//! straight back into the source. Truncation would cut mid-word and silently
//! drop text.
//!
//! ## Headings Are Hard Breaks
//!
//! A heading line closes the running chunk even when the heading would fit,
//! so a chunk never straddles two sections. The heading and the prose under
//! it pack together into one `section` chunk as budget allows:
//!
//! ```text
//! "intro prose\n\n# Setup\n\nsetup prose"
//!  └── chunk 1 ──┘└────── chunk 2 ──────┘
//!      paragraph           section
//! ```

use tracing::debug;

use crate::boundary;
use crate::chunk::{merge_trailing_fragment, Boundary, Chunk};
use crate::options::ChunkOptions;
use crate::sentence::SentenceChunker;

/// Paragraph-packing chunker.
///
/// Accumulates whole paragraphs greedily until the next one would push the
/// chunk past `max_size`. Paragraphs that alone exceed the budget are
/// re-chunked by [`SentenceChunker`] and spliced into the output in order.
///
/// ## Example
///
/// ```rust
/// use cleaver::{Boundary, ChunkOptions, ParagraphChunker};
///
/// let chunker = ParagraphChunker::new();
/// let opts = ChunkOptions::new(1000, 10)?;
/// let chunks = chunker.chunk("First paragraph.\n\nSecond paragraph.", &opts);
///
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].boundary, Boundary::Paragraph);
/// # Ok::<(), cleaver::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParagraphChunker {
    sentence: SentenceChunker,
}

impl ParagraphChunker {
    /// Create a new paragraph chunker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sentence: SentenceChunker::new(),
        }
    }

    /// Chunk `text` into paragraph-aligned chunks within `opts`.
    #[must_use]
    pub fn chunk(&self, text: &str, opts: &ChunkOptions) -> Vec<Chunk> {
        let mut chunks: Vec<Chunk> = Vec::new();
        // Running chunk as a content region [start, end) plus the boundary
        // it opened with. A region opened by a heading stays `Section` no
        // matter how many plain paragraphs pack in after it.
        let mut current: Option<(usize, usize, Boundary)> = None;

        for para in boundary::paragraph_spans(text) {
            let span = para.span;
            if span.is_blank() {
                continue;
            }

            // Oversized paragraphs are re-chunked sentence by sentence.
            // This wins over the heading rule: an oversized heading
            // paragraph also lands here and comes out as sentence chunks.
            if span.content_len() > opts.max() {
                if let Some((start, end, boundary)) = current.take() {
                    chunks.push(slice_chunk(text, start, end, boundary));
                }
                debug!(
                    len = span.content_len(),
                    max = opts.max(),
                    "paragraph exceeds budget, falling back to sentences"
                );
                chunks.extend(self.sentence.chunk_at(
                    &text[span.content_start..span.content_end],
                    span.content_start,
                    opts,
                ));
                continue;
            }

            // A heading closes the running chunk unconditionally and opens
            // a section region.
            if para.heading {
                if let Some((start, end, boundary)) = current.take() {
                    chunks.push(slice_chunk(text, start, end, boundary));
                }
                current = Some((span.content_start, span.content_end, Boundary::Section));
                continue;
            }

            current = match current {
                None => Some((span.content_start, span.content_end, Boundary::Paragraph)),
                Some((start, _, boundary)) if span.content_end - start <= opts.max() => {
                    Some((start, span.content_end, boundary))
                }
                Some((start, end, boundary)) => {
                    chunks.push(slice_chunk(text, start, end, boundary));
                    Some((span.content_start, span.content_end, Boundary::Paragraph))
                }
            };
        }

        if let Some((start, end, boundary)) = current {
            chunks.push(slice_chunk(text, start, end, boundary));
        }

        merge_trailing_fragment(text, &mut chunks, opts.min());

        debug!(chunks = chunks.len(), bytes = text.len(), "paragraph chunking done");
        chunks
    }
}

fn slice_chunk(text: &str, start: usize, end: usize, boundary: Boundary) -> Chunk {
    Chunk::new(&text[start..end], start, end, boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(max: usize, min: usize) -> ChunkOptions {
        ChunkOptions::new(max, min).unwrap()
    }

    #[test]
    fn test_packs_paragraphs_under_budget() {
        let text = "First paragraph is here.\n\nSecond paragraph is too.";
        let chunker = ParagraphChunker::new();
        let chunks = chunker.chunk(text, &opts(100, 10));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
        assert_eq!(chunks[0].boundary, Boundary::Paragraph);
    }

    #[test]
    fn test_splits_when_budget_exceeded() {
        let p1 = "A paragraph built to be sixty bytes long for this test case.";
        let p2 = "Another paragraph of sixty bytes keeps the arithmetic clean.";
        assert_eq!(p1.len(), 60);
        assert_eq!(p2.len(), 60);
        let text = format!("{p1}\n\n{p2}");

        let chunker = ParagraphChunker::new();
        // 60 + 2 + 60 = 122 bytes overflows the 100 budget.
        let chunks = chunker.chunk(&text, &opts(100, 10));

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, p1);
        assert_eq!(chunks[1].text, p2);
        assert!(chunks.iter().all(|c| c.boundary == Boundary::Paragraph));
    }

    #[test]
    fn test_heading_opens_section_chunk() {
        let text = "Opening prose sits before any heading.\n\n\
                    # Setup\n\n\
                    Body of the setup section follows its heading.";
        let chunker = ParagraphChunker::new();
        let chunks = chunker.chunk(text, &opts(1000, 10));

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "Opening prose sits before any heading.");
        assert_eq!(chunks[0].boundary, Boundary::Paragraph);
        assert!(chunks[1].text.starts_with("# Setup"));
        assert!(chunks[1].text.ends_with("its heading."));
        assert_eq!(chunks[1].boundary, Boundary::Section);
    }

    #[test]
    fn test_heading_breaks_even_when_it_would_fit() {
        let text = "Tiny lead.\n\n# H\n\nMore.";
        let chunker = ParagraphChunker::new();
        // Everything fits a 1000-byte budget; the heading still cuts.
        let chunks = chunker.chunk(text, &opts(1000, 10));

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "Tiny lead.");
        assert_eq!(chunks[1].text, "# H\n\nMore.");
        assert_eq!(chunks[1].boundary, Boundary::Section);
    }

    #[test]
    fn test_oversized_paragraph_falls_back_to_sentences() {
        let big = "One short sentence lives here. ".repeat(10);
        let closing = "Closing paragraph follows the big one here.";
        let text = format!("{big}\n\n{closing}");

        let chunker = ParagraphChunker::new();
        let chunks = chunker.chunk(&text, &opts(100, 10));

        // 309 content bytes of sentences pack into four chunks, then the
        // closing paragraph stands alone.
        assert_eq!(chunks.len(), 5);
        for chunk in &chunks[..4] {
            assert_eq!(chunk.boundary, Boundary::Sentence);
            assert!(chunk.len() <= 100);
        }
        assert_eq!(chunks[4].text, closing);
        assert_eq!(chunks[4].boundary, Boundary::Paragraph);

        for chunk in &chunks {
            assert_eq!(chunk.text, &text[chunk.start..chunk.end]);
        }
        for pair in chunks.windows(2) {
            let gap = &text[pair[0].end..pair[1].start];
            assert!(gap.chars().all(char::is_whitespace), "gap {gap:?}");
        }
    }

    #[test]
    fn test_heading_chunk_flushes_before_fallback() {
        let big = "One short sentence lives here. ".repeat(10);
        let text = format!("# Overview\n\n{big}");

        let chunker = ParagraphChunker::new();
        let chunks = chunker.chunk(&text, &opts(100, 10));

        assert_eq!(chunks[0].text, "# Overview");
        assert_eq!(chunks[0].boundary, Boundary::Section);
        assert_eq!(chunks[0].span(), 0..10);
        assert!(chunks[1..]
            .iter()
            .all(|c| c.boundary == Boundary::Sentence));
        assert_eq!(chunks[1].start, 12);
    }

    #[test]
    fn test_single_newline_does_not_split() {
        let text = "Line one stays joined.\nLine two as well.";
        let chunker = ParagraphChunker::new();
        let chunks = chunker.chunk(text, &opts(1000, 10));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
    }

    #[test]
    fn test_trailing_fragment_merges_across_paragraph_break() {
        let p1 = "A paragraph built to be sixty bytes long for this test case. \
                  Thirty seven more bytes follow on...";
        assert_eq!(p1.len(), 97);
        let text = format!("{p1}\n\nTail.");

        let chunker = ParagraphChunker::new();
        // The 97-byte paragraph fills the 100 budget, so "Tail." overflows
        // into its own chunk, lands under the 50-byte floor, and folds back
        // into the paragraph before it.
        let chunks = chunker.chunk(&text, &opts(100, 50));

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, text);
        assert_eq!(chunks[0].boundary, Boundary::Paragraph);
    }

    #[test]
    fn test_empty_text() {
        let chunker = ParagraphChunker::new();
        assert!(chunker.chunk("", &opts(100, 10)).is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        let chunker = ParagraphChunker::new();
        assert!(chunker.chunk("  \n\n  \n ", &opts(100, 10)).is_empty());
    }
}
