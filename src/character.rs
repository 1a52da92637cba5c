//! Character chunking: fixed-width windows with no semantic alignment.
//!
//! The baseline strategy, and the engine's default. Consecutive windows of
//! `max_size` bytes:
//!
//! ```text
//! max_size = 10
//!
//! Document: "abcdefghijklmnopqrstuvwxyz"
//!
//! Chunk 0: "abcdefghij"   [0..10]
//! Chunk 1: "klmnopqrst"   [10..20]
//! Chunk 2: "uvwxyz"       [20..26]  <- final window may be shorter
//! ```
//!
//! Windows never split a UTF-8 code point: an end that lands mid-character
//! backs off to the previous boundary, and the next window resumes exactly
//! there, so coverage stays gapless.
//!
//! **When to use**: homogeneous content, or callers that predate the
//! semantic strategies and must keep their historical chunk shapes.
//! **Weakness**: splits mid-sentence, mid-word, mid-anything.

use crate::chunk::{Boundary, Chunk};
use crate::options::ChunkOptions;

/// Fixed-width window chunker.
///
/// Stateless; the window size comes from the per-call options.
///
/// ## Example
///
/// ```rust
/// use cleaver::{CharacterChunker, ChunkOptions};
///
/// let chunker = CharacterChunker::new();
/// let opts = ChunkOptions::new(100, 10)?;
/// let chunks = chunker.chunk(&"A".repeat(250), &opts);
///
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[0].len(), 100);
/// assert_eq!(chunks[2].len(), 50);
/// # Ok::<(), cleaver::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CharacterChunker;

impl CharacterChunker {
    /// Create a new character chunker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into consecutive windows of `opts.max()` bytes.
    #[must_use]
    pub fn chunk(&self, text: &str, opts: &ChunkOptions) -> Vec<Chunk> {
        windows(text, opts.max())
    }
}

/// Walk consecutive windows of `size` bytes over `text`.
///
/// Also serves the legacy plain-text path, which passes an unvalidated
/// window size; anything below 1 is clamped so the walk always advances.
pub(crate) fn windows(text: &str, size: usize) -> Vec<Chunk> {
    if text.is_empty() {
        return vec![];
    }

    let size = size.max(1);
    let mut chunks = Vec::with_capacity(text.len().div_ceil(size));
    let mut start = 0;

    while start < text.len() {
        let mut end = (start + size).min(text.len());
        // Back off to a char boundary.
        // Replaces text.floor_char_boundary(end), which is not yet stable.
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        if end <= start {
            // Window narrower than the code point at `start`: emit the
            // character whole rather than split it.
            end = start + 1;
            while end < text.len() && !text.is_char_boundary(end) {
                end += 1;
            }
        }

        chunks.push(Chunk::new(&text[start..end], start, end, Boundary::Character));
        start = end;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_windows() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        let chunks = windows(text, 10);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text, "abcdefghij");
        assert_eq!(chunks[0].span(), 0..10);
        assert_eq!(chunks[1].span(), 10..20);
        assert_eq!(chunks[2].text, "uvwxyz");
        assert!(chunks.iter().all(|c| c.boundary == Boundary::Character));
    }

    #[test]
    fn empty_text() {
        assert!(windows("", 10).is_empty());
    }

    #[test]
    fn text_smaller_than_window() {
        let chunks = windows("small", 100);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "small");
    }

    #[test]
    fn unicode_windows_stay_gapless() {
        let text = "a日本語b日本語c";
        let chunks = windows(text, 5);

        // No window may split a code point, and coverage must be gapless.
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks.last().unwrap().end, text.len());
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for chunk in &chunks {
            assert_eq!(&text[chunk.span()], chunk.text);
        }
    }

    #[test]
    fn window_narrower_than_code_point() {
        // 3-byte characters with a 2-byte window: each comes out whole.
        let text = "日本語";
        let chunks = windows(text, 2);

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text, "日");
        assert_eq!(chunks[1].text, "本");
        assert_eq!(chunks[2].text, "語");
    }

    #[test]
    fn zero_size_is_clamped() {
        let chunks = windows("abc", 0);
        assert_eq!(chunks.len(), 3);
    }
}
