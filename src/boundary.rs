//! Boundary detectors: pure functions that locate candidate split points.
//!
//! Each detector walks the source text once and returns consecutive,
//! gapless spans covering it. A span records both its raw extent and the
//! trimmed content inside it, so strategies can emit offset-exact chunks
//! while treating the separator whitespace as a gap.
//!
//! ## The Rules
//!
//! - **Sentence**: a run of `. ! ?` followed by whitespace or end of
//!   input. Positional, not linguistic: "Dr. Smith" over-splits, "3.14"
//!   does not split at all. Slight over-splitting is acceptable for
//!   chunking; the accumulator glues neighbours back together anyway.
//! - **Paragraph**: a run of two or more newlines, or a markdown header
//!   line (`#`-run plus whitespace at column 0). Header-started paragraphs
//!   carry a flag so the paragraph strategy can tag section openings.
//!
//! The character strategy needs no detector; its "boundary" is wherever
//! the window lands.

use once_cell::sync::Lazy;
use regex::Regex;

// Compiled once per process. These patterns are fixed and known-valid.
static SENTENCE_TERMINATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)").expect("sentence terminator pattern"));

static PARAGRAPH_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("paragraph separator pattern"));

static HEADER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#+\s").expect("header line pattern"));

static HEADER_AT_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#+\s").expect("anchored header pattern"));

/// A half-open byte span of the source, plus the trimmed content inside it.
///
/// Raw extents are gapless across a detector's output; content extents
/// shave the whitespace that belongs to the separator, not the chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    /// Raw start offset.
    pub start: usize,
    /// Raw end offset (exclusive).
    pub end: usize,
    /// Start of the trimmed content.
    pub content_start: usize,
    /// End of the trimmed content (exclusive).
    pub content_end: usize,
}

impl Span {
    fn of(text: &str, start: usize, end: usize) -> Self {
        let raw = &text[start..end];
        let leading = raw.len() - raw.trim_start().len();
        let content_start = start + leading;
        let trailing = raw.len() - raw.trim_end().len();
        let content_end = end.saturating_sub(trailing).max(content_start);
        Self {
            start,
            end,
            content_start,
            content_end,
        }
    }

    /// Trimmed content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content_end - self.content_start
    }

    /// Whether the span holds only whitespace.
    pub fn is_blank(&self) -> bool {
        self.content_start == self.content_end
    }
}

/// A paragraph span plus whether its content begins with a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParagraphSpan {
    /// The underlying span.
    pub span: Span,
    /// Content starts with a markdown header at column 0.
    pub heading: bool,
}

/// Locate sentence spans.
///
/// Each span ends right after a terminator match (the trailing whitespace
/// run belongs to the span that the terminator closed); an unterminated
/// tail becomes a final span. Empty input yields no spans.
pub(crate) fn sentence_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for m in SENTENCE_TERMINATOR.find_iter(text) {
        spans.push(Span::of(text, cursor, m.end()));
        cursor = m.end();
    }
    if cursor < text.len() {
        spans.push(Span::of(text, cursor, text.len()));
    }
    spans
}

/// Locate paragraph spans.
///
/// Cuts fall after every blank-line run and before every header line, so a
/// header starts its own paragraph even without a preceding blank line.
pub(crate) fn paragraph_spans(text: &str) -> Vec<ParagraphSpan> {
    let mut cuts: Vec<usize> = Vec::new();
    for m in PARAGRAPH_SEPARATOR.find_iter(text) {
        cuts.push(m.end());
    }
    for m in HEADER_LINE.find_iter(text) {
        cuts.push(m.start());
    }
    cuts.sort_unstable();
    cuts.dedup();

    let mut spans = Vec::new();
    let mut cursor = 0;
    for cut in cuts {
        if cut <= cursor || cut >= text.len() {
            continue;
        }
        spans.push(paragraph_span(text, cursor, cut));
        cursor = cut;
    }
    if cursor < text.len() {
        spans.push(paragraph_span(text, cursor, text.len()));
    }
    spans
}

fn paragraph_span(text: &str, start: usize, end: usize) -> ParagraphSpan {
    let span = Span::of(text, start, end);
    // The heading test mirrors the cut rule: content must sit at a line
    // start (indented hashes are not headers here) and open with `#+\s`.
    let at_line_start =
        span.content_start == 0 || text.as_bytes()[span.content_start - 1] == b'\n';
    let heading = at_line_start
        && !span.is_blank()
        && HEADER_AT_START.is_match(&text[span.content_start..span.end]);
    ParagraphSpan { span, heading }
}
