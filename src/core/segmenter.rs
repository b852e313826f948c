//! Sentence segmentation.
//!
//! Splits text into an ordered sequence of non-overlapping sentence
//! spans that together cover the input exactly. The boundary rule is
//! the ASCII-safe baseline: a sentence ends after a run of terminal
//! punctuation (`.`, `!`, `?`) followed by whitespace, with the
//! whitespace run folded into the preceding span.
//!
//! # Precision limitation
//!
//! There is no abbreviation guard: "Dr. Smith" splits after "Dr.".
//! This is a documented trade-off of the baseline rule; the segmenter
//! is a narrow seam so a locale-aware implementation can replace it
//! without touching the packing algorithm.
//!
//! # Safety
//!
//! All offsets are derived from `char_indices()`, so span boundaries
//! always fall on valid UTF-8 character boundaries.

use crate::core::tokenizer::Tokenizer;

/// A half-open byte-offset range `[start, end)` into the source text,
/// plus its token count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceSpan {
    /// Byte offset where the span starts (inclusive)
    pub start: usize,

    /// Byte offset where the span ends (exclusive)
    pub end: usize,

    /// Token count of the spanned text
    pub token_count: usize,
}

impl SentenceSpan {
    /// Slice the spanned text out of the source it was produced from.
    pub fn text<'t>(&self, source: &'t str) -> &'t str {
        &source[self.start..self.end]
    }
}

/// Terminal-punctuation sentence segmenter.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    /// Create a new segmenter.
    pub fn new() -> Self {
        Self
    }

    /// Segment text into covering, non-overlapping sentence spans.
    ///
    /// Returns no spans for empty input and never returns a
    /// zero-length span. Concatenating the spanned texts in order
    /// reconstructs the input exactly.
    pub fn segment(&self, text: &str, tokenizer: &Tokenizer) -> Vec<SentenceSpan> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();

        let mut spans = Vec::new();
        let mut span_start = 0;
        let mut i = 0;

        while i < chars.len() {
            if !is_terminal(chars[i].1) {
                i += 1;
                continue;
            }

            // Absorb the full punctuation run ("...", "?!")
            let mut j = i + 1;
            while j < chars.len() && is_terminal(chars[j].1) {
                j += 1;
            }

            // A boundary needs trailing whitespace; a bare "." inside
            // "3.14" or at end-of-text does not close a span here.
            if j < chars.len() && chars[j].1.is_whitespace() {
                while j < chars.len() && chars[j].1.is_whitespace() {
                    j += 1;
                }
                let end = if j < chars.len() { chars[j].0 } else { text.len() };
                spans.push(self.span(text, tokenizer, span_start, end));
                span_start = end;
            }

            i = j;
        }

        // Trailing text without a terminal boundary forms the last span
        if span_start < text.len() {
            spans.push(self.span(text, tokenizer, span_start, text.len()));
        }

        spans
    }

    fn span(&self, text: &str, tokenizer: &Tokenizer, start: usize, end: usize) -> SentenceSpan {
        SentenceSpan {
            start,
            end,
            token_count: tokenizer.count(&text[start..end]),
        }
    }
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}
