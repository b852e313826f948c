//! Sentence-aware splitting.
//!
//! Packs whole sentences into chunks bounded by a token budget.
//! When a chunk closes, the maximal suffix of its sentences whose
//! cumulative token count fits within `chunk_overlap` is carried over
//! to open the next chunk, preserving context across the boundary.
//!
//! A sentence whose token count alone exceeds `chunk_size` cannot be
//! packed as a unit; it falls back to [`TokenWindowSplitter`] with the
//! same parameters, its sub-chunks are emitted in place, and sentence
//! packing resumes from an empty chunk after it.

use crate::core::error::Result;
use crate::core::segmenter::{SentenceSegmenter, SentenceSpan};
use crate::core::splitter::TokenWindowSplitter;
use crate::core::tokenizer::Tokenizer;

/// Greedy sentence-packing splitter.
#[derive(Debug, Clone, Copy)]
pub struct SentenceAwareSplitter<'a> {
    tokenizer: &'a Tokenizer,
    segmenter: SentenceSegmenter,
    chunk_size: usize,
    chunk_overlap: usize,
}

impl<'a> SentenceAwareSplitter<'a> {
    /// Create a new splitter.
    ///
    /// Parameters come from an already-validated
    /// [`SplitConfig`](crate::core::types::SplitConfig).
    pub fn new(tokenizer: &'a Tokenizer, chunk_size: usize, chunk_overlap: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be > 0");
        assert!(chunk_overlap < chunk_size, "overlap must be < chunk_size");

        Self {
            tokenizer,
            segmenter: SentenceSegmenter::new(),
            chunk_size,
            chunk_overlap,
        }
    }

    /// Split text into chunk texts.
    ///
    /// Packing accumulates consecutive sentences while the running
    /// token count stays within `chunk_size`. Sentence spans are
    /// contiguous, so every non-fallback chunk is an exact substring
    /// of the source text.
    pub fn split(&self, text: &str) -> Result<Vec<String>> {
        let spans = self.segmenter.segment(text, self.tokenizer);

        let mut chunks: Vec<String> = Vec::new();
        // Invariant: `current` holds contiguous spans whose token
        // counts sum to `running` <= chunk_size.
        let mut current: Vec<SentenceSpan> = Vec::new();
        let mut running = 0usize;

        for span in spans {
            // Oversized sentence: close the open chunk, window-split
            // the sentence in place, start the next chunk empty.
            if span.token_count > self.chunk_size {
                if !current.is_empty() {
                    chunks.push(slice_chunk(text, &current));
                    current.clear();
                    running = 0;
                }
                let window =
                    TokenWindowSplitter::new(self.tokenizer, self.chunk_size, self.chunk_overlap);
                chunks.extend(window.split(span.text(text))?);
                continue;
            }

            if running + span.token_count > self.chunk_size && !current.is_empty() {
                chunks.push(slice_chunk(text, &current));

                let carry = self.carry_start(&current, span.token_count);
                current.drain(..carry);
                running = current.iter().map(|s| s.token_count).sum();
            }

            running += span.token_count;
            current.push(span);
        }

        if !current.is_empty() {
            chunks.push(slice_chunk(text, &current));
        }

        Ok(chunks)
    }

    /// Index into `closed` where the carried-over suffix begins.
    ///
    /// Maximal whole-sentence suffix with cumulative tokens within
    /// `chunk_overlap`, shrunk from its front until the incoming
    /// sentence (`next_tokens`) still fits within `chunk_size` so the
    /// packer always makes forward progress.
    fn carry_start(&self, closed: &[SentenceSpan], next_tokens: usize) -> usize {
        let mut carry = closed.len();
        let mut carried = 0usize;

        while carry > 0 {
            let widened = carried + closed[carry - 1].token_count;
            if widened > self.chunk_overlap {
                break;
            }
            carried = widened;
            carry -= 1;
        }

        while carry < closed.len() && carried + next_tokens > self.chunk_size {
            carried -= closed[carry].token_count;
            carry += 1;
        }

        carry
    }
}

/// Contiguous spans slice back to a single substring of the source.
fn slice_chunk(text: &str, spans: &[SentenceSpan]) -> String {
    let start = spans[0].start;
    let end = spans[spans.len() - 1].end;
    text[start..end].to_string()
}
