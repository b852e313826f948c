//! Fixed-width sliding-window splitting over tokens.
//!
//! The token analogue of character chunking: windows of `chunk_size`
//! tokens starting every `chunk_size - chunk_overlap` tokens, with the
//! final window truncated to whatever remains. Window boundaries are
//! token-aligned, so decoded window text can carry a U+FFFD artifact
//! when a boundary cuts through a multi-byte character (see the
//! tokenizer module docs).

use crate::core::error::Result;
use crate::core::tokenizer::{Token, Tokenizer};
use std::ops::Range;

/// Sliding-window token splitter.
#[derive(Debug, Clone, Copy)]
pub struct TokenWindowSplitter<'a> {
    tokenizer: &'a Tokenizer,
    chunk_size: usize,
    chunk_overlap: usize,
}

impl<'a> TokenWindowSplitter<'a> {
    /// Create a new splitter.
    ///
    /// Callers construct this from an already-validated
    /// [`SplitConfig`](crate::core::types::SplitConfig); the asserts
    /// restate the invariants that validation established.
    pub fn new(tokenizer: &'a Tokenizer, chunk_size: usize, chunk_overlap: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be > 0");
        assert!(chunk_overlap < chunk_size, "overlap must be < chunk_size");

        Self {
            tokenizer,
            chunk_size,
            chunk_overlap,
        }
    }

    /// Compute the window ranges for a token sequence of `token_len`.
    ///
    /// Pure arithmetic, exposed separately so window placement can be
    /// reasoned about (and tested) without a vocabulary. Windows start
    /// at `0, step, 2*step, ...` with `step = chunk_size -
    /// chunk_overlap`; emission stops once a window's end reaches
    /// `token_len`, so the final window is never wholly contained in
    /// its predecessor. An empty sequence yields no windows.
    pub fn windows(token_len: usize, chunk_size: usize, chunk_overlap: usize) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        if token_len == 0 {
            return ranges;
        }

        let step = chunk_size - chunk_overlap;
        let mut start = 0;

        loop {
            let end = (start + chunk_size).min(token_len);
            ranges.push(start..end);
            if end == token_len {
                break;
            }
            start += step;
        }

        ranges
    }

    /// Split an already-encoded token sequence into window texts.
    pub fn split_tokens(&self, tokens: &[Token]) -> Result<Vec<String>> {
        Self::windows(tokens.len(), self.chunk_size, self.chunk_overlap)
            .into_iter()
            .map(|range| self.tokenizer.decode(&tokens[range]))
            .collect()
    }

    /// Encode `text` and split it into window texts.
    pub fn split(&self, text: &str) -> Result<Vec<String>> {
        self.split_tokens(&self.tokenizer.encode(text))
    }
}
