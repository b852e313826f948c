//! Chunking engine.
//!
//! Dispatches to a splitter by strategy, then decorates each produced
//! text fragment with its token count and character length and a
//! sequential index. The engine is a pure synchronous computation: no
//! I/O, no shared mutable state, safe to call from multiple threads.

use crate::core::error::Result;
use crate::core::splitter::{SentenceAwareSplitter, TokenWindowSplitter};
use crate::core::tokenizer::Tokenizer;
use crate::core::types::{Chunk, SplitConfig, Strategy};

/// Strategy dispatch and chunk decoration.
#[derive(Debug, Clone, Copy)]
pub struct ChunkingEngine {
    tokenizer: Tokenizer,
}

impl ChunkingEngine {
    /// Create an engine, loading the tokenizer vocabulary on first
    /// use.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
        })
    }

    /// The engine's tokenizer (for standalone token counting).
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Split text into an ordered sequence of decorated chunks.
    ///
    /// Empty input yields an empty sequence. Invalid parameter
    /// combinations are unrepresentable here: [`SplitConfig`] rejects
    /// them at construction, before any splitting runs.
    ///
    /// # Errors
    ///
    /// Propagates [`EncodingError`](crate::core::error::ChunkviewError::EncodingError)
    /// from the tokenizer; on error no partial chunk list is returned.
    pub fn split(&self, text: &str, config: &SplitConfig) -> Result<Vec<Chunk>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let fragments = match config.strategy() {
            Strategy::TokenWindow => TokenWindowSplitter::new(
                &self.tokenizer,
                config.chunk_size(),
                config.chunk_overlap(),
            )
            .split(text)?,
            Strategy::SentenceAware => SentenceAwareSplitter::new(
                &self.tokenizer,
                config.chunk_size(),
                config.chunk_overlap(),
            )
            .split(text)?,
        };

        let chunks: Vec<Chunk> = fragments
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let token_count = self.tokenizer.count(&text);
                let char_count = text.chars().count();
                Chunk {
                    index,
                    text,
                    token_count,
                    char_count,
                }
            })
            .collect();

        tracing::debug!(
            strategy = %config.strategy(),
            chunk_size = config.chunk_size(),
            chunk_overlap = config.chunk_overlap(),
            chunks = chunks.len(),
            "split complete"
        );

        Ok(chunks)
    }
}
