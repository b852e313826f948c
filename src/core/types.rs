//! Core data types for the chunkview engine.
//!
//! This module defines the data structures shared across the
//! application: chunk records, the splitting strategy enum, and the
//! validated split configuration.

use crate::core::error::{ChunkviewError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single output chunk produced by the engine.
///
/// Chunks are immutable once produced. `index` is the stable 0-based
/// position of the chunk in the output sequence and matches the order
/// the chunk's text appears in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// 0-based position in the output sequence
    pub index: usize,

    /// The chunk text content
    pub text: String,

    /// Token count of `text` under the cl100k_base vocabulary.
    /// Always equals re-encoding `text` (round-trip invariant).
    pub token_count: usize,

    /// Character count of `text` (characters, not bytes)
    pub char_count: usize,
}

/// Text splitting strategy.
///
/// A closed set: both strategies are owned by the core and selected
/// by variant, not by open-ended registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Fixed-width sliding window over the token sequence
    TokenWindow,

    /// Sentence packing under a token budget with sentence-granular
    /// overlap
    SentenceAware,
}

impl Strategy {
    /// All available strategies, in presentation order
    pub const ALL: [Strategy; 2] = [Strategy::TokenWindow, Strategy::SentenceAware];

    /// Stable machine-readable name (kebab-case, matches CLI/serde)
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::TokenWindow => "token-window",
            Strategy::SentenceAware => "sentence-aware",
        }
    }

    /// Human-readable description for presentation layers.
    ///
    /// Pure static data: strategy -> explanatory text.
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::TokenWindow => {
                "Splits text into chunks based on tokens. \
                 Chunk size: number of tokens per chunk. \
                 Chunk overlap: number of overlapping tokens between chunks."
            }
            Strategy::SentenceAware => {
                "Splits text with a preference for complete sentences. \
                 Chunk size: token budget per chunk. \
                 Chunk overlap: token budget for whole sentences repeated \
                 at the start of the next chunk."
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ChunkviewError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "token-window" => Ok(Strategy::TokenWindow),
            "sentence-aware" => Ok(Strategy::SentenceAware),
            other => Err(ChunkviewError::InvalidConfig(format!(
                "Unknown strategy '{other}' (expected 'token-window' or 'sentence-aware')"
            ))),
        }
    }
}

/// Validated split parameters.
///
/// Constructed only through [`SplitConfig::new`], which rejects
/// invalid combinations instead of clamping them. Sizes are measured
/// in tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitConfig {
    strategy: Strategy,
    chunk_size: usize,
    chunk_overlap: usize,
}

impl SplitConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkviewError::InvalidConfig`] if `chunk_size` is
    /// zero or `chunk_overlap >= chunk_size`. The second rule keeps
    /// the window step size `chunk_size - chunk_overlap >= 1`, which
    /// guarantees forward progress.
    pub fn new(strategy: Strategy, chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(ChunkviewError::InvalidConfig(
                "chunk_size must be positive".to_string(),
            ));
        }

        if chunk_overlap >= chunk_size {
            return Err(ChunkviewError::InvalidConfig(format!(
                "chunk_overlap ({chunk_overlap}) must be less than chunk_size ({chunk_size})"
            )));
        }

        Ok(Self {
            strategy,
            chunk_size,
            chunk_overlap,
        })
    }

    /// Get the splitting strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Get the chunk size in tokens.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the chunk overlap in tokens.
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }
}
