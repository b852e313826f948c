//! Chunkview - Token-Aware Text Chunking Engine
//!
//! Visualize how a document's text is partitioned into overlapping
//! chunks for retrieval/indexing pipelines. Given raw extracted text,
//! a strategy, and two token-denominated parameters (chunk size and
//! overlap), the engine deterministically produces an ordered sequence
//! of chunks, each annotated with its token count and character
//! length.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (presentation-agnostic)
//!   - config, error, types
//!   - tokenizer (cl100k_base byte-pair encoding)
//!   - segmenter (sentence spans)
//!   - splitter (token-window, sentence-aware)
//!   - engine (dispatch + chunk decoration)
//!
//! - **cli**: clap adapter (depends on core)
//!   - split, count, strategies, show-config, completions
//!
//! # Key properties
//!
//! - Deterministic: chunks are a pure function of `(text, config)`
//! - Reproducible sizing: all budgets measured in cl100k_base tokens
//! - UTF-8 safe: sentence boundaries always fall on character
//!   boundaries; token-window boundaries decode lossily at worst
//! - Fail fast: invalid configs are rejected at construction
//!
//! # Example
//!
//! ```
//! use chunkview::{ChunkingEngine, SplitConfig, Strategy};
//!
//! let engine = ChunkingEngine::new().unwrap();
//! let config = SplitConfig::new(Strategy::SentenceAware, 100, 10).unwrap();
//! let chunks = engine.split("One sentence. Another one.", &config).unwrap();
//!
//! for chunk in &chunks {
//!     assert_eq!(chunk.token_count, engine.tokenizer().count(&chunk.text));
//! }
//! ```

// Core domain logic (presentation-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::engine::ChunkingEngine;
pub use core::error::{ChunkviewError, Result};
pub use core::segmenter::{SentenceSegmenter, SentenceSpan};
pub use core::services::Services;
pub use core::splitter::{SentenceAwareSplitter, TokenWindowSplitter};
pub use core::tokenizer::{Token, Tokenizer};
pub use core::types::{Chunk, SplitConfig, Strategy};
