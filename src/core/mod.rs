//! Core domain logic (presentation-agnostic)
//!
//! Everything the chunking engine needs, independent of how results
//! are rendered.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Chunk records, strategy enum, validated split config
//! - **tokenizer**: cl100k_base byte-pair encoding
//! - **segmenter**: Sentence span detection
//! - **splitter**: Token-window and sentence-aware splitters
//! - **engine**: Strategy dispatch and chunk decoration
//! - **services**: Unified service container

pub mod config;
pub mod engine;
pub mod error;
pub mod segmenter;
pub mod services;
pub mod splitter;
pub mod tokenizer;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use engine::ChunkingEngine;
pub use error::{ChunkviewError, Result};
pub use services::Services;
