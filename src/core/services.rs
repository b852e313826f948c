//! Unified service container for chunkview.
//!
//! Provides shared access to the engine and configuration. All
//! adapters use this same struct for service access.

use crate::core::config::Config;
use crate::core::engine::ChunkingEngine;
use crate::core::error::Result;
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Chunking engine (owns the shared tokenizer)
    pub engine: ChunkingEngine,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration.
    ///
    /// # Errors
    ///
    /// Fails if the tokenizer vocabulary cannot be initialized.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            engine: ChunkingEngine::new()?,
            config: Arc::new(config),
        })
    }
}
