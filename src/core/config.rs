//! Configuration management for chunkview.
//!
//! Handles loading configuration from TOML files and environment
//! variables, with sensible defaults for all settings. The defaults
//! mirror the recommended parameter ranges: chunk_size 10-500 tokens,
//! chunk_overlap 0-50 tokens.

use crate::core::error::{ChunkviewError, Result};
use crate::core::types::Strategy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub split: SplitSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

/// Default split parameters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SplitSettings {
    /// Default splitting strategy
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,

    /// Tokens per chunk
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Token overlap between consecutive chunks
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
}

/// Output formatting settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputSettings {
    /// Maximum characters of chunk text shown per table row
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

// Default value functions
fn default_strategy() -> Strategy {
    Strategy::TokenWindow
}

fn default_chunk_size() -> usize {
    100
}

fn default_chunk_overlap() -> usize {
    0
}

fn default_preview_chars() -> usize {
    160
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            preview_chars: default_preview_chars(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ChunkviewError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File resolution order:
    /// 1. CHUNKVIEW_CONFIG env var
    /// 2. XDG config file (~/.config/chunkview/config.toml)
    /// 3. ./chunkview.toml
    /// 4. Defaults
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("CHUNKVIEW_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = config_file_path();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("chunkview.toml").exists() {
                Self::from_file("chunkview.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(strategy) = env::var("CHUNKVIEW_STRATEGY") {
            if let Ok(s) = strategy.parse() {
                self.split.strategy = s;
            }
        }
        if let Ok(chunk_size) = env::var("CHUNKVIEW_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.split.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("CHUNKVIEW_CHUNK_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.split.chunk_overlap = o;
            }
        }
        if let Ok(preview) = env::var("CHUNKVIEW_PREVIEW_CHARS") {
            if let Ok(p) = preview.parse() {
                self.output.preview_chars = p;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.split.chunk_size == 0 {
            return Err(ChunkviewError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        if self.split.chunk_overlap >= self.split.chunk_size {
            return Err(ChunkviewError::ConfigError(
                "Chunk overlap must be less than chunk size".to_string(),
            ));
        }

        if self.output.preview_chars == 0 {
            return Err(ChunkviewError::ConfigError(
                "Preview width must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration details at startup
    pub fn log_config(&self) {
        tracing::debug!(
            strategy = %self.split.strategy,
            chunk_size = self.split.chunk_size,
            chunk_overlap = self.split.chunk_overlap,
            preview_chars = self.output.preview_chars,
            "configuration loaded"
        );
    }
}

/// Resolve the XDG config file path.
///
/// Priority: XDG_CONFIG_HOME, then ~/.config.
pub fn config_file_path() -> PathBuf {
    let config_dir = if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
    };
    config_dir.join("chunkview").join("config.toml")
}
