//! cl100k_base tokenization.
//!
//! Wraps the tiktoken cl100k_base byte-pair encoding behind the small
//! contract the splitters need: `encode`, `decode`, `count`. The
//! vocabulary is fixed and versioned, so token counts are reproducible
//! across runs and across reimplementations using the same vocabulary.
//!
//! # Sub-range decoding
//!
//! Token boundaries need not align with character boundaries: a
//! multi-byte character can be split across adjacent tokens. Decoding
//! the full sequence produced by `encode` is exact, but decoding an
//! arbitrary contiguous sub-range (as the token-window splitter does)
//! may cut through such a character. Those cut bytes are recovered
//! lossily as U+FFFD replacement characters at the window edge. This
//! is a known visual artifact of token-aligned windows, not a bug.

use crate::core::error::{ChunkviewError, Result};
use once_cell::sync::OnceCell;
use tiktoken_rs::{cl100k_base, CoreBPE};

/// A single token id from the cl100k_base vocabulary
pub type Token = u32;

// Vocabulary data is loaded once and shared read-only across all
// concurrent invocations.
static CL100K: OnceCell<CoreBPE> = OnceCell::new();

/// Tokenizer over the cl100k_base vocabulary.
///
/// Cheap to copy; all instances share the same process-wide vocabulary.
#[derive(Clone, Copy)]
pub struct Tokenizer {
    bpe: &'static CoreBPE,
}

impl Tokenizer {
    /// Create a tokenizer, loading the vocabulary on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkviewError::TokenizerInit`] if the vocabulary
    /// data fails to load.
    pub fn new() -> Result<Self> {
        let bpe = CL100K.get_or_try_init(|| {
            cl100k_base().map_err(|e| ChunkviewError::TokenizerInit(e.to_string()))
        })?;
        Ok(Self { bpe })
    }

    /// Encode text to a token sequence.
    ///
    /// Uses ordinary encoding: special-token strings appearing in
    /// document text (e.g. `<|endoftext|>`) are tokenized as plain
    /// text rather than rejected.
    pub fn encode(&self, text: &str) -> Vec<Token> {
        self.bpe.encode_ordinary(text)
    }

    /// Decode a contiguous token sequence back to text.
    ///
    /// For a full sequence produced by [`encode`](Self::encode) this
    /// is exact: `decode(encode(text)) == text`. For sub-ranges, bytes
    /// of a character split across the range boundary are replaced
    /// with U+FFFD (see module docs).
    ///
    /// # Errors
    ///
    /// Returns [`ChunkviewError::EncodingError`] if a token id is not
    /// part of the vocabulary.
    pub fn decode(&self, tokens: &[Token]) -> Result<String> {
        let mut bytes = Vec::new();
        for &token in tokens {
            let piece = self.bpe.decode_bytes(&[token]).map_err(|e| {
                ChunkviewError::EncodingError(format!("unknown token id {token}: {e}"))
            })?;
            bytes.extend_from_slice(&piece);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Count the tokens in a text.
    ///
    /// Equivalent to `encode(text).len()`.
    pub fn count(&self, text: &str) -> usize {
        self.encode(text).len()
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("vocabulary", &"cl100k_base")
            .finish()
    }
}
