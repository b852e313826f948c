//! Shared test helpers

use chunkview::core::config::Config;
use chunkview::core::services::Services;
use chunkview::core::types::Chunk;
use std::sync::Arc;

/// Create test services with default configuration
pub fn create_test_services() -> Arc<Services> {
    Arc::new(Services::new(Config::default()).expect("Failed to create services"))
}

/// Reconstruct the original text from an ordered chunk sequence by
/// removing overlaps.
///
/// For each chunk, the longest prefix that is also a suffix of the
/// text reconstructed so far is treated as the overlap and dropped.
/// Unambiguous as long as the source text has no repeated phrases.
pub fn merge_overlapping(chunks: &[Chunk]) -> String {
    let mut out = String::new();

    for chunk in chunks {
        let text = &chunk.text;

        // Candidate split points, longest first, on char boundaries
        let mut boundaries: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        boundaries.reverse();

        for k in boundaries {
            if k <= out.len() && out.ends_with(&text[..k]) {
                out.push_str(&text[k..]);
                break;
            }
        }
    }

    out
}
