//! Engine-level integration tests

use crate::common::{create_test_services, ARTICLE};
use chunkview::{ChunkviewError, SplitConfig, Strategy};

#[test]
fn test_empty_input_yields_empty_sequence() {
    let services = create_test_services();
    for strategy in Strategy::ALL {
        let config = SplitConfig::new(strategy, 50, 10).unwrap();
        assert!(services.engine.split("", &config).unwrap().is_empty());
    }
}

#[test]
fn test_invalid_config_rejected_before_splitting() {
    // overlap >= size
    let err = SplitConfig::new(Strategy::TokenWindow, 10, 10).unwrap_err();
    assert!(matches!(err, ChunkviewError::InvalidConfig(_)));

    // zero size
    let err = SplitConfig::new(Strategy::SentenceAware, 0, 0).unwrap_err();
    assert!(matches!(err, ChunkviewError::InvalidConfig(_)));
}

#[test]
fn test_chunks_are_indexed_in_document_order() {
    let services = create_test_services();
    for strategy in Strategy::ALL {
        let config = SplitConfig::new(strategy, 20, 5).unwrap();
        let chunks = services.engine.split(ARTICLE, &config).unwrap();
        assert!(chunks.len() > 1);

        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
        }
    }

    // Sentence-aware chunks are exact substrings of the source and
    // must appear at non-decreasing positions.
    let config = SplitConfig::new(Strategy::SentenceAware, 20, 5).unwrap();
    let chunks = services.engine.split(ARTICLE, &config).unwrap();
    let mut last_start = 0;
    for chunk in &chunks {
        let pos = ARTICLE
            .find(&chunk.text)
            .expect("sentence-aware chunk must be a substring of the source");
        assert!(pos >= last_start);
        last_start = pos;
    }
}

#[test]
fn test_chunk_decoration_is_consistent() {
    let services = create_test_services();
    let tokenizer = services.engine.tokenizer();

    for strategy in Strategy::ALL {
        let config = SplitConfig::new(strategy, 25, 5).unwrap();
        for chunk in services.engine.split(ARTICLE, &config).unwrap() {
            assert_eq!(chunk.token_count, tokenizer.count(&chunk.text));
            assert_eq!(chunk.char_count, chunk.text.chars().count());
            assert!(!chunk.text.is_empty());
        }
    }
}

#[test]
fn test_multibyte_input_never_panics() {
    let services = create_test_services();
    let text = "Unicode test 🎉 with emoji. 中文句子在這裡! Mixed content everywhere. \
                More 🦀 symbols here. And a closing line.";

    for strategy in Strategy::ALL {
        for (size, overlap) in [(5, 0), (8, 3), (50, 10)] {
            let config = SplitConfig::new(strategy, size, overlap).unwrap();
            let chunks = services.engine.split(text, &config).unwrap();
            for chunk in chunks {
                // Any produced text is valid UTF-8 by construction;
                // counting chars must not panic either.
                let _ = chunk.text.chars().count();
            }
        }
    }
}
