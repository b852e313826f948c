//! Segmenter integration tests over realistic text

use crate::common::{create_test_services, ARTICLE};
use chunkview::SentenceSegmenter;

#[test]
fn test_article_spans_cover_exactly_once() {
    let services = create_test_services();
    let spans = SentenceSegmenter::new().segment(ARTICLE, services.engine.tokenizer());

    assert_eq!(spans.len(), 8);

    let mut cursor = 0;
    for span in &spans {
        assert_eq!(span.start, cursor);
        assert!(span.end > span.start);
        cursor = span.end;
    }
    assert_eq!(cursor, ARTICLE.len());
}

#[test]
fn test_article_span_concatenation_reconstructs() {
    let services = create_test_services();
    let spans = SentenceSegmenter::new().segment(ARTICLE, services.engine.tokenizer());

    let rebuilt: String = spans.iter().map(|s| s.text(ARTICLE)).collect();
    assert_eq!(rebuilt, ARTICLE);
}

#[test]
fn test_span_token_counts_sum_close_to_total() {
    let services = create_test_services();
    let tokenizer = services.engine.tokenizer();
    let spans = SentenceSegmenter::new().segment(ARTICLE, tokenizer);

    // Per-span counts can exceed the whole-text count (boundary
    // whitespace encodes separately when a span is counted alone) but
    // never undershoot it.
    let sum: usize = spans.iter().map(|s| s.token_count).sum();
    assert!(sum >= tokenizer.count(ARTICLE));
}
