//! Output formatting helper tests

use chunkview::cli::output::preview;

#[test]
fn test_preview_exact_length_not_truncated() {
    assert_eq!(preview("12345", 5), "12345");
}

#[test]
fn test_preview_long_text_gets_ellipsis() {
    let text = "a".repeat(300);
    let p = preview(&text, 160);
    assert_eq!(p.chars().count(), 161);
    assert!(p.ends_with('…'));
}

#[test]
fn test_preview_keeps_one_chunk_per_row() {
    let p = preview("line one\nline two\nline three", 100);
    assert!(!p.contains('\n'));
}
