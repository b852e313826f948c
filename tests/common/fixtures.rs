//! Shared test fixtures

/// A short article with distinct sentences and no repeated phrases.
///
/// Distinctness matters: the coverage-reconstruction helper finds
/// chunk overlaps by suffix/prefix matching, which is only
/// unambiguous when the text does not repeat itself.
pub const ARTICLE: &str = "Retrieval pipelines index documents in pieces. \
Each piece carries enough context to answer a question on its own. \
Boundaries decide what ends up adjacent in the index! \
Overlap repeats a little trailing context at every boundary. \
Token budgets keep each piece within the embedding model's window. \
Sentence packing prefers whole sentences over arbitrary cuts. \
Some inputs defeat every heuristic, of course. \
The final piece is usually shorter than the rest.";

/// Text built from one repeated word, space-separated.
///
/// Each occurrence encodes to a single cl100k token ("hello" and
/// " hello" are both vocabulary entries), so the result has a
/// predictable token count equal to `n`.
pub fn uniform_word_text(n: usize) -> String {
    let mut text = String::new();
    for i in 0..n {
        if i > 0 {
            text.push(' ');
        }
        text.push_str("hello");
    }
    text
}
