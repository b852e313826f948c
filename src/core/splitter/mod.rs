//! Text splitting strategies.
//!
//! Two splitters, one per [`Strategy`](crate::core::types::Strategy)
//! variant:
//!
//! - [`TokenWindowSplitter`]: fixed-width sliding windows directly
//!   over the token sequence
//! - [`SentenceAwareSplitter`]: greedy sentence packing under a token
//!   budget, with sentence-granular overlap and a token-window
//!   fallback for sentences that exceed the budget on their own
//!
//! Both are pure functions of their input text and parameters: no
//! hidden state, no randomness, no I/O.

pub mod sentence_aware;
pub mod token_window;

pub use sentence_aware::SentenceAwareSplitter;
pub use token_window::TokenWindowSplitter;
