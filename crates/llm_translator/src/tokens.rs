//! Token estimation.
//!
//! Only a placeholder counter ships here. Anything that turns text into a
//! count can stand in for it through [`TokenCounter`].

pub trait TokenCounter {
    fn count_tokens(&self, text: &str) -> usize;
}

/// Counts whitespace-separated words. Not accurate for any real model
/// tokenizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceTokenCounter;

impl TokenCounter for WhitespaceTokenCounter {
    fn count_tokens(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}
