//! Word counting for the contact message body.

#[cfg(test)]
#[path = "words_test.rs"]
mod words_test;

/// Number of maximal non-whitespace runs in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
