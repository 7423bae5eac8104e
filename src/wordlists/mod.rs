//! Word lists for the dictionary
//!
//! Line-oriented parsing of word list files, the on-disk store the dictionary persists
//! to, and a sample list compiled into the binary.

mod embedded;
pub mod loader;
pub mod store;

pub use embedded::{SAMPLE, SAMPLE_COUNT};
pub use store::{StoreError, WordStore};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::keys_equal;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE.len(), SAMPLE_COUNT);
    }

    #[test]
    fn sample_words_are_trimmed_and_non_empty() {
        for &word in SAMPLE {
            assert!(!word.is_empty(), "Sample contains an empty entry");
            assert_eq!(word, word.trim(), "Word '{word}' has surrounding whitespace");
        }
    }

    #[test]
    fn sample_words_are_unique_ignoring_case() {
        for (i, &a) in SAMPLE.iter().enumerate() {
            for &b in &SAMPLE[i + 1..] {
                assert!(!keys_equal(a, b), "'{a}' and '{b}' collide");
            }
        }
    }

    #[test]
    fn expected_count() {
        assert_eq!(SAMPLE_COUNT, 127, "Expected 127 sample words");
    }
}
