//! Seed command
//!
//! Adds a list of words (normally the embedded sample) to the dictionary.

use super::dictionary::{AddOutcome, Dictionary};
use crate::core::Word;

/// Counts from a seeding run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedResult {
    pub added: usize,
    pub duplicates: usize,
    /// Added in memory but not written to the word list
    pub not_persisted: usize,
    pub invalid: usize,
}

/// Insert-and-persist every word from `words`
pub fn seed_dictionary(dictionary: &mut Dictionary, words: &[&str]) -> SeedResult {
    let mut result = SeedResult::default();

    for &text in words {
        let Ok(word) = Word::new(text) else {
            result.invalid += 1;
            continue;
        };

        match dictionary.add(&word) {
            AddOutcome::Added => result.added += 1,
            AddOutcome::AddedNotPersisted(_) => {
                result.added += 1;
                result.not_persisted += 1;
            }
            AddOutcome::AlreadyPresent => result.duplicates += 1,
        }
    }

    result
}
