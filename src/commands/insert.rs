//! Insert command
//!
//! Validates each input word, adds it to the dictionary and persists new entries.

use super::dictionary::{AddOutcome, Dictionary};
use crate::core::{Word, WordError};

/// Result of inserting one input
#[derive(Debug)]
pub struct InsertReport {
    pub input: String,
    pub result: Result<AddOutcome, WordError>,
}

/// Insert-and-persist every input in order
pub fn insert_words<S: AsRef<str>>(dictionary: &mut Dictionary, inputs: &[S]) -> Vec<InsertReport> {
    inputs
        .iter()
        .map(|input| {
            let input = input.as_ref();
            let result = Word::new(input).map(|word| dictionary.add(&word));
            InsertReport {
                input: input.to_string(),
                result,
            }
        })
        .collect()
}
