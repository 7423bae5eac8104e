//! Lookup command

use super::dictionary::Dictionary;

/// Result of looking up one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub query: String,
    /// Stored spelling when found
    pub found: Option<String>,
}

impl LookupResult {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.found.is_some()
    }
}

/// Look up each query, ignoring case and surrounding whitespace
#[must_use]
pub fn lookup_words<S: AsRef<str>>(dictionary: &Dictionary, queries: &[S]) -> Vec<LookupResult> {
    queries
        .iter()
        .map(|query| {
            let query = query.as_ref().trim();
            LookupResult {
                query: query.to_string(),
                found: dictionary.lookup(query).map(str::to_string),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordStore;
    use std::fs;

    #[test]
    fn lookup_found_and_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dictionary.txt");
        fs::write(&path, "Apple\nbanana\n").unwrap();
        let dictionary = Dictionary::open(WordStore::new(&path));

        let results = lookup_words(&dictionary, &["apple", " BANANA ", "zzz"]);

        assert_eq!(results[0].found.as_deref(), Some("Apple"));
        assert_eq!(results[1].query, "BANANA");
        assert!(results[1].is_found());
        assert!(!results[2].is_found());
    }

    #[test]
    fn lookup_in_empty_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let dictionary = Dictionary::open(WordStore::new(dir.path().join("absent.txt")));

        let results = lookup_words(&dictionary, &["zzz"]);
        assert_eq!(
            results,
            [LookupResult {
                query: "zzz".to_string(),
                found: None
            }]
        );
    }
}
