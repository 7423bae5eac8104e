//! Dictionary: the in-memory word set plus the file it persists to

use crate::core::{OrderedStringSet, Word};
use crate::wordlists::{StoreError, WordStore};
use tracing::{debug, info};

/// Result of adding a word to the dictionary
#[derive(Debug)]
pub enum AddOutcome {
    /// Inserted and appended to the word list
    Added,
    /// Inserted in memory, but the word list could not be updated
    AddedNotPersisted(StoreError),
    /// A case-insensitively equal word is already stored
    AlreadyPresent,
}

impl AddOutcome {
    /// Whether the word is now in memory because of this call
    #[must_use]
    pub const fn is_added(&self) -> bool {
        matches!(self, Self::Added | Self::AddedNotPersisted(_))
    }
}

/// Word set seeded from and appending to a [`WordStore`]
#[derive(Debug)]
pub struct Dictionary {
    words: OrderedStringSet,
    store: WordStore,
    load_error: Option<StoreError>,
}

impl Dictionary {
    /// Load the dictionary from its store
    ///
    /// An unreadable word list is not fatal: the dictionary starts empty and the
    /// error is kept for the caller to report.
    ///
    /// # Examples
    /// ```
    /// use wordtree::commands::Dictionary;
    /// use wordtree::wordlists::WordStore;
    ///
    /// let dictionary = Dictionary::open(WordStore::new("/nonexistent/Dictionary.txt"));
    /// assert!(dictionary.words().is_empty());
    /// assert!(dictionary.load_error().is_some());
    /// ```
    #[must_use]
    pub fn open(store: WordStore) -> Self {
        match store.load() {
            Ok(loaded) => {
                info!(
                    path = %store.path().display(),
                    words = loaded.set.len(),
                    "dictionary ready"
                );
                Self {
                    words: loaded.set,
                    store,
                    load_error: None,
                }
            }
            Err(err) => {
                debug!(error = %err, "starting with an empty dictionary");
                Self {
                    words: OrderedStringSet::new(),
                    store,
                    load_error: Some(err),
                }
            }
        }
    }

    /// Insert a word and persist it if it was new
    ///
    /// A failed append keeps the in-memory insert.
    pub fn add(&mut self, word: &Word) -> AddOutcome {
        if !self.words.insert(word.text()).is_inserted() {
            return AddOutcome::AlreadyPresent;
        }

        match self.store.append(word) {
            Ok(()) => AddOutcome::Added,
            Err(err) => {
                debug!(error = %err, "keeping word in memory only");
                AddOutcome::AddedNotPersisted(err)
            }
        }
    }

    /// Stored spelling of a word, if present
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.words.get(word)
    }

    #[must_use]
    pub const fn words(&self) -> &OrderedStringSet {
        &self.words
    }

    #[must_use]
    pub const fn store(&self) -> &WordStore {
        &self.store
    }

    /// Error from the initial load, if the word list was unavailable
    #[must_use]
    pub const fn load_error(&self) -> Option<&StoreError> {
        self.load_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn open_existing_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dictionary.txt");
        fs::write(&path, "banana\nApple\ncherry\napple\n").unwrap();

        let dictionary = Dictionary::open(WordStore::new(&path));

        assert!(dictionary.load_error().is_none());
        assert_eq!(dictionary.words().len(), 3);
        assert_eq!(dictionary.lookup("APPLE"), Some("Apple"));
    }

    #[test]
    fn open_missing_list_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let dictionary = Dictionary::open(WordStore::new(dir.path().join("absent.txt")));

        assert!(dictionary.words().is_empty());
        assert!(matches!(
            dictionary.load_error(),
            Some(StoreError::ResourceUnavailable { .. })
        ));
    }

    #[test]
    fn add_persists_new_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dictionary.txt");
        let mut dictionary = Dictionary::open(WordStore::new(&path));

        assert!(matches!(dictionary.add(&word("pear")), AddOutcome::Added));
        assert!(matches!(dictionary.add(&word("Fig")), AddOutcome::Added));

        assert_eq!(fs::read_to_string(&path).unwrap(), "pear\nFig\n");
        assert_eq!(dictionary.words().iter().collect::<Vec<_>>(), ["Fig", "pear"]);
    }

    #[test]
    fn add_duplicate_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dictionary.txt");
        let mut dictionary = Dictionary::open(WordStore::new(&path));

        dictionary.add(&word("Apple"));
        let outcome = dictionary.add(&word("APPLE"));

        assert!(matches!(outcome, AddOutcome::AlreadyPresent));
        assert!(!outcome.is_added());
        assert_eq!(dictionary.words().len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Apple\n");
    }

    #[test]
    fn add_keeps_word_when_append_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = WordStore::new(dir.path().join("missing_dir").join("Dictionary.txt"));
        let mut dictionary = Dictionary::open(store);

        let outcome = dictionary.add(&word("orphan"));

        assert!(matches!(outcome, AddOutcome::AddedNotPersisted(_)));
        assert!(outcome.is_added());
        assert_eq!(dictionary.lookup("orphan"), Some("orphan"));
    }

    #[test]
    fn bad_line_does_not_empty_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dictionary.txt");
        fs::write(&path, b"apple\nbanana\ncaf\xe9\ncherry\n").unwrap();

        let mut dictionary = Dictionary::open(WordStore::new(&path));

        assert!(dictionary.load_error().is_none());
        assert_eq!(dictionary.words().len(), 3);
        assert!(matches!(
            dictionary.add(&word("apple")),
            AddOutcome::AlreadyPresent
        ));
        assert_eq!(
            fs::read(&path).unwrap(),
            b"apple\nbanana\ncaf\xe9\ncherry\n"
        );
    }

    #[test]
    fn reopen_sees_added_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Dictionary.txt");

        let mut dictionary = Dictionary::open(WordStore::new(&path));
        for text in ["delta", "alpha", "charlie", "bravo"] {
            dictionary.add(&word(text));
        }

        let reopened = Dictionary::open(WordStore::new(&path));
        assert_eq!(
            reopened.words().iter().collect::<Vec<_>>(),
            ["alpha", "bravo", "charlie", "delta"]
        );
    }
}
