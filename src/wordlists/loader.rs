//! Word list loading utilities
//!
//! Builds an [`OrderedStringSet`] from newline-delimited text or from embedded constants.

use crate::core::{OrderedStringSet, Word};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A set built from a word list, with counts of what was skipped
#[derive(Debug, Default)]
pub struct LoadedWords {
    pub set: OrderedStringSet,
    /// Non-empty lines read
    pub entries: usize,
    /// Entries already present under a different (or the same) case
    pub duplicates: usize,
    /// Lines skipped because they are not valid UTF-8
    pub invalid: usize,
}

/// Load words line by line from a reader
///
/// Each line is trimmed; blank lines are skipped and case-insensitive duplicates are
/// counted but not inserted twice. A line that is not valid UTF-8 is counted in
/// `invalid` and skipped without affecting the rest of the list.
///
/// # Errors
///
/// Returns an I/O error if reading fails.
///
/// # Examples
/// ```
/// use wordtree::wordlists::loader::load_from_reader;
///
/// let loaded = load_from_reader("banana\nApple\n\ncherry\napple\n".as_bytes()).unwrap();
/// assert_eq!(loaded.set.len(), 3);
/// assert_eq!(loaded.entries, 4);
/// assert_eq!(loaded.duplicates, 1);
/// ```
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<LoadedWords> {
    let mut loaded = LoadedWords::default();

    for line in reader.split(b'\n') {
        let Ok(text) = String::from_utf8(line?) else {
            loaded.invalid += 1;
            continue;
        };
        let Ok(word) = Word::new(text) else {
            continue;
        };

        loaded.entries += 1;
        if !loaded.set.insert(word.into_string()).is_inserted() {
            loaded.duplicates += 1;
        }
    }

    Ok(loaded)
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordtree::wordlists::loader::load_from_file;
///
/// let loaded = load_from_file("Dictionary.txt").unwrap();
/// println!("Loaded {} words", loaded.set.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<LoadedWords> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

/// Build a set from an embedded string slice
///
/// # Examples
/// ```
/// use wordtree::wordlists::loader::set_from_slice;
/// use wordtree::wordlists::SAMPLE;
///
/// let set = set_from_slice(SAMPLE);
/// assert_eq!(set.len(), SAMPLE.len());
/// ```
#[must_use]
pub fn set_from_slice(slice: &[&str]) -> OrderedStringSet {
    slice
        .iter()
        .filter_map(|&s| Word::new(s).ok())
        .map(Word::into_string)
        .collect()
}
