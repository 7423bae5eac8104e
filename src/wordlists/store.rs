//! Word list file backing the dictionary
//!
//! The store is bound to one path at construction; loading reads the whole list and
//! appending adds one line per accepted word.

use super::loader::{LoadedWords, load_from_file};
use crate::core::Word;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// What the store was doing when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAccess {
    Read,
    Append,
}

impl fmt::Display for StoreAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Append => write!(f, "append to"),
        }
    }
}

/// Error type for word list access
#[derive(Debug)]
pub enum StoreError {
    /// The backing file could not be opened, read or written
    ResourceUnavailable {
        path: PathBuf,
        access: StoreAccess,
        source: io::Error,
    },
}

impl StoreError {
    fn unavailable(path: &Path, access: StoreAccess, source: io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.to_path_buf(),
            access,
            source,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceUnavailable {
                path,
                access,
                source,
            } => write!(
                f,
                "cannot {access} word list {}: {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceUnavailable { source, .. } => Some(source),
        }
    }
}

/// A newline-delimited word list on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStore {
    path: PathBuf,
}

impl WordStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every word in the list
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ResourceUnavailable`] if the file cannot be opened or read.
    pub fn load(&self) -> Result<LoadedWords, StoreError> {
        let loaded = load_from_file(&self.path)
            .map_err(|e| StoreError::unavailable(&self.path, StoreAccess::Read, e))?;

        debug!(
            path = %self.path.display(),
            words = loaded.set.len(),
            duplicates = loaded.duplicates,
            invalid = loaded.invalid,
            "loaded word list"
        );
        Ok(loaded)
    }

    /// Append a word as a new line, creating the file if needed
    ///
    /// If the existing file does not end with a newline one is written first, so the
    /// new word never merges into the last entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ResourceUnavailable`] if the file cannot be opened or written.
    pub fn append(&self, word: &Word) -> Result<(), StoreError> {
        self.try_append(word)
            .map_err(|e| StoreError::unavailable(&self.path, StoreAccess::Append, e))?;

        debug!(path = %self.path.display(), word = word.text(), "appended word");
        Ok(())
    }

    fn try_append(&self, word: &Word) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut line = String::with_capacity(word.text().len() + 2);
        if missing_final_newline(&mut file)? {
            line.push('\n');
        }
        line.push_str(word.text());
        line.push('\n');

        file.write_all(line.as_bytes())?;
        file.flush()
    }
}

fn missing_final_newline(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
