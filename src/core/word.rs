//! Dictionary word representation
//!
//! A Word is a single trimmed line of text, the unit stored in the word list file.

use super::key::keys_equal;
use std::fmt;

/// A validated dictionary entry
///
/// Keeps the spelling it was created with; equality ignores case, matching how
/// the dictionary treats duplicates.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    LineBreak,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::LineBreak => write!(f, "Word must fit on a single line"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - The text contains a line break, which would split the entry in the word list
    ///
    /// # Examples
    /// ```
    /// use wordtree::core::Word;
    ///
    /// let word = Word::new("  Apple \n").unwrap();
    /// assert_eq!(word.text(), "Apple");
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("two\nlines").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if trimmed.contains(['\n', '\r']) {
            return Err(WordError::LineBreak);
        }

        Ok(Self {
            text: trimmed.to_string(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the word, returning its text
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        keys_equal(&self.text, &other.text)
    }
}

impl Eq for Word {}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
