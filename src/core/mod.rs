//! Core domain types for the word dictionary
//!
//! This module contains the red-black tree and the types around it with zero external dependencies.
//! Everything here is pure and synchronous; I/O lives in `wordlists`.

mod iter;
mod key;
mod tree;
mod validate;
mod word;

pub use iter::Iter;
pub use key::{compare_keys, keys_equal};
pub use tree::{Color, InsertOutcome, OrderedStringSet};
pub use validate::InvariantViolation;
pub use word::{Word, WordError};
