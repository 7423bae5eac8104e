//! Word Tree
//!
//! A case-insensitive word dictionary kept in a red-black tree and persisted to a
//! newline-delimited word list.
//!
//! # Quick Start
//!
//! ```rust
//! use wordtree::core::OrderedStringSet;
//!
//! let mut words = OrderedStringSet::new();
//! for word in ["banana", "Apple", "cherry", "apple"] {
//!     words.insert(word);
//! }
//!
//! assert_eq!(words.len(), 3);
//! assert!(words.search("APPLE"));
//! assert_eq!(words.iter().collect::<Vec<_>>(), ["Apple", "banana", "cherry"]);
//! assert!(words.check_invariants().is_ok());
//! ```

// Core domain types
pub mod core;

// Word list files
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic tracing setup
pub mod logging;
