//! Tree statistics command
//!
//! Summarises the shape of the dictionary's red-black tree.

use crate::core::{Color, InvariantViolation, OrderedStringSet};

/// Shape of a tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeStats {
    pub size: usize,
    pub height: usize,
    pub black_height: usize,
    /// Red-black guarantee: height <= 2·log2(size + 1)
    pub height_bound: f64,
    pub root_color: Option<Color>,
    /// First broken invariant, `None` for a valid tree
    pub violation: Option<InvariantViolation>,
}

impl TreeStats {
    /// Measure a tree and verify its invariants
    #[must_use]
    pub fn collect(set: &OrderedStringSet) -> Self {
        Self {
            size: set.len(),
            height: set.height(),
            black_height: set.black_height(),
            height_bound: height_bound(set.len()),
            root_color: set.root_color(),
            violation: set.check_invariants().err(),
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.violation.is_none()
    }
}

/// Maximum height of a red-black tree holding `size` keys
///
/// # Examples
/// ```
/// use wordtree::commands::stats::height_bound;
///
/// assert_eq!(height_bound(0), 0.0);
/// assert_eq!(height_bound(3), 4.0);
/// ```
#[must_use]
pub fn height_bound(size: usize) -> f64 {
    2.0 * ((size + 1) as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_of_empty_tree() {
        let stats = TreeStats::collect(&OrderedStringSet::new());
        assert_eq!(stats.size, 0);
        assert_eq!(stats.height, 0);
        assert_eq!(stats.black_height, 0);
        assert_eq!(stats.root_color, None);
        assert!(stats.is_valid());
    }

    #[test]
    fn stats_of_fruit_tree() {
        let set: OrderedStringSet = ["banana", "Apple", "cherry", "apple"].into_iter().collect();
        let stats = TreeStats::collect(&set);

        assert_eq!(stats.size, 3);
        assert_eq!(stats.height, 2);
        assert_eq!(stats.black_height, 1);
        assert_eq!(stats.root_color, Some(Color::Black));
        assert!(stats.is_valid());
    }

    #[test]
    fn height_within_bound() {
        let set: OrderedStringSet = (0..500).map(|i| format!("{i:05}")).collect();
        let stats = TreeStats::collect(&set);
        assert!(stats.height as f64 <= stats.height_bound);
    }
}
