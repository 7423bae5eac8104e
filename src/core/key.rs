//! Case-insensitive key ordering

use std::cmp::Ordering;

/// Compare two keys ignoring case
///
/// Each character is folded through `char::to_lowercase`, so the result is the
/// lexicographic order of the lowercased strings without allocating them.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use wordtree::core::compare_keys;
///
/// assert_eq!(compare_keys("Apple", "apple"), Ordering::Equal);
/// assert_eq!(compare_keys("apple", "Banana"), Ordering::Less);
/// ```
#[must_use]
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Check whether two keys name the same dictionary entry
#[inline]
#[must_use]
pub fn keys_equal(a: &str, b: &str) -> bool {
    compare_keys(a, b) == Ordering::Equal
}
