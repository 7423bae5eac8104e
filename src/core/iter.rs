//! In-order traversal

use super::tree::{NodeId, OrderedStringSet};
use std::iter::FusedIterator;

/// Ascending iterator over the keys of an [`OrderedStringSet`]
///
/// Walks the tree with an explicit stack holding at most one root-to-leaf path.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    set: &'a OrderedStringSet,
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(set: &'a OrderedStringSet) -> Self {
        let mut iter = Self {
            set,
            stack: Vec::new(),
            remaining: set.len(),
        };
        iter.push_left_spine(set.root_id());
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.set.node(id).left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let set = self.set;
        let node = set.node(id);

        self.push_left_spine(node.right);
        self.remaining = self.remaining.saturating_sub(1);

        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use crate::core::OrderedStringSet;

    #[test]
    fn yields_sorted_keys() {
        let set: OrderedStringSet = ["pear", "Apple", "fig", "banana", "Cherry"]
            .into_iter()
            .collect();
        let keys: Vec<&str> = set.iter().collect();
        assert_eq!(keys, ["Apple", "banana", "Cherry", "fig", "pear"]);
    }

    #[test]
    fn is_lazy_and_exact_size() {
        let set: OrderedStringSet = (0..50).map(|i| format!("w{i:02}")).collect();
        let mut iter = set.iter();

        assert_eq!(iter.len(), 50);
        assert_eq!(iter.next(), Some("w00"));
        assert_eq!(iter.next(), Some("w01"));
        assert_eq!(iter.len(), 48);
        assert_eq!(iter.last(), Some("w49"));
    }

    #[test]
    fn restartable() {
        let set: OrderedStringSet = ["b", "a", "c"].into_iter().collect();
        let first: Vec<&str> = set.iter().collect();
        let second: Vec<&str> = (&set).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn fused_after_end() {
        let set: OrderedStringSet = ["only"].into_iter().collect();
        let mut iter = set.iter();
        assert_eq!(iter.next(), Some("only"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }
}
