//! Red-black tree of case-insensitively ordered strings
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to each other by index. A missing
//! child (`None`) plays the part of the black sentinel leaf, and parent links are plain
//! indices, so the tree is the sole owner of every node.
//!
//! Nodes are only ever appended: an index stays valid for the lifetime of the tree and
//! rotations re-link nodes without moving them.

use super::iter::Iter;
use super::key::compare_keys;
use std::cmp::Ordering;
use std::fmt;

/// Arena index of a node
pub(crate) type NodeId = usize;

/// Node color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Result of inserting a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertOutcome {
    /// A new node was created
    Inserted,
    /// A case-insensitively equal key was already stored; the tree is unchanged
    AlreadyPresent,
}

impl InsertOutcome {
    #[inline]
    #[must_use]
    pub const fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) key: String,
    pub(crate) color: Color,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    const fn new(key: String, parent: Option<NodeId>) -> Self {
        Self {
            key,
            color: Color::Red,
            left: None,
            right: None,
            parent,
        }
    }
}

/// Which child slot of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A set of unique strings ordered case-insensitively, kept balanced as a red-black tree
///
/// The first spelling inserted for a key is the one stored; later inserts of any case
/// variant are rejected as [`InsertOutcome::AlreadyPresent`].
///
/// # Examples
/// ```
/// use wordtree::core::{InsertOutcome, OrderedStringSet};
///
/// let mut set = OrderedStringSet::new();
/// assert_eq!(set.insert("banana"), InsertOutcome::Inserted);
/// assert_eq!(set.insert("Apple"), InsertOutcome::Inserted);
/// assert_eq!(set.insert("apple"), InsertOutcome::AlreadyPresent);
///
/// assert!(set.search("APPLE"));
/// assert_eq!(set.iter().collect::<Vec<_>>(), ["Apple", "banana"]);
/// ```
#[derive(Clone, Default)]
pub struct OrderedStringSet {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl OrderedStringSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Insert a key, rebalancing as needed
    ///
    /// A key equal to a stored one under case-insensitive comparison is a no-op.
    pub fn insert(&mut self, key: impl Into<String>) -> InsertOutcome {
        let key = key.into();

        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(id) = current {
            let node = &self.nodes[id];
            side = match compare_keys(&key, &node.key) {
                Ordering::Equal => return InsertOutcome::AlreadyPresent,
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            parent = Some(id);
            current = self.child(id, side);
        }

        let id = self.nodes.len();
        self.nodes.push(Node::new(key, parent));

        match parent {
            Some(parent) => self.set_child(parent, side, Some(id)),
            None => self.root = Some(id),
        }

        self.fix_after_insert(id);
        InsertOutcome::Inserted
    }

    /// Check whether a case-insensitively equal key is stored
    #[must_use]
    pub fn search(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Get the stored spelling of a key
    ///
    /// # Examples
    /// ```
    /// use wordtree::core::OrderedStringSet;
    ///
    /// let set: OrderedStringSet = ["Kyoto", "Lisbon"].into_iter().collect();
    /// assert_eq!(set.get("KYOTO"), Some("Kyoto"));
    /// assert_eq!(set.get("Oslo"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.find(key).map(|id| self.nodes[id].key.as_str())
    }

    /// Number of stored keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        // Nodes are never removed, so the arena holds exactly the live keys
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Longest root-to-leaf path, counted in nodes (0 for an empty set)
    #[must_use]
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();

        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }

        max_depth
    }

    /// Black nodes from the root down to the leftmost leaf, root included
    ///
    /// Every path has the same count, so the leftmost one stands for all of them.
    #[must_use]
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut current = self.root;

        while let Some(id) = current {
            if self.nodes[id].color == Color::Black {
                count += 1;
            }
            current = self.nodes[id].left;
        }

        count
    }

    /// Color of the root node, `None` when empty
    #[must_use]
    pub fn root_color(&self) -> Option<Color> {
        self.root.map(|id| self.nodes[id].color)
    }

    /// Iterate over the keys in ascending case-insensitive order
    ///
    /// Each call starts a fresh traversal.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub(crate) const fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[cfg(test)]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    fn find(&self, key: &str) -> Option<NodeId> {
        let mut current = self.root;

        while let Some(id) = current {
            current = match compare_keys(key, &self.nodes[id].key) {
                Ordering::Equal => return Some(id),
                Ordering::Less => self.nodes[id].left,
                Ordering::Greater => self.nodes[id].right,
            };
        }

        None
    }

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.nodes[id].left,
            Side::Right => self.nodes[id].right,
        }
    }

    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.nodes[id].left = child,
            Side::Right => self.nodes[id].right = child,
        }
    }

    /// Restore the red-black properties after `z` was attached as a red leaf
    fn fix_after_insert(&mut self, mut z: NodeId) {
        while let Some(parent) = self.nodes[z].parent {
            if self.nodes[parent].color == Color::Black {
                break;
            }

            // A red node is never the root, so a red parent always has a parent
            let Some(grandparent) = self.nodes[parent].parent else {
                break;
            };

            let side = if self.nodes[grandparent].left == Some(parent) {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.child(grandparent, side.opposite());

            // A missing uncle is a black sentinel
            if let Some(uncle) = uncle.filter(|&u| self.nodes[u].color == Color::Red) {
                // Red uncle: push the violation two levels up
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                z = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.child(parent, side.opposite()) == Some(z) {
                // Inner grandchild: turn it into the outer one first
                self.rotate(parent, side);
                parent = z;
            }

            self.nodes[parent].color = Color::Black;
            self.nodes[grandparent].color = Color::Red;
            self.rotate(grandparent, side.opposite());
            break;
        }

        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
    }

    /// Move `pivot` down towards `side`, lifting its child from the opposite side
    ///
    /// `Side::Left` is the classic left rotation (the right child rises) and
    /// `Side::Right` its mirror.
    fn rotate(&mut self, pivot: NodeId, side: Side) {
        let up = side.opposite();
        let Some(lifted) = self.child(pivot, up) else {
            return;
        };

        // The lifted node's inner subtree changes hands
        let inner = self.child(lifted, side);
        self.set_child(pivot, up, inner);
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(pivot);
        }

        let grandparent = self.nodes[pivot].parent;
        self.nodes[lifted].parent = grandparent;
        match grandparent {
            None => self.root = Some(lifted),
            Some(gp) if self.nodes[gp].left == Some(pivot) => self.nodes[gp].left = Some(lifted),
            Some(gp) => self.nodes[gp].right = Some(lifted),
        }

        self.set_child(lifted, side, Some(pivot));
        self.nodes[pivot].parent = Some(lifted);
    }
}

impl<'a> IntoIterator for &'a OrderedStringSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> Extend<S> for OrderedStringSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedStringSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl fmt::Debug for OrderedStringSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending_keys(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("key{i:04}")).collect()
    }

    #[test]
    fn empty_set() {
        let set = OrderedStringSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.height(), 0);
        assert_eq!(set.black_height(), 0);
        assert_eq!(set.root_color(), None);
        assert!(!set.search("zzz"));
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn single_insert_makes_black_root() {
        let mut set = OrderedStringSet::new();
        assert_eq!(set.insert("only"), InsertOutcome::Inserted);
        assert_eq!(set.len(), 1);
        assert_eq!(set.height(), 1);
        assert_eq!(set.black_height(), 1);
        assert_eq!(set.root_color(), Some(Color::Black));
    }

    #[test]
    fn fruit_scenario() {
        let mut set = OrderedStringSet::new();
        let outcomes: Vec<_> = ["banana", "Apple", "cherry", "apple"]
            .into_iter()
            .map(|key| set.insert(key))
            .collect();

        assert_eq!(
            outcomes,
            [
                InsertOutcome::Inserted,
                InsertOutcome::Inserted,
                InsertOutcome::Inserted,
                InsertOutcome::AlreadyPresent,
            ]
        );
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<Vec<_>>(), ["Apple", "banana", "cherry"]);
        assert_eq!(set.root_color(), Some(Color::Black));
        assert!(set.check_invariants().is_ok());
    }

    #[test]
    fn search_ignores_case() {
        let set: OrderedStringSet = ["Apple", "banana", "Cherry"].into_iter().collect();

        for key in ["apple", "APPLE", "Apple", "BANANA", "cherry"] {
            assert!(set.search(key), "expected to find {key}");
        }
        assert!(!set.search("date"));
        assert!(!set.search("app"));
    }

    #[test]
    fn get_returns_first_spelling() {
        let mut set = OrderedStringSet::new();
        set.insert("Apple");
        set.insert("APPLE");
        assert_eq!(set.get("apple"), Some("Apple"));
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut set: OrderedStringSet = ascending_keys(20).into_iter().collect();
        let len = set.len();
        let height = set.height();
        let before: Vec<String> = set.iter().map(str::to_string).collect();

        assert_eq!(set.insert("KEY0007"), InsertOutcome::AlreadyPresent);

        assert_eq!(set.len(), len);
        assert_eq!(set.height(), height);
        assert!(set.iter().eq(before.iter().map(String::as_str)));
    }

    #[test]
    fn ascending_inserts_stay_balanced() {
        let mut set = OrderedStringSet::new();
        for key in ascending_keys(100) {
            set.insert(key);
        }

        let bound = 2.0 * 101_f64.log2();
        assert_eq!(set.len(), 100);
        assert!(
            set.height() as f64 <= bound,
            "height {} exceeds bound {bound:.2}",
            set.height()
        );
        assert!(set.check_invariants().is_ok());
    }

    #[test]
    fn descending_inserts_stay_balanced() {
        let mut set = OrderedStringSet::new();
        for key in ascending_keys(100).into_iter().rev() {
            set.insert(key);
        }

        assert!(set.height() as f64 <= 2.0 * 101_f64.log2());
        assert!(set.check_invariants().is_ok());
    }

    #[test]
    fn invariants_hold_after_every_insert() {
        // Interleave from both ends to hit every fix-up case
        let keys = ascending_keys(64);
        let mut order = Vec::new();
        let (mut lo, mut hi) = (0, keys.len() - 1);
        while lo <= hi {
            order.push(&keys[lo]);
            if lo != hi {
                order.push(&keys[hi]);
            }
            lo += 1;
            hi -= 1;
        }

        let mut set = OrderedStringSet::new();
        for (i, key) in order.into_iter().enumerate() {
            set.insert(key.as_str());
            assert_eq!(set.len(), i + 1);
            if let Err(violation) = set.check_invariants() {
                panic!("after inserting {key}: {violation}");
            }
        }
    }

    #[test]
    fn random_mixed_case_inserts_stay_searchable() {
        use rand::{Rng, SeedableRng, rngs::StdRng};
        use rustc_hash::FxHashSet;

        let mut rng = StdRng::seed_from_u64(7);
        let mut set = OrderedStringSet::new();
        let mut inserted: Vec<String> = Vec::new();
        let mut folded = FxHashSet::default();

        for _ in 0..300 {
            let len = rng.random_range(1..=4);
            let key: String = (0..len)
                .map(|_| {
                    let c = char::from(rng.random_range(b'a'..=b'z'));
                    if rng.random_bool(0.5) { c.to_ascii_uppercase() } else { c }
                })
                .collect();

            let fresh = folded.insert(key.to_lowercase());
            assert_eq!(set.insert(key.as_str()).is_inserted(), fresh, "key {key}");
            if fresh {
                inserted.push(key);
            }

            assert_eq!(set.len(), inserted.len());
            if let Err(violation) = set.check_invariants() {
                panic!("after {} keys: {violation}", inserted.len());
            }
            for key in &inserted {
                let swapped: String = key
                    .chars()
                    .map(|c| {
                        if c.is_ascii_lowercase() {
                            c.to_ascii_uppercase()
                        } else {
                            c.to_ascii_lowercase()
                        }
                    })
                    .collect();
                assert!(set.search(key), "missing {key}");
                assert!(set.search(&swapped), "missing {swapped}");
            }
        }
    }

    #[test]
    fn three_node_rotations() {
        // Each order needs a different fix-up case to end up with "b" at the root
        for order in [
            ["a", "b", "c"],
            ["c", "b", "a"],
            ["a", "c", "b"],
            ["c", "a", "b"],
        ] {
            let set: OrderedStringSet = order.into_iter().collect();
            let root = set.root_id().unwrap();
            assert_eq!(set.node(root).key, "b", "order {order:?}");
            assert_eq!(set.height(), 2);
            assert_eq!(set.black_height(), 1);
            assert!(set.check_invariants().is_ok());
        }
    }

    #[test]
    fn recolor_case_keeps_root_black() {
        // The fourth insert meets a red uncle and recolors up to the root
        let set: OrderedStringSet = ["b", "a", "c", "d"].into_iter().collect();
        assert_eq!(set.root_color(), Some(Color::Black));
        assert_eq!(set.black_height(), 2);
        assert_eq!(set.height(), 3);
        assert!(set.check_invariants().is_ok());
    }

    #[test]
    fn explicit_rotations_relink_parents() {
        let mut set: OrderedStringSet = ["b", "a", "c"].into_iter().collect();
        let root = set.root_id().unwrap();

        set.rotate(root, Side::Left);
        let new_root = set.root_id().unwrap();
        assert_eq!(set.node(new_root).key, "c");
        assert_eq!(set.node(new_root).parent, None);
        assert_eq!(set.node(root).parent, Some(new_root));
        assert_eq!(set.iter().collect::<Vec<_>>(), ["a", "b", "c"]);

        set.rotate(new_root, Side::Right);
        assert_eq!(set.root_id(), Some(root));
        assert_eq!(set.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn rotation_without_child_is_noop() {
        let mut set: OrderedStringSet = ["only"].into_iter().collect();
        let root = set.root_id().unwrap();
        set.rotate(root, Side::Left);
        set.rotate(root, Side::Right);
        assert_eq!(set.root_id(), Some(root));
    }

    #[test]
    fn debug_lists_keys_in_order() {
        let set: OrderedStringSet = ["pear", "Fig"].into_iter().collect();
        assert_eq!(format!("{set:?}"), r#"{"Fig", "pear"}"#);
    }
}
