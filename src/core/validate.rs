//! Structural verification of the red-black properties
//!
//! Walks the whole tree and reports the first broken invariant. Used by tests, the
//! `stats` command and the benchmark; a correct tree never fails these checks.

use super::key::compare_keys;
use super::tree::{Color, NodeId, OrderedStringSet};
use std::cmp::Ordering;
use std::fmt;

/// A broken red-black or ordering invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root is red
    RedRoot,
    /// A red node has a red child
    RedRedEdge { parent: String, child: String },
    /// Two root-to-leaf paths disagree on their black node count
    BlackHeightMismatch {
        key: String,
        expected: usize,
        found: usize,
    },
    /// A child does not point back at its parent
    BrokenParentLink { key: String },
    /// In-order keys are not strictly ascending
    OutOfOrder { previous: String, next: String },
    /// The walk from the root does not reach every stored node
    Unreachable { reached: usize, stored: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot => write!(f, "root node is red"),
            Self::RedRedEdge { parent, child } => {
                write!(f, "red node '{parent}' has red child '{child}'")
            }
            Self::BlackHeightMismatch {
                key,
                expected,
                found,
            } => write!(
                f,
                "path through '{key}' has {found} black nodes, expected {expected}"
            ),
            Self::BrokenParentLink { key } => {
                write!(f, "node '{key}' does not link back to its parent")
            }
            Self::OutOfOrder { previous, next } => {
                write!(f, "'{previous}' is not strictly before '{next}'")
            }
            Self::Unreachable { reached, stored } => {
                write!(f, "reached {reached} of {stored} stored nodes")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

impl OrderedStringSet {
    /// Verify every red-black and ordering invariant
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    /// ```
    /// use wordtree::core::OrderedStringSet;
    ///
    /// let set: OrderedStringSet = ["delta", "alpha", "charlie", "bravo"].into_iter().collect();
    /// assert!(set.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let Some(root) = self.root_id() else {
            return if self.is_empty() {
                Ok(())
            } else {
                Err(InvariantViolation::Unreachable {
                    reached: 0,
                    stored: self.len(),
                })
            };
        };

        let root_node = self.node(root);
        if root_node.parent.is_some() {
            return Err(InvariantViolation::BrokenParentLink {
                key: root_node.key.clone(),
            });
        }
        if root_node.color == Color::Red {
            return Err(InvariantViolation::RedRoot);
        }

        self.check_structure(root)?;
        self.check_order()
    }

    /// Colors, parent links and black counts, in one pass from the root
    fn check_structure(&self, root: NodeId) -> Result<(), InvariantViolation> {
        let mut expected_black: Option<usize> = None;
        let mut reached = 0;
        // (node, black nodes on the path from the root down to and including it)
        let mut stack: Vec<(NodeId, usize)> = vec![(root, 1)];

        while let Some((id, blacks)) = stack.pop() {
            reached += 1;
            if reached > self.len() {
                // Only possible with a cycle
                break;
            }

            let node = self.node(id);
            for child in [node.left, node.right] {
                let Some(child_id) = child else {
                    // Sentinel: every path must end with the same count
                    match expected_black {
                        None => expected_black = Some(blacks),
                        Some(expected) if expected != blacks => {
                            return Err(InvariantViolation::BlackHeightMismatch {
                                key: node.key.clone(),
                                expected,
                                found: blacks,
                            });
                        }
                        Some(_) => {}
                    }
                    continue;
                };

                let child_node = self.node(child_id);
                if child_node.parent != Some(id) {
                    return Err(InvariantViolation::BrokenParentLink {
                        key: child_node.key.clone(),
                    });
                }
                if node.color == Color::Red && child_node.color == Color::Red {
                    return Err(InvariantViolation::RedRedEdge {
                        parent: node.key.clone(),
                        child: child_node.key.clone(),
                    });
                }

                let child_blacks = blacks + usize::from(child_node.color == Color::Black);
                stack.push((child_id, child_blacks));
            }
        }

        if reached == self.len() {
            Ok(())
        } else {
            Err(InvariantViolation::Unreachable {
                reached,
                stored: self.len(),
            })
        }
    }

    fn check_order(&self) -> Result<(), InvariantViolation> {
        let mut keys = self.iter();
        let Some(mut previous) = keys.next() else {
            return Ok(());
        };

        for next in keys {
            if compare_keys(previous, next) != Ordering::Less {
                return Err(InvariantViolation::OutOfOrder {
                    previous: previous.to_string(),
                    next: next.to_string(),
                });
            }
            previous = next;
        }

        Ok(())
    }
}
