//! Validation and debugging utilities for BTree.
//!
//! This module contains invariant checking, checked variants of the mutating
//! operations, and structural statistics used by tests and benchmarks.

use crate::error::{BTreeError, BTreeResult, ModifyResult};
use crate::types::{BTree, Node};

/// Facts gathered while walking the tree during validation.
#[derive(Default)]
struct WalkState {
    leaf_depth: Option<usize>,
    key_count: usize,
}

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord> BTree<K> {
    /// Check if the tree maintains all B-tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Verifies occupancy bounds, child counts, key ordering, uniform leaf
    /// depth and that the stored length matches the keys actually present.
    pub fn validate(&self) -> BTreeResult<()> {
        let Some(root) = self.root.as_deref() else {
            if self.len != 0 {
                return Err(BTreeError::data_integrity(
                    "Length",
                    &format!("empty tree reports {} keys", self.len),
                ));
            }
            return Ok(());
        };

        if root.keys.is_empty() {
            return Err(BTreeError::data_integrity("Root", "root node holds no keys"));
        }

        let mut state = WalkState::default();
        self.check_node(root, None, None, 0, true, &mut state)?;

        if state.key_count != self.len {
            return Err(BTreeError::data_integrity(
                "Length",
                &format!("{} keys in tree vs {} recorded", state.key_count, self.len),
            ));
        }

        Ok(())
    }

    /// Recursively check invariants for a node and its children.
    fn check_node(
        &self,
        node: &Node<K>,
        lower: Option<&K>,
        upper: Option<&K>,
        depth: usize,
        is_root: bool,
        state: &mut WalkState,
    ) -> BTreeResult<()> {
        if node.order != self.order {
            return Err(BTreeError::data_integrity(
                "Order",
                &format!(
                    "node at depth {} has order {}, tree has {}",
                    depth, node.order, self.order
                ),
            ));
        }

        if node.len() > node.max_keys() {
            return Err(BTreeError::data_integrity(
                "Occupancy",
                &format!(
                    "node at depth {} holds {} keys (max {})",
                    depth,
                    node.len(),
                    node.max_keys()
                ),
            ));
        }

        if !is_root && node.is_underfull() {
            return Err(BTreeError::data_integrity(
                "Occupancy",
                &format!(
                    "node at depth {} holds {} keys (min {})",
                    depth,
                    node.len(),
                    node.min_keys()
                ),
            ));
        }

        if node.keys.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(BTreeError::data_integrity(
                "Ordering",
                &format!("keys out of order in node at depth {}", depth),
            ));
        }

        let below_lower = matches!(
            (lower, node.keys.first()),
            (Some(bound), Some(first)) if first < bound
        );
        let above_upper = matches!(
            (upper, node.keys.last()),
            (Some(bound), Some(last)) if last > bound
        );
        if below_lower || above_upper {
            return Err(BTreeError::data_integrity(
                "Ordering",
                &format!("node at depth {} escapes its separator range", depth),
            ));
        }

        state.key_count += node.len();

        if node.is_leaf {
            if !node.children.is_empty() {
                return Err(BTreeError::data_integrity(
                    "Structure",
                    &format!("leaf at depth {} owns {} children", depth, node.children.len()),
                ));
            }
            return match state.leaf_depth {
                None => {
                    state.leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected == depth => Ok(()),
                Some(expected) => Err(BTreeError::data_integrity(
                    "Balance",
                    &format!("leaf at depth {} but earlier leaves at depth {}", depth, expected),
                )),
            };
        }

        if node.children.len() != node.len() + 1 {
            return Err(BTreeError::data_integrity(
                "Structure",
                &format!(
                    "internal node at depth {} has {} keys and {} children",
                    depth,
                    node.len(),
                    node.children.len()
                ),
            ));
        }

        for (i, child) in node.children.iter().enumerate() {
            let child_lower = if i == 0 { lower } else { Some(&node.keys[i - 1]) };
            let child_upper = if i == node.len() { upper } else { Some(&node.keys[i]) };
            self.check_node(child, child_lower, child_upper, depth + 1, false, state)?;
        }

        Ok(())
    }
}

// ============================================================================
// CHECKED OPERATIONS
// ============================================================================

impl<K: Ord + Clone> BTree<K> {
    /// Insert with invariant validation before and after the insertion.
    pub fn try_insert(&mut self, key: K) -> ModifyResult<()> {
        self.validate()?;
        self.insert(key);
        self.validate()
    }

    /// Remove with invariant validation before and after the removal.
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<K> {
        self.validate()?;
        let removed = self.remove(key)?;
        self.validate()?;
        Ok(removed)
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<K> BTree<K> {
    /// Count the number of leaf and internal nodes in the tree.
    pub fn node_count(&self) -> (usize, usize) {
        fn count<K>(node: &Node<K>) -> (usize, usize) {
            if node.is_leaf {
                return (1, 0);
            }
            node.children.iter().fold((0, 1), |(leaves, internals), child| {
                let (l, i) = count(child);
                (leaves + l, internals + i)
            })
        }

        self.root.as_deref().map_or((0, 0), count)
    }

    /// Returns the key counts of all leaves, left to right.
    pub fn leaf_sizes(&self) -> Vec<usize> {
        fn collect<K>(node: &Node<K>, sizes: &mut Vec<usize>) {
            if node.is_leaf {
                sizes.push(node.len());
            }
            for child in &node.children {
                collect(child, sizes);
            }
        }

        let mut sizes = Vec::new();
        if let Some(root) = self.root.as_deref() {
            collect(root, &mut sizes);
        }
        sizes
    }
}
