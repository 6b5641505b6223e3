//! DELETE operations for BTree.
//!
//! This module contains the deletion state machine: removal from leaves,
//! removal from internal nodes via predecessor/successor or merge, refilling
//! a child that dropped below minimum occupancy, and root collapse.

use crate::error::{BTreeError, ModifyResult};
use crate::types::{BTree, Node};
use std::mem;

impl<K: Ord + Clone> Node<K> {
    /// Remove one occurrence of `key` from the subtree rooted at this node.
    ///
    /// Returns `None` without touching the tree when the key is absent. On the
    /// way back up, a child left below minimum occupancy is refilled; this
    /// node itself may end up underfull, which its owner handles.
    pub(crate) fn remove(&mut self, key: &K) -> Option<K> {
        let idx = self.find_key(key);

        if idx < self.len() && self.keys[idx] == *key {
            return Some(self.remove_at(idx));
        }

        if self.is_leaf {
            return None;
        }

        let removed = self.children[idx].remove(key)?;
        self.rebalance_child(idx);
        Some(removed)
    }

    fn remove_at(&mut self, idx: usize) -> K {
        if self.is_leaf {
            self.remove_from_leaf(idx)
        } else {
            self.remove_from_non_leaf(idx)
        }
    }

    pub(crate) fn remove_from_leaf(&mut self, idx: usize) -> K {
        self.keys.remove(idx)
    }

    /// Remove `keys[idx]` from an internal node.
    pub(crate) fn remove_from_non_leaf(&mut self, idx: usize) -> K {
        if self.children[idx].can_donate() {
            self.replace_with_predecessor(idx)
        } else if self.children[idx + 1].can_donate() {
            self.replace_with_successor(idx)
        } else if self.can_merge(idx) {
            // After the merge the separator sits right after the left child's keys.
            let pos = self.children[idx].len();
            self.merge(idx);
            self.children[idx].remove_at(pos)
        } else {
            // Two minimal children plus the separator overflow a node when
            // the order is odd; pull the predecessor and refill instead.
            let removed = self.replace_with_predecessor(idx);
            self.rebalance_child(idx);
            removed
        }
    }

    fn replace_with_predecessor(&mut self, idx: usize) -> K {
        let pred = self.predecessor(idx).clone();
        self.children[idx].remove(&pred);
        mem::replace(&mut self.keys[idx], pred)
    }

    fn replace_with_successor(&mut self, idx: usize) -> K {
        let succ = self.successor(idx).clone();
        self.children[idx + 1].remove(&succ);
        mem::replace(&mut self.keys[idx], succ)
    }

    /// Bring `children[idx]` back to minimum occupancy, borrowing from a
    /// sibling with a spare key or merging with one otherwise.
    pub(crate) fn rebalance_child(&mut self, idx: usize) {
        if !self.children[idx].is_underfull() {
            return;
        }

        if idx > 0 && self.children[idx - 1].can_donate() {
            self.borrow_from_prev(idx);
        } else if idx < self.len() && self.children[idx + 1].can_donate() {
            self.borrow_from_next(idx);
        } else if idx < self.len() {
            self.merge(idx);
        } else {
            self.merge(idx - 1);
        }
    }
}

impl<K: Ord + Clone> BTree<K> {
    /// Remove one occurrence of a key from the tree.
    ///
    /// Returns the removed key, or `BTreeError::KeyNotFound` if it was not
    /// present, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::{BTree, BTreeError};
    ///
    /// let mut tree: BTree<i32> = [5, 1, 3].into_iter().collect();
    /// assert_eq!(tree.remove(&3), Ok(3));
    /// assert_eq!(tree.remove(&3), Err(BTreeError::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &K) -> ModifyResult<K> {
        let root = self.root.as_mut().ok_or(BTreeError::KeyNotFound)?;
        let removed = root.remove(key).ok_or(BTreeError::KeyNotFound)?;

        if root.keys.is_empty() {
            self.collapse_root();
        }
        self.len -= 1;

        Ok(removed)
    }

    /// Drop an emptied root, promoting its only child or emptying the tree.
    fn collapse_root(&mut self) {
        let Some(old_root) = self.root.take() else {
            return;
        };

        let Node {
            is_leaf, children, ..
        } = *old_root;
        self.root = if is_leaf {
            None
        } else {
            children.into_iter().next()
        };

        tracing::debug!(target: "btree::root", height = self.height(), "collapsed root");
    }
}
