//! Node-local structural operations for BTree.
//!
//! Everything here works on one node and its direct children: searching the
//! key array, splitting an overflowing child, rotating a key through the
//! parent from a sibling, and merging two adjacent children.

use crate::construction::min_keys_for;
use crate::types::Node;
use std::mem;

impl<K> Node<K> {
    // ============================================================================
    // STATUS CHECKS
    // ============================================================================

    /// Returns the number of keys in this node.
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns the minimum number of keys a non-root node must hold.
    pub(crate) fn min_keys(&self) -> usize {
        min_keys_for(self.order)
    }

    /// Returns the maximum number of keys a node may hold between operations.
    pub(crate) fn max_keys(&self) -> usize {
        self.order - 1
    }

    /// Returns true if this node holds one key past the maximum and must be split.
    pub(crate) fn is_overfull(&self) -> bool {
        self.len() > self.max_keys()
    }

    /// Returns true if this node is below minimum occupancy.
    pub(crate) fn is_underfull(&self) -> bool {
        self.len() < self.min_keys()
    }

    /// Returns true if this node can give a key to a sibling.
    pub(crate) fn can_donate(&self) -> bool {
        self.len() > self.min_keys()
    }

    // ============================================================================
    // SPLITTING
    // ============================================================================

    /// Split `children[i]` around its key at `order / 2`.
    ///
    /// Keys (and children) after the median move to a new right sibling placed
    /// at `children[i + 1]`; the median moves up into `keys[i]`. The child must
    /// hold more than `order / 2` keys.
    pub(crate) fn split_child(&mut self, i: usize) {
        let order = self.order;
        let mid = order / 2;
        let child = &mut self.children[i];

        let mut sibling = Node::new(order, child.is_leaf);
        sibling.keys.extend(child.keys.drain(mid + 1..));
        if !child.is_leaf {
            sibling.children.extend(child.children.drain(mid + 1..));
        }
        let median = child.keys.remove(mid);

        tracing::trace!(
            target: "btree::split",
            index = i,
            left = child.len(),
            right = sibling.len(),
            "split child"
        );

        self.children.insert(i + 1, Box::new(sibling));
        self.keys.insert(i, median);
    }

    // ============================================================================
    // PREDECESSOR / SUCCESSOR
    // ============================================================================

    /// Largest key in the subtree `children[idx]`.
    pub(crate) fn predecessor(&self, idx: usize) -> &K {
        let mut node = &self.children[idx];
        while let Some(child) = node.children.last() {
            node = child;
        }
        &node.keys[node.len() - 1]
    }

    /// Smallest key in the subtree `children[idx + 1]`.
    pub(crate) fn successor(&self, idx: usize) -> &K {
        let mut node = &self.children[idx + 1];
        while let Some(child) = node.children.first() {
            node = child;
        }
        &node.keys[0]
    }

    // ============================================================================
    // BORROWING AND MERGING
    // ============================================================================

    /// Rotate the last key of `children[idx - 1]` through `keys[idx - 1]`
    /// into the front of `children[idx]`, moving its last child along.
    pub(crate) fn borrow_from_prev(&mut self, idx: usize) {
        let (left, right) = self.children.split_at_mut(idx);
        let sibling = &mut left[idx - 1];
        let child = &mut right[0];

        debug_assert!(sibling.can_donate(), "left sibling has no spare key");

        let moved = sibling.keys.remove(sibling.keys.len() - 1);
        let separator = mem::replace(&mut self.keys[idx - 1], moved);
        child.keys.insert(0, separator);

        if !child.is_leaf {
            let moved_child = sibling.children.remove(sibling.children.len() - 1);
            child.children.insert(0, moved_child);
        }

        tracing::trace!(
            target: "btree::borrow",
            index = idx,
            direction = "prev",
            child = child.len(),
            sibling = sibling.len(),
            "borrowed key from left sibling"
        );
    }

    /// Rotate the first key of `children[idx + 1]` through `keys[idx]`
    /// onto the end of `children[idx]`, moving its first child along.
    pub(crate) fn borrow_from_next(&mut self, idx: usize) {
        let (left, right) = self.children.split_at_mut(idx + 1);
        let child = &mut left[idx];
        let sibling = &mut right[0];

        debug_assert!(sibling.can_donate(), "right sibling has no spare key");

        let moved = sibling.keys.remove(0);
        let separator = mem::replace(&mut self.keys[idx], moved);
        child.keys.push(separator);

        if !child.is_leaf {
            child.children.push(sibling.children.remove(0));
        }

        tracing::trace!(
            target: "btree::borrow",
            index = idx,
            direction = "next",
            child = child.len(),
            sibling = sibling.len(),
            "borrowed key from right sibling"
        );
    }

    /// Fold `keys[idx]` and all of `children[idx + 1]` into `children[idx]`.
    ///
    /// The absorbed sibling is dropped once its keys and children have moved.
    pub(crate) fn merge(&mut self, idx: usize) {
        let separator = self.keys.remove(idx);
        let Node { keys, children, .. } = *self.children.remove(idx + 1);

        let child = &mut self.children[idx];
        child.keys.push(separator);
        child.keys.extend(keys);
        child.children.extend(children);

        tracing::trace!(
            target: "btree::merge",
            index = idx,
            merged = child.len(),
            "merged child with right sibling"
        );
    }

    /// Returns true if `children[idx]`, `keys[idx]` and `children[idx + 1]`
    /// fit in a single node.
    pub(crate) fn can_merge(&self, idx: usize) -> bool {
        self.children[idx].len() + 1 + self.children[idx + 1].len() <= self.max_keys()
    }
}

impl<K: Ord> Node<K> {
    // ============================================================================
    // SEARCH
    // ============================================================================

    /// First index whose key is `>= key` (lower bound).
    pub(crate) fn find_key(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k < key)
    }

    /// First index whose key is `> key`; new keys land here so that equal
    /// keys keep their insertion order.
    pub(crate) fn upper_bound(&self, key: &K) -> usize {
        self.keys.partition_point(|k| k <= key)
    }
}
