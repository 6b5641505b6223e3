//! GET operations for BTree.
//!
//! Read-only queries over the tree: membership, size, height and the
//! smallest/largest keys, plus `clear`.

use crate::types::{BTree, Node};

impl<K: Ord> BTree<K> {
    /// Returns true if the tree holds at least one occurrence of `key`.
    ///
    /// Uses the same lower-bound search as deletion.
    pub fn contains(&self, key: &K) -> bool {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            let idx = node.find_key(key);
            if idx < node.len() && node.keys[idx] == *key {
                return true;
            }
            current = node.children.get(idx).map(Box::as_ref);
        }

        false
    }
}

impl<K> BTree<K> {
    /// Returns the number of keys in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of levels; 0 for an empty tree, 1 for a lone leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            height += 1;
            current = node.children.first().map(Box::as_ref);
        }
        height
    }

    /// Returns the smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        let mut node: &Node<K> = self.root.as_deref()?;
        while let Some(child) = node.children.first() {
            node = child.as_ref();
        }
        node.keys.first()
    }

    /// Returns the largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        let mut node: &Node<K> = self.root.as_deref()?;
        while let Some(child) = node.children.last() {
            node = child.as_ref();
        }
        node.keys.last()
    }

    /// Remove every key from the tree, keeping its order.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}
