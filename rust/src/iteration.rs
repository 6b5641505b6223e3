//! Iterator implementations for BTree.
//!
//! In-order traversal is lazy: the iterator keeps an explicit stack of
//! `(node, next key index)` frames along the current root-to-leaf path.

use crate::types::{BTree, Node};
use std::iter::FusedIterator;

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// Iterator over the keys of a B-tree in ascending order, duplicates included.
pub struct Keys<'a, K> {
    stack: Vec<(&'a Node<K>, usize)>,
    remaining: usize,
}

// ============================================================================
// BTREE ITERATOR METHODS
// ============================================================================

impl<K> BTree<K> {
    /// Returns an iterator over all keys in ascending order.
    ///
    /// Each call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// tree.extend([3, 1, 2, 1]);
    /// assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), [1, 1, 2, 3]);
    /// ```
    pub fn traverse(&self) -> Keys<'_, K> {
        Keys::new(self)
    }
}

impl<'a, K> IntoIterator for &'a BTree<K> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

// ============================================================================
// KEYS IMPLEMENTATION
// ============================================================================

impl<'a, K> Keys<'a, K> {
    fn new(tree: &'a BTree<K>) -> Self {
        let mut keys = Self {
            stack: Vec::with_capacity(tree.height()),
            remaining: tree.len(),
        };
        if let Some(root) = tree.root.as_deref() {
            keys.descend_leftmost(root);
        }
        keys
    }

    /// Push `node` and its leftmost descendants down to a leaf.
    fn descend_leftmost(&mut self, node: &'a Node<K>) {
        let mut current = node;
        loop {
            self.stack.push((current, 0));
            match current.children.first() {
                Some(child) => current = child.as_ref(),
                None => break,
            }
        }
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.last_mut() {
            let (node, idx) = *frame;
            if idx < node.keys.len() {
                frame.1 += 1;
                if !node.is_leaf {
                    self.descend_leftmost(&node.children[idx + 1]);
                }
                self.remaining = self.remaining.saturating_sub(1);
                return Some(&node.keys[idx]);
            }
            self.stack.pop();
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {}

impl<K> FusedIterator for Keys<'_, K> {}

impl<K> Clone for Keys<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
