//! INSERT operations for BTree.
//!
//! This module contains key insertion, overflow splitting on the way back up,
//! and tree growth when the root itself overflows.

use crate::types::{BTree, Node};

impl<K: Ord> Node<K> {
    /// Insert `key` into the subtree rooted at this node.
    ///
    /// The node must not be overflowing on entry. A child that overflows is
    /// split here; this node may itself return holding `order` keys, which
    /// its owner resolves with `split_child` (or root growth).
    pub(crate) fn insert_non_full(&mut self, key: K) {
        let i = self.upper_bound(&key);

        if self.is_leaf {
            self.keys.insert(i, key);
            return;
        }

        self.children[i].insert_non_full(key);
        if self.children[i].is_overfull() {
            self.split_child(i);
        }
    }
}

impl<K: Ord> BTree<K> {
    /// Insert a key into the tree.
    ///
    /// Duplicates are kept: an equal key is placed after the ones already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), [1, 2, 2]);
    /// ```
    pub fn insert(&mut self, key: K) {
        match self.root.as_mut() {
            None => {
                self.root = Some(Box::new(Node::leaf_with_key(self.order, key)));
            }
            Some(root) => {
                root.insert_non_full(key);
                if root.is_overfull() {
                    self.grow_root();
                }
            }
        }
        self.len += 1;
    }

    /// Replace an overflowing root with a new internal root holding the
    /// split halves of the old one.
    fn grow_root(&mut self) {
        let Some(old_root) = self.root.take() else {
            return;
        };

        let mut new_root = Node::new(self.order, false);
        new_root.children.push(old_root);
        new_root.split_child(0);
        self.root = Some(Box::new(new_root));

        tracing::debug!(target: "btree::root", height = self.height(), "grew new root");
    }
}

impl<K: Ord> Extend<K> for BTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for BTree<K> {
    /// Build a tree of `DEFAULT_ORDER` from the keys.
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = BTree::with_default_order();
        tree.extend(iter);
        tree
    }
}
