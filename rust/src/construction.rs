//! Construction and initialization logic for BTree and nodes.
//!
//! This module contains order validation, the tree constructors and the
//! node constructors used by insertion and splitting.

use crate::error::{BTreeError, InitResult};
use crate::types::{BTree, Node, DEFAULT_ORDER, MIN_ORDER};

impl<K> BTree<K> {
    /// Create an empty B-tree with the given branching order.
    ///
    /// # Arguments
    ///
    /// * `order` - Maximum number of children per node (minimum 3)
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTree)` if the order is valid, `Err(BTreeError::InvalidOrder)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree::BTree;
    ///
    /// let tree = BTree::<i64>::new(4).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BTree::<i64>::new(2).is_err());
    /// ```
    pub fn new(order: usize) -> InitResult<Self> {
        validation::validate_order(order)?;

        Ok(Self {
            order,
            root: None,
            len: 0,
        })
    }

    /// Create a B-tree with the default order.
    ///
    /// This is equivalent to calling `new(DEFAULT_ORDER)`.
    pub fn with_default_order() -> Self {
        Self {
            order: DEFAULT_ORDER,
            root: None,
            len: 0,
        }
    }

    /// Returns the branching order of this tree.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the minimum number of keys any non-root node must hold.
    pub fn min_keys(&self) -> usize {
        min_keys_for(self.order)
    }
}

impl<K> Default for BTree<K> {
    /// Create a B-tree with the default order.
    fn default() -> Self {
        Self::with_default_order()
    }
}

impl<K> Node<K> {
    /// Creates an empty node.
    pub(crate) fn new(order: usize, is_leaf: bool) -> Self {
        // One spare slot: a node briefly holds `order` keys before it is split.
        Self {
            order,
            is_leaf,
            keys: Vec::with_capacity(order),
            children: if is_leaf {
                Vec::new()
            } else {
                Vec::with_capacity(order + 1)
            },
        }
    }

    /// Creates a leaf holding a single key.
    pub(crate) fn leaf_with_key(order: usize, key: K) -> Self {
        let mut leaf = Self::new(order, true);
        leaf.keys.push(key);
        leaf
    }
}

/// `ceil(order / 2) - 1`
pub(crate) fn min_keys_for(order: usize) -> usize {
    order.div_ceil(2) - 1
}

/// Validation utilities for construction
pub mod validation {
    use super::*;

    /// Validate that an order is suitable for a B-tree.
    ///
    /// Orders below `MIN_ORDER` leave no room for a non-zero minimum fill.
    pub fn validate_order(order: usize) -> InitResult<()> {
        if order < MIN_ORDER {
            Err(BTreeError::invalid_order(order, MIN_ORDER))
        } else {
            Ok(())
        }
    }
}
