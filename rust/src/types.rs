//! Core types and data structures for BTree.
//!
//! This module contains the tree and node structures together with the
//! constants that bound the branching order.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest branching order that admits a valid minimum fill factor.
pub const MIN_ORDER: usize = 3;

/// Branching order used by `BTree::default()` and `FromIterator`.
pub const DEFAULT_ORDER: usize = 16;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Multi-way B-tree of keys.
///
/// Every node holds at most `order - 1` sorted keys, every non-root node at
/// least `ceil(order / 2) - 1`, and all leaves sit at the same depth. Keys
/// may repeat; a repeated key is stored once per insert.
///
/// # Examples
///
/// ```
/// use btree::BTree;
///
/// let mut tree = BTree::new(5).unwrap();
/// for key in [10, 20, 5, 6, 12, 30, 7, 17] {
///     tree.insert(key);
/// }
///
/// assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), [5, 6, 7, 10, 12, 17, 20, 30]);
/// assert_eq!(tree.remove(&6), Ok(6));
/// assert!(tree.remove(&13).is_err());
/// assert!(!tree.contains(&6));
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(order · log n)
/// - **Lookup**: O(log n)
/// - **Deletion**: O(order · log n)
/// - **Traversal**: O(n)
#[derive(Debug, Clone)]
pub struct BTree<K> {
    /// Maximum number of children per node.
    pub(crate) order: usize,
    /// The root node, absent when the tree holds no keys.
    pub(crate) root: Option<Box<Node<K>>>,
    /// Number of keys stored, duplicates included.
    pub(crate) len: usize,
}

/// A tree node: sorted keys plus, for internal nodes, owned children.
#[derive(Debug, Clone)]
pub struct Node<K> {
    /// Maximum number of children this node may have.
    pub(crate) order: usize,
    /// Whether this node owns no children.
    pub(crate) is_leaf: bool,
    /// Sorted (non-decreasing) keys.
    pub(crate) keys: Vec<K>,
    /// Children, `keys.len() + 1` of them when internal, empty for leaves.
    pub(crate) children: Vec<Box<Node<K>>>,
}
