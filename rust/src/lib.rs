//! Multi-way B-tree of configurable order.
//!
//! This crate provides an in-memory B-tree of keys with a branching order
//! chosen at construction time. Insertion splits nodes that overflow, and
//! deletion borrows from or merges with siblings so that every node stays
//! within its fill-factor bounds and all leaves stay at the same depth.
//!
//! ```
//! use btree::{BTree, BTreeError};
//!
//! let mut tree = BTree::new(5)?;
//! tree.extend([10, 20, 5, 6, 12, 30, 7, 17]);
//!
//! tree.remove(&6)?;
//! assert_eq!(tree.remove(&13), Err(BTreeError::KeyNotFound));
//! tree.remove(&7)?;
//!
//! let keys: Vec<i32> = tree.traverse().copied().collect();
//! assert_eq!(keys, [5, 10, 12, 17, 20, 30]);
//! assert!(tree.check_invariants());
//! # Ok::<(), BTreeError>(())
//! ```

mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod node;
mod types;
mod validation;

pub use construction::validation::validate_order;
pub use error::{BTreeError, BTreeResult, InitResult, ModifyResult};
pub use iteration::Keys;
pub use types::{BTree, DEFAULT_ORDER, MIN_ORDER};
