//! Error handling and result types for BTree operations.
//!
//! This module provides the single error type used across the tree along with
//! result type aliases for construction and modification.

use thiserror::Error;

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BTreeError {
    /// Key not found in the tree.
    #[error("key not found in tree")]
    KeyNotFound,

    /// The branching order cannot admit a valid minimum fill factor.
    #[error("invalid order: {order} (minimum required: {min})")]
    InvalidOrder {
        /// Requested order.
        order: usize,
        /// Smallest accepted order.
        min: usize,
    },

    /// Internal data structure integrity violation.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),
}

impl BTreeError {
    /// Create an InvalidOrder error with context
    pub fn invalid_order(order: usize, min: usize) -> Self {
        Self::InvalidOrder { order, min }
    }

    /// Create a DataIntegrity error with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrity(format!("{}: {}", context, details))
    }

    /// Check if this error is a missing key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound)
    }

    /// Check if this error was raised while configuring a tree.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidOrder { .. })
    }
}

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, BTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BTreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(BTreeError::KeyNotFound.to_string(), "key not found in tree");
        assert_eq!(
            BTreeError::invalid_order(2, 3).to_string(),
            "invalid order: 2 (minimum required: 3)"
        );
        assert_eq!(
            BTreeError::data_integrity("occupancy", "node has 0 keys").to_string(),
            "data integrity error: occupancy: node has 0 keys"
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(BTreeError::KeyNotFound.is_not_found());
        assert!(!BTreeError::KeyNotFound.is_configuration_error());
        assert!(BTreeError::invalid_order(1, 3).is_configuration_error());
        assert!(!BTreeError::DataIntegrity(String::new()).is_not_found());
    }
}
