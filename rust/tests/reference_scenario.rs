use btree::{validate_order, BTree, BTreeError, DEFAULT_ORDER};

fn keys_of(tree: &BTree<i64>) -> Vec<i64> {
    tree.traverse().copied().collect()
}

#[test]
fn test_order_five_walkthrough() {
    let mut tree = BTree::new(5).unwrap();
    for key in [10, 20, 5, 6, 12, 30, 7, 17] {
        tree.insert(key);
    }
    assert_eq!(keys_of(&tree), vec![5, 6, 7, 10, 12, 17, 20, 30]);

    assert_eq!(tree.remove(&6), Ok(6));
    assert_eq!(keys_of(&tree), vec![5, 7, 10, 12, 17, 20, 30]);

    assert_eq!(tree.remove(&13), Err(BTreeError::KeyNotFound));
    assert_eq!(keys_of(&tree), vec![5, 7, 10, 12, 17, 20, 30]);

    assert_eq!(tree.remove(&7), Ok(7));
    assert_eq!(keys_of(&tree), vec![5, 10, 12, 17, 20, 30]);

    assert!(tree.check_invariants());
    assert!(tree.contains(&5));
    assert!(!tree.contains(&7));
}

#[test]
fn test_order_two_is_invalid_configuration() {
    let err = BTree::<i64>::new(2).unwrap_err();
    assert!(err.is_configuration_error());
    assert_eq!(err, BTreeError::InvalidOrder { order: 2, min: 3 });
    assert!(validate_order(2).is_err());
    assert!(validate_order(3).is_ok());
}

#[test]
fn test_default_order() {
    let tree = BTree::<i64>::default();
    assert_eq!(tree.order(), DEFAULT_ORDER);
    assert_eq!(tree.min_keys(), 7);
}

#[test]
fn test_mixed_sign_and_extreme_keys() {
    let mut tree = BTree::new(3).unwrap();
    tree.extend([0, i64::MAX, -1, i64::MIN, 1, i64::MAX]);
    assert_eq!(keys_of(&tree), vec![i64::MIN, -1, 0, 1, i64::MAX, i64::MAX]);

    assert_eq!(tree.remove(&i64::MAX), Ok(i64::MAX));
    assert_eq!(tree.remove(&i64::MIN), Ok(i64::MIN));
    assert_eq!(keys_of(&tree), vec![-1, 0, 1, i64::MAX]);
    assert!(tree.check_invariants());
}

#[test]
fn test_string_keys() {
    let mut tree = BTree::new(4).unwrap();
    for word in ["pear", "apple", "fig", "kiwi", "banana", "apple"] {
        tree.insert(word.to_string());
    }
    let words: Vec<&str> = tree.traverse().map(String::as_str).collect();
    assert_eq!(words, ["apple", "apple", "banana", "fig", "kiwi", "pear"]);

    assert_eq!(tree.remove(&"fig".to_string()), Ok("fig".to_string()));
    assert!(!tree.contains(&"fig".to_string()));
    assert!(tree.check_invariants());
}
