use btree::{BTree, BTreeError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Multiset model: key -> number of stored copies.
fn model_keys(model: &BTreeMap<i32, usize>) -> Vec<i32> {
    model
        .iter()
        .flat_map(|(&key, &count)| std::iter::repeat(key).take(count))
        .collect()
}

fn model_remove(model: &mut BTreeMap<i32, usize>, key: i32) -> bool {
    match model.get_mut(&key) {
        Some(count) if *count > 1 => {
            *count -= 1;
            true
        }
        Some(_) => {
            model.remove(&key);
            true
        }
        None => false,
    }
}

#[test]
fn test_random_operations_match_multiset_model() {
    for order in 3..=10 {
        let mut rng = StdRng::seed_from_u64(order as u64);
        let mut tree = BTree::new(order).unwrap();
        let mut model: BTreeMap<i32, usize> = BTreeMap::new();

        for step in 0..4_000 {
            // Narrow key space so duplicates and misses are frequent.
            let key = rng.gen_range(0..300);
            if rng.gen_bool(0.55) {
                tree.insert(key);
                *model.entry(key).or_insert(0) += 1;
            } else {
                let expected = model_remove(&mut model, key);
                match tree.remove(&key) {
                    Ok(removed) => {
                        assert!(expected, "order {order} step {step}: removed absent {key}");
                        assert_eq!(removed, key);
                    }
                    Err(err) => {
                        assert!(!expected, "order {order} step {step}: lost {key}");
                        assert_eq!(err, BTreeError::KeyNotFound);
                    }
                }
            }

            if let Err(err) = tree.validate() {
                panic!("order {order} step {step}: {err}");
            }
            assert_eq!(tree.len(), model.values().sum::<usize>());
        }

        assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), model_keys(&model));
        for key in 0..300 {
            assert_eq!(tree.contains(&key), model.contains_key(&key), "order {order} key {key}");
        }
    }
}

#[test]
fn test_insert_all_then_remove_all_in_random_order() {
    let mut rng = StdRng::seed_from_u64(0xB7EE);

    for order in [3, 4, 5, 6, 7, 16, 33] {
        let mut keys: Vec<i32> = (0..2_000).map(|_| rng.gen_range(-5_000..5_000)).collect();
        let mut tree = BTree::new(order).unwrap();
        tree.extend(keys.iter().copied());
        assert!(tree.check_invariants());

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(tree.traverse().copied().collect::<Vec<_>>(), sorted);

        // Fisher-Yates shuffle of the removal order.
        for i in (1..keys.len()).rev() {
            let j = rng.gen_range(0..=i);
            keys.swap(i, j);
        }

        for key in &keys {
            assert_eq!(tree.remove(key), Ok(*key));
        }
        assert!(tree.check_invariants());
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.traverse().next(), None);
        assert_eq!(tree.height(), 0);
    }
}

#[test]
fn test_first_last_track_model() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tree = BTree::new(4).unwrap();
    let mut model: BTreeMap<i32, usize> = BTreeMap::new();

    for _ in 0..1_000 {
        let key = rng.gen_range(0..100);
        if rng.gen_bool(0.5) {
            tree.insert(key);
            *model.entry(key).or_insert(0) += 1;
        } else {
            let _ = tree.remove(&key);
            model_remove(&mut model, key);
        }
        assert_eq!(tree.first(), model.keys().next());
        assert_eq!(tree.last(), model.keys().next_back());
    }
}

#[test]
fn test_large_tree_height_stays_logarithmic() {
    let mut tree = BTree::new(16).unwrap();
    tree.extend(0..100_000);

    // min_keys = 7, so every non-root node has at least 8 children.
    assert!(tree.height() <= 6, "height {}", tree.height());
    assert!(tree.check_invariants());

    for key in (0..100_000).step_by(2) {
        tree.remove(&key).unwrap();
    }
    assert_eq!(tree.len(), 50_000);
    assert!(tree.check_invariants());
    assert!(tree.traverse().copied().eq((1..100_000).step_by(2)));
}
