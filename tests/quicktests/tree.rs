use ordtree::OrderedTree;
use quickcheck_macros::quickcheck;

use std::collections::HashMap;

use crate::{init_logging, Op};

/// Applies a set of operations to a tree and a map counting copies of each key.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same keys, duplicates included.
fn do_ops<K>(ops: &[Op<K>], tree: &mut OrderedTree<K>, counts: &mut HashMap<K, usize>) -> bool
where
    K: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Add(k) => {
                if !tree.add(k.clone()) {
                    return false;
                }
                *counts.entry(k.clone()).or_default() += 1;
            }
            Op::Remove(k) => {
                let expected = match counts.get_mut(k) {
                    Some(count) if *count > 0 => {
                        *count -= 1;
                        Some(k.clone())
                    }
                    _ => None,
                };
                if tree.remove(k) != expected {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    init_logging();
    let mut tree = OrderedTree::new();
    let mut counts = HashMap::new();

    do_ops(&ops, &mut tree, &mut counts)
        && tree.len() == counts.values().sum::<usize>()
        && counts
            .iter()
            .all(|(key, count)| tree.iter().filter(|k| *k == key).count() == *count)
}

#[quickcheck]
fn in_order_traversal_is_sorted(xs: Vec<i16>) -> bool {
    let tree: OrderedTree<i16> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.iter().eq(sorted.iter())
}

#[quickcheck]
fn len_matches_traversal(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();
    let removed = removes.iter().filter(|k| tree.remove(k).is_some()).count();

    tree.len() == xs.len() - removed && tree.len() == tree.iter().count()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x) && tree.get(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.iter().copied().collect();

    nots.iter()
        .filter(|x| !xs.contains(x))
        .all(|x| !tree.contains(x) && tree.get(x).is_none())
}

#[quickcheck]
fn removing_every_added_key_empties_the_tree(xs: Vec<i8>, seed: Vec<usize>) -> bool {
    let mut tree: OrderedTree<i8> = xs.iter().copied().collect();

    // Remove in a scrambled order that still covers every added key.
    let mut order = xs.clone();
    for (i, s) in seed.iter().enumerate() {
        if order.is_empty() {
            break;
        }
        let j = i % order.len();
        let k = s % order.len();
        order.swap(j, k);
    }

    order.iter().all(|k| tree.remove(k) == Some(*k)) && tree.is_empty() && tree.iter().next().is_none()
}

#[quickcheck]
fn duplicates_are_independently_removable(x: i8, others: Vec<i8>) -> bool {
    let mut tree: OrderedTree<i8> = others.iter().copied().collect();
    let before = tree.len();
    tree.add(x);
    tree.add(x);
    let grew_by_two = tree.len() == before + 2;

    let first = tree.remove(&x);
    let still_there = tree.contains(&x);
    let second = tree.remove(&x);
    let copies_left = others.iter().filter(|o| **o == x).count();

    grew_by_two
        && first == Some(x)
        && still_there
        && second == Some(x)
        && tree.iter().filter(|k| **k == x).count() == copies_left
}

#[quickcheck]
fn reverse_comparator_iterates_descending(xs: Vec<i8>) -> bool {
    let tree = OrderedTree::from_iter_with_comparator(xs.iter().copied(), |a: &i8, b: &i8| b.cmp(a));
    let mut sorted = xs;
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    tree.iter().eq(sorted.iter())
}

#[quickcheck]
fn into_iter_matches_iter(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8> = xs.into_iter().collect();
    let borrowed: Vec<i8> = tree.iter().copied().collect();

    tree.into_iter().collect::<Vec<_>>() == borrowed
}
