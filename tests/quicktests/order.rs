use std::collections::BTreeSet;

use bintree::{Node, TreeError};
use quickcheck_macros::quickcheck;

use crate::bst_insert;

/// Builds an (unbalanced) BST holding `xs` along with the sorted, deduplicated values.
fn build(xs: &[i8]) -> (Node<i8>, Vec<i8>) {
    let mut tree = Node::empty();
    for x in xs {
        bst_insert(&mut tree, *x);
    }
    let sorted = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

    (tree, sorted)
}

#[quickcheck]
fn kth_smallest_matches_sorted(xs: Vec<i8>) -> bool {
    let (tree, sorted) = build(&xs);
    if sorted.is_empty() {
        return tree.kth_smallest(1).map(Node::value) == Ok(None);
    }

    sorted
        .iter()
        .enumerate()
        .all(|(i, x)| tree.kth_smallest(i + 1).map(Node::value) == Ok(Some(x)))
}

#[quickcheck]
fn kth_largest_matches_sorted(xs: Vec<i8>) -> bool {
    let (tree, sorted) = build(&xs);

    sorted
        .iter()
        .rev()
        .enumerate()
        .all(|(i, x)| tree.kth_largest(i + 1).map(Node::value) == Ok(Some(x)))
}

#[quickcheck]
fn ranks_past_the_size_are_rejected(xs: Vec<i8>, extra: u8) -> bool {
    let (tree, _) = build(&xs);
    let size = tree.size();
    let k = size + 1 + usize::from(extra);

    tree.kth_smallest(k) == Err(TreeError::IndexOutOfRange { index: k, size })
        && tree.kth_largest(0) == Err(TreeError::IndexOutOfRange { index: 0, size })
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let (tree, sorted) = build(&xs);
    let visited: Vec<i8> = tree.in_order().filter_map(Node::value).copied().collect();

    visited == sorted
}
