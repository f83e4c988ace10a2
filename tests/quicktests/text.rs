use bintree::{Malformed, Node, TreeError};
use quickcheck_macros::quickcheck;

use crate::FullTree;

#[quickcheck]
fn full_trees_round_trip(tree: FullTree) -> bool {
    let FullTree(tree) = tree;
    Node::parse(&tree.to_string()) == Ok(tree)
}

#[quickcheck]
fn round_trip_survives_extra_whitespace(tree: FullTree) -> bool {
    let FullTree(tree) = tree;
    let spaced = tree.to_string().replace(' ', "  \t ");
    Node::parse(&format!("  {spaced}\n")) == Ok(tree)
}

#[quickcheck]
fn pretty_has_a_line_per_node(tree: FullTree) -> bool {
    let FullTree(tree) = tree;
    let pretty = tree.pretty();
    let depths: Vec<_> = pretty.lines().map(|line| line.matches("|\t").count()).collect();

    depths.len() == tree.size() && depths.first() == Some(&0)
}

#[quickcheck]
fn three_children_are_rejected(a: u16, b: u16, c: u16, d: u16) -> bool {
    matches!(
        Node::<u16>::parse(&format!("{a}({b} {c} {d})")),
        Err(TreeError::MalformedTreeDescription {
            reason: Malformed::ChildCount(3),
            ..
        })
    )
}
