use bintree::Node;
use quickcheck::{Arbitrary, Gen};

mod order;
mod text;

/// A tree in which every node holds a value and has either no children or two. These are
/// exactly the trees that survive a trip through their text form.
#[derive(Clone, Debug)]
pub struct FullTree(pub Node<u16>);

impl Arbitrary for FullTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let budget = usize::arbitrary(g) % (g.size() + 1);
        FullTree(full_tree(g, budget))
    }
}

/// Builds a random full tree with roughly `budget` nodes below the root.
fn full_tree(g: &mut Gen, budget: usize) -> Node<u16> {
    let value = u16::arbitrary(g);
    if budget < 2 {
        return Node::new(value);
    }

    let left_budget = usize::arbitrary(g) % (budget - 1);
    let right_budget = budget - 2 - left_budget;
    Node::with_children(
        value,
        Some(full_tree(g, left_budget)),
        Some(full_tree(g, right_budget)),
    )
}

/// Inserts `value` into a tree kept in BST order. Duplicates are ignored.
pub fn bst_insert<V: Ord>(root: &mut Node<V>, value: V) {
    let mut node = root;
    loop {
        let Some(current) = node.value() else {
            node.set_value(Some(value));
            return;
        };
        let side = match value.cmp(current) {
            std::cmp::Ordering::Less => bintree::Side::Left,
            std::cmp::Ordering::Equal => return,
            std::cmp::Ordering::Greater => bintree::Side::Right,
        };
        if node.child(side).is_none() {
            let leaf = Some(Node::new(value));
            match side {
                bintree::Side::Left => node.set_left_child(leaf),
                bintree::Side::Right => node.set_right_child(leaf),
            };
            return;
        }
        node = node.child_mut(side).unwrap();
    }
}
