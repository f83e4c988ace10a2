//! Depth-first iterators over a [`Node`] and its descendants.
//!
//! Each iterator keeps its own stack on the heap, so walking a very deep tree
//! doesn't grow the call stack. They borrow the tree, so the same traversal can be
//! restarted any number of times.
//!
//! # Examples
//!
//! ```
//! use bintree::Node;
//!
//! fn values<'a>(iter: impl Iterator<Item = &'a Node<String>>) -> String {
//!     iter.filter_map(Node::value)
//!         .map(String::as_str)
//!         .collect::<Vec<_>>()
//!         .join(" ")
//! }
//!
//! let tree: Node<String> = Node::parse("one(two three(four five))").unwrap();
//!
//! assert_eq!(values(tree.pre_order()), "one two three four five");
//! assert_eq!(values(tree.in_order()), "two one four three five");
//! assert_eq!(values(tree.post_order()), "two four five three one");
//! ```

use std::iter::FusedIterator;

use crate::Node;

impl<V> Node<V> {
    /// Visits this node, then its left subtree, then its right subtree.
    pub fn pre_order(&self) -> PreOrder<'_, V> {
        PreOrder { stack: vec![self] }
    }

    /// Visits the left subtree, then this node, then the right subtree. On a binary search
    /// tree this yields the values in ascending order.
    pub fn in_order(&self) -> InOrder<'_, V> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(Some(self));
        iter
    }

    /// Visits the left subtree, then the right subtree, then this node.
    pub fn post_order(&self) -> PostOrder<'_, V> {
        PostOrder {
            stack: vec![(self, false)],
        }
    }
}

/// Pre-order iterator returned by [`Node::pre_order`].
#[derive(Clone, Debug)]
pub struct PreOrder<'a, V> {
    stack: Vec<&'a Node<V>>,
}

impl<'a, V> Iterator for PreOrder<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree comes off the stack first.
        self.stack.extend(node.children().rev());
        Some(node)
    }
}

impl<V> FusedIterator for PreOrder<'_, V> {}

/// In-order iterator returned by [`Node::in_order`].
#[derive(Clone, Debug)]
pub struct InOrder<'a, V> {
    stack: Vec<&'a Node<V>>,
}

impl<'a, V> InOrder<'a, V> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left_child();
        }
    }
}

impl<'a, V> Iterator for InOrder<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right_child());
        Some(node)
    }
}

impl<V> FusedIterator for InOrder<'_, V> {}

/// Post-order iterator returned by [`Node::post_order`].
#[derive(Clone, Debug)]
pub struct PostOrder<'a, V> {
    /// Nodes still to visit, flagged once their children have been scheduled.
    stack: Vec<(&'a Node<V>, bool)>,
}

impl<'a, V> Iterator for PostOrder<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack
                .extend(node.children().rev().map(|child| (child, false)));
        }
    }
}

impl<V> FusedIterator for PostOrder<'_, V> {}
