//! Order statistics on binary search trees.
//!
//! These lookups assume the tree is a BST: every value in a node's left subtree is
//! smaller than the node's value and every value in its right subtree is larger.
//! Nothing checks this. On a tree that isn't a BST the answer is simply the node at
//! that in-order position.
//!
//! # Examples
//!
//! ```
//! use bintree::Node;
//!
//! let tree: Node<i32> = Node::parse("10(5(2(1 3) 8(6 9)) 15(12(11 13) 18(16 20)))").unwrap();
//!
//! assert_eq!(tree.kth_smallest(1).unwrap().value(), Some(&1));
//! assert_eq!(tree.kth_smallest(10).unwrap().value(), Some(&12));
//! assert_eq!(tree.kth_largest(1).unwrap().value(), Some(&20));
//! assert!(tree.kth_largest(16).is_err());
//! ```

use rustc_hash::FxHashMap;

use crate::error::{Side, TreeError};
use crate::Node;

impl<V> Node<V> {
    /// Finds the node holding the `k`-th largest value (1-indexed) by comparing `k` with the
    /// size of each right subtree on the way down.
    ///
    /// # Errors
    ///
    /// [`TreeError::IndexOutOfRange`] when `k` is 0 or larger than [`Node::size`].
    pub fn kth_largest(&self, k: usize) -> Result<&Node<V>, TreeError> {
        self.kth(k, Side::Right)
    }

    /// Finds the node holding the `k`-th smallest value (1-indexed) by comparing `k` with the
    /// size of each left subtree on the way down.
    ///
    /// # Errors
    ///
    /// [`TreeError::IndexOutOfRange`] when `k` is 0 or larger than [`Node::size`].
    pub fn kth_smallest(&self, k: usize) -> Result<&Node<V>, TreeError> {
        self.kth(k, Side::Left)
    }

    /// Walks towards the `k`-th node counting from the `first` side (`Right` for largest,
    /// `Left` for smallest).
    fn kth(&self, k: usize, first: Side) -> Result<&Node<V>, TreeError> {
        let sizes = self.subtree_sizes();
        let size_of = |node: Option<&Node<V>>| {
            node.and_then(|node| sizes.get(&(node as *const Node<V>)))
                .copied()
                .unwrap_or_default()
        };

        let size = size_of(Some(self));
        let out_of_range = TreeError::IndexOutOfRange { index: k, size };
        if k == 0 || k > size {
            log::debug!("rank {k} requested from a tree of {size} nodes");
            return Err(out_of_range);
        }

        let later = match first {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        };
        let mut node = self;
        let mut k = k;
        loop {
            let before = size_of(node.child(first));
            let next = if k <= before {
                node.child(first)
            } else if k == before + 1 {
                return Ok(node);
            } else {
                k -= before + 1;
                node.child(later)
            };
            // `k <= size_of(node)` holds on every iteration, so the child exists.
            node = next.ok_or_else(|| out_of_range.clone())?;
        }
    }

    /// The size of every subtree, keyed by the address of its root. One post-order pass fills
    /// it, since each node's children are counted before the node itself.
    fn subtree_sizes(&self) -> FxHashMap<*const Node<V>, usize> {
        let mut sizes = FxHashMap::default();
        for node in self.post_order() {
            let below: usize = node
                .children()
                .filter_map(|child| sizes.get(&(child as *const Node<V>)))
                .sum();
            sizes.insert(node as *const Node<V>, below + 1);
        }

        sizes
    }
}
