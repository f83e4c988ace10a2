//! Structural equality and hashing.
//!
//! Two trees are equal when they have the same shape and equal values in
//! corresponding nodes. Children are never reordered, so swapping the children of
//! a node yields a different tree.

use std::hash::{Hash, Hasher};
use std::ptr;

use rustc_hash::FxHasher;

use crate::Node;

/// Multiplier folded into every level of [`Node::structural_hash`].
const HASH_FACTOR: u64 = 17;

impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if ptr::eq(a, b) {
                continue;
            }
            if a.value != b.value {
                return false;
            }
            for pair in [
                (a.left_child(), b.left_child()),
                (a.right_child(), b.right_child()),
            ] {
                match pair {
                    (None, None) => {}
                    (Some(a), Some(b)) => pending.push((a, b)),
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<V: Eq> Eq for Node<V> {}

impl<V: Hash> Hash for Node<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl<V> Node<V> {
    /// A deterministic hash of the whole tree rooted here, computed level by level as
    /// `17 * (hash(value) + hash(left) + hash(right))` with wrapping arithmetic. An absent value
    /// or child contributes 0. Equal trees always have equal structural hashes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Node;
    ///
    /// let a: Node<String> = Node::parse("a(b(c d) e)").unwrap();
    /// let b: Node<String> = Node::parse("a(b(c d) e)").unwrap();
    /// let c: Node<String> = Node::parse("a(b(c x) e)").unwrap();
    ///
    /// assert_eq!(a.structural_hash(), b.structural_hash());
    /// assert_ne!(a.structural_hash(), c.structural_hash());
    /// ```
    pub fn structural_hash(&self) -> u64
    where
        V: Hash,
    {
        // Post-order guarantees a node's subtree hashes are the topmost entries when we reach
        // it, right above left.
        let mut hashes: Vec<u64> = Vec::new();
        for node in self.post_order() {
            let right = match node.right {
                Some(_) => hashes.pop().unwrap_or_default(),
                None => 0,
            };
            let left = match node.left {
                Some(_) => hashes.pop().unwrap_or_default(),
                None => 0,
            };
            let sum = node.value_hash().wrapping_add(left).wrapping_add(right);
            hashes.push(HASH_FACTOR.wrapping_mul(sum));
        }

        hashes.pop().unwrap_or_default()
    }

    fn value_hash(&self) -> u64
    where
        V: Hash,
    {
        self.value.as_ref().map_or(0, |value| {
            let mut hasher = FxHasher::default();
            value.hash(&mut hasher);
            hasher.finish()
        })
    }
}
