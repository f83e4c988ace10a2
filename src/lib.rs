//! This crate exposes a generic binary tree node, usable as a plain binary tree
//! or, when its values are ordered, as a Binary Search Tree (BST).
//!
//! ## Binary Tree
//!
//! A binary tree is defined recursively using the notion of a [`Node`]. A `Node`
//! may store a value and owns up to two child `Node`s, its left and right
//! subtrees. There is no separate tree type: every `Node` is the root of the tree
//! formed by itself and its descendants.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because a `Node` owns its children, a `Node` can never be its own descendant.
//!
//! ## Binary Search Tree
//!
//! When, for every `Node`, all values in its left subtree are smaller than its own
//! value and all values in its right subtree are larger, the tree is a BST. An
//! in-order traversal then visits the values in sorted order and
//! [`Node::kth_smallest`]/[`Node::kth_largest`] find order statistics by counting
//! subtree sizes instead of sorting.
//!
//! ## Text form
//!
//! Trees can be written as `value(left right)`, e.g.
//! `one(two three(four five))`. See [`parse`] for the grammar and [`Node::pretty`]
//! for a multi-line rendering.
//!
//! ```
//! use bintree::Node;
//!
//! let tree: Node<String> = Node::parse("a(b(d e) c(f g))").unwrap();
//!
//! assert_eq!(tree.size(), 7);
//! assert_eq!(tree.height(), 2);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.to_string(), "a(b(d e) c(f g))");
//! assert_ne!(tree, Node::parse("a(c(f g) b(d e))").unwrap());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod cmp;
pub mod error;
pub mod node;
mod order;
pub mod parse;
mod text;
pub mod traverse;


pub use error::{Malformed, Side, TreeError};
pub use node::{height_of, Node};
pub use parse::{ParseConfig, Parser};
