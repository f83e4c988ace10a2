//! The [`Node`] type: a value plus up to two owned child subtrees.
//!
//! There is no separate "tree" type. Any `Node` is the root of the tree made
//! up of it and its descendants.
//!
//! # Examples
//!
//! ```
//! use bintree::Node;
//!
//! let mut root = Node::new("one");
//! root.set_left_child(Some(Node::new("two")));
//! root.set_right_child(Some(Node::with_children(
//!     "three",
//!     Some(Node::new("four")),
//!     Some(Node::new("five")),
//! )));
//!
//! assert_eq!(root.size(), 5);
//! assert_eq!(root.height(), 2);
//! assert_eq!(root.to_string(), "one(two three(four five))");
//! ```
//!
//! Children are owned, so a node can never end up below itself. Attaching a
//! tree underneath one of its own descendants is rejected by the compiler:
//!
//! ```compile_fail
//! use bintree::Node;
//!
//! let mut root = Node::new("root");
//! root.set_left_child(Some(Node::new("a")));
//!
//! let a = root.left_child_mut().unwrap();
//! a.set_left_child(Some(root));
//! ```

use std::ptr;

use crate::error::{Side, TreeError};

/// A node of a binary tree. Each node may hold a value (a node without one is
/// "empty") and owns its left and right subtrees.
#[derive(Clone, Debug)]
pub struct Node<V> {
    pub(crate) value: Option<V>,
    pub(crate) left: Option<Box<Node<V>>>,
    pub(crate) right: Option<Box<Node<V>>>,
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V> Drop for Node<V> {
    // Detach the children onto a heap stack so dropping a degenerate (list-like) tree doesn't
    // recurse once per level.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<V>>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<V> Node<V> {
    /// Creates a leaf holding `value`.
    pub fn new(value: V) -> Self {
        Self {
            value: Some(value),
            left: None,
            right: None,
        }
    }

    /// Creates a leaf without a value.
    pub fn empty() -> Self {
        Self {
            value: None,
            left: None,
            right: None,
        }
    }

    /// Creates a node holding `value` with the given subtrees.
    pub fn with_children(value: V, left: Option<Node<V>>, right: Option<Node<V>>) -> Self {
        Self {
            value: Some(value),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node, if any.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// A mutable reference to the value stored in this node, if any.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    /// Replaces the value of this node, returning the old one. Passing `None` makes the node
    /// empty.
    pub fn set_value(&mut self, value: Option<V>) -> Option<V> {
        std::mem::replace(&mut self.value, value)
    }

    /// The left subtree, if any.
    pub fn left_child(&self) -> Option<&Node<V>> {
        self.left.as_deref()
    }

    /// The right subtree, if any.
    pub fn right_child(&self) -> Option<&Node<V>> {
        self.right.as_deref()
    }

    /// A mutable reference to the left subtree, if any.
    pub fn left_child_mut(&mut self) -> Option<&mut Node<V>> {
        self.left.as_deref_mut()
    }

    /// A mutable reference to the right subtree, if any.
    pub fn right_child_mut(&mut self) -> Option<&mut Node<V>> {
        self.right.as_deref_mut()
    }

    /// The subtree in the given slot, if any.
    pub fn child(&self, side: Side) -> Option<&Node<V>> {
        match side {
            Side::Left => self.left_child(),
            Side::Right => self.right_child(),
        }
    }

    /// A mutable reference to the subtree in the given slot, if any.
    pub fn child_mut(&mut self, side: Side) -> Option<&mut Node<V>> {
        match side {
            Side::Left => self.left_child_mut(),
            Side::Right => self.right_child_mut(),
        }
    }

    /// Attaches `child` as the left subtree and hands back the subtree it replaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Node;
    ///
    /// let mut root = Node::new(1);
    /// assert!(root.set_left_child(Some(Node::new(2))).is_none());
    ///
    /// let old = root.set_left_child(Some(Node::new(3)));
    /// assert_eq!(old.and_then(|n| n.value().copied()), Some(2));
    /// assert_eq!(root.left_child().and_then(Node::value), Some(&3));
    /// ```
    pub fn set_left_child(&mut self, child: Option<Node<V>>) -> Option<Node<V>> {
        self.replace_child(Side::Left, child)
    }

    /// Attaches `child` as the right subtree and hands back the subtree it replaces.
    pub fn set_right_child(&mut self, child: Option<Node<V>>) -> Option<Node<V>> {
        self.replace_child(Side::Right, child)
    }

    /// Detaches and returns the left subtree.
    ///
    /// # Errors
    ///
    /// [`TreeError::NoSuchChild`] when there is no left child.
    pub fn remove_left_child(&mut self) -> Result<Node<V>, TreeError> {
        self.remove_child(Side::Left)
    }

    /// Detaches and returns the right subtree.
    ///
    /// # Errors
    ///
    /// [`TreeError::NoSuchChild`] when there is no right child.
    pub fn remove_right_child(&mut self) -> Result<Node<V>, TreeError> {
        self.remove_child(Side::Right)
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<Box<Node<V>>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn replace_child(&mut self, side: Side, child: Option<Node<V>>) -> Option<Node<V>> {
        std::mem::replace(self.slot_mut(side), child.map(Box::new)).map(|old| *old)
    }

    fn remove_child(&mut self, side: Side) -> Result<Node<V>, TreeError> {
        match self.slot_mut(side).take() {
            Some(child) => Ok(*child),
            None => {
                log::debug!("refusing to remove absent {side} child");
                Err(TreeError::NoSuchChild(side))
            }
        }
    }

    /// The present children of this node, left first.
    pub(crate) fn children(&self) -> impl DoubleEndedIterator<Item = &Node<V>> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    /// How many immediate children this node has: 0, 1 or 2.
    pub fn number_of_children(&self) -> usize {
        self.children().count()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.number_of_children() == 0
    }

    /// The number of nodes in the tree rooted here, including this node.
    pub fn size(&self) -> usize {
        self.pre_order().count()
    }

    /// Whether `target` is this very node or one of its descendants. This compares identity,
    /// not values: a distinct node holding an equal value is not contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Node;
    ///
    /// let tree = Node::with_children("a", Some(Node::new("b")), None);
    /// let b = tree.left_child().unwrap();
    ///
    /// assert!(tree.contains(b));
    /// assert!(tree.contains(&tree));
    /// assert!(!tree.contains(&Node::new("b")));
    /// assert!(!b.contains(&tree));
    /// ```
    pub fn contains(&self, target: &Node<V>) -> bool {
        self.pre_order().any(|node| ptr::eq(node, target))
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has
    /// height 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending = vec![(self, 0)];
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.children().map(|child| (child, depth + 1)));
        }

        height
    }

    /// Whether the heights of the two immediate subtrees differ by less than 2.
    ///
    /// Only this node's children are compared. The subtrees themselves may be arbitrarily
    /// lopsided.
    pub fn is_balanced(&self) -> bool {
        let left = height_of(self.left_child());
        let right = height_of(self.right_child());
        (left - right).abs() < 2
    }

    /// All leaves of the tree rooted here, left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Node;
    ///
    /// let tree: Node<String> = Node::parse("a(b(d e) c(f g))").unwrap();
    /// let leaves: Vec<_> = tree.leaves().into_iter().filter_map(Node::value).collect();
    /// assert_eq!(leaves, ["d", "e", "f", "g"]);
    /// ```
    pub fn leaves(&self) -> Vec<&Node<V>> {
        self.pre_order().filter(|node| node.is_leaf()).collect()
    }

    /// Whether the left subtree is structurally equal to the right subtree. A node without
    /// children is symmetric; a node with exactly one child is not.
    pub fn is_symmetric(&self) -> bool
    where
        V: PartialEq,
    {
        match (self.left_child(), self.right_child()) {
            (None, None) => true,
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }

    /// Drops both subtrees and the value, leaving an empty leaf.
    pub fn clear(&mut self) {
        self.value = None;
        self.left = None;
        self.right = None;
    }
}

/// The height of an optional subtree: the subtree's [`Node::height`], or -1 when there is no
/// subtree at all.
pub fn height_of<V>(node: Option<&Node<V>>) -> isize {
    node.map_or(-1, |node| node.height() as isize)
}
