//! Rendering trees as text.
//!
//! [`Display`][fmt::Display] produces the compact one-line form that
//! [`Node::parse`] reads back, e.g. `one(two three(four five))`. Only a node with
//! both children writes a children list; a node with a single child is written as
//! its bare value and the child is lost. Empty values are written as nothing, so such
//! trees don't read back either: `(2 3)` is rejected, and in `1( 3)` the right
//! child comes back as the only, left, child.
//!
//! [`Node::pretty`] produces an indented multi-line form meant for people.

use std::fmt;

use crate::Node;

/// Written once per ancestor in front of each line of [`Node::pretty`].
const INDENT: &str = "|\t";

impl<V: fmt::Display> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = &self.value {
            write!(f, "{value}")?;
        }
        if let (Some(left), Some(right)) = (&self.left, &self.right) {
            write!(f, "({left} {right})")?;
        }
        Ok(())
    }
}

impl<V: fmt::Display> Node<V> {
    /// Renders the tree one node per line in pre-order, each line indented by `"|\t"` per
    /// ancestor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Node;
    ///
    /// let tree: Node<String> = Node::parse("one(two three(four five))").unwrap();
    /// assert_eq!(
    ///     tree.pretty(),
    ///     "one\n|\ttwo\n|\tthree\n|\t|\tfour\n|\t|\tfive\n"
    /// );
    /// ```
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        let mut pending = vec![(self, 0)];
        while let Some((node, depth)) = pending.pop() {
            out.push_str(&INDENT.repeat(depth));
            if let Some(value) = &node.value {
                out.push_str(&value.to_string());
            }
            out.push('\n');
            pending.extend(node.children().rev().map(|child| (child, depth + 1)));
        }

        out
    }
}
