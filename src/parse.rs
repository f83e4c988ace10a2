//! Reading trees from their one-line text form.
//!
//! The grammar is
//!
//! ```text
//! tree  := value | value "(" tree (" " tree)? ")"
//! value := one or more characters other than whitespace, "(" and ")"
//! ```
//!
//! so `one(two three(four five))` is a root `one` with a leaf `two` on the left and
//! a subtree `three(four five)` on the right. A children list with one entry sets
//! only the left child. There is no escaping.
//!
//! # Examples
//!
//! ```
//! use bintree::{Node, ParseConfig, Parser};
//!
//! let tree: Node<u32> = "1(2 3(4 5))".parse().unwrap();
//! assert_eq!(tree.size(), 5);
//!
//! let shallow = Parser::new(ParseConfig::default().with_max_depth(1));
//! assert!(shallow.parse::<u32>("1(2 3)").is_ok());
//! assert!(shallow.parse::<u32>("1(2 3(4 5))").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Malformed, TreeError};
use crate::Node;

/// Settings for a [`Parser`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// How many levels of children may be nested below the root. Parsing recurses once per
    /// level, so this bounds stack use on hostile input.
    pub max_depth: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

impl ParseConfig {
    /// Returns this config with `max_depth` replaced.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth }
    }
}

/// Turns tree descriptions into [`Node`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct Parser {
    config: ParseConfig,
}

impl Parser {
    /// Creates a parser using `config`.
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// The settings this parser runs with.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parses `text` into a tree, converting each value with [`FromStr`].
    ///
    /// # Errors
    ///
    /// [`TreeError::MalformedTreeDescription`] when `text` doesn't follow the grammar, when a
    /// children list holds anything but one or two children, when a value doesn't convert, or
    /// when the children are nested deeper than [`ParseConfig::max_depth`].
    pub fn parse<V>(&self, text: &str) -> Result<Node<V>, TreeError>
    where
        V: FromStr,
        V::Err: fmt::Display,
    {
        self.parse_at(text, 0)
    }

    fn parse_at<V>(&self, text: &str, depth: usize) -> Result<Node<V>, TreeError>
    where
        V: FromStr,
        V::Err: fmt::Display,
    {
        let text = text.trim();
        if depth > self.config.max_depth {
            return Err(reject(
                text,
                Malformed::TooDeep {
                    limit: self.config.max_depth,
                },
            ));
        }

        let Some(open) = text.find('(') else {
            return parse_value(text)
                .map(Node::new)
                .map_err(|reason| reject(text, reason));
        };
        let value = parse_value(&text[..open]).map_err(|reason| reject(text, reason))?;
        let children = text[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| reject(text, Malformed::MissingClosingParen))?;

        match tokenize_children(children)
            .map_err(|reason| reject(text, reason))?
            .as_slice()
        {
            [left] => Ok(Node::with_children(
                value,
                Some(self.parse_at(left, depth + 1)?),
                None,
            )),
            [left, right] => Ok(Node::with_children(
                value,
                Some(self.parse_at(left, depth + 1)?),
                Some(self.parse_at(right, depth + 1)?),
            )),
            tokens => Err(reject(text, Malformed::ChildCount(tokens.len()))),
        }
    }
}

impl<V> Node<V> {
    /// Parses `text` with the default [`ParseConfig`]. See [`Parser::parse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::Node;
    ///
    /// let tree: Node<String> = Node::parse("a(b c)").unwrap();
    /// assert_eq!(tree.left_child().and_then(Node::value).unwrap(), "b");
    /// assert_eq!(tree.right_child().and_then(Node::value).unwrap(), "c");
    ///
    /// assert!(Node::<String>::parse("a(b c d)").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, TreeError>
    where
        V: FromStr,
        V::Err: fmt::Display,
    {
        Parser::default().parse(text)
    }
}

impl<V> FromStr for Node<V>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn reject(text: &str, reason: Malformed) -> TreeError {
    log::debug!("rejecting tree description {text:?}: {reason}");
    TreeError::MalformedTreeDescription {
        description: text.to_string(),
        reason,
    }
}

fn parse_value<V>(text: &str) -> Result<V, Malformed>
where
    V: FromStr,
    V::Err: fmt::Display,
{
    let text = text.trim();
    if text.is_empty() {
        return Err(Malformed::EmptyValue);
    }
    if let Some(c) = text
        .chars()
        .find(|&c| c.is_whitespace() || c == '(' || c == ')')
    {
        return Err(Malformed::ReservedCharacter(c));
    }

    text.parse()
        .map_err(|e: V::Err| Malformed::InvalidValue(e.to_string()))
}

/// Splits a children list on the whitespace that sits outside any parentheses, so
/// `"b(d e) c"` becomes `["b(d e)", "c"]`.
fn tokenize_children(children: &str) -> Result<Vec<&str>, Malformed> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (i, c) in children.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1).ok_or(Malformed::UnbalancedParens)?,
            c if c.is_whitespace() && depth == 0 => {
                if let Some(start) = start.take() {
                    tokens.push(&children[start..i]);
                }
                continue;
            }
            _ => {}
        }
        start.get_or_insert(i);
    }
    if depth != 0 {
        return Err(Malformed::UnbalancedParens);
    }
    if let Some(start) = start {
        tokens.push(&children[start..]);
    }

    log::trace!("split children {children:?} into {tokens:?}");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(text: &str) -> Malformed {
        match Node::<String>::parse(text) {
            Err(TreeError::MalformedTreeDescription { reason, .. }) => reason,
            other => panic!("expected {text:?} to be rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_tokenize_children() {
        assert_eq!(tokenize_children("b c"), Ok(vec!["b", "c"]));
        assert_eq!(tokenize_children("  b   c  "), Ok(vec!["b", "c"]));
        assert_eq!(
            tokenize_children("b(d e) c(f(h i) g)"),
            Ok(vec!["b(d e)", "c(f(h i) g)"])
        );
        assert_eq!(tokenize_children("b(d   e)"), Ok(vec!["b(d   e)"]));
        assert_eq!(tokenize_children("b\tc\nd"), Ok(vec!["b", "c", "d"]));
        assert_eq!(tokenize_children(""), Ok(vec![]));
        assert_eq!(tokenize_children("b) c"), Err(Malformed::UnbalancedParens));
        assert_eq!(tokenize_children("b(c d"), Err(Malformed::UnbalancedParens));
    }

    #[test]
    fn test_parse_leaf() {
        assert_eq!(Node::parse("x"), Ok(Node::new("x".to_string())));
        assert_eq!(Node::parse("  x \n"), Ok(Node::new("x".to_string())));
    }

    #[test]
    fn test_parse_children() {
        let tree: Node<String> = Node::parse("one(two three(four(six seven) five))").unwrap();
        assert_eq!(tree.size(), 7);
        assert_eq!(tree.value().unwrap(), "one");

        let three = tree.right_child().unwrap();
        assert_eq!(three.value().unwrap(), "three");
        assert_eq!(three.left_child().unwrap().to_string(), "four(six seven)");
    }

    #[test]
    fn test_parse_single_child_is_left() {
        let tree: Node<String> = Node::parse("a(b)").unwrap();
        assert_eq!(tree.left_child().and_then(Node::value).unwrap(), "b");
        assert!(tree.right_child().is_none());
    }

    #[test]
    fn test_parse_typed_values() {
        let tree: Node<i64> = "-1(2 3)".parse().unwrap();
        assert_eq!(tree.value(), Some(&-1));
        assert_eq!(tree.right_child().and_then(Node::value), Some(&3));

        assert!(matches!(
            malformed_typed::<i64>("1(x 3)"),
            Malformed::InvalidValue(_)
        ));
    }

    fn malformed_typed<V>(text: &str) -> Malformed
    where
        V: FromStr + fmt::Debug,
        V::Err: fmt::Display,
    {
        match Parser::default().parse::<V>(text) {
            Err(TreeError::MalformedTreeDescription { reason, .. }) => reason,
            other => panic!("expected {text:?} to be rejected, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_child_count() {
        assert_eq!(malformed("a(b c d)"), Malformed::ChildCount(3));
        assert_eq!(malformed("a(b(x y z) c)"), Malformed::ChildCount(3));
        assert_eq!(malformed("a()"), Malformed::ChildCount(0));
        assert_eq!(malformed("a(  )"), Malformed::ChildCount(0));
    }

    #[test]
    fn test_parse_rejects_bad_structure() {
        assert_eq!(malformed(""), Malformed::EmptyValue);
        assert_eq!(malformed("   "), Malformed::EmptyValue);
        assert_eq!(malformed("(b c)"), Malformed::EmptyValue);
        assert_eq!(malformed("a(b (c d))"), Malformed::EmptyValue);
        assert_eq!(malformed("a(b c"), Malformed::MissingClosingParen);
        assert_eq!(malformed("a(b c) d"), Malformed::MissingClosingParen);
        assert_eq!(malformed("a(b c))"), Malformed::UnbalancedParens);
        assert_eq!(malformed("a(b c)(d e)"), Malformed::UnbalancedParens);
        assert_eq!(malformed("a b"), Malformed::ReservedCharacter(' '));
        assert_eq!(malformed("a)"), Malformed::ReservedCharacter(')'));
    }

    #[test]
    fn test_error_names_the_rejected_part() {
        let err = Node::<String>::parse("a(b(x y z) c)").unwrap_err();
        assert_eq!(
            err,
            TreeError::MalformedTreeDescription {
                description: "b(x y z)".to_string(),
                reason: Malformed::ChildCount(3),
            }
        );
        assert_eq!(
            err.to_string(),
            "malformed tree description \"b(x y z)\": expected 1 or 2 children, found 3"
        );
    }

    #[test]
    fn test_depth_limit() {
        let nested = "a(".repeat(10) + "z" + &")".repeat(10);

        let parser = Parser::new(ParseConfig::default().with_max_depth(10));
        assert_eq!(parser.parse::<String>(&nested).unwrap().height(), 10);

        let parser = Parser::new(ParseConfig::default().with_max_depth(9));
        assert_eq!(
            parser.parse::<String>(&nested).unwrap_err(),
            TreeError::MalformedTreeDescription {
                description: "z".to_string(),
                reason: Malformed::TooDeep { limit: 9 },
            }
        );

        let parser = Parser::new(ParseConfig::default().with_max_depth(0));
        assert!(parser.parse::<String>("a").is_ok());
        assert!(parser.parse::<String>("a(b)").is_err());
        assert_eq!(parser.config().max_depth, 0);
    }

    #[test]
    fn test_round_trip() {
        for text in [
            "x",
            "a(b c)",
            "one(two three(four(six seven) five))",
            "10(5(2(1 3) 8(6 9)) 15(12(11 13) 18(16 20)))",
        ] {
            let tree: Node<String> = Node::parse(text).unwrap();
            assert_eq!(tree.to_string(), text);
            assert_eq!(Node::parse(&tree.to_string()), Ok(tree));
        }
    }
}
