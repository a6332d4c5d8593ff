//! Selector AST and matching.
//!
//! A parsed selector is a closed tree of predicates. Each variant knows how
//! to test a single node given read access to the surrounding tree; the
//! subject of the selector is always the node being tested, and combinators
//! look outward from it (up to ancestors, back to preceding siblings).

use std::fmt;
use std::str::FromStr;

use bramble_dom::{DomTree, NodeId, Tag};
use strum_macros::Display;

use crate::error::SelectorError;
use crate::parser::parse_selector;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators) and
/// the two set operators that join selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BinaryOp {
    /// `a, b`: either side matches.
    #[strum(to_string = ", ")]
    Union,
    /// `ab`: both sides match the same node.
    #[strum(to_string = "")]
    Intersection,
    /// `a > b`: the parent matches `a`.
    #[strum(to_string = " > ")]
    Child,
    /// `a b`: some ancestor matches `a`.
    #[strum(to_string = " ")]
    Descendant,
    /// `a + b`: the nearest preceding element sibling matches `a`.
    #[strum(to_string = " + ")]
    Adjacent,
    /// `a ~ b`: some preceding element sibling matches `a`.
    #[strum(to_string = " ~ ")]
    Sibling,
}

/// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AttributeOp {
    /// `[attr]`
    #[strum(to_string = "")]
    Exists,
    /// `[attr=value]`, also `#id`
    #[strum(to_string = "=")]
    Equals,
    /// `[attr~=value]`, also `.class`
    #[strum(to_string = "~=")]
    Listed,
    /// `[attr^=value]`
    #[strum(to_string = "^=")]
    Prefix,
    /// `[attr$=value]`
    #[strum(to_string = "$=")]
    Suffix,
    /// `[attr*=value]`
    #[strum(to_string = "*=")]
    Contains,
}

/// A condition on one attribute of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSelector {
    /// How the value is compared.
    pub op: AttributeOp,
    /// Attribute name, compared case-sensitively.
    pub name: String,
    /// Expected value. Empty for [`AttributeOp::Exists`].
    pub value: String,
}

impl AttributeSelector {
    /// Create an attribute selector.
    pub fn new(op: AttributeOp, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            op,
            name: name.into(),
            value: value.into(),
        }
    }

    /// Tests the first attribute named `self.name` on `node`.
    #[must_use]
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        let Some(actual) = tree
            .as_element(node)
            .and_then(|element| element.attribute(&self.name))
        else {
            return false;
        };
        let expected = self.value.as_str();

        match self.op {
            AttributeOp::Exists => true,
            AttributeOp::Equals => actual == expected,
            // Every whitespace character is a separator, so runs of whitespace
            // leave empty words behind.
            AttributeOp::Listed => actual.split(char::is_whitespace).any(|word| word == expected),
            // An empty substring would match everything; it matches nothing.
            AttributeOp::Prefix => !expected.is_empty() && actual.starts_with(expected),
            AttributeOp::Suffix => !expected.is_empty() && actual.ends_with(expected),
            AttributeOp::Contains => !expected.is_empty() && actual.contains(expected),
        }
    }
}

/// A parsed selector.
///
/// Built only by the parser (or by hand in tests) and never mutated. The
/// selector holds no reference into any tree, so one value can be matched
/// against any number of trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Two selectors joined by a combinator or set operator.
    Binary {
        /// How the two sides relate.
        op: BinaryOp,
        /// Left-hand selector; for combinators, the one tested on the related node.
        left: Box<Self>,
        /// Right-hand selector; for combinators, the one tested on the subject.
        right: Box<Self>,
    },
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    Tag(Tag),
    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    Attribute(AttributeSelector),
    /// [§ 4.3 :not()](https://www.w3.org/TR/selectors-4/#negation)
    Not(Box<Self>),
    /// [§ 5.2 Universal selector](https://www.w3.org/TR/selectors-4/#universal-selector)
    /// Any element, and nothing that is not an element.
    Universal,
}

impl Selector {
    /// Join two selectors.
    #[must_use]
    pub fn binary(op: BinaryOp, left: Self, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns `true` if `node` satisfies this selector.
    ///
    /// Matching only reads the tree. Cost is bounded by the depth of the
    /// node (ancestor walks) or the length of its sibling run.
    #[must_use]
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        match self {
            Self::Binary { op, left, right } => match op {
                BinaryOp::Union => left.matches(tree, node) || right.matches(tree, node),
                BinaryOp::Intersection => left.matches(tree, node) && right.matches(tree, node),

                // [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
                BinaryOp::Child => tree
                    .parent(node)
                    .is_some_and(|parent| left.matches(tree, parent) && right.matches(tree, node)),

                // [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
                BinaryOp::Descendant => {
                    right.matches(tree, node)
                        && tree.ancestors(node).any(|ancestor| left.matches(tree, ancestor))
                }

                // [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
                // Only element siblings count; text and comments in between are skipped.
                BinaryOp::Adjacent => {
                    right.matches(tree, node)
                        && tree
                            .preceding_siblings(node)
                            .find(|&sibling| tree.is_element(sibling))
                            .is_some_and(|sibling| left.matches(tree, sibling))
                }

                // [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
                BinaryOp::Sibling => {
                    right.matches(tree, node)
                        && tree
                            .preceding_siblings(node)
                            .filter(|&sibling| tree.is_element(sibling))
                            .any(|sibling| left.matches(tree, sibling))
                }
            },

            Self::Tag(tag) => tree.as_element(node).is_some_and(|element| element.tag == *tag),
            Self::Attribute(attribute) => attribute.matches(tree, node),
            Self::Not(inner) => tree.is_element(node) && !inner.matches(tree, node),
            Self::Universal => tree.is_element(node),
        }
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_selector(s)
    }
}

/// Renders the selector back to selector text.
///
/// Selectors produced by the parser render to text that parses back to an
/// equal selector. Attribute values are always quoted.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary { op, left, right } => write!(f, "{left}{op}{right}"),
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::Attribute(AttributeSelector { op, name, value }) => match op {
                AttributeOp::Exists => write!(f, "[{name}]"),
                _ if value.contains('"') => write!(f, "[{name}{op}'{value}']"),
                _ => write!(f, "[{name}{op}\"{value}\"]"),
            },
            Self::Not(inner) => write!(f, ":not({inner})"),
            Self::Universal => f.write_str("*"),
        }
    }
}
