//! CSS selector parsing and matching over Bramble document trees.
//!
//! # Scope
//!
//! This crate implements a subset of
//! [Selectors Level 3](https://www.w3.org/TR/selectors-3/):
//! - Type, universal, ID, class, and attribute selectors
//!   (`[a]`, `[a=v]`, `[a~=v]`, `[a^=v]`, `[a$=v]`, `[a*=v]`)
//! - Compound selectors (`div.note#intro`)
//! - Combinators: descendant, child (`>`), next-sibling (`+`),
//!   subsequent-sibling (`~`)
//! - Selector groups (`h1, h2`) and `:not(...)`
//!
//! # Not Implemented
//!
//! - Structural pseudo-classes (`:first-child`, `:nth-child()`, ...). These
//!   are rejected with [`SelectorError::PseudoClassUnimplemented`], never
//!   ignored.
//! - Escape sequences in identifiers and strings, rejected with
//!   [`SelectorError::EscapingUnimplemented`].
//! - Specificity and the cascade.
//!
//! # Example
//!
//! ```
//! use bramble_dom::{DomTree, NodeId, Tag};
//! use bramble_query::select_all;
//!
//! let mut tree = DomTree::new();
//! let html = tree.append_element(NodeId::ROOT, Tag::Html, Vec::new());
//! let body = tree.append_element(html, Tag::Body, Vec::new());
//! let h1 = tree.append_element(body, Tag::H1, Vec::new());
//!
//! assert_eq!(select_all(&tree, html, "body > h1").unwrap(), vec![h1]);
//! ```

/// Selector parse errors.
pub mod error;
/// Recursive-descent selector parser.
pub mod parser;
mod scanner;
/// Selector AST and matching.
pub mod selector;
/// Breadth-first query entry points.
pub mod traversal;

pub use error::{InvalidInputKind, SelectorError};
pub use parser::{SelectorParser, parse_selector};
pub use selector::{AttributeOp, AttributeSelector, BinaryOp, Selector};
pub use traversal::{BreadthFirst, find_all, find_first, select_all, select_first};
