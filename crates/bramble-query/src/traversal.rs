//! Breadth-first query entry points.
//!
//! Results come back in level order (every match at depth `n` before any
//! match at depth `n + 1`), not in document order.

use std::collections::VecDeque;

use bramble_dom::{DomTree, NodeId, NodeType};

use crate::error::SelectorError;
use crate::parser::parse_selector;
use crate::selector::Selector;

/// Level-order iterator over a subtree, starting with its root.
///
/// Only element nodes contribute their children; every other node kind,
/// the document included, is a leaf. The tree must be acyclic; no cycle detection is done.
pub struct BreadthFirst<'a> {
    tree: &'a DomTree,
    queue: VecDeque<NodeId>,
}

impl<'a> BreadthFirst<'a> {
    /// Start a traversal at `root`.
    #[must_use]
    pub fn new(tree: &'a DomTree, root: NodeId) -> Self {
        Self {
            tree,
            queue: VecDeque::from([root]),
        }
    }
}

impl Iterator for BreadthFirst<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.queue.pop_front()?;
        if let Some(node) = self.tree.get(id)
            && matches!(node.node_type, NodeType::Element(_))
        {
            self.queue.extend(node.children.iter().copied());
        }
        Some(id)
    }
}

/// All nodes under (and including) `root` that match `selector`, in
/// breadth-first order.
#[must_use]
pub fn find_all(tree: &DomTree, root: NodeId, selector: &Selector) -> Vec<NodeId> {
    BreadthFirst::new(tree, root)
        .filter(|&id| selector.matches(tree, id))
        .collect()
}

/// The first node in breadth-first order under (and including) `root` that
/// matches `selector`.
#[must_use]
pub fn find_first(tree: &DomTree, root: NodeId, selector: &Selector) -> Option<NodeId> {
    BreadthFirst::new(tree, root).find(|&id| selector.matches(tree, id))
}

/// Parse `selector` and run [`find_all`].
///
/// # Errors
///
/// Returns the parse error if `selector` is not a valid selector; the tree
/// is not visited in that case.
pub fn select_all(tree: &DomTree, root: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
    let selector = parse_selector(selector)?;
    Ok(find_all(tree, root, &selector))
}

/// Parse `selector` and run [`find_first`].
///
/// # Errors
///
/// Returns the parse error if `selector` is not a valid selector.
pub fn select_first(
    tree: &DomTree,
    root: NodeId,
    selector: &str,
) -> Result<Option<NodeId>, SelectorError> {
    let selector = parse_selector(selector)?;
    Ok(find_first(tree, root, &selector))
}
