//! Property tests for queries over randomly built trees.

use std::collections::BTreeSet;

use bramble_dom::{Attribute, DomTree, NodeId, Tag};
use bramble_query::{BreadthFirst, select_all};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

const TAGS: &[&str] = &["div", "p", "span", "h1", "a", "ul", "li", "x-card"];
const CLASSES: &[&str] = &["a", "b", "a b", " b  c ", ""];
const HREFS: &[&str] = &["", "http://example.com", "https://example.com/page", "#top"];
const TEXTS: &[&str] = &["hello", " ", "\n  ", "world"];

/// A `<html>` document with random elements, text and comments beneath it.
#[derive(Debug, Clone)]
struct ArbitraryTree {
    tree: DomTree,
    html: NodeId,
}

impl Arbitrary for ArbitraryTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut tree = DomTree::new();
        let html = tree.append_element(NodeId::ROOT, Tag::Html, Vec::new());
        let mut containers = vec![html];

        let count = usize::arbitrary(g) % (g.size() + 1);
        for _ in 0..count {
            let parent = containers[usize::arbitrary(g) % containers.len()];
            match u8::arbitrary(g) % 6 {
                0 => {
                    let text = g.choose(TEXTS).copied().unwrap_or_default();
                    let _ = tree.append_text(parent, text);
                }
                1 => {
                    let _ = tree.append_comment(parent, "note");
                }
                _ => {
                    let name = g.choose(TAGS).copied().unwrap_or("div");
                    let mut attrs = Vec::new();
                    if bool::arbitrary(g) {
                        let class = g.choose(CLASSES).copied().unwrap_or_default();
                        attrs.push(Attribute::new("class", class));
                    }
                    if bool::arbitrary(g) {
                        let href = g.choose(HREFS).copied().unwrap_or_default();
                        attrs.push(Attribute::new("href", href));
                    }
                    let id = tree.append_element(parent, Tag::from_name(name), attrs);
                    containers.push(id);
                }
            }
        }

        Self { tree, html }
    }
}

impl ArbitraryTree {
    fn query(&self, selector: &str) -> Vec<NodeId> {
        select_all(&self.tree, self.html, selector)
            .unwrap_or_else(|e| panic!("{selector:?}: {e}"))
    }

    fn elements(&self) -> Vec<NodeId> {
        BreadthFirst::new(&self.tree, self.html)
            .filter(|&id| self.tree.is_element(id))
            .collect()
    }

    fn tagged(&self, tag: &Tag) -> Vec<NodeId> {
        self.elements()
            .into_iter()
            .filter(|&id| self.tree.as_element(id).is_some_and(|e| e.tag == *tag))
            .collect()
    }

    fn has_tag(&self, id: NodeId, tag: &Tag) -> bool {
        self.tree.as_element(id).is_some_and(|e| e.tag == *tag)
    }

    /// Siblings before `id` in document order, found by scanning the
    /// parent's child list for `id` itself.
    fn earlier_siblings(&self, id: NodeId) -> &[NodeId] {
        let Some(parent) = self.tree.parent(id) else {
            return &[];
        };
        let siblings = self.tree.children(parent);
        let index = siblings.iter().position(|&s| s == id).unwrap_or(0);
        &siblings[..index]
    }

    fn depth(&self, id: NodeId) -> usize {
        self.tree.ancestors(id).count()
    }
}

fn as_set(ids: &[NodeId]) -> BTreeSet<NodeId> {
    ids.iter().copied().collect()
}

#[quickcheck]
fn type_selector_finds_exactly_tagged_elements(t: ArbitraryTree) -> bool {
    TAGS.iter().all(|&name| {
        let matches = t.query(name);
        matches == t.tagged(&Tag::from_name(name))
            && matches.windows(2).all(|w| t.depth(w[0]) <= t.depth(w[1]))
    })
}

#[quickcheck]
fn universal_matches_every_element(t: ArbitraryTree) -> bool {
    t.query("*") == t.elements()
}

#[quickcheck]
fn negation_is_complement_within_elements(t: ArbitraryTree) -> bool {
    let all = as_set(&t.query("*"));
    let h1 = as_set(&t.query("h1"));
    let not_h1 = as_set(&t.query("*:not(h1)"));
    not_h1 == all.difference(&h1).copied().collect()
}

#[quickcheck]
fn union_is_set_union_in_either_order(t: ArbitraryTree) -> bool {
    let div = as_set(&t.query("div"));
    let span = as_set(&t.query("span"));
    let expected: BTreeSet<NodeId> = div.union(&span).copied().collect();

    let forward = t.query("div, span");
    let backward = t.query("span, div");
    forward == backward && as_set(&forward) == expected
}

#[quickcheck]
fn descendant_matches_have_matching_ancestor(t: ArbitraryTree) -> bool {
    let expected: Vec<NodeId> = t
        .tagged(&Tag::Span)
        .into_iter()
        .filter(|&id| t.tree.ancestors(id).any(|a| t.has_tag(a, &Tag::Div)))
        .collect();
    t.query("div span") == expected
}

#[quickcheck]
fn child_matches_have_matching_parent(t: ArbitraryTree) -> bool {
    let expected: Vec<NodeId> = t
        .tagged(&Tag::Li)
        .into_iter()
        .filter(|&id| t.tree.parent(id).is_some_and(|p| t.has_tag(p, &Tag::Ul)))
        .collect();
    t.query("ul > li") == expected
}

#[quickcheck]
fn adjacent_matches_follow_nearest_element_sibling(t: ArbitraryTree) -> bool {
    let expected: Vec<NodeId> = t
        .tagged(&Tag::P)
        .into_iter()
        .filter(|&id| {
            t.earlier_siblings(id)
                .iter()
                .rev()
                .find(|&&s| t.tree.is_element(s))
                .is_some_and(|&s| t.has_tag(s, &Tag::H1))
        })
        .collect();
    t.query("h1 + p") == expected
}

#[quickcheck]
fn sibling_matches_follow_some_element_sibling(t: ArbitraryTree) -> bool {
    let expected: Vec<NodeId> = t
        .tagged(&Tag::P)
        .into_iter()
        .filter(|&id| t.earlier_siblings(id).iter().any(|&s| t.has_tag(s, &Tag::H1)))
        .collect();
    let general = t.query("h1 ~ p");

    general == expected && as_set(&t.query("h1 + p")).is_subset(&as_set(&general))
}

#[quickcheck]
fn empty_substring_values_never_match(t: ArbitraryTree) -> bool {
    [r#"[href^=""]"#, r#"[href$=""]"#, r#"[href*=""]"#]
        .iter()
        .all(|selector| t.query(selector).is_empty())
}

#[quickcheck]
fn class_selector_matches_whitespace_separated_words(t: ArbitraryTree) -> bool {
    let expected: Vec<NodeId> = t
        .elements()
        .into_iter()
        .filter(|&id| {
            t.tree
                .as_element(id)
                .is_some_and(|e| e.classes().any(|c| c == "b"))
        })
        .collect();
    t.query(".b") == expected
}

#[quickcheck]
fn queries_are_deterministic(t: ArbitraryTree) -> bool {
    ["*", "div p", "ul > li, a[href^=http]", ".a:not(span)"]
        .iter()
        .all(|selector| t.query(selector) == t.query(selector))
}
