/*!
Nested documents shared by the integration tests
*/
#![allow(dead_code)]

use recursive_iter::cursor::EntryCursor;
use recursive_iter::{Branches, Mode, RecursiveIterator};

/// A nested document: either a number or a list of named children
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Tree {
    Leaf(i64),
    Branch(Vec<(String, Tree)>),
}

impl Tree {
    /// Get the children of this tree, which are empty for a leaf
    pub fn entries(&self) -> &[(String, Tree)] {
        match self {
            Tree::Branch(entries) => entries,
            Tree::Leaf(_) => &[],
        }
    }
    /// Get the number of nodes below this tree, excluding itself
    pub fn descendants(&self) -> usize {
        self.entries()
            .iter()
            .map(|(_, child)| 1 + child.descendants())
            .sum()
    }
}

pub fn leaf(key: &str, value: i64) -> (String, Tree) {
    (key.to_owned(), Tree::Leaf(value))
}

pub fn branch(key: &str, children: Vec<(String, Tree)>) -> (String, Tree) {
    (key.to_owned(), Tree::Branch(children))
}

/// Treats every `Tree::Branch`, including empty ones, as a branch
#[derive(Debug, Copy, Clone, Default)]
pub struct TreeBranches;

impl<'a> Branches<&'a Tree> for TreeBranches {
    type Children = EntryCursor<'a, String, Tree>;
    fn has_children(&mut self, value: &&'a Tree) -> bool {
        matches!(value, Tree::Branch(_))
    }
    fn children(&mut self, value: &&'a Tree) -> EntryCursor<'a, String, Tree> {
        let tree: &'a Tree = *value;
        EntryCursor::new(tree.entries())
    }
}

pub type TreeWalk<'a> = RecursiveIterator<EntryCursor<'a, String, Tree>, TreeBranches>;

pub fn walk(root: &[(String, Tree)], mode: Mode) -> TreeWalk<'_> {
    RecursiveIterator::new(EntryCursor::new(root), TreeBranches, mode)
}

/// Summarize an emitted element: branches have no number attached
pub fn summary((key, value): (&String, &Tree)) -> (String, Option<i64>) {
    match value {
        Tree::Leaf(n) => (key.clone(), Some(*n)),
        Tree::Branch(_) => (key.clone(), None),
    }
}

pub fn emitted(root: &[(String, Tree)], mode: Mode) -> Vec<(String, Option<i64>)> {
    walk(root, mode).map(summary).collect()
}

pub fn expect(pairs: &[(&str, Option<i64>)]) -> Vec<(String, Option<i64>)> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

/// Get the key the walk is positioned on, if any
pub fn key_of<'w>(walk: &'w TreeWalk<'_>) -> Option<&'w str> {
    walk.key().map(|key| key.as_str())
}
