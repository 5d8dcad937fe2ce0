//! Node implementation for the prefix dictionary.
//!
//! Every node is owned by exactly one parent (the root is owned by the
//! dictionary), so dropping an edge releases the whole subtree below it.

use fnv::FnvHashMap;

/// A node in the prefix dictionary.
///
/// Each edge is labelled with one character. A node is terminal when the path
/// from the root to it spells a stored word.
#[derive(Debug, Default, Clone)]
pub(crate) struct TrieNode {
    /// Map of characters to child nodes
    pub(crate) children: FnvHashMap<char, TrieNode>,

    /// Whether this node represents the end of a stored word
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty, non-terminal node.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached by `c`, if any.
    pub(crate) fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Follows `path` from this node without creating anything.
    pub(crate) fn descend(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(self, |node, c| node.child(c))
    }

    /// Mutable counterpart of [`TrieNode::descend`].
    pub(crate) fn descend_mut(&mut self, path: &str) -> Option<&mut TrieNode> {
        path.chars()
            .try_fold(self, |node, c| node.children.get_mut(&c))
    }

    /// Follows `path`, creating missing nodes along the way.
    pub(crate) fn descend_or_create(&mut self, path: &str) -> &mut TrieNode {
        path.chars().fold(self, |node, c| node.children.entry(c).or_default())
    }

    /// A childless, non-terminal node carries no information and must be pruned.
    pub(crate) fn is_dead(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Number of nodes in this subtree, this node included.
    pub(crate) fn subtree_size(&self) -> usize {
        let mut size = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            size += 1;
            stack.extend(node.children.values());
        }
        size
    }
}
