//! Node type for the character trie.
//!
//! Nodes never own each other directly. A node's children are arena handles
//! (`NodeId`) keyed by the character on the edge leading to them, so the
//! whole tree lives in one `NodeArena` owned by the `Trie`.

use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;

/// Handle to a node slot inside the trie's arena.
///
/// Handles are crate-internal: they are produced by the arena and never
/// handed to or accepted from callers of the public `Trie` API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(u32);

impl NodeId {
    /// The root node, which always occupies the first slot.
    pub const ROOT: NodeId = NodeId(0);

    /// Builds the handle for slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit in 32 bits, i.e. the trie would need
    /// more than `u32::MAX + 1` nodes.
    pub fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(raw) => NodeId(raw),
            Err(_) => panic!("trie node capacity exceeded: slot {} does not fit in u32", index),
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One position in the trie.
///
/// A node stands for the character sequence spelled by the edges from the
/// root down to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Child nodes indexed by the character on the connecting edge
    pub(crate) children: HashMap<char, NodeId>,

    /// Whether the sequence ending here was inserted as a complete word
    pub(crate) is_end_of_word: bool,
}

impl TrieNode {
    /// Creates a node with no children that does not end a word.
    pub fn new() -> Self {
        TrieNode {
            children: HashMap::new(),
            is_end_of_word: false,
        }
    }

    /// Returns the child reached by following `c`, if any.
    pub(crate) fn child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    /// Returns whether this node terminates an inserted word.
    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of outgoing edges.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// A dead node supports no word: it is a leaf and not terminal.
    /// Dead nodes other than the root are pruned by `Trie::delete`.
    pub fn is_dead(&self) -> bool {
        self.is_leaf() && !self.is_end_of_word
    }

    /// Resets this node to the empty state, keeping the map's allocation.
    pub(crate) fn reset(&mut self) {
        self.children.clear();
        self.is_end_of_word = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node() {
        let node = TrieNode::new();

        assert!(node.children.is_empty());
        assert!(!node.is_end_of_word());
        assert!(node.is_leaf());
        assert!(node.is_dead());
        assert_eq!(node, TrieNode::default());
    }

    #[test]
    fn test_terminal_leaf_is_not_dead() {
        let mut node = TrieNode::new();
        node.is_end_of_word = true;

        assert!(node.is_leaf());
        assert!(!node.is_dead());
    }

    #[test]
    fn test_inner_node_is_not_dead() {
        let mut node = TrieNode::new();
        node.children.insert('a', NodeId::from_index(1));

        assert!(!node.is_leaf());
        assert!(!node.is_dead());
        assert_eq!(node.child('a'), Some(NodeId::from_index(1)));
        assert_eq!(node.child('b'), None);
        assert_eq!(node.child_count(), 1);
    }

    #[test]
    fn test_reset() {
        let mut node = TrieNode::new();
        node.children.insert('x', NodeId::from_index(7));
        node.is_end_of_word = true;

        node.reset();

        assert!(node.is_dead());
    }

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId::ROOT.to_string(), "#0");
        assert_eq!(NodeId::from_index(42).index(), 42);
    }

    #[test]
    fn test_node_id_largest_index() {
        assert_eq!(NodeId::from_index(u32::MAX as usize).index(), u32::MAX as usize);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic(expected = "trie node capacity exceeded")]
    fn test_node_id_overflow_panics() {
        NodeId::from_index(u32::MAX as usize + 1);
    }
}
