//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides insertion, exact
//! lookup, prefix queries and deletion over raw `char` sequences.

use std::iter::FromIterator;

use log::{debug, trace};

use crate::arena::NodeArena;
use crate::node::{NodeId, TrieNode};

/// A mutable prefix tree over characters.
///
/// Every edge is labelled with one `char`, and every path from the root
/// spells a prefix of some stored word. Shared prefixes are stored once.
/// Deleting a word prunes the nodes that no longer lead to any word, so the
/// tree never keeps dead branches around.
///
/// Characters are compared exactly as given: no case folding and no Unicode
/// normalization.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    /// Node storage; slot 0 is the root, representing the empty prefix
    nodes: NodeArena,
}

impl Trie {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// assert_eq!(trie.node_count(), 1);
    /// ```
    pub fn new() -> Self {
        Trie {
            nodes: NodeArena::new(),
        }
    }

    /// Creates an empty trie with room for `nodes` nodes before reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        Trie {
            nodes: NodeArena::with_capacity(nodes),
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        self.nodes.get(NodeId::ROOT)
    }

    /// Returns the node reached by following `prefix` from the root, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello");
    /// trie.insert("help");
    ///
    /// assert_eq!(trie.node_at("hel").map(|n| n.child_count()), Some(2));
    /// assert!(trie.node_at("hello").unwrap().is_end_of_word());
    /// assert!(trie.node_at("hex").is_none());
    /// ```
    pub fn node_at(&self, prefix: &str) -> Option<&TrieNode> {
        self.find(prefix).map(|id| self.nodes.get(id))
    }

    /// Inserts `word`, creating only the nodes missing along its path.
    ///
    /// Inserting a word that is already present changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("car");
    /// trie.insert("cart");
    ///
    /// // "car" is shared, only the 't' node is new
    /// assert_eq!(trie.node_count(), 5);
    /// ```
    pub fn insert(&mut self, word: &str) {
        let mut current = NodeId::ROOT;

        for c in word.chars() {
            current = match self.nodes.get(current).child(c) {
                Some(child) => child,
                None => {
                    let child = self.nodes.alloc();
                    self.nodes.get_mut(current).children.insert(c, child);
                    trace!("created node {} for {:?} under {}", child, c, current);
                    child
                }
            };
        }

        self.nodes.get_mut(current).is_end_of_word = true;
    }

    /// Returns `true` if `word` was inserted and has not been deleted since.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello");
    ///
    /// assert!(trie.search("hello"));
    /// assert!(!trie.search("hell"));
    /// assert!(!trie.search("world"));
    /// ```
    pub fn search(&self, word: &str) -> bool {
        self.find(word)
            .map(|id| self.nodes.get(id).is_end_of_word())
            .unwrap_or(false)
    }

    /// Returns `true` if `prefix` is reachable from the root, that is, if
    /// some stored word starts with it.
    ///
    /// The empty prefix is always reachable, even in an empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello");
    ///
    /// assert!(trie.starts_with("hel"));
    /// assert!(trie.starts_with("hello"));
    /// assert!(!trie.starts_with("help"));
    /// ```
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Removes `word` if present and prunes the nodes left without purpose.
    ///
    /// Walking back up from the word's last node, every node that ends up
    /// with no children and no terminal flag is detached from its parent and
    /// released. Pruning stops at the first node still serving another word,
    /// and the root is never released. Deleting an absent word is a no-op.
    ///
    /// The unwind is iterative, so very long words do not grow the call stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use char_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("car");
    /// trie.insert("cart");
    ///
    /// trie.delete("car");
    /// assert!(!trie.search("car"));
    /// assert!(trie.search("cart"));
    /// assert!(trie.starts_with("car"));
    ///
    /// trie.delete("cart");
    /// assert!(!trie.starts_with("c"));
    /// assert!(trie.is_empty());
    /// ```
    pub fn delete(&mut self, word: &str) {
        // Edges (parent, char) from the root down to the word's last node
        let mut path: Vec<(NodeId, char)> = Vec::new();
        let mut current = NodeId::ROOT;

        for c in word.chars() {
            match self.nodes.get(current).child(c) {
                Some(child) => {
                    path.push((current, c));
                    current = child;
                }
                None => {
                    debug!("delete of {:?}: path absent, nothing to do", word);
                    return;
                }
            }
        }

        let last = self.nodes.get_mut(current);
        if !last.is_end_of_word {
            debug!("delete of {:?}: not a stored word, nothing to do", word);
            return;
        }
        last.is_end_of_word = false;

        let mut pruned = 0usize;
        let mut child = current;
        while let Some((parent, c)) = path.pop() {
            if !self.nodes.get(child).is_dead() {
                break;
            }
            self.nodes.get_mut(parent).children.remove(&c);
            self.nodes.release(child);
            trace!("pruned node {} ({:?}) from {}", child, c, parent);
            pruned += 1;
            child = parent;
        }

        debug!("deleted {:?}, pruned {} node(s)", word, pruned);
    }

    /// Number of nodes currently held, the root included.
    ///
    /// An empty trie has exactly one node.
    pub fn node_count(&self) -> usize {
        self.nodes.live()
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.root().is_dead()
    }

    /// Removes every word, leaving only the root.
    pub fn clear(&mut self) {
        debug!("clearing trie with {} node(s)", self.nodes.live());
        self.nodes.clear();
    }

    /// Follows `chars` from the root, returning the node reached, if any.
    fn find(&self, chars: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for c in chars.chars() {
            current = self.nodes.get(current).child(c)?;
        }
        Some(current)
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
