//! Slot storage for trie nodes.
//!
//! All nodes of a trie live in one `Vec`. Pruned nodes are not shifted out;
//! their slots go on a free list and are handed out again by the next
//! `alloc`, so handles held by live nodes stay valid.

use crate::node::{NodeId, TrieNode};

#[derive(Debug, Clone)]
pub(crate) struct NodeArena {
    slots: Vec<TrieNode>,
    free: Vec<NodeId>,
}

impl NodeArena {
    /// Creates an arena holding only the root node.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Creates an arena with room for `capacity` nodes, root included.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity.max(1));
        slots.push(TrieNode::new());
        NodeArena {
            slots,
            free: Vec::new(),
        }
    }

    /// Hands out an empty node, reusing a released slot when one exists.
    ///
    /// # Panics
    ///
    /// Panics once the arena would need more slots than a `NodeId` can address.
    pub fn alloc(&mut self) -> NodeId {
        if let Some(id) = self.free.pop() {
            return id;
        }
        let id = NodeId::from_index(self.slots.len());
        self.slots.push(TrieNode::new());
        id
    }

    /// Returns a slot to the free list. The root is never released.
    pub fn release(&mut self, id: NodeId) {
        if id == NodeId::ROOT {
            return;
        }
        self.slots[id.index()].reset();
        self.free.push(id);
    }

    pub fn get(&self, id: NodeId) -> &TrieNode {
        &self.slots[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.slots[id.index()]
    }

    /// Number of occupied slots, root included.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Drops every node and leaves a fresh root behind.
    pub fn clear(&mut self) {
        self.slots.truncate(1);
        self.slots[NodeId::ROOT.index()].reset();
        self.free.clear();
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}
