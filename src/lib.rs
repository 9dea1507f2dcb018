//! # Char Trie
//!
//! A mutable prefix tree (trie) storing words character by character.
//!
//! The trie answers exact-word lookups and prefix-existence queries in time
//! proportional to the length of the query, and deleting a word prunes every
//! node that no longer leads to a stored word.
//!
//! ## Features
//!
//! - **Exact lookup**: `search` tells whether a word was inserted
//! - **Prefix queries**: `starts_with` tells whether any stored word begins with a prefix
//! - **Pruning deletion**: `delete` removes dead branches, stopping at nodes other words still use
//! - **Arena storage**: nodes live in one slot vector and pruned slots are reused
//!
//! Characters are Rust `char`s compared as given, with no case folding or
//! normalization. The trie is a plain single-owner value; wrap it in a
//! `std::sync::RwLock` if several threads need it.
//!
//! ## Example
//!
//! ```rust
//! use char_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("car");
//! trie.insert("cart");
//!
//! assert!(trie.search("car"));
//! assert!(trie.starts_with("ca"));
//!
//! trie.delete("car");
//! assert!(!trie.search("car"));
//! assert!(trie.search("cart"));
//! ```

mod arena;
mod node;
mod trie;

// Re-export public types
pub use crate::node::TrieNode;
pub use crate::trie::Trie;
