//! Example of using the character trie
use char_trie::Trie;

fn main() {
    // RUST_LOG=char_trie=trace shows node creation and pruning
    env_logger::init();

    let mut trie = Trie::new();
    trie.insert("car");
    trie.insert("cart");
    trie.insert("cat");

    assert!(trie.search("car"));
    assert!(trie.starts_with("ca"));
    assert!(!trie.search("ca"));
    println!("after inserts: {} nodes", trie.node_count());

    // "car" still leads to "cart", so no node is removed
    trie.delete("car");
    assert!(!trie.search("car"));
    assert!(trie.starts_with("car"));
    println!("after deleting car: {} nodes", trie.node_count());

    // "cart" is the only word under 'r', so r and t are pruned
    trie.delete("cart");
    assert!(!trie.starts_with("car"));
    assert!(trie.search("cat"));
    println!("after deleting cart: {} nodes", trie.node_count());

    // Absent words are ignored
    trie.delete("dog");
    println!("after deleting dog: {} nodes", trie.node_count());
}
