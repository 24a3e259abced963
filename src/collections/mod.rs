mod lazy_tree;

pub use lazy_tree::{LazyTree, NO_KEY, TOMBSTONE_MARKER};
