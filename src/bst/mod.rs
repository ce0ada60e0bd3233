//! Binary search tree without any rebalancing.
//!
//! The shape of the tree depends on insertion order: inserting sorted keys degrades it into a
//! path. All operations walk the tree iteratively, so degenerate trees do not exhaust the stack.

mod node;
mod tree;

pub use self::tree::BinarySearchTree;
