//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.
//!
//! The free functions operate on a bare [`Tree`], taking ownership of a root and returning the
//! possibly rotated root. [`AvlTree`] wraps a root and keeps track of its length.
//!
//! The value type must implement a total order. A type whose `Ord` implementation is not
//! consistent leaves the tree in an unspecified, but memory safe, state.

mod node;
mod set;
mod tree;

pub use self::node::Node;
pub use self::set::{AvlTree, AvlTreeIntoIter, AvlTreeIter};
pub use self::tree::{
    balance, contains, delete, height, inorder_traversal, insert, max_value_node, min_value_node,
    Tree,
};
