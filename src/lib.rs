//! Canonical ordered and linear containers.
//!
//! [`avl_tree`] is a self-balancing binary search tree that restores its height invariant with
//! rotations after every insertion and deletion. The remaining modules hold simpler containers
//! that share no state with it: an unbalanced binary search tree, linked lists, a stack, and a
//! queue.

mod error;
pub mod avl_tree;
pub mod bst;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use crate::error::{Error, Result};
