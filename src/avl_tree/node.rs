use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
///
/// A node owns its two subtrees exclusively. `height` is a cache of the number of nodes on the
/// longest path from this node down to a leaf, so a leaf has height 1.
#[derive(Debug)]
pub struct Node<T> {
    pub value: T,
    pub height: usize,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// Recomputes the cached height from the heights of the children.
    pub fn update(&mut self) {
        self.height = cmp::max(tree::height(&self.left), tree::height(&self.right)) + 1;
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance(&self) -> isize {
        (tree::height(&self.left) as isize) - (tree::height(&self.right) as isize)
    }
}
