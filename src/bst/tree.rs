use crate::bst::node::{Node, Tree};
use std::cmp::Ordering;

// Returns the link that holds `value`, or the empty link where `value` would be attached.
fn find_link<'a, T>(tree: &'a mut Tree<T>, value: &T) -> &'a mut Tree<T>
where
    T: Ord,
{
    let mut curr = tree;
    loop {
        match curr.as_ref().map(|node| value.cmp(&node.value)) {
            None | Some(Ordering::Equal) => return curr,
            Some(ordering) => {
                let node = match curr {
                    Some(node) => node,
                    None => unreachable!(),
                };
                curr = if ordering == Ordering::Less {
                    &mut node.left
                } else {
                    &mut node.right
                };
            },
        }
    }
}

// Detaches the leftmost node of a tree and returns its value.
fn take_min<T>(tree: &mut Tree<T>) -> Option<T> {
    let mut curr = tree;
    while curr.as_ref().map_or(false, |node| node.left.is_some()) {
        curr = match curr {
            Some(node) => &mut node.left,
            None => unreachable!(),
        };
    }

    let node = curr.take()?;
    let Node { value, right, .. } = *node;
    *curr = right;
    Some(value)
}

/// A binary search tree that performs no rebalancing.
///
/// Each value is stored at most once: inserting a value that already exists leaves the tree
/// unchanged.
///
/// # Examples
/// ```
/// use classic_collections::bst::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(50);
/// tree.insert(30);
/// tree.insert(70);
///
/// assert!(tree.contains(&30));
/// assert_eq!(tree.min(), Some(&30));
/// assert_eq!(tree.preorder_traversal(), vec![&50, &30, &70]);
///
/// assert!(tree.remove(&50));
/// assert_eq!(tree.inorder_traversal(), vec![&30, &70]);
/// ```
pub struct BinarySearchTree<T> {
    root: Tree<T>,
    len: usize,
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `BinarySearchTree<T>`.
    pub fn new() -> Self {
        BinarySearchTree {
            root: None,
            len: 0,
        }
    }

    /// Inserts a value into the tree. Returns `false` if the value already existed.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let link = find_link(&mut self.root, &value);
        if link.is_some() {
            return false;
        }
        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
        true
    }

    /// Removes a value from the tree. Returns `false` if the value did not exist.
    ///
    /// A node with two children takes the value of its in-order successor, whose node is removed
    /// instead.
    pub fn remove(&mut self, value: &T) -> bool {
        let link = find_link(&mut self.root, value);
        let mut node = match link.take() {
            Some(node) => node,
            None => return false,
        };

        *link = match (node.left.take(), node.right.take()) {
            (None, right) => right,
            (left, None) => left,
            (left, mut right) => {
                if let Some(successor) = take_min(&mut right) {
                    node.value = successor;
                }
                node.left = left;
                node.right = right;
                Some(node)
            },
        };
        self.len -= 1;
        true
    }

    /// Checks if a value exists in the tree.
    pub fn contains(&self, value: &T) -> bool {
        let mut curr = &self.root;
        while let Some(node) = curr {
            match value.cmp(&node.value) {
                Ordering::Less => curr = &node.left,
                Ordering::Greater => curr = &node.right,
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the minimum value of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        let mut curr = self.root.as_deref()?;
        while let Some(left_node) = curr.left.as_deref() {
            curr = left_node;
        }
        Some(&curr.value)
    }

    /// Returns the maximum value of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        let mut curr = self.root.as_deref()?;
        while let Some(right_node) = curr.right.as_deref() {
            curr = right_node;
        }
        Some(&curr.value)
    }

    /// Returns the number of edges on the longest path from the root to a leaf. Returns `None`
    /// if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.height(), None);
    /// tree.insert(2);
    /// assert_eq!(tree.height(), Some(0));
    /// tree.insert(1);
    /// assert_eq!(tree.height(), Some(1));
    /// ```
    pub fn height(&self) -> Option<usize> {
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        let mut height = None;
        while !level.is_empty() {
            height = Some(height.map_or(0, |height| height + 1));
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }

    /// Returns the values of the tree in ascending order.
    pub fn inorder_traversal(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut curr = self.root.as_deref();
        loop {
            while let Some(node) = curr {
                stack.push(node);
                curr = node.left.as_deref();
            }
            match stack.pop() {
                Some(node) => {
                    ret.push(&node.value);
                    curr = node.right.as_deref();
                },
                None => return ret,
            }
        }
    }

    /// Returns the values of the tree with each node visited before its subtrees.
    pub fn preorder_traversal(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            ret.push(&node.value);
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        ret
    }

    /// Returns the values of the tree with each node visited after its subtrees.
    pub fn postorder_traversal(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            ret.push(&node.value);
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        ret.reverse();
        ret
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Default for BinarySearchTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::BinarySearchTree;

    fn build(values: &[u32]) -> BinarySearchTree<u32> {
        let mut tree = BinarySearchTree::new();
        for value in values {
            tree.insert(*value);
        }
        tree
    }

    #[test]
    fn test_insert() {
        let tree = build(&[50, 30, 70]);
        assert_eq!(tree.inorder_traversal(), vec![&30, &50, &70]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut tree = build(&[50, 30]);
        assert!(!tree.insert(30));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.inorder_traversal(), vec![&30, &50]);
    }

    #[test]
    fn test_contains() {
        let tree = build(&[50, 30, 70]);
        assert!(tree.contains(&30));
        assert!(tree.contains(&50));
        assert!(tree.contains(&70));
        assert!(!tree.contains(&90));
        assert!(!tree.contains(&10));
    }

    #[test]
    fn test_traversals() {
        let tree = build(&[50, 30, 70, 20, 60, 80]);
        assert_eq!(tree.inorder_traversal(), vec![&20, &30, &50, &60, &70, &80]);
        assert_eq!(tree.preorder_traversal(), vec![&50, &30, &20, &70, &60, &80]);
        assert_eq!(tree.postorder_traversal(), vec![&20, &30, &60, &80, &70, &50]);
    }

    #[test]
    fn test_remove_leaf_node() {
        let mut tree = build(&[50, 30, 70]);
        assert!(tree.remove(&30));
        assert!(!tree.contains(&30));
        assert_eq!(tree.inorder_traversal(), vec![&50, &70]);
    }

    #[test]
    fn test_remove_node_with_one_child() {
        let mut tree = build(&[50, 30, 20]);
        assert!(tree.remove(&30));
        assert!(!tree.contains(&30));
        assert_eq!(tree.inorder_traversal(), vec![&20, &50]);
    }

    #[test]
    fn test_remove_node_with_two_children() {
        let mut tree = build(&[50, 30, 70, 20, 40]);
        assert!(tree.remove(&30));
        assert!(!tree.contains(&30));
        assert_eq!(tree.inorder_traversal(), vec![&20, &40, &50, &70]);
        assert_eq!(tree.preorder_traversal(), vec![&50, &40, &20, &70]);
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = build(&[50, 30]);
        assert!(!tree.remove(&10));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_min_max() {
        let tree = build(&[50, 30, 70, 20, 80]);
        assert_eq!(tree.min(), Some(&20));
        assert_eq!(tree.max(), Some(&80));
    }

    #[test]
    fn test_height() {
        let tree = build(&[50, 30, 70, 20, 60, 80]);
        assert_eq!(tree.height(), Some(2));
    }

    #[test]
    fn test_empty_tree() {
        let tree: BinarySearchTree<u32> = BinarySearchTree::new();
        assert!(tree.inorder_traversal().is_empty());
        assert!(tree.preorder_traversal().is_empty());
        assert!(tree.postorder_traversal().is_empty());
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert_eq!(tree.height(), None);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_degenerate_tree() {
        let mut tree = BinarySearchTree::new();
        for value in 0..10_000u32 {
            tree.insert(value);
        }
        assert_eq!(tree.height(), Some(9_999));
        assert_eq!(tree.max(), Some(&9_999));
        assert!(tree.remove(&0));
        assert_eq!(tree.min(), Some(&1));
    }
}
