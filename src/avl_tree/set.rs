use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use std::iter::FromIterator;

/// An ordered multiset implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Equal values are all kept and
/// are yielded next to each other by the iterators.
///
/// # Examples
/// ```
/// use classic_collections::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.insert(0);
/// tree.insert(3);
/// tree.insert(3);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.min(), Some(&0));
/// assert_eq!(tree.max(), Some(&3));
///
/// assert!(tree.remove(&3));
/// assert!(!tree.remove(&1));
/// assert_eq!(tree.inorder_traversal(), vec![&0, &3]);
/// ```
pub struct AvlTree<T> {
    root: tree::Tree<T>,
    len: usize,
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree {
            root: None,
            len: 0,
        }
    }

    /// Inserts a value into the tree. Values that already exist are inserted again.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        self.root = tree::insert(self.root.take(), value);
        self.len += 1;
    }

    /// Removes one occurrence of a value from the tree. Returns `true` if the value existed.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool {
        if !tree::contains(&self.root, value) {
            return false;
        }
        self.root = tree::delete(self.root.take(), value);
        self.len -= 1;
        true
    }

    /// Checks if a value exists in the tree.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        tree::contains(&self.root, value)
    }

    /// Returns the number of values in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the tree, removing all values.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the height of the tree. An empty tree has height 0.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns the balance factor of the root. An empty tree has balance 0.
    pub fn balance(&self) -> isize {
        tree::balance(&self.root)
    }

    /// Returns the root of the tree.
    pub fn root(&self) -> &tree::Tree<T> {
        &self.root
    }

    /// Returns the minimum value of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min_value_node(&self.root).map(|node| &node.value)
    }

    /// Returns the maximum value of the tree. Returns `None` if the tree is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max_value_node(&self.root).map(|node| &node.value)
    }

    /// Returns the values of the tree in ascending order.
    pub fn inorder_traversal(&self) -> Vec<&T> {
        tree::inorder_traversal(&self.root)
    }

    /// Returns an iterator over the tree. The iterator will yield values using in-order
    /// traversal.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlTreeIter<T> {
        AvlTreeIter {
            current: self.root.as_deref(),
            stack: Vec::new(),
        }
    }
}

impl<T> IntoIterator for AvlTree<T>
where
    T: Ord,
{
    type Item = T;
    type IntoIter = AvlTreeIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T>
where
    T: 'a + Ord,
{
    type Item = &'a T;
    type IntoIter = AvlTreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields owned values.
pub struct AvlTreeIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Box<Node<T>>>,
}

impl<T> Iterator for AvlTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = *node;
            self.current = right;
            value
        })
    }
}

/// An iterator for `AvlTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct AvlTreeIter<'a, T> {
    current: Option<&'a Node<T>>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        self.stack.pop().map(|node| {
            self.current = node.right.as_deref();
            &node.value
        })
    }
}

impl<T> Default for AvlTree<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}
