use crate::avl_tree::node::Node;
use log::{debug, trace};
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Returns the cached height of a tree. An empty tree has height 0.
pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(node) => node.height,
    }
}

/// Returns the balance factor of a tree: the height of the left subtree minus the height of the
/// right subtree. An empty tree has balance 0.
pub fn balance<T>(tree: &Tree<T>) -> isize {
    match tree {
        None => 0,
        Some(node) => node.balance(),
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left at node of height {}", node.height);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right at node of height {}", node.height);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Returns the new root of the subtree along with the side the value was routed to at that
// root. The side is `None` when the returned root is the freshly created node.
fn insert_node<T>(tree: Tree<T>, value: T) -> (Box<Node<T>>, Option<Side>)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (Box::new(Node::new(value)), None),
    };

    let (side, routed) = if value < node.value {
        let (child, routed) = insert_node(node.left.take(), value);
        node.left = Some(child);
        (Side::Left, routed)
    } else {
        let (child, routed) = insert_node(node.right.take(), value);
        node.right = Some(child);
        (Side::Right, routed)
    };

    node.update();
    let factor = node.balance();

    let node = if factor > 1 {
        if routed == Some(Side::Left) {
            debug!("rebalancing after insert: left-left");
        } else {
            debug!("rebalancing after insert: left-right");
            node.left = node.left.take().map(rotate_left);
        }
        rotate_right(node)
    } else if factor < -1 {
        if routed == Some(Side::Left) {
            debug!("rebalancing after insert: right-left");
            node.right = node.right.take().map(rotate_right);
        } else {
            debug!("rebalancing after insert: right-right");
        }
        rotate_left(node)
    } else {
        node
    };

    (node, Some(side))
}

/// Inserts a value into a tree and returns the new root.
///
/// Values equal to an existing value are routed into its right subtree, so duplicates are kept.
///
/// # Examples
/// ```
/// use classic_collections::avl_tree::{self, Tree};
///
/// let mut tree: Tree<u32> = None;
/// for value in vec![30, 20, 10] {
///     tree = avl_tree::insert(tree, value);
/// }
///
/// let root = tree.as_ref().unwrap();
/// assert_eq!(root.value, 20);
/// assert_eq!(avl_tree::balance(&tree), 0);
/// ```
pub fn insert<T>(tree: Tree<T>, value: T) -> Tree<T>
where
    T: Ord,
{
    Some(insert_node(tree, value).0)
}

fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update();
    let factor = node.balance();

    if factor > 1 {
        if balance(&node.left) < 0 {
            debug!("rebalancing after delete: left-right");
            node.left = node.left.take().map(rotate_left);
        } else {
            debug!("rebalancing after delete: left-left");
        }
        rotate_right(node)
    } else if factor < -1 {
        if balance(&node.right) > 0 {
            debug!("rebalancing after delete: right-left");
            node.right = node.right.take().map(rotate_right);
        } else {
            debug!("rebalancing after delete: right-right");
        }
        rotate_left(node)
    } else {
        node
    }
}

// Detaches the leftmost node of a subtree and returns the remaining subtree with that node's
// value. Every frame on the path is rebalanced.
fn remove_min<T>(mut node: Box<Node<T>>) -> (Tree<T>, T) {
    match node.left.take() {
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            (Some(rebalance(node)), min)
        },
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        },
    }
}

/// Deletes one occurrence of a value from a tree and returns the new root. If the value does not
/// exist, the tree is returned unchanged.
///
/// A node with two children is not unlinked: it takes the value of its in-order successor and
/// the successor's node is removed instead.
///
/// # Examples
/// ```
/// use classic_collections::avl_tree::{self, Tree};
///
/// let mut tree: Tree<u32> = None;
/// for value in vec![40, 20, 60, 10, 30, 50, 70] {
///     tree = avl_tree::insert(tree, value);
/// }
///
/// tree = avl_tree::delete(tree, &40);
/// assert_eq!(tree.as_ref().unwrap().value, 50);
/// assert_eq!(avl_tree::inorder_traversal(&tree), vec![&10, &20, &30, &50, &60, &70]);
///
/// tree = avl_tree::delete(tree, &40);
/// assert_eq!(avl_tree::inorder_traversal(&tree).len(), 6);
/// ```
pub fn delete<T>(tree: Tree<T>, value: &T) -> Tree<T>
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return None,
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete(node.left.take(), value),
        Ordering::Greater => node.right = delete(node.right.take(), value),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return right,
            (left, None) => return left,
            (left, Some(right)) => {
                let (right, successor) = remove_min(right);
                node.value = successor;
                node.left = left;
                node.right = right;
            },
        },
    }

    Some(rebalance(node))
}

/// Returns `true` if the tree holds a value equal to `value`.
pub fn contains<T>(tree: &Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        match value.cmp(&node.value) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

/// Returns the leftmost node of a tree, which holds its minimum value.
pub fn min_value_node<T>(tree: &Tree<T>) -> Option<&Node<T>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(left_node) = &curr.left {
            curr = left_node;
        }
        &**curr
    })
}

/// Returns the rightmost node of a tree, which holds its maximum value.
pub fn max_value_node<T>(tree: &Tree<T>) -> Option<&Node<T>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(right_node) = &curr.right {
            curr = right_node;
        }
        &**curr
    })
}

fn traverse_inorder<'a, T>(tree: &'a Tree<T>, ret: &mut Vec<&'a T>) {
    if let Some(node) = tree {
        traverse_inorder(&node.left, ret);
        ret.push(&node.value);
        traverse_inorder(&node.right, ret);
    }
}

/// Returns the values of a tree in ascending order.
pub fn inorder_traversal<T>(tree: &Tree<T>) -> Vec<&T> {
    let mut ret = Vec::new();
    traverse_inorder(tree, &mut ret);
    ret
}
