pub type Tree<T> = Option<Box<Node<T>>>;

pub struct Node<T> {
    pub value: T,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }
}
