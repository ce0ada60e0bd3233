//! Last-in, first-out stack backed by a singly-linked list.

use std::fmt;

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// A stack implemented using a singly-linked list.
///
/// Values are pushed onto and popped off the head of the list, so every operation is `O(1)`.
///
/// # Examples
///
/// ```
/// use classic_collections::stack::Stack;
///
/// let mut s = Stack::new();
///
/// s.push(0);
/// s.push(1);
/// assert_eq!(s.len(), 2);
/// assert_eq!(s.to_string(), "1 -> 0 -> None");
///
/// assert_eq!(s.pop(), Some(1));
/// assert_eq!(s.pop(), Some(0));
/// assert_eq!(s.len(), 0);
/// ```
pub struct Stack<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    /// Constructs a new, empty `Stack<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::stack::Stack;
    ///
    /// let s: Stack<u32> = Stack::new();
    /// ```
    pub fn new() -> Self {
        Stack { head: None, len: 0 }
    }

    /// Pushes a value onto the stack.
    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Pops the top value of the stack. Returns `None` if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_collections::stack::Stack;
    ///
    /// let mut s = Stack::new();
    ///
    /// s.push(0);
    ///
    /// assert_eq!(s.pop(), Some(0));
    /// assert_eq!(s.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Returns a reference to the top value of the stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns the number of values in the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns an iterator over the stack from top to bottom.
    pub fn iter(&self) -> StackIter<T> {
        StackIter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for Stack<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        write!(f, "None")
    }
}

/// An iterator for `Stack<T>`.
///
/// This iterator yields immutable references from the top of the stack to the bottom.
pub struct StackIter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for StackIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}
