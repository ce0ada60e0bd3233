use crate::error::{Error, Result};
use std::fmt;
use std::iter::FromIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

/// A doubly-linked list with links to both its head and its tail.
///
/// # Examples
/// ```
/// use classic_collections::linked_list::DoublyLinkedList;
///
/// let mut list = DoublyLinkedList::new();
/// list.push_back(20);
/// list.push_back(30);
/// list.push_front(10);
///
/// assert_eq!(list.to_string(), "10 <-> 20 <-> 30 <-> None");
/// assert_eq!(list.display_backward(), "30 <-> 20 <-> 10 <-> None");
///
/// assert_eq!(list.remove(&20), Ok(20));
/// assert_eq!(list.front(), Some(&10));
/// assert_eq!(list.back(), Some(&30));
/// ```
pub struct DoublyLinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> DoublyLinkedList<T> {
    /// Constructs a new, empty `DoublyLinkedList<T>`.
    pub fn new() -> Self {
        DoublyLinkedList {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    fn allocate(value: T, prev: Link<T>, next: Link<T>) -> NonNull<Node<T>> {
        // SAFETY: `Box::into_raw` never returns a null pointer
        unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(Node { value, prev, next }))) }
    }

    // precondition: `node` is a node of this list
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        // SAFETY: every node was allocated by `allocate` and is owned by exactly one list
        let node = unsafe { *Box::from_raw(node.as_ptr()) };
        match node.prev {
            Some(mut prev) => unsafe { prev.as_mut().next = node.next },
            None => self.head = node.next,
        }
        match node.next {
            Some(mut next) => unsafe { next.as_mut().prev = node.prev },
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node.value
    }

    /// Inserts a value at the front of the list.
    pub fn push_front(&mut self, value: T) {
        let node = Self::allocate(value, None, self.head);
        match self.head {
            // SAFETY: the head is a live node of this list
            Some(mut head) => unsafe { head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Appends a value to the back of the list.
    pub fn push_back(&mut self, value: T) {
        let node = Self::allocate(value, self.tail, None);
        match self.tail {
            // SAFETY: the tail is a live node of this list
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Removes and returns the value at the front of the list.
    pub fn pop_front(&mut self) -> Option<T> {
        // SAFETY: the head is a node of this list
        self.head.map(|node| unsafe { self.unlink(node) })
    }

    /// Removes and returns the value at the back of the list.
    pub fn pop_back(&mut self) -> Option<T> {
        // SAFETY: the tail is a node of this list
        self.tail.map(|node| unsafe { self.unlink(node) })
    }

    /// Returns a reference to the value at the front of the list.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the head is a live node borrowed for the lifetime of `self`
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns a reference to the value at the back of the list.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: the tail is a live node borrowed for the lifetime of `self`
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns the number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns a double-ended iterator over the list from front to back.
    pub fn iter(&self) -> DoublyLinkedListIter<T> {
        DoublyLinkedListIter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T> DoublyLinkedList<T>
where
    T: PartialEq,
{
    fn find(&self, value: &T) -> Link<T> {
        let mut curr = self.head;
        while let Some(node) = curr {
            // SAFETY: every link reachable from the head is a live node of this list
            let node_ref = unsafe { node.as_ref() };
            if node_ref.value == *value {
                return Some(node);
            }
            curr = node_ref.next;
        }
        None
    }

    /// Checks if a value exists in the list.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes the first occurrence of a value and returns it.
    ///
    /// # Errors
    /// Returns `Error::Empty` if the list is empty and `Error::NotFound` if no value is equal to
    /// `value`.
    pub fn remove(&mut self, value: &T) -> Result<T> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        match self.find(value) {
            // SAFETY: `find` only returns nodes of this list
            Some(node) => Ok(unsafe { self.unlink(node) }),
            None => Err(Error::NotFound),
        }
    }
}

impl<T> DoublyLinkedList<T>
where
    T: fmt::Display,
{
    /// Renders the list from back to front.
    pub fn display_backward(&self) -> String {
        let mut ret = String::new();
        for value in self.iter().rev() {
            ret.push_str(&format!("{} <-> ", value));
        }
        ret.push_str("None");
        ret
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = DoublyLinkedList::new();
        for value in iter {
            list.push_back(value);
        }
        list
    }
}

impl<T> fmt::Display for DoublyLinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} <-> ", value)?;
        }
        write!(f, "None")
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = DoublyLinkedListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `DoublyLinkedList<T>`.
///
/// This iterator yields immutable references and can be traversed from either end.
pub struct DoublyLinkedListIter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for DoublyLinkedListIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|node| {
            // SAFETY: the list is borrowed for 'a, so its nodes outlive the iterator
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.head = node.next;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for DoublyLinkedListIter<'a, T>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|node| {
            // SAFETY: the list is borrowed for 'a, so its nodes outlive the iterator
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.tail = node.prev;
            &node.value
        })
    }
}
