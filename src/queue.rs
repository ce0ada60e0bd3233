//! First-in, first-out queue backed by a singly-linked list.

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A queue implemented using a singly-linked list with a link to its rear.
///
/// Values are enqueued at the rear and dequeued from the front, so every operation is `O(1)`.
///
/// # Examples
///
/// ```
/// use classic_collections::queue::Queue;
///
/// let mut q = Queue::new();
///
/// q.enqueue(0);
/// q.enqueue(1);
/// assert_eq!(q.len(), 2);
/// assert_eq!(q.to_string(), "0 -> 1 -> None");
///
/// assert_eq!(q.dequeue(), Some(0));
/// assert_eq!(q.dequeue(), Some(1));
/// assert_eq!(q.dequeue(), None);
/// ```
pub struct Queue<T> {
    front: Link<T>,
    rear: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> Queue<T> {
    /// Constructs a new, empty `Queue<T>`.
    pub fn new() -> Self {
        Queue {
            front: None,
            rear: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Adds a value to the rear of the queue.
    pub fn enqueue(&mut self, value: T) {
        // SAFETY: `Box::into_raw` never returns a null pointer
        let node = unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(Node { value, next: None }))) };
        match self.rear {
            // SAFETY: the rear is a live node owned by this queue
            Some(mut rear) => unsafe { rear.as_mut().next = Some(node) },
            None => self.front = Some(node),
        }
        self.rear = Some(node);
        self.len += 1;
    }

    /// Removes and returns the value at the front of the queue. Returns `None` if the queue is
    /// empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.front.map(|front| {
            // SAFETY: the front was allocated by `enqueue` and is released exactly once here
            let node = unsafe { *Box::from_raw(front.as_ptr()) };
            self.front = node.next;
            if self.front.is_none() {
                self.rear = None;
            }
            self.len -= 1;
            node.value
        })
    }

    /// Returns a reference to the value at the front of the queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        // SAFETY: the front is a live node borrowed for the lifetime of `self`
        self.front.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns the number of values in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Returns an iterator over the queue from front to rear.
    pub fn iter(&self) -> QueueIter<T> {
        QueueIter {
            next: self.front,
            _marker: PhantomData,
        }
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        while self.dequeue().is_some() {}
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for Queue<T>
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

/// An iterator for `Queue<T>`.
///
/// This iterator yields immutable references from the front of the queue to the rear.
pub struct QueueIter<'a, T> {
    next: Link<T>,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for QueueIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the queue is borrowed for 'a, so its nodes outlive the iterator
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            &node.value
        })
    }
}
