use crate::error::{Error, Result};
use std::fmt;
use std::iter::FromIterator;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly-linked list.
///
/// # Examples
/// ```
/// use classic_collections::linked_list::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(10);
/// list.push_back(20);
/// list.push_front(0);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.middle(), Some(&10));
/// assert_eq!(list.to_string(), "0 -> 10 -> 20 -> None");
///
/// list.reverse();
/// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&20, &10, &0]);
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Constructs a new, empty `SinglyLinkedList<T>`.
    pub fn new() -> Self {
        SinglyLinkedList { head: None, len: 0 }
    }

    /// Inserts a value at the front of the list.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Appends a value to the back of the list. This walks the whole list.
    pub fn push_back(&mut self, value: T) {
        let mut curr = &mut self.head;
        while let Some(node) = curr {
            curr = &mut node.next;
        }
        *curr = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Removes and returns the value at the front of the list. Returns `None` if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Returns a reference to the value at the front of the list.
    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    /// Returns the number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Reverses the list in place.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Returns the middle value of the list, found by advancing one cursor twice as fast as
    /// another. For an even number of values the second of the two middle values is returned.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::linked_list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<u32> = vec![1, 2, 3, 4].into_iter().collect();
    /// assert_eq!(list.middle(), Some(&3));
    /// ```
    pub fn middle(&self) -> Option<&T> {
        let mut slow = self.head.as_deref()?;
        let mut fast = self.head.as_deref();
        while let Some(ahead) = fast.and_then(|node| node.next.as_deref()) {
            fast = ahead.next.as_deref();
            slow = match slow.next.as_deref() {
                Some(node) => node,
                None => break,
            };
        }
        Some(&slow.value)
    }

    /// Returns an iterator over the list from front to back.
    pub fn iter(&self) -> SinglyLinkedListIter<T> {
        SinglyLinkedListIter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> SinglyLinkedList<T>
where
    T: PartialEq,
{
    /// Checks if a value exists in the list.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|curr| curr == value)
    }

    /// Removes the first occurrence of a value and returns it.
    ///
    /// # Errors
    /// Returns `Error::Empty` if the list is empty and `Error::NotFound` if no value is equal to
    /// `value`.
    ///
    /// # Examples
    /// ```
    /// use classic_collections::linked_list::SinglyLinkedList;
    /// use classic_collections::Error;
    ///
    /// let mut list: SinglyLinkedList<u32> = vec![1, 2, 1].into_iter().collect();
    /// assert_eq!(list.remove(&1), Ok(1));
    /// assert_eq!(list.remove(&3), Err(Error::NotFound));
    /// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&2, &1]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T> {
        if self.head.is_none() {
            return Err(Error::Empty);
        }

        let mut curr = &mut self.head;
        loop {
            match curr.as_ref().map(|node| node.value == *value) {
                None => return Err(Error::NotFound),
                Some(true) => {
                    let node = match curr.take() {
                        Some(node) => node,
                        None => unreachable!(),
                    };
                    let Node { value, next } = *node;
                    *curr = next;
                    self.len -= 1;
                    return Ok(value);
                },
                Some(false) => {
                    curr = match curr {
                        Some(node) => &mut node.next,
                        None => unreachable!(),
                    };
                },
            }
        }
    }

    /// Inserts `value` directly after the first occurrence of `target`.
    ///
    /// # Errors
    /// Returns `Error::Empty` if the list is empty and `Error::NotFound` if no value is equal to
    /// `target`.
    pub fn insert_after(&mut self, target: &T, value: T) -> Result<()> {
        if self.head.is_none() {
            return Err(Error::Empty);
        }

        let mut curr = self.head.as_deref_mut();
        while let Some(node) = curr {
            if node.value == *target {
                let next = node.next.take();
                node.next = Some(Box::new(Node { value, next }));
                self.len += 1;
                return Ok(());
            }
            curr = node.next.as_deref_mut();
        }
        Err(Error::NotFound)
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = SinglyLinkedList::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<T> fmt::Display for SinglyLinkedList<T>
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

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = SinglyLinkedListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `SinglyLinkedList<T>`.
///
/// This iterator yields immutable references from front to back.
pub struct SinglyLinkedListIter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for SinglyLinkedListIter<'a, T>
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

#[cfg(test)]
mod tests {
    use super::SinglyLinkedList;
    use crate::error::Error;

    fn collect(list: &SinglyLinkedList<u32>) -> Vec<u32> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_push_back() {
        let mut list = SinglyLinkedList::new();
        list.push_back(10);
        list.push_back(20);
        list.push_back(30);
        assert_eq!(list.len(), 3);
        assert_eq!(list.middle(), Some(&20));
        assert_eq!(collect(&list), vec![10, 20, 30]);
    }

    #[test]
    fn test_push_front() {
        let mut list = SinglyLinkedList::new();
        list.push_front(30);
        list.push_front(20);
        list.push_front(10);
        assert_eq!(list.len(), 3);
        assert_eq!(list.middle(), Some(&20));
        assert_eq!(list.front(), Some(&10));
    }

    #[test]
    fn test_insert_after() {
        let mut list: SinglyLinkedList<u32> = vec![10, 20, 30].into_iter().collect();
        assert_eq!(list.insert_after(&20, 25), Ok(()));
        assert!(list.contains(&25));
        assert_eq!(list.len(), 4);
        assert_eq!(list.middle(), Some(&25));
        assert_eq!(list.insert_after(&40, 45), Err(Error::NotFound));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_insert_after_empty() {
        let mut list = SinglyLinkedList::new();
        assert_eq!(list.insert_after(&1, 2), Err(Error::Empty));
    }

    #[test]
    fn test_remove() {
        let mut list: SinglyLinkedList<u32> = vec![10, 20, 30].into_iter().collect();
        assert_eq!(list.remove(&20), Ok(20));
        assert!(!list.contains(&20));
        assert_eq!(list.len(), 2);
        assert_eq!(list.middle(), Some(&30));
    }

    #[test]
    fn test_remove_head() {
        let mut list: SinglyLinkedList<u32> = vec![10, 20].into_iter().collect();
        assert_eq!(list.remove(&10), Ok(10));
        assert_eq!(collect(&list), vec![20]);
    }

    #[test]
    fn test_remove_missing() {
        let mut list: SinglyLinkedList<u32> = vec![10, 20].into_iter().collect();
        assert_eq!(list.remove(&30), Err(Error::NotFound));
        assert_eq!(list.len(), 2);
        assert!(list.contains(&10));
        assert!(list.contains(&20));

        let mut empty: SinglyLinkedList<u32> = SinglyLinkedList::new();
        assert_eq!(empty.remove(&10), Err(Error::Empty));
    }

    #[test]
    fn test_reverse() {
        let mut list: SinglyLinkedList<u32> = vec![10, 20, 30].into_iter().collect();
        list.reverse();
        assert_eq!(list.len(), 3);
        assert_eq!(collect(&list), vec![30, 20, 10]);
    }

    #[test]
    fn test_middle() {
        let mut list: SinglyLinkedList<u32> = vec![10, 20, 30, 40, 50].into_iter().collect();
        assert_eq!(list.middle(), Some(&30));
        list.push_back(60);
        assert_eq!(list.middle(), Some(&40));
    }

    #[test]
    fn test_empty_list() {
        let list: SinglyLinkedList<u32> = SinglyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.middle(), None);
        assert_eq!(list.to_string(), "None");
    }

    #[test]
    fn test_display() {
        let list: SinglyLinkedList<u32> = vec![10, 20, 30].into_iter().collect();
        assert_eq!(list.to_string(), "10 -> 20 -> 30 -> None");
    }

    #[test]
    fn test_pop_front() {
        let mut list: SinglyLinkedList<u32> = vec![1, 2].into_iter().collect();
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_drop_long_list() {
        let list: SinglyLinkedList<u32> = (0..1_000_000).collect();
        assert_eq!(list.len(), 1_000_000);
    }
}
