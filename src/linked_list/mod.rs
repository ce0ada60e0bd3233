//! Singly- and doubly-linked lists.

mod doubly;
mod singly;

pub use self::doubly::{DoublyLinkedList, DoublyLinkedListIter};
pub use self::singly::{SinglyLinkedList, SinglyLinkedListIter};
