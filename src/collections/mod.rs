//! Collections.
//!
//! - `hash`: open-addressed string table with linear-quotient probing
//! - `other`: stack, circular queue, doubly linked list, binary search tree

pub mod hash;
pub mod other;

pub use hash::LqHashTable;
pub use other::{ArrayStack, BinarySearchTree, CircularQueue, DoublyLinkedList};
