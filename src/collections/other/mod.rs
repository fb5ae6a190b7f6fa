//! Bounded and linked containers.
//!
//! The fixed-capacity containers reject an overflowing insert by returning
//! `false` and report underflow as `None`; neither ever panics.

pub mod binary_search_tree;
pub mod circular_queue;
pub mod doubly_linked_list;
pub mod stack;

pub use binary_search_tree::{BinarySearchTree, NodeId, Order, Search};
pub use circular_queue::CircularQueue;
pub use doubly_linked_list::DoublyLinkedList;
pub use stack::ArrayStack;

/// Capacity used by the `Default` impls of the bounded containers.
pub const DEFAULT_CAPACITY: usize = 100;
