//! # `classics` - Textbook Data Structures and Graph Algorithms
//!
//! A small toolkit of the structures every data-structures course builds:
//! an adjacency-matrix graph with its classic algorithms, an open-addressed
//! hash table with linear-quotient probing, and a handful of bounded and
//! linked containers.
//!
//! ## Key Features
//!
//! - **Matrix graph**: depth/breadth-first traversal, vertex sorting, Prim's
//!   minimum spanning tree and Dijkstra's shortest path lengths
//! - **LQHashed table**: fold-shift string keys, 4k + 3 prime sizing and
//!   tombstone deletion
//! - **Containers**: array stack, circular queue, doubly linked list and an
//!   unbalanced binary search tree
//!
//! ## Architecture
//!
//! Structures own their data outright. Linked structures keep their nodes in an
//! index-addressed arena with a free list, so there is no `unsafe` and no
//! reference counting anywhere in the crate. Operations that can fail in normal
//! use return `bool` or `Option`; [`Error`] is reserved for configuration.
//!
//! ### Performance Characteristics
//!
//! | Structure | Insert | Lookup | Delete |
//! |-----------|--------|--------|--------|
//! | `LqHashTable` | O(1) expected | O(1) expected | O(1) expected |
//! | `ArrayStack` / `CircularQueue` | O(1) | O(1) | O(1) |
//! | `DoublyLinkedList` | O(1) | O(n) | O(n) |
//! | `BinarySearchTree` | O(h) | O(h) | O(h) |
//! | `MatrixGraph` algorithms | - | O(V²) | - |
//!
//! ## Example
//!
//! ```rust
//! use classics::{LqHashTable, MatrixGraph};
//!
//! let mut table = LqHashTable::new(100);
//! assert!(table.insert("Alice"));
//! assert_eq!(table.fetch("Alice"), Some("Alice"));
//!
//! let mut graph = MatrixGraph::new(3);
//! for (i, label) in ["A", "B", "C"].into_iter().enumerate() {
//!     graph.insert_vertex(i, label);
//! }
//! graph.insert_edge(0, 1, 5);
//! graph.insert_edge(1, 2, 3);
//! assert_eq!(graph.shortest_path(0).distance(2), Some(8));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod config;
pub mod error;
pub mod graph;

pub use collections::{ArrayStack, BinarySearchTree, CircularQueue, DoublyLinkedList, LqHashTable};
pub use config::{GraphConfig, HashTableConfig, Validate};
pub use error::{Error, Result};
pub use graph::{MatrixGraph, ShortestPaths, WeightMatrix};
