//! Adjacency-matrix graph and its textbook algorithms.
//!
//! The graph and its algorithms are split by concern:
//! - `matrix_graph`: storage, vertex/edge insertion and accessors
//! - `traversal`: depth-first and breadth-first iterators
//! - `quicksort`: Hoare-partition sort of vertex labels
//! - `spanning_tree`: Prim's minimum spanning tree
//! - `shortest_path`: Dijkstra's single-source path lengths
//! - `weight_matrix`: the dense matrix type shared by the above

pub mod matrix_graph;
pub mod quicksort;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;
pub mod weight_matrix;

pub use matrix_graph::MatrixGraph;
pub use shortest_path::ShortestPaths;
pub use spanning_tree::TreeEdge;
pub use traversal::{Bfs, Dfs};
pub use weight_matrix::{WeightMatrix, INFINITE};
