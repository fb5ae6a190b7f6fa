//! `MatrixGraph`: an undirected, weighted graph over a fixed set of labelled slots.
//!
//! Vertices live in numbered slots `0..max_vertices`; edges live in a dense
//! symmetric weight matrix where `0` means "no edge". Traversals, sorting,
//! spanning trees and shortest paths are implemented in sibling modules as
//! further `impl MatrixGraph` blocks.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert_vertex` | \(O(1)\) | |
//! | `insert_edge` | \(O(1)\) | Writes both halves of the matrix |
//! | `traverse_*` | \(O(n^2)\) | Scans a full matrix row per vertex |
//! | `sort` | \(O(n \log n)\) expected | Hoare partition quicksort |
//! | `minimum_spanning_tree` | \(O(n^3)\) | Rescans every included row per step |
//! | `shortest_path` | \(O(n^2)\) | Linear minimum selection |

use crate::config::{GraphConfig, Validate};
use crate::error::Result;

use super::weight_matrix::WeightMatrix;

/// A fixed-capacity undirected graph backed by an adjacency matrix.
#[derive(Debug, Clone)]
pub struct MatrixGraph {
    pub(super) vertices: Vec<Option<String>>,
    pub(super) edges: WeightMatrix,
    /// Successful `insert_vertex` calls, including re-assignments of a slot.
    pub(super) number_vertices: usize,
}

impl MatrixGraph {
    /// Creates a graph with `max_vertices` empty slots and no edges.
    pub fn new(max_vertices: usize) -> Self {
        Self {
            vertices: vec![None; max_vertices],
            edges: WeightMatrix::new(max_vertices),
            number_vertices: 0,
        }
    }

    /// Creates a graph sized from configuration.
    ///
    /// # Errors
    /// Returns an error if the config fails [`Validate::validate`].
    pub fn from_config(config: &GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.max_vertices))
    }

    /// Number of vertex slots.
    #[inline]
    pub fn max_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The vertex counter.
    ///
    /// Counts every successful [`insert_vertex`](Self::insert_vertex), so
    /// assigning the same slot twice counts twice.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.number_vertices
    }

    /// The prefix of slots the algorithms operate on.
    ///
    /// This is the vertex counter clamped to the number of slots.
    #[inline]
    pub fn active_vertices(&self) -> usize {
        self.number_vertices.min(self.max_vertices())
    }

    /// Stores `label` in slot `index`.
    ///
    /// Returns `false` if `index` is not below [`max_vertices`](Self::max_vertices).
    pub fn insert_vertex(&mut self, index: usize, label: impl Into<String>) -> bool {
        let Some(slot) = self.vertices.get_mut(index) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, max = self.vertices.len(), "vertex index out of range");
            return false;
        };
        *slot = Some(label.into());
        self.number_vertices += 1;
        true
    }

    /// Adds an undirected edge of `weight` between `from` and `to`.
    ///
    /// Returns `false` if either slot is out of range or empty. A weight of 0
    /// is stored as-is and reads back as "no edge".
    pub fn insert_edge(&mut self, from: usize, to: usize, weight: u32) -> bool {
        if self.vertex(from).is_none() || self.vertex(to).is_none() {
            #[cfg(feature = "tracing")]
            tracing::debug!(from, to, "edge endpoint has no vertex");
            return false;
        }
        self.edges.set_symmetric(from, to, weight);
        true
    }

    /// Label stored in slot `index`.
    pub fn vertex(&self, index: usize) -> Option<&str> {
        self.vertices.get(index)?.as_deref()
    }

    /// Weight of the edge between `from` and `to`; `0` if absent or out of range.
    pub fn edge_weight(&self, from: usize, to: usize) -> u32 {
        self.edges.get(from, to).unwrap_or(0)
    }

    /// Returns `true` if an edge with a non-zero weight joins `from` and `to`.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edge_weight(from, to) > 0
    }

    /// Neighbours of `vertex` among the active slots, in ascending order.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        let n = self.active_vertices();
        let row: &[u32] = if vertex < self.max_vertices() {
            &self.edges.row(vertex)[..n]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(|(col, &w)| (col, w))
    }

    /// Labels of the active slots in index order.
    pub fn vertices(&self) -> Vec<Option<&str>> {
        self.vertices[..self.active_vertices()]
            .iter()
            .map(Option::as_deref)
            .collect()
    }

    /// The active block of the adjacency matrix.
    pub fn weight_matrix(&self) -> WeightMatrix {
        self.edges.truncated(self.active_vertices())
    }

    /// Active-slot labels for a sequence of vertex indices, skipping empty slots.
    pub(super) fn labels_of(&self, order: impl IntoIterator<Item = usize>) -> Vec<&str> {
        order.into_iter().filter_map(|v| self.vertex(v)).collect()
    }
}
