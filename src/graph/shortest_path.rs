//! Single-source shortest path lengths by Dijkstra's algorithm.
//!
//! No priority queue: each round scans every unvisited vertex for the smallest
//! known distance, which suits the dense matrix representation.

use core::fmt;

use serde::Serialize;

use super::weight_matrix::INFINITE;
use super::MatrixGraph;

/// Shortest path lengths from one source to every active vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    source: usize,
    /// `None` marks a vertex with no path from the source.
    distances: Vec<Option<u64>>,
}

impl ShortestPaths {
    /// The source vertex.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Path length to `vertex`; `None` if unreachable or not an active vertex.
    pub fn distance(&self, vertex: usize) -> Option<u64> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Path lengths indexed by vertex.
    pub fn distances(&self) -> &[Option<u64>] {
        &self.distances
    }

    /// `(vertex, length)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<u64>)> + '_ {
        self.distances.iter().copied().enumerate()
    }

    /// One report line per vertex.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(move |(vertex, d)| match d {
            Some(d) => format!(
                "shortest path length from vertex {} to vertex {vertex} is {d}",
                self.source
            ),
            None => format!(
                "shortest path length from vertex {} to vertex {vertex} is unreachable",
                self.source
            ),
        })
    }
}

impl fmt::Display for ShortestPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl MatrixGraph {
    /// Shortest path lengths from `source` to every active vertex.
    ///
    /// Each round visits the unvisited vertex with the smallest known distance
    /// (first one wins a tie) and relaxes its edges to unvisited neighbours.
    /// An out-of-range `source` gives an empty report.
    pub fn shortest_path(&self, source: usize) -> ShortestPaths {
        let n = self.active_vertices();
        if source >= n {
            return ShortestPaths {
                source,
                distances: Vec::new(),
            };
        }

        let mut distances: Vec<Option<u64>> = vec![None; n];
        let mut visited = vec![false; n];
        distances[source] = Some(0);

        for _ in 0..n {
            let mut nearest: Option<(usize, u64)> = None;
            for (k, d) in distances.iter().enumerate() {
                if let (false, Some(d)) = (visited[k], *d) {
                    if nearest.map_or(true, |(_, best)| d < best) {
                        nearest = Some((k, d));
                    }
                }
            }
            let Some((u, du)) = nearest else {
                #[cfg(feature = "tracing")]
                tracing::debug!(source, "remaining vertices are unreachable");
                break;
            };
            visited[u] = true;

            for (v, w) in self.neighbors(u) {
                if visited[v] || w == INFINITE {
                    continue;
                }
                let through_u = du + u64::from(w);
                if distances[v].map_or(true, |d| through_u < d) {
                    distances[v] = Some(through_u);
                }
            }
        }

        ShortestPaths { source, distances }
    }
}
