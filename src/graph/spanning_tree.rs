//! Minimum spanning tree by Prim's algorithm over the adjacency matrix.
//!
//! The working copy marks absent edges with [`INFINITE`] rather than `0`, and
//! after a vertex joins the tree its whole column is set to [`INFINITE`] so no
//! later step can select an edge into it again.

use super::weight_matrix::{WeightMatrix, INFINITE};
use super::MatrixGraph;

/// One edge chosen by Prim's algorithm: `(from, to, weight)`, where `from` was
/// already in the tree and `to` joined it.
pub type TreeEdge = (usize, usize, u32);

impl MatrixGraph {
    /// Edges of the minimum spanning tree rooted at vertex 0, in the order chosen.
    ///
    /// Each step takes the lightest edge from any tree vertex to any other
    /// vertex. Ties go to the first candidate scanned: tree vertices in the
    /// order they joined, then columns ascending. If the graph is disconnected
    /// the result only spans the component of vertex 0.
    pub fn spanning_tree_edges(&self) -> Vec<TreeEdge> {
        let n = self.active_vertices();
        if n == 0 {
            return Vec::new();
        }

        let mut weights = WeightMatrix::filled(n, INFINITE);
        for row in 0..n {
            for (col, &w) in self.edges.row(row)[..n].iter().enumerate() {
                if w != 0 {
                    weights.set(row, col, w);
                }
            }
        }

        let mut included = Vec::with_capacity(n);
        included.push(0);
        eliminate_column(&mut weights, 0);

        let mut chosen = Vec::with_capacity(n - 1);
        while included.len() < n {
            let Some((from, to, w)) = lightest_edge(&weights, &included) else {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    spanned = included.len(),
                    vertices = n,
                    "spanning tree stopped early on a disconnected graph"
                );
                break;
            };
            eliminate_column(&mut weights, to);
            chosen.push((from, to, w));
            included.push(to);
        }
        chosen
    }

    /// The minimum spanning tree as a symmetric weight matrix over the active slots.
    pub fn minimum_spanning_tree(&self) -> WeightMatrix {
        let mut tree = WeightMatrix::new(self.active_vertices());
        for (from, to, w) in self.spanning_tree_edges() {
            tree.set_symmetric(from, to, w);
        }
        tree
    }
}

fn eliminate_column(weights: &mut WeightMatrix, col: usize) {
    for row in 0..weights.side() {
        weights.set(row, col, INFINITE);
    }
}

/// First strictly-smallest finite entry across the rows of `included`.
fn lightest_edge(weights: &WeightMatrix, included: &[usize]) -> Option<TreeEdge> {
    let mut best: Option<TreeEdge> = None;
    for &row in included {
        for (col, &w) in weights.row(row).iter().enumerate() {
            if w < best.map_or(INFINITE, |(_, _, b)| b) {
                best = Some((row, col, w));
            }
        }
    }
    best
}
