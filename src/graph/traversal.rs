//! Depth-first and breadth-first traversal iterators for `MatrixGraph`.
//!
//! Both mark a vertex visited when it is *discovered* (pushed or enqueued),
//! not when it is emitted, and discover neighbours by scanning matrix columns
//! in ascending order. For DFS this means the highest-numbered neighbour of
//! the current vertex is emitted next.

use std::collections::VecDeque;

use super::MatrixGraph;

/// An iterator for Depth-First Search (DFS).
///
/// Yields vertex indices. Uses an explicit stack and a `Vec<bool>` visited set.
pub struct Dfs<'a> {
    graph: &'a MatrixGraph,
    visited: Vec<bool>,
    stack: Vec<usize>,
}

impl<'a> Dfs<'a> {
    /// Creates a DFS starting from `start`; empty if `start` is not an active slot.
    pub fn new(graph: &'a MatrixGraph, start: usize) -> Self {
        let len = graph.active_vertices();
        let mut visited = vec![false; len];
        let mut stack = Vec::new();

        if start < len {
            visited[start] = true;
            stack.push(start);
        }

        Self {
            graph,
            visited,
            stack,
        }
    }
}

impl Iterator for Dfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for (v, _) in self.graph.neighbors(u) {
            if !self.visited[v] {
                self.visited[v] = true;
                self.stack.push(v);
            }
        }

        Some(u)
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// Yields vertex indices. Uses a `VecDeque` and a `Vec<bool>` visited set.
pub struct Bfs<'a> {
    graph: &'a MatrixGraph,
    visited: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'a> Bfs<'a> {
    /// Creates a BFS starting from `start`; empty if `start` is not an active slot.
    pub fn new(graph: &'a MatrixGraph, start: usize) -> Self {
        let len = graph.active_vertices();
        let mut visited = vec![false; len];
        let mut queue = VecDeque::new();

        if start < len {
            visited[start] = true;
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl Iterator for Bfs<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for (v, _) in self.graph.neighbors(u) {
            if !self.visited[v] {
                self.visited[v] = true;
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

impl MatrixGraph {
    /// Depth-first iterator over vertex indices from `start`.
    pub fn dfs(&self, start: usize) -> Dfs<'_> {
        Dfs::new(self, start)
    }

    /// Breadth-first iterator over vertex indices from `start`.
    pub fn bfs(&self, start: usize) -> Bfs<'_> {
        Bfs::new(self, start)
    }

    /// Labels in depth-first order from `start`.
    pub fn traverse_depth_first(&self, start: usize) -> Vec<&str> {
        self.labels_of(self.dfs(start))
    }

    /// Labels in breadth-first order from `start`.
    pub fn traverse_breadth_first(&self, start: usize) -> Vec<&str> {
        self.labels_of(self.bfs(start))
    }
}
