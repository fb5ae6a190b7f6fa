//! `WeightMatrix`: a dense square matrix of edge weights.
//!
//! Cells hold `0` for "no edge". Working copies inside the spanning-tree
//! builder use [`INFINITE`] instead; both render as `0` when displayed.

use core::fmt;

use serde::Serialize;

/// Weight marking an absent edge in algorithms that must tell it apart from 0.
pub const INFINITE: u32 = u32::MAX;

/// A row-major square matrix of `u32` weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightMatrix {
    side: usize,
    cells: Vec<u32>,
}

impl WeightMatrix {
    /// Creates a `side × side` matrix of zeros.
    pub fn new(side: usize) -> Self {
        Self::filled(side, 0)
    }

    /// Creates a `side × side` matrix with every cell set to `value`.
    pub fn filled(side: usize, value: u32) -> Self {
        Self {
            side,
            cells: vec![value; side * side],
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the weight at `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.side && col < self.side {
            Some(self.cells[row * self.side + col])
        } else {
            None
        }
    }

    /// Sets the weight at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, weight: u32) {
        assert!(
            row < self.side && col < self.side,
            "cell ({row}, {col}) out of bounds for side {}",
            self.side
        );
        self.cells[row * self.side + col] = weight;
    }

    /// Sets `(a, b)` and `(b, a)` to `weight`.
    #[inline]
    pub(crate) fn set_symmetric(&mut self, a: usize, b: usize, weight: u32) {
        self.set(a, b, weight);
        self.set(b, a, weight);
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[u32] {
        assert!(row < self.side, "row {row} out of bounds for side {}", self.side);
        &self.cells[row * self.side..(row + 1) * self.side]
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        // `chunks` rejects a zero chunk size; an empty matrix has no rows anyway.
        self.cells.chunks(self.side.max(1))
    }

    /// Copies the top-left `side × side` block.
    pub fn truncated(&self, side: usize) -> Self {
        let side = side.min(self.side);
        let mut out = Self::new(side);
        for r in 0..side {
            out.cells[r * side..(r + 1) * side].copy_from_slice(&self.row(r)[..side]);
        }
        out
    }

    /// Upper-triangle edges `(a, b, w)` with `a < b` and a real weight.
    pub fn edges(&self) -> Vec<(usize, usize, u32)> {
        let mut out = Vec::new();
        for a in 0..self.side {
            for b in (a + 1)..self.side {
                let w = self.cells[a * self.side + b];
                if w != 0 && w != INFINITE {
                    out.push((a, b, w));
                }
            }
        }
        out
    }

    /// Sum of the upper-triangle edge weights.
    pub fn total_weight(&self) -> u64 {
        self.edges().iter().map(|&(_, _, w)| u64::from(w)).sum()
    }
}

impl fmt::Display for WeightMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, &w) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                let shown = if w == INFINITE { 0 } else { w };
                write!(f, "{shown}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
