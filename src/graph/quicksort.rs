//! Hoare-partition quicksort, used to order vertex labels.

use super::MatrixGraph;

/// Sorts `items` in place with Hoare partitioning.
///
/// The pivot is the value at `(left + right) / 2`, sampled once before each
/// partition. `i` advances past items below the pivot, `j` retreats past items
/// above it, and the pair is swapped while `i <= j`. The ranges `[left, j]` and
/// `[i, right]` are then sorted in turn from an explicit work stack.
///
/// Not stable: equal items may change relative order.
///
/// ```rust
/// use classics::graph::quicksort::quicksort;
///
/// let mut v = vec!["c", "a", "b"];
/// quicksort(&mut v);
/// assert_eq!(v, ["a", "b", "c"]);
/// ```
#[allow(clippy::cast_sign_loss)]
pub fn quicksort<T: Ord + Clone>(items: &mut [T]) {
    let Ok(last) = isize::try_from(items.len()) else {
        return;
    };
    let mut pending: Vec<(isize, isize)> = vec![(0, last - 1)];

    while let Some((left, right)) = pending.pop() {
        if right - left + 1 <= 1 {
            continue;
        }

        // Indices are only read while inside [left, right], so never negative.
        let at = |k: isize| k as usize;
        let pivot = items[at((left + right) / 2)].clone();
        let (mut i, mut j) = (left, right);

        loop {
            while items[at(i)] < pivot {
                i += 1;
            }
            while items[at(j)] > pivot {
                j -= 1;
            }
            if i <= j {
                items.swap(at(i), at(j));
                i += 1;
                j -= 1;
            }
            if i > j {
                break;
            }
        }

        pending.push((i, right));
        pending.push((left, j));
    }
}

impl MatrixGraph {
    /// Sorts the active vertex labels in place and returns them in order.
    ///
    /// Empty slots sort before every label. Only labels move: edges stay
    /// attached to slot indices.
    pub fn sort(&mut self) -> Vec<Option<&str>> {
        let n = self.active_vertices();
        quicksort(&mut self.vertices[..n]);
        self.vertices()
    }
}
