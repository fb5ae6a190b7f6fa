//! `ArrayStack`: a bounded LIFO stack of integers.

use super::DEFAULT_CAPACITY;

/// Fixed-capacity stack; index 0 is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStack {
    items: Vec<i32>,
    capacity: usize,
}

impl ArrayStack {
    /// Creates an empty stack holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of items.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stacked items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes `value` on top. Returns `false` on overflow.
    pub fn push(&mut self, value: i32) -> bool {
        if self.items.len() == self.capacity {
            #[cfg(feature = "tracing")]
            tracing::trace!(capacity = self.capacity, "stack overflow");
            return false;
        }
        self.items.push(value);
        true
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Option<i32> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Option<i32> {
        self.items.last().copied()
    }

    /// Returns the item at `index`, counting up from the bottom.
    pub fn find(&self, index: usize) -> Option<i32> {
        self.items.get(index).copied()
    }

    /// Empties the stack.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.items.iter().rev().copied()
    }
}

impl Default for ArrayStack {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo() {
        let mut s = ArrayStack::new(4);
        for v in [1, 2, 3] {
            assert!(s.push(v));
        }
        assert_eq!(s.peek(), Some(3));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.find(0), Some(1));
        assert_eq!(s.find(2), None);
    }

    #[test]
    fn test_overflow_and_underflow() {
        let mut s = ArrayStack::new(1);
        assert!(s.push(9));
        assert!(!s.push(10));
        assert_eq!(s.pop(), Some(9));
        assert_eq!(s.pop(), None);
        assert_eq!(s.peek(), None);
    }

    #[test]
    fn test_clear() {
        let mut s = ArrayStack::default();
        assert_eq!(s.capacity(), 100);
        s.push(1);
        s.push(2);
        s.clear();
        assert!(s.is_empty());
        assert!(s.push(3));
        assert_eq!(s.len(), 1);
    }
}
