//! `CircularQueue`: a bounded FIFO queue of integers over a ring buffer.
//!
//! Performance Characteristics:
//! - Enqueue/Dequeue: O(1) with ring buffer arithmetic
//! - Memory: one fixed allocation at construction, never grown

use super::DEFAULT_CAPACITY;

/// Fixed-capacity FIFO queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularQueue {
    /// Ring storage; vacated slots are reset to `None`.
    buffer: Box<[Option<i32>]>,
    /// Index of the next element to dequeue.
    front: usize,
    /// Index of the next slot to enqueue into.
    rear: usize,
    len: usize,
}

impl CircularQueue {
    /// Creates an empty queue holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![None; capacity].into_boxed_slice(),
            front: 0,
            rear: 0,
            len: 0,
        }
    }

    /// Maximum number of items.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of queued items.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the queue is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Appends `value` at the rear. Returns `false` on overflow.
    pub fn enqueue(&mut self, value: i32) -> bool {
        if self.is_full() {
            #[cfg(feature = "tracing")]
            tracing::trace!(capacity = self.capacity(), "queue overflow");
            return false;
        }
        self.buffer[self.rear] = Some(value);
        self.rear = (self.rear + 1) % self.capacity();
        self.len += 1;
        true
    }

    /// Removes and returns the front item.
    pub fn dequeue(&mut self) -> Option<i32> {
        if self.is_empty() {
            return None;
        }
        let value = self.buffer[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        value
    }

    /// Returns the front item without removing it.
    pub fn peek(&self) -> Option<i32> {
        if self.is_empty() {
            None
        } else {
            self.buffer[self.front]
        }
    }

    /// Returns the item in raw ring slot `slot`, if that slot is in use.
    ///
    /// Slots are storage positions, not queue positions: slot 0 is the first
    /// element of the ring buffer wherever the front currently is.
    pub fn find(&self, slot: usize) -> Option<i32> {
        if self.is_empty() {
            return None;
        }
        self.buffer.get(slot).copied().flatten()
    }

    /// Empties the queue.
    pub fn clear(&mut self) {
        self.buffer.fill(None);
        self.front = 0;
        self.rear = 0;
        self.len = 0;
    }

    /// Iterates from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        let cap = self.capacity();
        (0..self.len).filter_map(move |i| self.buffer[(self.front + i) % cap])
    }
}

impl Default for CircularQueue {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
