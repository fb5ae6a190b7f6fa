//! `DoublyLinkedList`: a doubly linked list of string listings.
//!
//! Nodes live in an arena addressed by index instead of behind pointers, so
//! unlinking a node cannot leave a dangling reference. Freed slots form a
//! free list and are reused by later inserts.
//!
//! # Layout
//! This implementation uses a Structure-of-Arrays (SoA) layout:
//! - `links`: Stores structure (prev/next indices). Walking the list only touches this.
//! - `values`: Stores the listings. Only read when comparing or yielding.

use core::fmt;

/// A slot in the links vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkSlot {
    Occupied { prev: Option<usize>, next: Option<usize> },
    Free(Option<usize>), // Next free slot index
}

/// Double-ended iterator over the listings, head to tail.
pub struct Iter<'a> {
    list: &'a DoublyLinkedList,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front?;
        let (_, next) = self.list.link(idx);
        self.front = next;
        self.remaining -= 1;
        self.list.values[idx].as_deref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back?;
        let (prev, _) = self.list.link(idx);
        self.back = prev;
        self.remaining -= 1;
        self.list.values[idx].as_deref()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// A doubly linked list that inserts at the front.
#[derive(Clone, Default)]
pub struct DoublyLinkedList {
    /// Structure storage.
    links: Vec<LinkSlot>,
    /// Listing storage; `None` exactly where `links` holds a free slot.
    values: Vec<Option<String>>,

    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl DoublyLinkedList {
    /// Creates a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of listings in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Links of an occupied slot.
    fn link(&self, idx: usize) -> (Option<usize>, Option<usize>) {
        match self.links[idx] {
            LinkSlot::Occupied { prev, next } => (prev, next),
            LinkSlot::Free(_) => unreachable!("list links point at free slot {idx}"),
        }
    }

    fn set_prev(&mut self, idx: usize, to: Option<usize>) {
        if let LinkSlot::Occupied { prev, .. } = &mut self.links[idx] {
            *prev = to;
        }
    }

    fn set_next(&mut self, idx: usize, to: Option<usize>) {
        if let LinkSlot::Occupied { next, .. } = &mut self.links[idx] {
            *next = to;
        }
    }

    /// Allocates a node slot, reusing a free one when available.
    fn alloc(&mut self, listing: String) -> usize {
        if let Some(free_idx) = self.free_head {
            let LinkSlot::Free(next_free) = self.links[free_idx] else {
                unreachable!("corrupted free list at {free_idx}");
            };
            self.free_head = next_free;
            self.links[free_idx] = LinkSlot::Occupied { prev: None, next: None };
            self.values[free_idx] = Some(listing);
            free_idx
        } else {
            self.links.push(LinkSlot::Occupied { prev: None, next: None });
            self.values.push(Some(listing));
            self.links.len() - 1
        }
    }

    /// Puts a slot onto the free list. Callers relink neighbours first.
    fn free(&mut self, idx: usize) -> Option<String> {
        self.links[idx] = LinkSlot::Free(self.free_head);
        self.free_head = Some(idx);
        self.values[idx].take()
    }

    /// Inserts `listing` at the front. Always succeeds.
    pub fn insert(&mut self, listing: impl Into<String>) -> bool {
        let new_idx = self.alloc(listing.into());
        let old_head = self.head;

        if let Some(head_idx) = old_head {
            self.set_prev(head_idx, Some(new_idx));
        } else {
            self.tail = Some(new_idx);
        }
        self.set_next(new_idx, old_head);

        self.head = Some(new_idx);
        self.len += 1;
        true
    }

    /// Returns the first listing equal to `listing`.
    pub fn fetch(&self, listing: &str) -> Option<&str> {
        self.iter().find(|&l| l == listing)
    }

    /// Unlinks the first listing equal to `listing`.
    pub fn delete(&mut self, listing: &str) -> bool {
        let Some(idx) = self.position(listing) else {
            return false;
        };
        let (prev, next) = self.link(idx);

        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.set_prev(n, prev),
            None => self.tail = prev,
        }

        self.free(idx);
        self.len -= 1;
        true
    }

    /// Deletes `listing` and inserts `new_listing` at the front.
    ///
    /// Returns `false` without inserting if `listing` is absent.
    pub fn update(&mut self, listing: &str, new_listing: impl Into<String>) -> bool {
        self.delete(listing) && self.insert(new_listing)
    }

    /// First listing.
    pub fn front(&self) -> Option<&str> {
        self.values[self.head?].as_deref()
    }

    /// Last listing.
    pub fn back(&self) -> Option<&str> {
        self.values[self.tail?].as_deref()
    }

    /// Iterates head to tail; call `.rev()` to walk tail to head.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Arena index of the first node holding `listing`.
    fn position(&self, listing: &str) -> Option<usize> {
        let mut current = self.head;
        while let Some(idx) = current {
            if self.values[idx].as_deref() == Some(listing) {
                return Some(idx);
            }
            current = self.link(idx).1;
        }
        None
    }
}

impl fmt::Debug for DoublyLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a DoublyLinkedList {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
