//! Array-backed binary min-heap of cell coords with slot tracking.
//!
//! Unlike `std::collections::BinaryHeap`, [`OpenHeap`] knows where every coord
//! sits, so a coord whose key drops can be sifted up in place instead of being
//! pushed a second time. Keys are not stored: every operation that reorders
//! entries takes a `weight` function from coord to key, and the caller must
//! only ever lower the key of a queued coord.

use crate::error::PathError;

/// Binary min-heap over coords `0..cells`.
#[derive(Debug, Clone)]
pub struct OpenHeap {
    /// Heap-ordered coords; `items[0]` has the smallest weight.
    items: Vec<usize>,
    /// For each coord, its index in `items` while queued.
    slots: Vec<Option<usize>>,
}

impl OpenHeap {
    /// Create an empty heap able to hold every coord below `cells` without
    /// reallocating.
    pub fn with_capacity(cells: usize) -> Result<Self, PathError> {
        let alloc_err = PathError::Allocation { cells };
        let mut items = Vec::new();
        items.try_reserve_exact(cells).map_err(|_| alloc_err.clone())?;
        let mut slots = Vec::new();
        slots.try_reserve_exact(cells).map_err(|_| alloc_err)?;
        slots.resize(cells, None);
        Ok(Self { items, slots })
    }

    /// Number of queued coords.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of `coord` in the heap, or `None` if it is not queued.
    #[inline]
    pub fn slot_of(&self, coord: usize) -> Option<usize> {
        self.slots[coord]
    }

    /// Whether `coord` is queued.
    #[inline]
    pub fn contains(&self, coord: usize) -> bool {
        self.slots[coord].is_some()
    }

    /// The coord with the smallest weight, without removing it.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.items.first().copied()
    }

    /// Queue `coord`, which must not already be queued.
    pub fn push(&mut self, coord: usize, weight: impl Fn(usize) -> u32) {
        assert!(
            self.slots[coord].is_none(),
            "coord {coord} is already queued"
        );
        let slot = self.items.len();
        self.items.push(coord);
        self.slots[coord] = Some(slot);
        self.sift_up(slot, &weight);
    }

    /// Restore heap order after the weight of queued `coord` decreased.
    pub fn decrease(&mut self, coord: usize, weight: impl Fn(usize) -> u32) {
        let Some(slot) = self.slots[coord] else {
            panic!("coord {coord} is not queued");
        };
        self.sift_up(slot, &weight);
    }

    /// Remove and return the coord with the smallest weight.
    ///
    /// The last entry takes the root's place and sinks to its level.
    pub fn pop_min(&mut self, weight: impl Fn(usize) -> u32) -> Option<usize> {
        let root = self.peek()?;
        let last = self.items.pop()?;
        self.slots[root] = None;
        if !self.items.is_empty() {
            self.items[0] = last;
            self.slots[last] = Some(0);
            self.sift_down(0, &weight);
        }
        Some(root)
    }

    /// Move the entry at `slot` towards the root while it weighs no more
    /// than its parent.
    fn sift_up(&mut self, mut slot: usize, weight: &impl Fn(usize) -> u32) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if weight(self.items[slot]) > weight(self.items[parent]) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    /// Move the entry at `slot` away from the root while a child weighs no
    /// more than it.
    fn sift_down(&mut self, mut slot: usize, weight: &impl Fn(usize) -> u32) {
        let len = self.items.len();
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut target = slot;
            if left < len && weight(self.items[left]) <= weight(self.items[target]) {
                target = left;
            }
            if right < len && weight(self.items[right]) <= weight(self.items[target]) {
                target = right;
            }
            if target == slot {
                return;
            }
            self.swap(slot, target);
            slot = target;
        }
    }

    /// Exchange two entries, keeping both recorded slots in sync.
    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.slots[self.items[a]] = Some(a);
        self.slots[self.items[b]] = Some(b);
    }

    /// Check the heap order and slot bookkeeping.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self, weight: impl Fn(usize) -> u32) -> bool {
        let ordered = (1..self.items.len())
            .all(|i| weight(self.items[(i - 1) / 2]) <= weight(self.items[i]));
        let slots_match = self
            .items
            .iter()
            .enumerate()
            .all(|(i, &c)| self.slots[c] == Some(i));
        let queued = self.slots.iter().filter(|s| s.is_some()).count();
        ordered && slots_match && queued == self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn pops_in_weight_order() {
        let keys = [7, 3, 9, 1, 5, 3, 8];
        let w = |c: usize| keys[c];
        let mut h = OpenHeap::with_capacity(keys.len()).unwrap();
        for c in 0..keys.len() {
            h.push(c, w);
            assert!(h.is_consistent(w));
        }
        let mut popped = Vec::new();
        while let Some(c) = h.pop_min(w) {
            assert!(h.is_consistent(w));
            assert_eq!(h.slot_of(c), None);
            popped.push(keys[c]);
        }
        assert_eq!(popped, [1, 3, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn decrease_moves_entry_to_root() {
        let keys = RefCell::new(vec![4, 6, 8, 10]);
        let w = |c: usize| keys.borrow()[c];
        let mut h = OpenHeap::with_capacity(4).unwrap();
        for c in 0..4 {
            h.push(c, w);
        }
        assert_eq!(h.peek(), Some(0));

        keys.borrow_mut()[3] = 2;
        h.decrease(3, w);
        assert_eq!(h.slot_of(3), Some(0));
        assert!(h.is_consistent(w));
        assert_eq!(h.pop_min(w), Some(3));
    }

    #[test]
    fn equal_weight_child_rises_past_parent() {
        let w = |_: usize| 1;
        let mut h = OpenHeap::with_capacity(2).unwrap();
        h.push(0, w);
        h.push(1, w);
        assert_eq!(h.peek(), Some(1));
        assert_eq!(h.slot_of(0), Some(1));
    }

    #[test]
    fn pop_last_entry_empties_heap() {
        let w = |_: usize| 0;
        let mut h = OpenHeap::with_capacity(3).unwrap();
        h.push(2, w);
        assert_eq!(h.len(), 1);
        assert_eq!(h.pop_min(w), Some(2));
        assert!(h.is_empty());
        assert!(!h.contains(2));
        assert_eq!(h.pop_min(w), None);
    }

    #[test]
    #[should_panic(expected = "already queued")]
    fn double_push_panics() {
        let w = |_: usize| 0;
        let mut h = OpenHeap::with_capacity(1).unwrap();
        h.push(0, w);
        h.push(0, w);
    }

    #[test]
    #[should_panic(expected = "not queued")]
    fn decrease_unqueued_panics() {
        let mut h = OpenHeap::with_capacity(1).unwrap();
        h.decrease(0, |_| 0);
    }
}
