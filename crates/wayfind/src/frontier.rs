//! Indexed binary min-heap over registry records.
//!
//! Each record remembers its own slot in the heap array (`heap_index`), so a
//! resident record can be removed or re-prioritised in O(log n) without a
//! linear scan. The heap only stores [`RecordId`]s; the records themselves
//! stay in the registry and are passed in as a slice on every call.

use crate::registry::{NOT_IN_FRONTIER, Record, RecordId};

/// Open set ordered by `g + h`.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: Vec<RecordId>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self { heap: Vec::new() }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether the record is currently resident. O(1).
    #[inline]
    pub(crate) fn contains<N>(&self, rec: &Record<N>) -> bool {
        rec.in_frontier()
    }

    /// Forget every entry. Slots of records still pointing into the heap are
    /// left untouched, so only call this together with clearing the registry.
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
    }

    /// Insert a record that is not yet resident.
    pub(crate) fn push<N>(&mut self, records: &mut [Record<N>], id: RecordId) {
        debug_assert!(!records[id.0].in_frontier(), "record pushed twice");
        let slot = self.heap.len();
        self.heap.push(id);
        records[id.0].heap_index = slot;
        self.sift_up(records, slot);
    }

    /// Remove and return the record with the smallest `g + h`.
    pub(crate) fn pop_min<N>(&mut self, records: &mut [Record<N>]) -> Option<RecordId> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(records, 0, last);
        let id = self.heap.pop()?;
        records[id.0].heap_index = NOT_IN_FRONTIER;
        if !self.heap.is_empty() {
            self.sift_down(records, 0);
        }
        Some(id)
    }

    /// Remove a resident record from anywhere in the heap. No-op if the
    /// record is not resident.
    pub(crate) fn remove<N>(&mut self, records: &mut [Record<N>], id: RecordId) {
        let slot = records[id.0].heap_index;
        if slot == NOT_IN_FRONTIER {
            return;
        }
        let last = self.heap.len() - 1;
        if slot != last {
            self.swap(records, slot, last);
        }
        self.heap.pop();
        records[id.0].heap_index = NOT_IN_FRONTIER;
        if slot < self.heap.len() && !self.sift_down(records, slot) {
            self.sift_up(records, slot);
        }
    }

    #[inline]
    fn less<N>(&self, records: &[Record<N>], i: usize, j: usize) -> bool {
        records[self.heap[i].0].f() < records[self.heap[j].0].f()
    }

    #[inline]
    fn swap<N>(&mut self, records: &mut [Record<N>], i: usize, j: usize) {
        self.heap.swap(i, j);
        records[self.heap[i].0].heap_index = i;
        records[self.heap[j].0].heap_index = j;
    }

    fn sift_up<N>(&mut self, records: &mut [Record<N>], mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(records, i, parent) {
                break;
            }
            self.swap(records, i, parent);
            i = parent;
        }
    }

    /// Returns `true` if the element at `start` moved.
    fn sift_down<N>(&mut self, records: &mut [Record<N>], start: usize) -> bool {
        let n = self.heap.len();
        let mut i = start;
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < n && self.less(records, right, left) {
                child = right;
            }
            if !self.less(records, child, i) {
                break;
            }
            self.swap(records, i, child);
            i = child;
        }
        i > start
    }
}
