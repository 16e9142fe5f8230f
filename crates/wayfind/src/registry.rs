use std::collections::HashMap;

use crate::traits::SearchNode;

/// Slot value meaning "not currently in the frontier".
pub(crate) const NOT_IN_FRONTIER: usize = usize::MAX;

/// Dense handle to a [`Record`] inside a [`Registry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct RecordId(pub(crate) usize);

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// Search bookkeeping for one node.
#[derive(Clone, Debug)]
pub(crate) struct Record<N> {
    pub(crate) node: N,
    pub(crate) parent: Option<RecordId>,
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) heap_index: usize,
    pub(crate) settled: bool,
}

impl<N> Record<N> {
    fn new(node: N) -> Self {
        Self {
            node,
            parent: None,
            g: f64::INFINITY,
            h: 0.0,
            heap_index: NOT_IN_FRONTIER,
            settled: false,
        }
    }

    /// Estimated total cost through this node.
    #[inline]
    pub(crate) fn f(&self) -> f64 {
        self.g + self.h
    }

    #[inline]
    pub(crate) fn in_frontier(&self) -> bool {
        self.heap_index != NOT_IN_FRONTIER
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Owns every [`Record`] created during one search, at most one per node.
///
/// Records live in a flat arena; the hash map only translates node identity
/// into an arena index, so the frontier and parent links can refer to
/// records by [`RecordId`] without borrowing the registry.
#[derive(Debug)]
pub(crate) struct Registry<N> {
    ids: HashMap<N, RecordId>,
    records: Vec<Record<N>>,
}

impl<N: SearchNode> Registry<N> {
    pub(crate) fn new() -> Self {
        Self {
            ids: HashMap::new(),
            records: Vec::new(),
        }
    }

    /// Return the record for `node`, creating an unseen one on first use.
    pub(crate) fn get_or_create(&mut self, node: N) -> RecordId {
        if let Some(&id) = self.ids.get(&node) {
            return id;
        }
        let id = RecordId(self.records.len());
        self.records.push(Record::new(node.clone()));
        self.ids.insert(node, id);
        id
    }

    /// Drop every record, keeping allocated capacity.
    pub(crate) fn clear(&mut self) {
        self.ids.clear();
        self.records.clear();
    }
}

impl<N> Registry<N> {
    #[inline]
    pub(crate) fn record(&self, id: RecordId) -> &Record<N> {
        &self.records[id.0]
    }

    #[inline]
    pub(crate) fn record_mut(&mut self, id: RecordId) -> &mut Record<N> {
        &mut self.records[id.0]
    }

    /// All records, indexable by `RecordId.0`.
    #[inline]
    pub(crate) fn records_mut(&mut self) -> &mut [Record<N>] {
        &mut self.records
    }

    /// Number of distinct nodes seen so far.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    /// Walk parent links from `id` up to the root record.
    pub(crate) fn ancestry(&self, id: RecordId) -> impl Iterator<Item = RecordId> + '_ {
        std::iter::successors(Some(id), move |&cur| self.record(cur).parent)
    }
}
