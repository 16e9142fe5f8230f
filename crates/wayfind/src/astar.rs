use crate::frontier::Frontier;
use crate::path::Path;
use crate::registry::{RecordId, Registry};
use crate::traits::SearchNode;

/// Counters describing the last search run by a [`PathFinder`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Records popped from the frontier and settled.
    pub expanded: usize,
    /// Frontier insertions, re-prioritisations included.
    pub pushed: usize,
    /// Distinct nodes the search touched.
    pub registered: usize,
}

/// Reusable A* search state.
///
/// A `PathFinder` keeps its registry, frontier and neighbour buffer between
/// calls so that repeated searches do not reallocate. Every call to
/// [`find_path`](Self::find_path) starts from empty bookkeeping, so nothing
/// from one search is visible to the next.
#[derive(Debug)]
pub struct PathFinder<N> {
    registry: Registry<N>,
    frontier: Frontier,
    nbuf: Vec<N>,
    stats: SearchStats,
}

impl<N: SearchNode> Default for PathFinder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: SearchNode> PathFinder<N> {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            frontier: Frontier::new(),
            nbuf: Vec::with_capacity(8),
            stats: SearchStats::default(),
        }
    }

    /// Statistics for the most recent search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Compute a least-cost route from `start` to `goal` using A*.
    ///
    /// Returns the full route (both endpoints included) or `None` if the
    /// frontier runs dry before `goal` is reached. The route is optimal when
    /// every step cost is non-negative and the heuristic is admissible and
    /// consistent.
    pub fn find_path(&mut self, start: &N, goal: &N) -> Option<Path<N>> {
        self.registry.clear();
        self.frontier.clear();
        self.stats = SearchStats::default();

        let start_id = self.registry.get_or_create(start.clone());
        self.registry.record_mut(start_id).g = 0.0;
        self.frontier.push(self.registry.records_mut(), start_id);
        self.stats.pushed += 1;

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = self.frontier.pop_min(self.registry.records_mut()) else {
                break 'search None;
            };

            let current = self.registry.record_mut(ci);
            current.settled = true;
            self.stats.expanded += 1;

            if current.node == *goal {
                break 'search Some(ci);
            }

            let current_g = current.g;
            let current_node = current.node.clone();

            nbuf.clear();
            current_node.neighbors(&mut nbuf);

            for neighbor in nbuf.drain(..) {
                let ni = self.registry.get_or_create(neighbor);
                let n = self.registry.record(ni);
                if n.settled {
                    continue;
                }

                let tentative_g = current_g + current_node.cost_to_enter(&n.node);
                let resident = self.frontier.contains(n);
                if resident && tentative_g >= n.g {
                    continue;
                }
                let h = n.node.heuristic_to(goal);

                if resident {
                    self.frontier.remove(self.registry.records_mut(), ni);
                }
                let n = self.registry.record_mut(ni);
                n.g = tentative_g;
                n.h = h;
                n.parent = Some(ci);
                self.frontier.push(self.registry.records_mut(), ni);
                self.stats.pushed += 1;
            }

            log::trace!(
                "astar: expanded record {} at g={current_g}, frontier size {}",
                ci.0,
                self.frontier.len()
            );
        };

        self.nbuf = nbuf;
        self.stats.registered = self.registry.len();

        log::debug!(
            "astar: {} (expanded {}, pushed {}, registered {})",
            if found.is_some() { "goal reached" } else { "frontier exhausted" },
            self.stats.expanded,
            self.stats.pushed,
            self.stats.registered,
        );

        found.map(|gi| self.reconstruct(gi))
    }

    fn reconstruct(&self, goal_id: RecordId) -> Path<N> {
        let mut nodes: Vec<N> = self
            .registry
            .ancestry(goal_id)
            .map(|id| self.registry.record(id).node.clone())
            .collect();
        nodes.reverse();
        Path::new(nodes, self.registry.record(goal_id).g)
    }
}

/// One-shot A* search with fresh bookkeeping.
///
/// Equivalent to `PathFinder::new().find_path(start, goal)`.
pub fn find_path<N: SearchNode>(start: &N, goal: &N) -> Option<Path<N>> {
    PathFinder::new().find_path(start, goal)
}
