use std::hash::Hash;

/// A graph vertex that A* can search over.
///
/// The engine never builds nodes on its own; it clones the handles it is
/// given by [`neighbors`](Self::neighbors) and keys its bookkeeping by
/// `Eq + Hash`, so identity must be stable for the duration of a search.
pub trait SearchNode: Clone + Eq + Hash {
    /// Append the nodes reachable in one step from `self` into `buf`.
    /// Blocked neighbours must be left out. The caller clears `buf` before
    /// calling.
    fn neighbors(&self, buf: &mut Vec<Self>);

    /// Exact cost of moving from `self` to the adjacent `target`.
    /// Must be non-negative.
    fn cost_to_enter(&self, target: &Self) -> f64;

    /// Estimated remaining cost from `self` to `goal`.
    /// Must never overestimate (admissible) and should be consistent with
    /// [`cost_to_enter`](Self::cost_to_enter) for the returned route to be
    /// optimal.
    fn heuristic_to(&self, goal: &Self) -> f64;
}
