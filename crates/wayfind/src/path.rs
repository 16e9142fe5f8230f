/// A route returned by a successful search.
///
/// `nodes` always holds the full route from start to goal, both inclusive,
/// in travel order. A search where start and goal coincide yields a single
/// node and zero cost.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path<N> {
    nodes: Vec<N>,
    cost: f64,
}

impl<N> Path<N> {
    pub(crate) fn new(nodes: Vec<N>, cost: f64) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes, cost }
    }

    /// Every node on the route, start first, goal last.
    #[inline]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Consume the path, returning its nodes in travel order.
    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Total cost of the route (sum of every step's entry cost).
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of steps taken, i.e. one less than the number of nodes.
    #[inline]
    pub fn steps(&self) -> usize {
        self.nodes.len() - 1
    }

    #[inline]
    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    #[inline]
    pub fn goal(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Nodes strictly between start and goal, in travel order.
    pub fn intermediate(&self) -> &[N] {
        match self.nodes.len() {
            0..=2 => &[],
            n => &self.nodes[1..n - 1],
        }
    }

    /// The goal's predecessors walked back to the start: the goal itself is
    /// excluded and the start comes last. Empty when start and goal
    /// coincide.
    pub fn ancestors(&self) -> impl DoubleEndedIterator<Item = &N> + '_ {
        self.nodes[..self.nodes.len() - 1].iter().rev()
    }

    /// Iterate over consecutive `(from, to)` steps.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.nodes.windows(2).map(|w| (&w[0], &w[1]))
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
