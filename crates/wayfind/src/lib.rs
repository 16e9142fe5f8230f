//! Generic A* search over caller-supplied graphs.
//!
//! The crate knows nothing about maps or grids. A node type opts in by
//! implementing [`SearchNode`], which supplies the three things A* needs:
//! neighbour enumeration, exact step cost and a goal-distance heuristic.
//!
//! ```
//! use wayfind::{SearchNode, find_path};
//!
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct Step(i32);
//!
//! impl SearchNode for Step {
//!     fn neighbors(&self, buf: &mut Vec<Self>) {
//!         buf.push(Step(self.0 - 1));
//!         buf.push(Step(self.0 + 1));
//!     }
//!     fn cost_to_enter(&self, _target: &Self) -> f64 {
//!         1.0
//!     }
//!     fn heuristic_to(&self, goal: &Self) -> f64 {
//!         f64::from((goal.0 - self.0).abs())
//!     }
//! }
//!
//! let path = find_path(&Step(0), &Step(3)).unwrap();
//! assert_eq!(path.cost(), 3.0);
//! assert_eq!(path.nodes().len(), 4);
//! ```
//!
//! # Components
//!
//! | Piece | Role |
//! |---|---|
//! | [`SearchNode`] | contract implemented by graph nodes |
//! | registry | one bookkeeping record per node seen in a search |
//! | frontier | indexed min-heap over records, keyed by `g + h` |
//! | [`PathFinder`] | relaxation loop and route reconstruction |
//!
//! [`PathFinder`] can be kept around to reuse its allocations; it clears all
//! bookkeeping at the start of every search. [`find_path`] is the one-shot
//! form.

mod astar;
mod frontier;
mod path;
mod registry;
mod traits;

pub use astar::{PathFinder, SearchStats, find_path};
pub use path::Path;
pub use traits::SearchNode;
