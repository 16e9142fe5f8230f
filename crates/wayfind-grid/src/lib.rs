//! ASCII grid maps that can be searched with [`wayfind`].
//!
//! [`GridMap`] parses a text drawing into terrain plus start and goal
//! markers; [`GridCell`] exposes its cells as [`wayfind::SearchNode`]s with
//! terrain-weighted step costs and a distance heuristic matching the map's
//! [`Connectivity`].
//!
//! ```
//! use wayfind_grid::{GridMap, render_route};
//!
//! let map = GridMap::parse("F.X\n..T").unwrap();
//! let path = map.route().unwrap().unwrap();
//! assert_eq!(path.cost(), 3.0);
//! print!("{}", render_route(&map, Some(&path)));
//! ```

mod cell;
mod distance;
mod geom;
mod map;
mod mapgen;
mod render;
mod terrain;

pub use cell::GridCell;
pub use distance::{chebyshev, manhattan, octile};
pub use geom::{Point, Range};
pub use map::{Connectivity, GridMap, MAX_CELLS, MapError};
pub use mapgen::{MapGen, MapGenConfig};
pub use render::{ROUTE_RUNE, print_colored, render_route};
pub use terrain::Terrain;
