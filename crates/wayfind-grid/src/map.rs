//! Grid maps parsed from ASCII art.
//!
//! A map is written one row per line. Every row must have the same width
//! once surrounding whitespace is stripped; blank lines before and after the
//! map are ignored.
//!
//! | Rune | Meaning |
//! |---|---|
//! | `.` | floor, cost 1 |
//! | `~` | water, cost 2 |
//! | `^` | mountain, cost 3 |
//! | `1`–`9` | floor with that entry cost |
//! | `X`, `#` | wall |
//! | `F` | start (floor) |
//! | `T` | goal (floor) |
//! | `●`, `*` | route marker (floor) |

use std::fmt;

use wayfind::{Path, PathFinder};

use crate::cell::GridCell;
use crate::geom::{Point, Range};
use crate::terrain::Terrain;

/// Which moves are allowed between cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Up, down, left, right.
    #[default]
    Four,
    /// Cardinal moves plus diagonals. A diagonal step may not cut the corner
    /// of a wall.
    Eight,
}

/// Largest number of cells [`GridMap::try_new`] and map generation accept.
pub const MAX_CELLS: usize = 1 << 24;

/// A rectangular terrain map with optional start and goal markers.
#[derive(Clone, Debug, PartialEq)]
pub struct GridMap {
    range: Range,
    cells: Vec<Terrain>,
    start: Option<Point>,
    goal: Option<Point>,
    connectivity: Connectivity,
    // Lower bound on the cost of entering any passable cell; scales the
    // heuristic so it never overestimates.
    min_cost: f64,
}

impl GridMap {
    /// Create a `width` × `height` map of plain floor.
    pub fn new(width: i32, height: i32) -> Self {
        let range = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            range,
            cells: vec![Terrain::Floor; range.len()],
            start: None,
            goal: None,
            connectivity: Connectivity::default(),
            min_cost: 1.0,
        }
    }

    /// Like [`new`](Self::new), but rejects sizes whose cell count overflows
    /// or exceeds [`MAX_CELLS`].
    pub fn try_new(width: i32, height: i32) -> Result<Self, MapError> {
        let cells = (width.max(0) as usize).checked_mul(height.max(0) as usize);
        match cells {
            Some(n) if n <= MAX_CELLS => Ok(Self::new(width, height)),
            _ => Err(MapError::TooLarge { width, height }),
        }
    }

    /// Parse a map that must contain exactly one start (`F`) and one goal
    /// (`T`).
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let map = Self::parse_terrain(s)?;
        if map.start.is_none() {
            return Err(MapError::MissingStart);
        }
        if map.goal.is_none() {
            return Err(MapError::MissingGoal);
        }
        Ok(map)
    }

    /// Parse a map where start and goal markers are optional.
    pub fn parse_terrain(s: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = s.lines().map(str::trim).collect();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let (Some(first), Some(last)) = (first, last) else {
            return Err(MapError::Empty);
        };
        let rows = &lines[first..=last];

        let width = rows[0].chars().count();
        let mut map = Self::new(width as i32, rows.len() as i32);
        map.min_cost = f64::INFINITY;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MapError::InconsistentWidth {
                    line: first + y + 1,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                let terrain = Terrain::from_rune(ch).ok_or(MapError::InvalidRune { ch, pos: p })?;
                match ch {
                    'F' if map.start.is_some() => return Err(MapError::DuplicateStart(p)),
                    'F' => map.start = Some(p),
                    'T' if map.goal.is_some() => return Err(MapError::DuplicateGoal(p)),
                    'T' => map.goal = Some(p),
                    _ => {}
                }
                map.set_terrain(p, terrain);
            }
        }
        if !map.min_cost.is_finite() {
            map.min_cost = 1.0;
        }

        log::debug!(
            "map: parsed {}x{} grid, start {:?}, goal {:?}",
            map.width(),
            map.height(),
            map.start,
            map.goal
        );
        Ok(map)
    }

    /// Builder-style connectivity setter.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn set_connectivity(&mut self, connectivity: Connectivity) {
        self.connectivity = connectivity;
    }

    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.range.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.range.height()
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Mark `p` as the start. Ignored if out of range.
    pub fn set_start(&mut self, p: Point) {
        if self.range.contains(p) {
            self.start = Some(p);
        }
    }

    /// Mark `p` as the goal. Ignored if out of range.
    pub fn set_goal(&mut self, p: Point) {
        if self.range.contains(p) {
            self.goal = Some(p);
        }
    }

    /// Lower bound on the cost of entering any passable cell.
    #[inline]
    pub fn min_cost(&self) -> f64 {
        self.min_cost
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.range.contains(p) {
            return None;
        }
        let x = (p.x - self.range.min.x) as usize;
        let y = (p.y - self.range.min.y) as usize;
        Some(y * self.range.width() as usize + x)
    }

    /// Terrain at `p`, or `None` outside the map.
    #[inline]
    pub fn terrain(&self, p: Point) -> Option<Terrain> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Set the terrain at `p`. Ignored if out of range. Weights outside
    /// 1 to 9 are clamped into that range.
    pub fn set_terrain(&mut self, p: Point, terrain: Terrain) {
        let Some(i) = self.idx(p) else {
            return;
        };
        let terrain = terrain.clamped();
        self.cells[i] = terrain;
        if let Some(cost) = terrain.cost() {
            self.min_cost = self.min_cost.min(cost);
        }
    }

    /// Whether `p` is inside the map and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.terrain(p).is_some_and(Terrain::is_passable)
    }

    /// A searchable handle to the cell at `p`.
    pub fn cell(&self, p: Point) -> Option<GridCell<'_>> {
        self.range.contains(p).then(|| GridCell::new(self, p))
    }

    /// Least-cost route from the start marker to the goal marker.
    ///
    /// Fails only when either marker is missing; an unreachable goal is
    /// `Ok(None)`.
    pub fn route(&self) -> Result<Option<Path<GridCell<'_>>>, MapError> {
        let mut finder = PathFinder::new();
        self.route_with(&mut finder)
    }

    /// Like [`route`](Self::route), reusing a caller-owned finder.
    pub fn route_with<'a>(
        &'a self,
        finder: &mut PathFinder<GridCell<'a>>,
    ) -> Result<Option<Path<GridCell<'a>>>, MapError> {
        let start = self.start.ok_or(MapError::MissingStart)?;
        let goal = self.goal.ok_or(MapError::MissingGoal)?;
        let from = GridCell::new(self, start);
        let to = GridCell::new(self, goal);
        Ok(finder.find_path(&from, &to))
    }

    /// The rune drawn at `p`: start and goal markers take precedence over
    /// terrain.
    pub fn rune(&self, p: Point) -> Option<char> {
        if self.start == Some(p) {
            return Some('F');
        }
        if self.goal == Some(p) {
            return Some('T');
        }
        self.terrain(p).map(Terrain::rune)
    }
}

impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in self.range.min.y..self.range.max.y {
            for x in self.range.min.x..self.range.max.x {
                let ch = self.rune(Point::new(x, y)).unwrap_or(' ');
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing or routing a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The input holds no rows.
    Empty,
    /// A row's width differs from the first row's. `line` is the 1-based
    /// line number in the input text.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character with no meaning in the map format.
    InvalidRune { ch: char, pos: Point },
    /// No `F` marker.
    MissingStart,
    /// No `T` marker.
    MissingGoal,
    /// A second `F` marker.
    DuplicateStart(Point),
    /// A second `T` marker.
    DuplicateGoal(Point),
    /// A generated map cannot hold distinct start and goal cells.
    TooSmall { width: i32, height: i32 },
    /// The requested size overflows or exceeds [`MAX_CELLS`].
    TooLarge { width: i32, height: i32 },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no rows"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "map: no start marker `F`"),
            Self::MissingGoal => write!(f, "map: no goal marker `T`"),
            Self::DuplicateStart(p) => write!(f, "map: second start marker at {p}"),
            Self::DuplicateGoal(p) => write!(f, "map: second goal marker at {p}"),
            Self::TooLarge { width, height } => {
                write!(f, "map: {width}x{height} exceeds {MAX_CELLS} cells")
            }
            Self::TooSmall { width, height } => {
                write!(f, "map: {width}x{height} is too small for a start and a goal")
            }
        }
    }
}

impl std::error::Error for MapError {}
