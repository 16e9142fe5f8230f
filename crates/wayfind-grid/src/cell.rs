use std::fmt;
use std::hash::{Hash, Hasher};

use wayfind::SearchNode;

use crate::distance::{manhattan, octile};
use crate::geom::Point;
use crate::map::{Connectivity, GridMap};
use crate::terrain::Terrain;

/// A position on a [`GridMap`], usable as a [`SearchNode`].
///
/// Identity is the position alone: two cells compare equal when they share
/// a point, so only compare cells taken from the same map.
#[derive(Clone, Copy)]
pub struct GridCell<'a> {
    map: &'a GridMap,
    pos: Point,
}

impl<'a> GridCell<'a> {
    pub(crate) fn new(map: &'a GridMap, pos: Point) -> Self {
        Self { map, pos }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn terrain(&self) -> Terrain {
        self.map.terrain(self.pos).unwrap_or(Terrain::Wall)
    }

    #[inline]
    pub fn map(&self) -> &'a GridMap {
        self.map
    }
}

impl PartialEq for GridCell<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for GridCell<'_> {}

impl Hash for GridCell<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl fmt::Debug for GridCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridCell{}", self.pos)
    }
}

impl SearchNode for GridCell<'_> {
    fn neighbors(&self, buf: &mut Vec<Self>) {
        let map = self.map;
        match map.connectivity() {
            Connectivity::Four => {
                for n in self.pos.neighbors_4() {
                    if map.is_passable(n) {
                        buf.push(Self::new(map, n));
                    }
                }
            }
            Connectivity::Eight => {
                for n in self.pos.neighbors_8() {
                    if !map.is_passable(n) {
                        continue;
                    }
                    // No squeezing diagonally past a wall corner.
                    if self.pos.is_diagonal_to(n)
                        && !(map.is_passable(Point::new(n.x, self.pos.y))
                            && map.is_passable(Point::new(self.pos.x, n.y)))
                    {
                        continue;
                    }
                    buf.push(Self::new(map, n));
                }
            }
        }
    }

    fn cost_to_enter(&self, target: &Self) -> f64 {
        let Some(cost) = target.terrain().cost() else {
            return f64::INFINITY;
        };
        if self.pos.is_diagonal_to(target.pos) {
            cost * std::f64::consts::SQRT_2
        } else {
            cost
        }
    }

    fn heuristic_to(&self, goal: &Self) -> f64 {
        let d = match self.map.connectivity() {
            Connectivity::Four => f64::from(manhattan(self.pos, goal.pos)),
            Connectivity::Eight => octile(self.pos, goal.pos),
        };
        d * self.map.min_cost()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BinaryHeap, HashMap};

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use wayfind::{Path, find_path};

    use super::*;
    use crate::mapgen::{MapGen, MapGenConfig};

    fn route(map: &GridMap) -> Option<Path<GridCell<'_>>> {
        map.route().unwrap()
    }

    fn positions(path: &Path<GridCell<'_>>) -> Vec<Point> {
        path.nodes().iter().map(GridCell::pos).collect()
    }

    /// Uniform-cost search reference with integer-scaled costs.
    fn reference_cost(map: &GridMap) -> Option<f64> {
        #[derive(PartialEq)]
        struct Entry(f64, Point);
        impl Eq for Entry {}
        impl PartialOrd for Entry {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Entry {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                other.0.total_cmp(&self.0)
            }
        }

        let start = map.start()?;
        let goal = map.goal()?;
        let mut best: HashMap<Point, f64> = HashMap::new();
        let mut open = BinaryHeap::new();
        best.insert(start, 0.0);
        open.push(Entry(0.0, start));
        let mut buf = Vec::new();
        while let Some(Entry(d, p)) = open.pop() {
            if p == goal {
                return Some(d);
            }
            if d > best[&p] {
                continue;
            }
            let here = map.cell(p)?;
            buf.clear();
            here.neighbors(&mut buf);
            for n in &buf {
                let nd = d + here.cost_to_enter(n);
                if best.get(&n.pos()).is_none_or(|&old| nd < old) {
                    best.insert(n.pos(), nd);
                    open.push(Entry(nd, n.pos()));
                }
            }
        }
        None
    }

    #[test]
    fn straight_corridor() {
        let map = GridMap::parse(
            "
.....X......
.....XX.....
.F........T.
....XXX.....
............
",
        )
        .unwrap();
        let path = route(&map).unwrap();
        assert_eq!(path.cost(), 9.0);
        assert_eq!(path.intermediate().len(), 8);
        assert_eq!(path.ancestors().count(), 9);
        assert!(path.nodes().iter().all(|c| c.pos().y == 2));
        assert_eq!(path.start().pos(), Point::new(1, 2));
        assert_eq!(path.goal().pos(), Point::new(10, 2));
    }

    #[test]
    fn detour_around_block() {
        let map = GridMap::parse(
            "
............
.....XX.....
.F..XXXX..T.
....XXX.....
............
",
        )
        .unwrap();
        let path = route(&map).unwrap();
        // Manhattan distance is 9, the only ways round cost 13.
        assert_eq!(path.cost(), 13.0);
        for (a, b) in path.edges() {
            assert_eq!(manhattan(a.pos(), b.pos()), 1);
            assert!(map.is_passable(b.pos()));
        }
    }

    #[test]
    fn enclosed_goal() {
        let map = GridMap::parse(
            "
............
.........XXX
.F.......XTX
.........XXX
............
",
        )
        .unwrap();
        assert!(route(&map).is_none());
    }

    #[test]
    fn maze() {
        let map = GridMap::parse(
            "
FX.X........
.X...XXXX.X.
.X.X.X....X.
...X.X.XXXXX
.XX..X.....T
",
        )
        .unwrap();
        let path = route(&map).unwrap();
        assert_eq!(path.cost(), 27.0);
    }

    #[test]
    fn start_is_goal() {
        let map = GridMap::parse_terrain("...").unwrap();
        let c = map.cell(Point::new(1, 0)).unwrap();
        let path = find_path(&c, &c).unwrap();
        assert_eq!(positions(&path), vec![Point::new(1, 0)]);
        assert!(path.intermediate().is_empty());
    }

    #[test]
    fn weighted_terrain_is_avoided() {
        let map = GridMap::parse(
            "
F99T
....
",
        )
        .unwrap();
        let path = route(&map).unwrap();
        assert_eq!(path.cost(), 5.0);
        assert!(path.nodes().iter().all(|c| c.terrain() == Terrain::Floor));
    }

    #[test]
    fn diagonal_moves() {
        let map = GridMap::parse(
            "
F...
....
...T
",
        )
        .unwrap()
        .with_connectivity(Connectivity::Eight);
        let path = route(&map).unwrap();
        assert_eq!(path.steps(), 3);
        let want = 1.0 + 2.0 * std::f64::consts::SQRT_2;
        assert!((path.cost() - want).abs() < 1e-9);
    }

    #[test]
    fn no_corner_cutting() {
        let map = GridMap::parse(
            "
FX
.T
",
        )
        .unwrap()
        .with_connectivity(Connectivity::Eight);
        let path = route(&map).unwrap();
        assert_eq!(
            positions(&path),
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn heuristic_is_admissible_and_consistent() {
        let map = GridMap::parse_terrain(
            "
.~^.
2..X
.9..
",
        )
        .unwrap()
        .with_connectivity(Connectivity::Eight);
        let goal = map.cell(Point::new(3, 2)).unwrap();
        let mut buf = Vec::new();
        for p in map.range().iter().filter(|&p| map.is_passable(p)) {
            let c = map.cell(p).unwrap();
            buf.clear();
            c.neighbors(&mut buf);
            for n in &buf {
                assert!(c.heuristic_to(&goal) <= c.cost_to_enter(n) + n.heuristic_to(&goal) + 1e-9);
            }
        }
    }

    #[test]
    fn optimal_on_random_maps() {
        let mut mg = MapGen::new(StdRng::seed_from_u64(2024));
        let cfg = MapGenConfig {
            width: 16,
            height: 10,
            ..MapGenConfig::default()
        };
        for i in 0..60 {
            let conn = if i % 2 == 0 {
                Connectivity::Four
            } else {
                Connectivity::Eight
            };
            let map = mg.generate(&cfg).unwrap().with_connectivity(conn);
            let got = route(&map).map(|p| p.cost());
            match (got, reference_cost(&map)) {
                (Some(a), Some(b)) => assert!((a - b).abs() < 1e-9, "{a} != {b}\n{map}"),
                (None, None) => {}
                (a, b) => panic!("found mismatch {a:?} vs {b:?}\n{map}"),
            }
        }
    }
}
