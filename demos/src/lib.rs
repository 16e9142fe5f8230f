//! Built-in routing scenarios shared by the `gridroute` demo and its tests.
//!
//! Every scenario is a 12×5 map with a start `F` and a goal `T`, routed with
//! 4-way movement and unit floor cost.

use std::io::Write;

use wayfind::{Path, PathFinder};
use wayfind_grid::{GridCell, GridMap, MapError, print_colored, render_route};

/// A named map and the route cost it must produce (`None` if unreachable).
pub struct Scenario {
    pub name: &'static str,
    pub map: &'static str,
    pub expected_cost: Option<f64>,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "corridor",
        map: "
.....X......
.....XX.....
.F........T.
....XXX.....
............
",
        expected_cost: Some(9.0),
    },
    Scenario {
        name: "detour",
        map: "
............
.....XX.....
.F..XXXX..T.
....XXX.....
............
",
        expected_cost: Some(13.0),
    },
    Scenario {
        name: "enclosed goal",
        map: "
............
.........XXX
.F.......XTX
.........XXX
............
",
        expected_cost: None,
    },
    Scenario {
        name: "maze",
        map: "
FX.X........
.X...XXXX.X.
.X.X.X....X.
...X.X.XXXXX
.XX..X.....T
",
        expected_cost: Some(27.0),
    },
];

/// Result of routing one map.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub found: bool,
    pub cost: Option<f64>,
    pub steps: usize,
    pub drawing: String,
}

fn outcome_of(map: &GridMap, path: Option<&Path<GridCell<'_>>>) -> Outcome {
    Outcome {
        found: path.is_some(),
        cost: path.map(Path::cost),
        steps: path.map_or(0, Path::steps),
        drawing: render_route(map, path),
    }
}

fn route_logged<'a>(
    map: &'a GridMap,
    finder: &mut PathFinder<GridCell<'a>>,
) -> Result<Option<Path<GridCell<'a>>>, MapError> {
    let path = map.route_with(finder)?;
    let stats = finder.stats();
    log::debug!(
        "route: expanded {} of {} registered cells",
        stats.expanded,
        stats.registered
    );
    Ok(path)
}

/// Print a map, route it with `finder` and print the routed drawing.
pub fn report<'a, W: Write>(
    w: &mut W,
    map: &'a GridMap,
    finder: &mut PathFinder<GridCell<'a>>,
    color: bool,
) -> Result<Outcome, Box<dyn std::error::Error>> {
    writeln!(w, "raw:")?;
    write!(w, "{map}")?;
    let path = route_logged(map, finder)?;
    let outcome = outcome_of(map, path.as_ref());
    writeln!(w, "route found: {}", outcome.found)?;
    if color {
        print_colored(w, map, path.as_ref())?;
    } else {
        write!(w, "{}", outcome.drawing)?;
    }
    if let Some(cost) = outcome.cost {
        writeln!(w, "cost: {cost} over {} steps", outcome.steps)?;
    }
    writeln!(w)?;
    Ok(outcome)
}
