//! Drawing maps and routes as text.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use wayfind::Path;

use crate::cell::GridCell;
use crate::geom::Point;
use crate::map::GridMap;
use crate::terrain::Terrain;

/// Rune used for route cells between start and goal.
pub const ROUTE_RUNE: char = '●';

fn route_points(path: Option<&Path<GridCell<'_>>>) -> HashSet<Point> {
    path.map(|p| p.intermediate().iter().map(GridCell::pos).collect())
        .unwrap_or_default()
}

fn rune_at(map: &GridMap, route: &HashSet<Point>, p: Point) -> char {
    if route.contains(&p) && map.start() != Some(p) && map.goal() != Some(p) {
        return ROUTE_RUNE;
    }
    map.rune(p).unwrap_or(' ')
}

/// Render the map with the route's intermediate cells drawn as
/// [`ROUTE_RUNE`]. Start and goal keep their markers. Each row ends with a
/// newline.
pub fn render_route(map: &GridMap, path: Option<&Path<GridCell<'_>>>) -> String {
    let route = route_points(path);
    let rng = map.range();
    let mut out = String::with_capacity((rng.width() as usize + 1) * rng.height() as usize);
    for y in rng.min.y..rng.max.y {
        for x in rng.min.x..rng.max.x {
            out.push(rune_at(map, &route, Point::new(x, y)));
        }
        out.push('\n');
    }
    out
}

fn color_of(map: &GridMap, p: Point, ch: char) -> Color {
    if ch == ROUTE_RUNE {
        return Color::Cyan;
    }
    if map.start() == Some(p) || map.goal() == Some(p) {
        return Color::Yellow;
    }
    match map.terrain(p) {
        Some(Terrain::Wall) => Color::DarkGrey,
        Some(Terrain::Water) => Color::Blue,
        Some(Terrain::Mountain) => Color::DarkYellow,
        Some(Terrain::Weighted(_)) => Color::Magenta,
        _ => Color::Reset,
    }
}

/// Write the same drawing as [`render_route`] with ANSI colours.
pub fn print_colored<W: Write>(
    w: &mut W,
    map: &GridMap,
    path: Option<&Path<GridCell<'_>>>,
) -> io::Result<()> {
    let route = route_points(path);
    let rng = map.range();
    for y in rng.min.y..rng.max.y {
        for x in rng.min.x..rng.max.x {
            let p = Point::new(x, y);
            let ch = rune_at(map, &route, p);
            queue!(w, SetForegroundColor(color_of(map, p, ch)), Print(ch))?;
        }
        queue!(w, ResetColor, Print('\n'))?;
    }
    w.flush()
}
