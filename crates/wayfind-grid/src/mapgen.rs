//! Random map generation.

use rand::Rng;

use crate::geom::Point;
use crate::map::{GridMap, MAX_CELLS, MapError};
use crate::terrain::Terrain;

/// Parameters for [`MapGen::generate`].
#[derive(Clone, Debug)]
pub struct MapGenConfig {
    pub width: i32,
    pub height: i32,
    /// Probability that a cell becomes a wall.
    pub wall_chance: f64,
    /// Probability that a non-wall cell becomes water.
    pub water_chance: f64,
    /// Probability that a non-wall, non-water cell becomes mountain.
    pub mountain_chance: f64,
}

impl Default for MapGenConfig {
    fn default() -> Self {
        Self {
            width: 12,
            height: 5,
            wall_chance: 0.25,
            water_chance: 0.1,
            mountain_chance: 0.05,
        }
    }
}

/// Scatters terrain over a fresh map using the wrapped random source.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a map with start and goal on distinct floor cells.
    ///
    /// The goal is not guaranteed to be reachable from the start. Sizes
    /// with fewer than two cells fail with [`MapError::TooSmall`], and sizes
    /// above [`MAX_CELLS`] with [`MapError::TooLarge`].
    pub fn generate(&mut self, cfg: &MapGenConfig) -> Result<GridMap, MapError> {
        if cfg.width < 1 || cfg.height < 1 || (cfg.width == 1 && cfg.height == 1) {
            return Err(MapError::TooSmall {
                width: cfg.width,
                height: cfg.height,
            });
        }
        let mut map = GridMap::try_new(cfg.width, cfg.height)?;
        for p in map.range().iter() {
            let terrain = if self.rng.random::<f64>() < cfg.wall_chance {
                Terrain::Wall
            } else if self.rng.random::<f64>() < cfg.water_chance {
                Terrain::Water
            } else if self.rng.random::<f64>() < cfg.mountain_chance {
                Terrain::Mountain
            } else {
                Terrain::Floor
            };
            map.set_terrain(p, terrain);
        }

        let start = self.random_point(cfg);
        let goal = loop {
            let p = self.random_point(cfg);
            if p != start {
                break p;
            }
        };
        map.set_terrain(start, Terrain::Floor);
        map.set_terrain(goal, Terrain::Floor);
        map.set_start(start);
        map.set_goal(goal);

        log::debug!(
            "mapgen: {}x{} map, start {start}, goal {goal}",
            cfg.width,
            cfg.height
        );
        Ok(map)
    }

    fn random_point(&mut self, cfg: &MapGenConfig) -> Point {
        Point::new(
            self.rng.random_range(0..cfg.width),
            self.rng.random_range(0..cfg.height),
        )
    }
}
