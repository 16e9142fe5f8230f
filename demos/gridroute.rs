//! Route ASCII maps from the terminal.
//!
//! Run: cargo run --bin gridroute                      (built-in scenarios)
//!      cargo run --bin gridroute -- --map cave.txt    (map file)
//!      cargo run --bin gridroute -- --random 40x12 --seed 7 --diagonal

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wayfind::PathFinder;
use wayfind_demos::{SCENARIOS, report};
use wayfind_grid::{Connectivity, GridMap, MapError, MapGen, MapGenConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Find least-cost routes on ASCII grid maps")]
struct Cli {
    /// Route the map stored in this file.
    #[arg(long, conflicts_with = "random")]
    map: Option<PathBuf>,

    /// Generate a random map of the given size, e.g. `40x12`.
    #[arg(long, value_parser = parse_size)]
    random: Option<(i32, i32)>,

    /// Seed for `--random`.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Wall probability for `--random`.
    #[arg(long, default_value_t = 0.25)]
    walls: f64,

    /// Allow diagonal moves.
    #[arg(long)]
    diagonal: bool,

    /// Disable colours.
    #[arg(long)]
    plain: bool,
}

fn parse_size(s: &str) -> Result<(i32, i32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got `{s}`"))?;
    let w = w.trim().parse().map_err(|e| format!("bad width `{w}`: {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("bad height `{h}`: {e}"))?;
    Ok((w, h))
}

fn connectivity(cli: &Cli) -> Connectivity {
    if cli.diagonal {
        Connectivity::Eight
    } else {
        Connectivity::Four
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = io::stdout().lock();
    let color = !cli.plain;

    if let Some(path) = &cli.map {
        let text = std::fs::read_to_string(path)?;
        let map = GridMap::parse(&text)?.with_connectivity(connectivity(cli));
        report(&mut out, &map, &mut PathFinder::new(), color)?;
        return Ok(());
    }

    if let Some((width, height)) = cli.random {
        let cfg = MapGenConfig {
            width,
            height,
            wall_chance: cli.walls,
            ..MapGenConfig::default()
        };
        let map = MapGen::new(StdRng::seed_from_u64(cli.seed))
            .generate(&cfg)?
            .with_connectivity(connectivity(cli));
        report(&mut out, &map, &mut PathFinder::new(), color)?;
        return Ok(());
    }

    let maps = SCENARIOS
        .iter()
        .map(|sc| GridMap::parse(sc.map).map(|m| m.with_connectivity(connectivity(cli))))
        .collect::<Result<Vec<_>, MapError>>()?;
    let mut finder = PathFinder::new();
    let mut failures = 0;
    for (sc, map) in SCENARIOS.iter().zip(&maps) {
        writeln!(out, "== {}", sc.name)?;
        let outcome = report(&mut out, map, &mut finder, color)?;
        if !cli.diagonal && outcome.cost != sc.expected_cost {
            eprintln!(
                "scenario {}: expected cost {:?}, got {:?}",
                sc.name, sc.expected_cost, outcome.cost
            );
            failures += 1;
        }
    }
    if failures > 0 {
        return Err(format!("{failures} scenario(s) did not match").into());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
