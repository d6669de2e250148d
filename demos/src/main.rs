//! Grid path search demo.
//!
//! Run: cargo run --bin gridstar-demo [scenario.json]
//!
//! Without an argument a 25x25 world with three obstacles is searched from
//! (0, 0) to (20, 20) using 8-way movement and the Euclidean heuristic. The
//! resulting coordinates are printed target first, one `x y` pair per line.
//! Set `RUST_LOG=debug` to see search statistics.

use std::error::Error;
use std::fs;

use gridstar_core::Coord;
use gridstar_paths::{Generator, GeneratorConfig, HeuristicKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Scenario {
    generator: GeneratorConfig,
    obstacles: Vec<Coord>,
    source: Coord,
    target: Coord,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::new()
                .with_world_size(25, 25)
                .with_diagonal(true)
                .with_heuristic(HeuristicKind::Euclidean),
            obstacles: vec![Coord::new(10, 10), Coord::new(11, 10), Coord::new(9, 10)],
            source: Coord::new(0, 0),
            target: Coord::new(20, 20),
        }
    }
}

fn load_scenario() -> Result<Scenario, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading scenario from {path}");
            let text = fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(Scenario::default()),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let scenario = load_scenario()?;

    let mut generator = Generator::from_config(&scenario.generator);
    for &c in &scenario.obstacles {
        generator.add_collision(c);
    }
    log::info!(
        "world {}x{}, diagonal={}, heuristic={}, {} obstacles",
        scenario.generator.width,
        scenario.generator.height,
        scenario.generator.diagonal,
        scenario.generator.heuristic,
        generator.grid().collision_count()
    );

    println!("Generate path ... ");
    let path = generator.find_path(scenario.source, scenario.target)?;
    for c in &path {
        println!("{} {}", c.x, c.y);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
