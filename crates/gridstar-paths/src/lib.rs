//! A* path search on uniform-cost 2D grids.
//!
//! A [`Generator`] owns the world bounds, the obstacle set, the movement mode
//! and the heuristic. Configure it, then call [`Generator::find_path`] (raw
//! coordinates, target first) or [`Generator::search`] (a [`Path`] with its
//! cost).
//!
//! ```
//! use gridstar_core::Coord;
//! use gridstar_paths::{Generator, Heuristic};
//!
//! let mut generator = Generator::new(25, 25);
//! generator.set_diagonal_movement(true);
//! generator.set_heuristic(Heuristic::Octagonal);
//! generator.add_collision(Coord::new(1, 1));
//!
//! let path = generator.search(Coord::new(0, 0), Coord::new(3, 3)).unwrap();
//! assert_eq!(path.target(), Coord::new(3, 3));
//! assert_eq!(path.source(), Coord::new(0, 0));
//! ```
//!
//! # Costs
//!
//! | Move | Cost |
//! |---|---|
//! | orthogonal | [`ORTHOGONAL_COST`] (10) |
//! | diagonal | [`DIAGONAL_COST`] (14) |
//!
//! Heuristics are scaled to the same units.

mod config;
mod distance;
mod error;
mod generator;
mod grid;
pub mod heuristic;
mod movement;
mod node;
mod path;
mod search;

pub use config::GeneratorConfig;
pub use distance::{chebyshev, manhattan};
pub use error::PathError;
pub use generator::Generator;
pub use grid::GridModel;
pub use heuristic::{Heuristic, HeuristicKind, UnknownHeuristic};
pub use movement::{DIAGONAL_COST, DIRECTIONS, Movement, ORTHOGONAL_COST, step_cost};
pub use path::Path;
