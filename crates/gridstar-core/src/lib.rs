//! **gridstar-core** — geometry types shared by the gridstar crates.
//!
//! [`Coord`] is a 2D integer grid position and [`Bounds`] a half-open world
//! rectangle. Both are plain `Copy` values.

pub mod geom;

pub use geom::{Bounds, Coord};
