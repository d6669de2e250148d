use std::collections::BinaryHeap;

use gridstar_core::{Bounds, Coord};
use rustc_hash::FxHashMap;

use crate::config::GeneratorConfig;
use crate::grid::GridModel;
use crate::heuristic::Heuristic;
use crate::movement::Movement;
use crate::node::{NodeRef, SearchNode};

/// Path generator: owns the grid, the search settings and the node arena.
///
/// All setters take effect on the next search. The node arena only holds
/// coordinates a search actually discovers, so memory tracks the explored
/// area rather than the world size. Arena, index and open heap keep their
/// capacity between searches.
#[derive(Clone, Debug)]
pub struct Generator {
    pub(crate) grid: GridModel,
    pub(crate) movement: Movement,
    pub(crate) heuristic: Heuristic,
    // per-search caches
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) index: FxHashMap<Coord, usize>,
    pub(crate) open: BinaryHeap<NodeRef>,
}

impl Default for Generator {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

impl Generator {
    /// Create a generator for a `width x height` world with orthogonal
    /// movement and the Manhattan heuristic.
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_config(&GeneratorConfig::default().with_world_size(width, height))
    }

    pub fn from_config(cfg: &GeneratorConfig) -> Self {
        Self {
            grid: GridModel::new(cfg.width, cfg.height),
            movement: cfg.movement(),
            heuristic: cfg.heuristic.into(),
            nodes: Vec::new(),
            index: FxHashMap::default(),
            open: BinaryHeap::new(),
        }
    }

    /// Apply world size, movement and heuristic from `cfg`. Obstacles are
    /// left untouched.
    pub fn apply_config(&mut self, cfg: &GeneratorConfig) {
        self.set_world_size(cfg.width, cfg.height);
        self.set_movement(cfg.movement());
        self.set_heuristic(cfg.heuristic);
    }

    /// The current settings, or `None` when a custom heuristic is active.
    pub fn config(&self) -> Option<GeneratorConfig> {
        let size = self.world_size();
        Some(GeneratorConfig {
            width: size.x,
            height: size.y,
            diagonal: self.movement.allows_diagonal(),
            heuristic: self.heuristic.kind()?,
        })
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Set the world to `[0, width) x [0, height)`.
    pub fn set_world_size(&mut self, width: i32, height: i32) {
        log::trace!("world size set to {width}x{height}");
        self.grid.set_size(width, height);
    }

    #[inline]
    pub fn world_size(&self) -> Coord {
        self.grid.bounds().size()
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.grid.bounds()
    }

    /// Enable 8-way movement, or restrict to 4-way.
    pub fn set_diagonal_movement(&mut self, enable: bool) {
        self.set_movement(Movement::from_diagonal(enable));
    }

    #[inline]
    pub fn diagonal_movement(&self) -> bool {
        self.movement.allows_diagonal()
    }

    pub fn set_movement(&mut self, movement: Movement) {
        log::trace!("movement set to {movement:?}");
        self.movement = movement;
    }

    #[inline]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn set_heuristic(&mut self, heuristic: impl Into<Heuristic>) {
        self.heuristic = heuristic.into();
        log::trace!("heuristic set to {:?}", self.heuristic);
    }

    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    // -----------------------------------------------------------------------
    // Obstacles
    // -----------------------------------------------------------------------

    pub fn add_collision(&mut self, c: Coord) {
        self.grid.add_collision(c);
    }

    /// Remove the obstacle at `c`, if any.
    pub fn remove_collision(&mut self, c: Coord) {
        self.grid.remove_collision(c);
    }

    pub fn clear_collisions(&mut self) {
        self.grid.clear_collisions();
    }

    /// Whether `c` is outside the world or an obstacle.
    #[inline]
    pub fn is_blocked(&self, c: Coord) -> bool {
        self.grid.is_blocked(c)
    }

    #[inline]
    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    // -----------------------------------------------------------------------
    // Arena
    // -----------------------------------------------------------------------

    /// Drop the nodes of the previous search, keeping allocations.
    pub(crate) fn begin_search(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.open.clear();
    }

    /// Add a discovered node to the arena and return its index.
    pub(crate) fn insert_node(&mut self, node: SearchNode) -> usize {
        let idx = self.nodes.len();
        self.index.insert(node.coord, idx);
        self.nodes.push(node);
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::HeuristicKind;
    use crate::node::NO_PARENT;

    #[test]
    fn defaults() {
        let g = Generator::new(10, 7);
        assert_eq!(g.world_size(), Coord::new(10, 7));
        assert!(!g.diagonal_movement());
        assert!(matches!(g.heuristic(), Heuristic::Manhattan));
        assert_eq!(g.grid().collision_count(), 0);
    }

    #[test]
    fn config_round_trip() {
        let cfg = GeneratorConfig::new()
            .with_world_size(12, 9)
            .with_diagonal(true)
            .with_heuristic(HeuristicKind::Euclidean);
        let g = Generator::from_config(&cfg);
        assert_eq!(g.config(), Some(cfg));
    }

    #[test]
    fn config_is_none_for_custom_heuristic() {
        fn zero(_: Coord, _: Coord) -> u32 {
            0
        }
        let mut g = Generator::default();
        g.set_heuristic(zero as fn(Coord, Coord) -> u32);
        assert_eq!(g.config(), None);
    }

    #[test]
    fn apply_config_keeps_obstacles() {
        let mut g = Generator::new(5, 5);
        g.add_collision(Coord::new(2, 2));
        g.apply_config(&GeneratorConfig::new().with_world_size(8, 8).with_diagonal(true));
        assert_eq!(g.world_size(), Coord::new(8, 8));
        assert!(g.diagonal_movement());
        assert!(g.is_blocked(Coord::new(2, 2)));
    }

    #[test]
    fn obstacle_mutators() {
        let mut g = Generator::new(5, 5);
        let c = Coord::new(1, 3);
        g.add_collision(c);
        g.add_collision(c);
        assert!(g.is_blocked(c));
        assert_eq!(g.grid().collision_count(), 1);
        g.remove_collision(c);
        g.remove_collision(c);
        assert!(!g.is_blocked(c));
        g.add_collision(Coord::new(0, 0));
        g.clear_collisions();
        assert!(!g.is_blocked(Coord::new(0, 0)));
    }

    #[test]
    fn arena_holds_only_discovered_nodes() {
        let mut g = Generator::new(100_000, 100_000);
        g.search(Coord::new(0, 0), Coord::new(3, 0)).unwrap();
        assert!(g.nodes.len() < 32);
        assert_eq!(g.nodes.len(), g.index.len());
    }

    #[test]
    fn begin_search_resets_arena() {
        let mut g = Generator::new(10, 10);
        g.search(Coord::new(0, 0), Coord::new(9, 9)).unwrap();
        assert!(!g.nodes.is_empty());
        g.begin_search();
        assert!(g.nodes.is_empty());
        assert!(g.index.is_empty());

        let idx = g.insert_node(SearchNode::new(Coord::new(4, 4), 0, 0, NO_PARENT));
        assert_eq!(idx, 0);
        assert_eq!(g.index.get(&Coord::new(4, 4)), Some(&0));
    }
}
