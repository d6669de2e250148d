use gridstar_core::{Bounds, Coord};
use rustc_hash::FxHashSet;

/// World bounds plus the set of blocked coordinates.
///
/// A coordinate is passable when it lies inside the bounds and is not an
/// obstacle. Obstacles are not checked against the bounds: one placed
/// outside the world is harmless.
#[derive(Clone, Debug, Default)]
pub struct GridModel {
    bounds: Bounds,
    obstacles: FxHashSet<Coord>,
}

impl GridModel {
    /// Create an obstacle-free grid of `width x height` cells.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: Bounds::from_size(width, height),
            obstacles: FxHashSet::default(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Resize the world to `[0, width) x [0, height)`. Obstacles are kept.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.bounds = Bounds::from_size(width, height);
    }

    /// Whether `c` is outside the world or an obstacle.
    #[inline]
    pub fn is_blocked(&self, c: Coord) -> bool {
        !self.bounds.contains(c) || self.obstacles.contains(&c)
    }

    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        !self.is_blocked(c)
    }

    /// Mark `c` as an obstacle. Returns `false` if it already was one.
    pub fn add_collision(&mut self, c: Coord) -> bool {
        self.obstacles.insert(c)
    }

    /// Remove the obstacle at `c`. Returns `false` if there was none.
    pub fn remove_collision(&mut self, c: Coord) -> bool {
        self.obstacles.remove(&c)
    }

    pub fn clear_collisions(&mut self) {
        self.obstacles.clear();
    }

    #[inline]
    pub fn has_collision(&self, c: Coord) -> bool {
        self.obstacles.contains(&c)
    }

    /// Iterate over the obstacles, in no particular order.
    pub fn collisions(&self) -> impl Iterator<Item = Coord> + '_ {
        self.obstacles.iter().copied()
    }

    pub fn collision_count(&self) -> usize {
        self.obstacles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_blocked() {
        let g = GridModel::new(5, 4);
        assert!(g.is_passable(Coord::new(0, 0)));
        assert!(g.is_passable(Coord::new(4, 3)));
        assert!(g.is_blocked(Coord::new(5, 0)));
        assert!(g.is_blocked(Coord::new(0, 4)));
        assert!(g.is_blocked(Coord::new(-1, 2)));
    }

    #[test]
    fn add_remove_clear() {
        let mut g = GridModel::new(5, 5);
        let c = Coord::new(2, 2);
        assert!(g.add_collision(c));
        assert!(!g.add_collision(c));
        assert_eq!(g.collision_count(), 1);
        assert!(g.is_blocked(c));

        assert!(g.remove_collision(c));
        assert!(!g.remove_collision(c));
        assert!(g.is_passable(c));

        g.add_collision(Coord::new(1, 1));
        g.add_collision(Coord::new(3, 1));
        g.clear_collisions();
        assert_eq!(g.collisions().count(), 0);
    }

    #[test]
    fn obstacle_outside_world_is_harmless() {
        let mut g = GridModel::new(3, 3);
        g.add_collision(Coord::new(10, 10));
        assert!(g.has_collision(Coord::new(10, 10)));
        for y in 0..3 {
            for x in 0..3 {
                assert!(g.is_passable(Coord::new(x, y)));
            }
        }
    }

    #[test]
    fn resize_keeps_obstacles() {
        let mut g = GridModel::new(3, 3);
        g.add_collision(Coord::new(4, 4));
        g.set_size(6, 6);
        assert!(g.is_blocked(Coord::new(4, 4)));
        assert!(g.is_passable(Coord::new(5, 5)));
    }
}
