use gridstar_core::Coord;

/// Result of a successful search.
///
/// Coordinates are stored target-first: `coords()[0]` is the target and the
/// last entry is the source. Use [`forward`](Self::forward) for travel order.
/// A `Path` always holds at least one coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    coords: Vec<Coord>,
    cost: u32,
}

impl Path {
    pub(crate) fn new(coords: Vec<Coord>, cost: u32) -> Self {
        debug_assert!(!coords.is_empty());
        Self { coords, cost }
    }

    /// Coordinates from target back to source.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Total movement cost (sum of step costs).
    #[inline]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Number of coordinates, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Number of moves, i.e. `len() - 1`.
    #[inline]
    pub fn steps(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    #[inline]
    pub fn target(&self) -> Coord {
        self.coords[0]
    }

    #[inline]
    pub fn source(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    /// Coordinates in travel order, source first.
    pub fn forward(&self) -> impl DoubleEndedIterator<Item = Coord> + '_ {
        self.coords.iter().rev().copied()
    }

    /// Consume the path, returning coordinates in travel order.
    pub fn into_forward(mut self) -> Vec<Coord> {
        self.coords.reverse();
        self.coords
    }

    /// Consume the path, returning coordinates target-first.
    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let p = Path::new(vec![Coord::new(1, 1), Coord::new(0, 0)], 14);
        let json = serde_json::to_string(&p).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
