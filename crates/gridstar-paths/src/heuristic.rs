//! Remaining-cost estimators.
//!
//! Every estimator works on the absolute per-axis delta between two
//! coordinates and is scaled by [`ORTHOGONAL_COST`] so that estimates are
//! comparable with accumulated step costs.

use std::fmt;
use std::str::FromStr;

use gridstar_core::Coord;

use crate::distance;
use crate::movement::ORTHOGONAL_COST;

/// Manhattan estimate: `10 * (dx + dy)`, saturating at `u32::MAX`.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    ORTHOGONAL_COST.saturating_mul(distance::manhattan(a, b))
}

/// Euclidean estimate: `10 * sqrt(dx² + dy²)`, truncated.
#[inline]
pub fn euclidean(a: Coord, b: Coord) -> u32 {
    let (dx, dy) = (f64::from(a.x.abs_diff(b.x)), f64::from(a.y.abs_diff(b.y)));
    // Float-to-int casts saturate.
    (f64::from(ORTHOGONAL_COST) * (dx * dx + dy * dy).sqrt()) as u32
}

/// Octagonal estimate: `10 * (dx + dy) - 6 * min(dx, dy)`, saturating at
/// `u32::MAX`.
#[inline]
pub fn octagonal(a: Coord, b: Coord) -> u32 {
    let dx = u64::from(a.x.abs_diff(b.x));
    let dy = u64::from(a.y.abs_diff(b.y));
    let est = u64::from(ORTHOGONAL_COST) * (dx + dy) - 6 * dx.min(dy);
    u32::try_from(est).unwrap_or(u32::MAX)
}

/// Strategy used to estimate the cost from a coordinate to the target.
///
/// The three named variants cover the usual grid metrics; `Custom` accepts
/// any plain function with the same signature.
#[derive(Clone, Copy, Debug, Default)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Octagonal,
    Custom(fn(Coord, Coord) -> u32),
}

impl Heuristic {
    /// Estimate the remaining cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Coord, to: Coord) -> u32 {
        match self {
            Self::Manhattan => manhattan(from, to),
            Self::Euclidean => euclidean(from, to),
            Self::Octagonal => octagonal(from, to),
            Self::Custom(f) => f(from, to),
        }
    }

    /// The named kind of this heuristic, or `None` for a custom function.
    pub fn kind(self) -> Option<HeuristicKind> {
        match self {
            Self::Manhattan => Some(HeuristicKind::Manhattan),
            Self::Euclidean => Some(HeuristicKind::Euclidean),
            Self::Octagonal => Some(HeuristicKind::Octagonal),
            Self::Custom(_) => None,
        }
    }
}

impl From<fn(Coord, Coord) -> u32> for Heuristic {
    fn from(f: fn(Coord, Coord) -> u32) -> Self {
        Self::Custom(f)
    }
}

/// The named heuristics, as stored in a [`GeneratorConfig`](crate::GeneratorConfig).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    Euclidean,
    Octagonal,
}

impl From<HeuristicKind> for Heuristic {
    fn from(kind: HeuristicKind) -> Self {
        match kind {
            HeuristicKind::Manhattan => Self::Manhattan,
            HeuristicKind::Euclidean => Self::Euclidean,
            HeuristicKind::Octagonal => Self::Octagonal,
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Octagonal => "octagonal",
        };
        f.write_str(s)
    }
}

/// Error returned when parsing an unknown heuristic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic(pub String);

impl fmt::Display for UnknownHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown heuristic '{}' (expected manhattan, euclidean or octagonal)",
            self.0
        )
    }
}

impl std::error::Error for UnknownHeuristic {}

impl FromStr for HeuristicKind {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            "octagonal" => Ok(Self::Octagonal),
            _ => Err(UnknownHeuristic(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn manhattan_values() {
        assert_eq!(manhattan(c(0, 0), c(2, 0)), 20);
        assert_eq!(manhattan(c(3, 1), c(0, 5)), 70);
    }

    #[test]
    fn euclidean_truncates() {
        assert_eq!(euclidean(c(0, 0), c(3, 4)), 50);
        assert_eq!(euclidean(c(0, 0), c(1, 1)), 14);
        assert_eq!(euclidean(c(0, 0), c(2, 1)), 22);
    }

    #[test]
    fn octagonal_values() {
        assert_eq!(octagonal(c(0, 0), c(1, 1)), 14);
        assert_eq!(octagonal(c(0, 0), c(3, 1)), 34);
        assert_eq!(octagonal(c(5, 5), c(5, 9)), 40);
    }

    #[test]
    fn estimates_saturate_on_extreme_coordinates() {
        let (a, b) = (c(i32::MIN, i32::MIN), c(i32::MAX, i32::MAX));
        assert_eq!(manhattan(a, b), u32::MAX);
        assert_eq!(octagonal(a, b), u32::MAX);
        assert_eq!(euclidean(a, b), u32::MAX);
        // Large but representable.
        assert_eq!(octagonal(c(0, 0), c(100_000_000, 0)), 1_000_000_000);
    }

    #[test]
    fn estimates_are_symmetric_and_zero_on_self() {
        let (a, b) = (c(-3, 7), c(4, 1));
        for h in [Heuristic::Manhattan, Heuristic::Euclidean, Heuristic::Octagonal] {
            assert_eq!(h.estimate(a, b), h.estimate(b, a));
            assert_eq!(h.estimate(a, a), 0);
        }
    }

    #[test]
    fn default_is_manhattan() {
        assert!(matches!(Heuristic::default(), Heuristic::Manhattan));
        assert_eq!(HeuristicKind::default(), HeuristicKind::Manhattan);
    }

    #[test]
    fn custom_dispatch() {
        fn zero(_: Coord, _: Coord) -> u32 {
            0
        }
        let h = Heuristic::from(zero as fn(Coord, Coord) -> u32);
        assert_eq!(h.estimate(c(0, 0), c(10, 10)), 0);
        assert_eq!(h.kind(), None);
    }

    #[test]
    fn kind_round_trip() {
        for kind in [
            HeuristicKind::Manhattan,
            HeuristicKind::Euclidean,
            HeuristicKind::Octagonal,
        ] {
            assert_eq!(Heuristic::from(kind).kind(), Some(kind));
            assert_eq!(kind.to_string().parse::<HeuristicKind>(), Ok(kind));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert_eq!(" Octagonal ".parse::<HeuristicKind>(), Ok(HeuristicKind::Octagonal));
        let err = "chebyshev".parse::<HeuristicKind>().unwrap_err();
        assert_eq!(err, UnknownHeuristic("chebyshev".into()));
        assert_eq!(
            err.to_string(),
            "unknown heuristic 'chebyshev' (expected manhattan, euclidean or octagonal)"
        );
    }
}
