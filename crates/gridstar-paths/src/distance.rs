use gridstar_core::Coord;

/// Manhattan (L1) distance between two coordinates, in grid steps,
/// saturating at `u32::MAX`.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> u32 {
    a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y))
}

/// Chebyshev (L∞) distance between two coordinates, in grid steps.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> u32 {
    a.x.abs_diff(b.x).max(a.y.abs_diff(b.y))
}
