use gridstar_core::Coord;

/// Cost of a horizontal or vertical step.
pub const ORTHOGONAL_COST: u32 = 10;

/// Cost of a diagonal step, approximating `10 * sqrt(2)`.
pub const DIAGONAL_COST: u32 = 14;

/// Neighbor offsets in expansion order. The first four are orthogonal.
pub static DIRECTIONS: [Coord; 8] = [
    Coord::new(0, 1),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(-1, 0),
    Coord::new(-1, -1),
    Coord::new(1, 1),
    Coord::new(-1, 1),
    Coord::new(1, -1),
];

/// Which subset of [`DIRECTIONS`] a search may use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Movement {
    /// 4-way movement.
    #[default]
    Orthogonal,
    /// 8-way movement.
    Diagonal,
}

impl Movement {
    /// `Diagonal` when `enable` is set, `Orthogonal` otherwise.
    #[inline]
    pub fn from_diagonal(enable: bool) -> Self {
        if enable { Self::Diagonal } else { Self::Orthogonal }
    }

    #[inline]
    pub fn allows_diagonal(self) -> bool {
        self == Self::Diagonal
    }

    /// The active direction offsets.
    #[inline]
    pub fn offsets(self) -> &'static [Coord] {
        match self {
            Self::Orthogonal => &DIRECTIONS[..4],
            Self::Diagonal => &DIRECTIONS[..],
        }
    }

    /// Active offsets paired with their step cost.
    #[inline]
    pub fn steps(self) -> impl Iterator<Item = (Coord, u32)> {
        self.offsets().iter().map(|&d| (d, step_cost(d)))
    }

    /// Whether `b` is one step away from `a` under this movement mode.
    pub fn is_adjacent(self, a: Coord, b: Coord) -> bool {
        self.offsets().contains(&(b - a))
    }
}

/// Cost of moving by a single-step `offset`.
#[inline]
pub fn step_cost(offset: Coord) -> u32 {
    if offset.x != 0 && offset.y != 0 {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}
