use std::fmt;

use gridstar_core::Coord;

/// Reasons a path search can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The source lies outside the world bounds.
    SourceOutOfBounds(Coord),
    /// The target lies outside the world bounds.
    TargetOutOfBounds(Coord),
    /// The open set ran dry before the target was reached.
    Unreachable { from: Coord, to: Coord },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceOutOfBounds(c) => write!(f, "path source {c} is outside the world"),
            Self::TargetOutOfBounds(c) => write!(f, "path target {c} is outside the world"),
            Self::Unreachable { from, to } => write!(f, "no path from {from} to {to}"),
        }
    }
}

impl std::error::Error for PathError {}
