//! Search nodes and open-set entries.
//!
//! Nodes live in a per-search arena holding only the coordinates the search
//! has discovered. A node's parent is another arena index.

use gridstar_core::Coord;

/// Arena index meaning "no parent" (the search root).
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub(crate) coord: Coord,
    /// Exact accumulated cost from the source.
    pub(crate) g: u32,
    /// Heuristic estimate to the target, fixed when the node is discovered.
    pub(crate) h: u32,
    pub(crate) parent: usize,
    pub(crate) closed: bool,
}

impl SearchNode {
    pub(crate) fn new(coord: Coord, g: u32, h: u32, parent: usize) -> Self {
        Self {
            coord,
            g,
            h,
            parent,
            closed: false,
        }
    }

    /// `g + h`, saturating so that an "infinite" estimate stays ordered last.
    #[inline]
    pub(crate) fn score(&self) -> u32 {
        self.g.saturating_add(self.h)
    }
}

/// Open-set entry ordered for `BinaryHeap`.
///
/// The heap pops the lowest score first. Among equal scores the entry pushed
/// last (highest `seq`) wins.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) score: u32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse on score so the max-heap behaves as a min-heap.
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
