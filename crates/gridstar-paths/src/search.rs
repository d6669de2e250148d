use gridstar_core::Coord;

use crate::Generator;
use crate::error::PathError;
use crate::node::{NO_PARENT, NodeRef, SearchNode};
use crate::path::Path;

impl Generator {
    /// Compute a shortest path from `source` to `target` using A*.
    ///
    /// Returns the coordinates ordered **target to source**. See
    /// [`search`](Self::search) for the error cases.
    pub fn find_path(&mut self, source: Coord, target: Coord) -> Result<Vec<Coord>, PathError> {
        self.search(source, target).map(Path::into_coords)
    }

    /// Compute a shortest path from `source` to `target` using A*.
    ///
    /// Both endpoints must lie inside the world. The source is expanded even
    /// when it is an obstacle; every other coordinate on the path is
    /// passable. When `source == target` the path is that single coordinate
    /// with cost 0.
    ///
    /// Among open nodes with equal score, the one discovered (or re-linked)
    /// most recently is expanded first, so results are deterministic for a
    /// given configuration.
    ///
    /// # Errors
    ///
    /// - [`PathError::SourceOutOfBounds`] / [`PathError::TargetOutOfBounds`]
    ///   when an endpoint lies outside the world.
    /// - [`PathError::Unreachable`] when the open set is exhausted before
    ///   the target is reached.
    pub fn search(&mut self, source: Coord, target: Coord) -> Result<Path, PathError> {
        let bounds = self.grid.bounds();
        if !bounds.contains(source) {
            return Err(PathError::SourceOutOfBounds(source));
        }
        if !bounds.contains(target) {
            return Err(PathError::TargetOutOfBounds(target));
        }

        self.begin_search();
        let heuristic = self.heuristic;
        let movement = self.movement;

        let start_idx = self.insert_node(SearchNode::new(
            source,
            0,
            heuristic.estimate(source, target),
            NO_PARENT,
        ));

        let mut open = std::mem::take(&mut self.open);
        let mut seq: u64 = 0;
        open.push(NodeRef {
            idx: start_idx,
            score: self.nodes[start_idx].score(),
            seq,
        });

        let mut expanded: usize = 0;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search None;
            };

            let ci = current.idx;

            // Skip entries superseded by a cheaper re-link.
            if self.nodes[ci].closed {
                continue;
            }

            let current_coord = self.nodes[ci].coord;
            if current_coord == target {
                break 'search Some(ci);
            }

            self.nodes[ci].closed = true;
            expanded += 1;
            let current_g = self.nodes[ci].g;

            for (offset, step) in movement.steps() {
                let nc = current_coord + offset;
                if self.grid.is_blocked(nc) {
                    continue;
                }
                let tentative_g = current_g.saturating_add(step);

                let existing = self.index.get(&nc).copied();
                let ni = match existing {
                    Some(ni) => {
                        let n = &mut self.nodes[ni];
                        if n.closed || tentative_g >= n.g {
                            continue;
                        }
                        // Cheaper route to an open node; h is unchanged.
                        n.g = tentative_g;
                        n.parent = ci;
                        ni
                    }
                    None => self.insert_node(SearchNode::new(
                        nc,
                        tentative_g,
                        heuristic.estimate(nc, target),
                        ci,
                    )),
                };

                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    score: self.nodes[ni].score(),
                    seq,
                });
            }
        };

        open.clear();
        self.open = open;

        let Some(goal_idx) = found else {
            log::debug!("no path {source} -> {target} after {expanded} expansions");
            return Err(PathError::Unreachable {
                from: source,
                to: target,
            });
        };

        // Walk parents back from the target.
        let mut coords = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            coords.push(self.nodes[ci].coord);
            ci = self.nodes[ci].parent;
        }
        let cost = self.nodes[goal_idx].g;
        log::debug!(
            "path {source} -> {target}: {} steps, cost {cost}, {expanded} expansions",
            coords.len() - 1
        );
        Ok(Path::new(coords, cost))
    }
}
