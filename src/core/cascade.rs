//! Cascade resolver - chain reactions between special tiles
//!
//! Activating one special tile pulls in every special tile its area touches,
//! merging their areas, recursively. The processed set grows strictly and is
//! bounded by board size, so the expansion always terminates.

use std::collections::{HashSet, VecDeque};

use crate::core::board::Board;
use crate::core::specials::SpecialRegistry;
use crate::types::CellPos;

#[derive(Debug, Clone, Default)]
pub struct CascadeResolver {
    registry: SpecialRegistry,
}

impl CascadeResolver {
    pub fn new(registry: SpecialRegistry) -> Self {
        Self { registry }
    }

    /// The full burn set for activating the special tile at `start`.
    ///
    /// Empty when `start` does not hold a special tile. The result is sorted
    /// row-major so callers get a deterministic cell order.
    pub fn resolve(&self, board: &Board, start: CellPos) -> Vec<CellPos> {
        if !board.get(start.x, start.y).is_some_and(|t| t.is_special()) {
            return Vec::new();
        }

        let mut queue = VecDeque::from([start]);
        let mut processed: HashSet<CellPos> = HashSet::new();
        let mut burn: HashSet<CellPos> = HashSet::new();

        while let Some(p) = queue.pop_front() {
            if !processed.insert(p) {
                continue;
            }
            let Some(tile) = board.get(p.x, p.y) else {
                continue;
            };
            let Some(kind) = tile.special else {
                continue;
            };

            let area = self.registry.get(kind).affected_cells(board, p);
            for c in area {
                burn.insert(c);
                if board.get(c.x, c.y).is_some_and(|t| t.is_special()) && !processed.contains(&c) {
                    queue.push_back(c);
                }
            }
        }

        let mut result: Vec<CellPos> = burn.into_iter().collect();
        result.sort();
        result
    }
}
