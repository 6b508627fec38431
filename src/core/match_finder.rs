//! Match finder - connected-component discovery for ordinary matches
//!
//! A group is the maximal 4-connected region of same-colored ordinary tiles.
//! Special tiles never join a color match and never propagate one.

use crate::core::board::Board;
use crate::types::CellPos;

/// Flood-fill the same-color region containing `start`.
///
/// Returns empty if `start` is empty, out of bounds, or holds a special tile.
pub fn find_group(board: &Board, start: CellPos) -> Vec<CellPos> {
    let Some(start_tile) = board.get(start.x, start.y) else {
        return Vec::new();
    };
    if start_tile.is_special() {
        return Vec::new();
    }

    let color = start_tile.color;
    let mut visited = vec![false; (board.width() * board.height()) as usize];
    visited[(start.y * board.width() + start.x) as usize] = true;

    let mut stack = vec![start];
    let mut result = Vec::new();

    while let Some(p) = stack.pop() {
        result.push(p);
        for (nx, ny) in [(p.x + 1, p.y), (p.x - 1, p.y), (p.x, p.y + 1), (p.x, p.y - 1)] {
            let Some(tile) = board.get(nx, ny) else {
                continue;
            };
            if tile.is_special() || tile.color != color {
                continue;
            }
            let idx = (ny * board.width() + nx) as usize;
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            stack.push(CellPos::new(nx, ny));
        }
    }

    result
}

/// The burnable group at `start`: the flood-fill result when it meets
/// `min_group_size`, otherwise empty.
pub fn burn_group(board: &Board, start: CellPos, min_group_size: usize) -> Vec<CellPos> {
    let group = find_group(board, start);
    if group.len() >= min_group_size {
        group
    } else {
        Vec::new()
    }
}
