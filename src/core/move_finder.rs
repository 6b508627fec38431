//! Move finder - decides whether any legal move remains on the board

use crate::core::board::Board;
use crate::core::match_finder;
use crate::types::CellPos;

/// True when the current board offers at least one legal move.
///
/// Policy, in order:
/// 1. Any special tile is always activatable.
/// 2. `min_group_size <= 1` makes every tile a legal move.
/// 3. `min_group_size == 2` only needs one equal-colored ordinary neighbor
///    pair; checking right and down neighbors covers every pair once.
/// 4. Otherwise fall back to flood-filling unvisited cells.
pub fn has_any_move(board: &Board, min_group_size: usize) -> bool {
    for y in 0..board.height() {
        for x in 0..board.width() {
            if board.get(x, y).is_some_and(|t| t.is_special()) {
                return true;
            }
        }
    }

    if min_group_size <= 1 {
        return true;
    }

    if min_group_size == 2 {
        for y in 0..board.height() {
            for x in 0..board.width() {
                let Some(tile) = board.get(x, y) else {
                    continue;
                };
                if tile.is_special() {
                    continue;
                }
                let color = tile.color;

                if board
                    .get(x + 1, y)
                    .is_some_and(|r| !r.is_special() && r.color == color)
                {
                    return true;
                }
                if board
                    .get(x, y + 1)
                    .is_some_and(|d| !d.is_special() && d.color == color)
                {
                    return true;
                }
            }
        }
        return false;
    }

    // General case: each flood-fill covers its whole component, so marking
    // members visited keeps the scan linear in board size.
    let mut visited = vec![false; (board.width() * board.height()) as usize];
    for y in 0..board.height() {
        for x in 0..board.width() {
            let idx = (y * board.width() + x) as usize;
            if visited[idx] {
                continue;
            }
            let group = match_finder::find_group(board, CellPos::new(x, y));
            for p in &group {
                visited[(p.y * board.width() + p.x) as usize] = true;
            }
            if group.len() >= min_group_size {
                return true;
            }
        }
    }
    false
}
