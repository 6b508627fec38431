//! Board module - manages the tile grid
//!
//! The board is a width x height grid where every settled cell holds a tile.
//! Uses a flat vector in row-major order. Coordinates: (x, y) with x growing
//! left to right and y growing top to bottom; y = 0 is the top row.
//! Holes exist only transiently inside a single burn/collapse/refill pass.

use crate::core::move_finder;
use crate::core::rng::SimpleRng;
use crate::types::{
    CellPos, SpecialKind, TileColor, BOARD_GEN_MAX_TRIES, MIN_GROUP_SIZE, PALETTE, SPECIAL_POOL,
    SPECIAL_SPAWN_THRESHOLD,
};

/// A single tile. Color and special kind are fixed at creation; a swap moves
/// tiles between cells, it never rewrites them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Identity token for view continuity across mutations.
    /// The simulation never branches on it.
    pub id: u64,
    pub color: TileColor,
    pub special: Option<SpecialKind>,
}

impl Tile {
    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }
}

/// The game board: a grid of tiles plus the random source that fills it.
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    /// Flat vector of cells, row-major order (y * width + x)
    cells: Vec<Option<Tile>>,
    rng: SimpleRng,
    /// Monotonic tile-id counter, owned per board
    next_tile_id: u64,
}

impl Board {
    /// Create a fully generated board.
    ///
    /// Regenerates up to [`BOARD_GEN_MAX_TRIES`] times until at least one
    /// legal move exists; the last attempt is accepted as a fallback (with
    /// five colors the retry budget is effectively never exhausted).
    pub fn new(width: i32, height: i32, seed: u32) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        let mut board = Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
            rng: SimpleRng::new(seed),
            next_tile_id: 0,
        };
        board.generate();

        let mut tries = 0;
        while !move_finder::has_any_move(&board, MIN_GROUP_SIZE) && tries < BOARD_GEN_MAX_TRIES {
            board.generate();
            tries += 1;
        }
        board
    }

    /// Fill every cell with a random ordinary tile, replacing any prior contents.
    pub fn generate(&mut self) {
        for idx in 0..self.cells.len() {
            self.cells[idx] = Some(self.random_tile());
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check whether (x, y) lies on the grid
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_inside(x, y) {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    /// Get the tile at (x, y).
    /// Returns None for empty cells and for out-of-bounds coordinates alike.
    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        self.index(x, y).and_then(|idx| self.cells[idx].as_ref())
    }

    /// Check if position holds a tile (in bounds and non-empty)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some()
    }

    /// Place a freshly minted tile at (x, y).
    /// Returns false if out of bounds.
    pub fn set_tile(&mut self, x: i32, y: i32, color: TileColor, special: Option<SpecialKind>) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                let tile = self.mint_tile(color, special);
                self.cells[idx] = Some(tile);
                true
            }
            None => false,
        }
    }

    /// Empty the cell at (x, y).
    /// Returns false if out of bounds.
    pub fn clear_cell(&mut self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = None;
                true
            }
            None => false,
        }
    }

    /// Exchange the contents of two cells in place.
    /// A no-op if either coordinate is out of bounds; adjacency is a caller policy.
    pub fn swap_tiles(&mut self, a: CellPos, b: CellPos) {
        let (Some(ia), Some(ib)) = (self.index(a.x, a.y), self.index(b.x, b.y)) else {
            return;
        };
        self.cells.swap(ia, ib);
    }

    /// Every in-bounds, occupied cell within Chebyshev distance `r` of (x, y):
    /// a square of side 2r+1.
    pub fn cells_in_radius(&self, x: i32, y: i32, r: i32) -> Vec<CellPos> {
        let mut res = Vec::new();
        for yy in (y - r)..=(y + r) {
            for xx in (x - r)..=(x + r) {
                if self.is_occupied(xx, yy) {
                    res.push(CellPos::new(xx, yy));
                }
            }
        }
        res
    }

    /// Apply one burn: clear the group, optionally spawn a special tile at the
    /// origin, then collapse each column and refill from the top.
    ///
    /// Spawn rule: a special tile appears at `origin` only when
    /// `allow_spawn_special` holds, `origin` is an in-bounds member of the
    /// group and the group has at least [`SPECIAL_SPAWN_THRESHOLD`] cells.
    /// The spawned tile inherits the
    /// color of whatever tile stood at the origin (random if none).
    ///
    /// This method does not check for remaining moves; that is the caller's job.
    pub fn apply_burn(&mut self, group: &[CellPos], origin: Option<CellPos>, allow_spawn_special: bool) {
        let spawn_at = match origin {
            Some(o)
                if allow_spawn_special
                    && group.len() >= SPECIAL_SPAWN_THRESHOLD
                    && self.is_inside(o.x, o.y)
                    && group.contains(&o) =>
            {
                Some(o)
            }
            _ => None,
        };

        // Clear everything except the spawn cell, which keeps its tile so the
        // replacement can inherit its color.
        for p in group {
            if spawn_at == Some(*p) {
                continue;
            }
            self.clear_cell(p.x, p.y);
        }

        if let Some(at) = spawn_at {
            let base_color = self
                .get(at.x, at.y)
                .map(|t| t.color)
                .unwrap_or_else(|| *self.rng.pick(&PALETTE));
            let special = *self.rng.pick(&SPECIAL_POOL);
            self.set_tile(at.x, at.y, base_color, Some(special));
        }

        self.collapse_down();
        self.refill_top();
    }

    /// Gravity: per column, settle surviving tiles to the bottom preserving
    /// their relative order, leaving holes only at the top.
    fn collapse_down(&mut self) {
        for x in 0..self.width {
            let mut write_y = self.height - 1;
            for y in (0..self.height).rev() {
                let idx = (y * self.width + x) as usize;
                if let Some(tile) = self.cells[idx].take() {
                    let write_idx = (write_y * self.width + x) as usize;
                    self.cells[write_idx] = Some(tile);
                    write_y -= 1;
                }
            }
        }
    }

    /// Fill every remaining hole with a fresh random tile.
    fn refill_top(&mut self) {
        for idx in 0..self.cells.len() {
            if self.cells[idx].is_none() {
                self.cells[idx] = Some(self.random_tile());
            }
        }
    }

    fn random_tile(&mut self) -> Tile {
        let color = *self.rng.pick(&PALETTE);
        self.mint_tile(color, None)
    }

    fn mint_tile(&mut self, color: TileColor, special: Option<SpecialKind>) -> Tile {
        self.next_tile_id += 1;
        Tile {
            id: self.next_tile_id,
            color,
            special,
        }
    }
}
