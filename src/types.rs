//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions
pub const BOARD_WIDTH: i32 = 8;
pub const BOARD_HEIGHT: i32 = 8;

/// Minimum group size for an ordinary match
pub const MIN_GROUP_SIZE: usize = 2;

/// Group size at which burning a match spawns a special tile at the origin
pub const SPECIAL_SPAWN_THRESHOLD: usize = 7;

/// Blast radius of a match-spawned bomb tile (3x3)
pub const SPECIAL_BOMB_RADIUS: i32 = 1;

/// Blast radius of the bomb booster (5x5)
pub const BOOSTER_BOMB_RADIUS: i32 = 2;

/// Board generation retries before accepting a move-less board
pub const BOARD_GEN_MAX_TRIES: u32 = 20;

/// Starting booster charges for a fresh profile
pub const DEFAULT_SWAP_CHARGES: u32 = 5;
pub const DEFAULT_BOMB_CHARGES: u32 = 3;

/// Tile colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

/// The full color palette, in generation order
pub const PALETTE: [TileColor; 5] = [
    TileColor::Red,
    TileColor::Green,
    TileColor::Blue,
    TileColor::Yellow,
    TileColor::Purple,
];

impl TileColor {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TileColor::Red => "red",
            TileColor::Green => "green",
            TileColor::Blue => "blue",
            TileColor::Yellow => "yellow",
            TileColor::Purple => "purple",
        }
    }
}

/// Special tile kinds (area-of-effect activations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    /// Clears a square block around the tile
    Bomb,
    /// Clears the tile's entire row
    RocketRow,
    /// Clears the tile's entire column
    RocketColumn,
}

/// Pool a match-spawned special kind is drawn from
pub const SPECIAL_POOL: [SpecialKind; 3] = [
    SpecialKind::Bomb,
    SpecialKind::RocketRow,
    SpecialKind::RocketColumn,
];

impl SpecialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialKind::Bomb => "bomb",
            SpecialKind::RocketRow => "rocket_row",
            SpecialKind::RocketColumn => "rocket_column",
        }
    }
}

/// Booster kinds (player-invoked limited-use actions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoosterKind {
    Bomb,
    Swap,
}

impl BoosterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoosterKind::Bomb => "bomb",
            BoosterKind::Swap => "swap",
        }
    }
}

/// Terminal outcome of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Lose,
}

/// A cell coordinate on the board; y = 0 is the top row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
}

impl CellPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// Row-major ordering so sorted cell lists read top-to-bottom, left-to-right.
impl Ord for CellPos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for CellPos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
