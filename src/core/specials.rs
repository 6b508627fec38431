//! Special-tile behaviors: pure position -> affected-cells functions
//!
//! Behaviors are registered per special kind at startup. Looking up an
//! unregistered kind is a programming error and aborts, it is not a
//! recoverable runtime condition.

use std::collections::HashMap;

use crate::core::board::Board;
use crate::types::{CellPos, SpecialKind, SPECIAL_BOMB_RADIUS};

/// The effect of activating a special tile. Pure: no board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialBehavior {
    /// Square blast of the given Chebyshev radius
    Bomb { radius: i32 },
    /// Clears the origin's row
    RocketRow,
    /// Clears the origin's column
    RocketColumn,
}

impl SpecialBehavior {
    /// Every occupied cell this behavior would burn when activated at `origin`.
    pub fn affected_cells(&self, board: &Board, origin: CellPos) -> Vec<CellPos> {
        match *self {
            SpecialBehavior::Bomb { radius } => board.cells_in_radius(origin.x, origin.y, radius),
            SpecialBehavior::RocketRow => (0..board.width())
                .filter(|&x| board.is_occupied(x, origin.y))
                .map(|x| CellPos::new(x, origin.y))
                .collect(),
            SpecialBehavior::RocketColumn => (0..board.height())
                .filter(|&y| board.is_occupied(origin.x, y))
                .map(|y| CellPos::new(origin.x, y))
                .collect(),
        }
    }
}

/// Lookup of behaviors by special kind.
#[derive(Debug, Clone)]
pub struct SpecialRegistry {
    map: HashMap<SpecialKind, SpecialBehavior>,
}

impl SpecialRegistry {
    pub fn empty() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn register(&mut self, kind: SpecialKind, behavior: SpecialBehavior) {
        self.map.insert(kind, behavior);
    }

    /// Panics on an unregistered kind: a missing registration at startup.
    pub fn get(&self, kind: SpecialKind) -> SpecialBehavior {
        match self.map.get(&kind) {
            Some(behavior) => *behavior,
            None => panic!("special behavior not registered: {}", kind.as_str()),
        }
    }
}

impl Default for SpecialRegistry {
    /// The standard rule set: 3x3 bomb plus both rockets.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(
            SpecialKind::Bomb,
            SpecialBehavior::Bomb {
                radius: SPECIAL_BOMB_RADIUS,
            },
        );
        registry.register(SpecialKind::RocketRow, SpecialBehavior::RocketRow);
        registry.register(SpecialKind::RocketColumn, SpecialBehavior::RocketColumn);
        registry
    }
}
