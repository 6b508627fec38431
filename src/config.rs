//! Level configuration - the per-level move budget and score target

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConfig {
    pub moves: u32,
    pub target_score: u32,
}

pub const LEVELS: [LevelConfig; 5] = [
    LevelConfig { moves: 37, target_score: 500 },
    LevelConfig { moves: 30, target_score: 650 },
    LevelConfig { moves: 28, target_score: 800 },
    LevelConfig { moves: 20, target_score: 950 },
    LevelConfig { moves: 20, target_score: 1100 },
];

/// The level record for `index`, clamped to the last level.
pub fn level(index: usize) -> LevelConfig {
    LEVELS[index.min(LEVELS.len() - 1)]
}

/// True when `index` is the final configured level.
pub fn is_last_level(index: usize) -> bool {
    index >= LEVELS.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_clamps_index() {
        assert_eq!(level(0), LEVELS[0]);
        assert_eq!(level(99), LEVELS[4]);
    }

    #[test]
    fn test_last_level() {
        assert!(!is_last_level(0));
        assert!(is_last_level(4));
        assert!(is_last_level(99));
    }

    #[test]
    fn test_targets_increase() {
        for pair in LEVELS.windows(2) {
            assert!(pair[0].target_score < pair[1].target_score);
        }
    }
}
