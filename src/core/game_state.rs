//! Game state module - move budget, score and end predicates

/// Per-session bookkeeping: the move budget and the score target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    moves_left: u32,
    score: u32,
    target_score: u32,
}

impl GameState {
    pub fn new(moves: u32, target_score: u32) -> Self {
        Self {
            moves_left: moves,
            score: 0,
            target_score,
        }
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Consume exactly one move. Every completed turn calls this once,
    /// booster turns included.
    pub fn spend_move(&mut self) {
        self.moves_left = self.moves_left.saturating_sub(1);
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn is_win(&self) -> bool {
        self.score >= self.target_score
    }

    /// Win is checked first, so win and lose are mutually exclusive.
    pub fn is_lose(&self) -> bool {
        self.moves_left == 0 && !self.is_win()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(30, 500);
        assert_eq!(state.moves_left(), 30);
        assert_eq!(state.score(), 0);
        assert_eq!(state.target_score(), 500);
        assert!(!state.is_win());
        assert!(!state.is_lose());
    }

    #[test]
    fn test_win_at_target() {
        let mut state = GameState::new(10, 100);
        state.add_score(99);
        assert!(!state.is_win());
        state.add_score(1);
        assert!(state.is_win());
    }

    #[test]
    fn test_lose_when_out_of_moves() {
        let mut state = GameState::new(1, 100);
        state.spend_move();
        assert!(state.is_lose());
    }

    #[test]
    fn test_win_and_lose_are_exclusive() {
        // Even with zero moves, reaching the target is a win, not a loss.
        let mut state = GameState::new(1, 50);
        state.add_score(60);
        state.spend_move();
        assert!(state.is_win());
        assert!(!state.is_lose());
    }

    #[test]
    fn test_spend_move_saturates() {
        let mut state = GameState::new(0, 100);
        state.spend_move();
        assert_eq!(state.moves_left(), 0);
    }
}
