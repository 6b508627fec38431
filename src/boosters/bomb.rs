//! Bomb booster - burn a square block at the clicked cell

use crate::boosters::{BoosterAction, BoosterCtx, ClickOutcome};
use crate::types::{BoosterKind, CellPos};

pub struct BombBooster {
    radius: i32,
}

impl BombBooster {
    pub fn new(radius: i32) -> Self {
        Self { radius }
    }
}

impl BoosterAction for BombBooster {
    fn kind(&self) -> BoosterKind {
        BoosterKind::Bomb
    }

    fn on_field_click(&mut self, ctx: &mut BoosterCtx<'_>, pos: CellPos) -> ClickOutcome {
        if ctx.charges.bomb_left == 0 {
            return ClickOutcome::ExitMode;
        }

        let cells = ctx.board.cells_in_radius(pos.x, pos.y, self.radius);
        if cells.is_empty() {
            // Clicked outside the grid: keep the charge.
            return ClickOutcome::ExitMode;
        }

        ctx.charges.bomb_left -= 1;
        ClickOutcome::Burn { group: cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boosters::BoosterCharges;
    use crate::core::Board;

    fn setup() -> (Board, BoosterCharges) {
        (
            Board::new(8, 8, 3),
            BoosterCharges {
                swap_left: 5,
                bomb_left: 3,
            },
        )
    }

    #[test]
    fn test_click_burns_square_and_spends_charge() {
        let (mut board, mut charges) = setup();
        let mut action = BombBooster::new(2);
        let mut ctx = BoosterCtx {
            board: &mut board,
            charges: &mut charges,
        };

        let outcome = action.on_field_click(&mut ctx, CellPos::new(4, 4));
        match outcome {
            ClickOutcome::Burn { group } => assert_eq!(group.len(), 25),
            other => panic!("expected Burn, got {:?}", other),
        }
        assert_eq!(charges.bomb_left, 2);
    }

    #[test]
    fn test_no_charges_exits_without_spending() {
        let (mut board, mut charges) = setup();
        charges.bomb_left = 0;
        let mut action = BombBooster::new(2);
        let mut ctx = BoosterCtx {
            board: &mut board,
            charges: &mut charges,
        };

        assert_eq!(
            action.on_field_click(&mut ctx, CellPos::new(4, 4)),
            ClickOutcome::ExitMode
        );
        assert_eq!(charges.bomb_left, 0);
    }

    #[test]
    fn test_empty_area_keeps_charge() {
        let (mut board, mut charges) = setup();
        let mut action = BombBooster::new(1);
        let mut ctx = BoosterCtx {
            board: &mut board,
            charges: &mut charges,
        };

        assert_eq!(
            action.on_field_click(&mut ctx, CellPos::new(-10, -10)),
            ClickOutcome::ExitMode
        );
        assert_eq!(charges.bomb_left, 3);
    }
}
