use alloc::collections::{BTreeSet, VecDeque};
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Applies reveal and flag moves to a board and tracks how the game ended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    flagged_count: Saturating<CellCount>,
    state: EngineState,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    pub fn new(layout: &MineLayout) -> Self {
        Self {
            board: Board::from_layout(layout),
            flagged_count: Saturating(0),
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Mines minus flags, negative when the player over-flags.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.board.mine_count()) - i32::from(self.flagged_count.0)
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords]
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use CellState::*;

        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = &mut self.board[coords];
        match cell.state {
            Hidden => {
                cell.state = Flagged;
                self.flagged_count += 1;
            }
            Flagged => {
                cell.state = Hidden;
                self.flagged_count -= 1;
            }
            Revealed => return Ok(MarkOutcome::NoChange),
        }

        Ok(if self.check_win() {
            MarkOutcome::Won
        } else {
            MarkOutcome::Changed
        })
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let cell = self.board[coords];
        if !cell.is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        if cell.is_mine() {
            self.triggered_mine = Some(coords);
            self.reveal_all_mines();
            self.end_game(false);
            return Ok(RevealOutcome::HitMine);
        }

        self.board[coords].state = CellState::Revealed;
        if cell.adjacent_mines() == 0 {
            self.cascade_from(coords);
        }

        Ok(if self.check_win() {
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        })
    }

    /// Opens the connected zero region around `origin` plus its numbered border.
    ///
    /// Flagged cells stop the cascade and stay flagged.
    fn cascade_from(&mut self, origin: Coord2) {
        let mut visited = BTreeSet::from([origin]);
        let mut to_visit: VecDeque<_> = self
            .board
            .iter_neighbors(origin)
            .filter(|&pos| self.board[pos].is_hidden())
            .collect();

        while let Some(visit_coords) = to_visit.pop_front() {
            if !visited.insert(visit_coords) {
                continue;
            }

            let cell = &mut self.board[visit_coords];
            if !cell.is_hidden() || cell.is_mine() {
                continue;
            }
            cell.state = CellState::Revealed;

            if cell.adjacent_mines() == 0 {
                let board = &self.board;
                to_visit.extend(
                    board
                        .iter_neighbors(visit_coords)
                        .filter(|&pos| board[pos].is_hidden())
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    fn reveal_all_mines(&mut self) {
        for coords in iter_coords(self.board.size()) {
            let cell = &mut self.board[coords];
            if !cell.is_mine() {
                continue;
            }
            if cell.is_flagged() {
                self.flagged_count -= 1;
            }
            cell.state = CellState::Revealed;
        }
    }

    fn check_win(&mut self) -> bool {
        let won = self.board.is_won();
        if won {
            self.end_game(true);
        }
        won
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            EngineState::Won
        } else {
            EngineState::Lost
        };
        log::debug!("game over: {:?}", self.state);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
