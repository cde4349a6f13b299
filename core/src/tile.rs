use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

/// One grid position: the hidden truth plus what the player has done to it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) mine: bool,
    pub(crate) adjacent_mines: u8,
    pub(crate) state: CellState,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.mine
    }

    /// Always 0 for mines.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    pub const fn state(self) -> CellState {
        self.state
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self.state, CellState::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self.state, CellState::Flagged)
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self.state, CellState::Hidden)
    }

    /// The per-cell half of the win predicate.
    pub const fn is_settled(self) -> bool {
        match self.state {
            CellState::Revealed => !self.mine,
            CellState::Flagged => self.mine,
            CellState::Hidden => false,
        }
    }
}
