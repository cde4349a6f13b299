use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a renderer may know about one cell. Hidden cells carry no mine information.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
    TriggeredMine,
}

impl CellView {
    fn of(cell: Cell, triggered: bool) -> Self {
        match cell.state() {
            CellState::Hidden => Self::Hidden,
            CellState::Flagged => Self::Flagged,
            CellState::Revealed if !cell.is_mine() => Self::Revealed(cell.adjacent_mines()),
            CellState::Revealed if triggered => Self::TriggeredMine,
            CellState::Revealed => Self::Mine,
        }
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_) | Self::Mine | Self::TriggeredMine)
    }
}

/// Immutable snapshot of a session, taken between events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub size: Coord,
    pub cells: Array2<CellView>,
    pub state: EngineState,
    pub elapsed_secs: Seconds,
    pub best_time_secs: Option<Seconds>,
    pub mines_left: i32,
}

impl SessionView {
    pub(crate) fn new(
        engine: &PlayEngine,
        elapsed_secs: Seconds,
        best_time_secs: Option<Seconds>,
    ) -> Self {
        let size = engine.size();
        let triggered = engine.triggered_mine();
        let mut cells = Array2::default((size, size).to_nd_index());
        for (coords, cell) in engine.board().iter_cells() {
            cells[coords.to_nd_index()] = CellView::of(cell, triggered == Some(coords));
        }

        Self {
            size,
            cells,
            state: engine.state(),
            elapsed_secs,
            best_time_secs,
            mines_left: engine.mines_left(),
        }
    }

    /// Out-of-range coordinates read as hidden.
    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or_default()
    }

    pub fn is_over(&self) -> bool {
        self.state.is_finished()
    }
}
