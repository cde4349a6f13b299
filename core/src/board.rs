use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cells owned by one game. A restart builds a new one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Lays the mines out and computes every adjacency count up front.
    pub fn from_layout(layout: &MineLayout) -> Self {
        let size = layout.size();
        let mut cells: Array2<Cell> = Array2::default((size, size).to_nd_index());

        for coords in iter_coords(size) {
            let cell = &mut cells[coords.to_nd_index()];
            if layout.contains_mine(coords) {
                cell.mine = true;
            } else {
                cell.adjacent_mines = layout.adjacent_mine_count(coords);
            }
        }

        Self {
            cells,
            mine_count: layout.mine_count(),
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        iter_coords(self.size()).map(|pos| (pos, self[pos]))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Every cell is either a revealed safe cell or a flagged mine.
    ///
    /// A mine left hidden and unflagged blocks the win, and so does a flag on a safe cell.
    pub fn is_won(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_settled())
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn naive_adjacent(layout: &MineLayout, (row, col): Coord2) -> u8 {
        let size = i16::from(layout.size());
        let mut count = 0;
        for d_row in -1i16..=1 {
            for d_col in -1i16..=1 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                let r = i16::from(row) + d_row;
                let c = i16::from(col) + d_col;
                if (0..size).contains(&r) && (0..size).contains(&c) && layout[(r as u8, c as u8)] {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn adjacency_matches_naive_scan() {
        for seed in 0..16 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let size = rng.random_range(2..=12);
            let mines = rng.random_range(1..CellCount::from(size) * CellCount::from(size));
            let config = GameConfig::new(size, mines).unwrap();
            let layout = RandomLayoutGenerator::new(seed).generate(config);
            let board = Board::from_layout(&layout);

            for (coords, cell) in board.iter_cells() {
                assert_eq!(cell.is_mine(), layout.contains_mine(coords));
                if cell.is_mine() {
                    assert_eq!(cell.adjacent_mines(), 0, "mine at {coords:?} carries a count");
                } else {
                    assert_eq!(
                        cell.adjacent_mines(),
                        naive_adjacent(&layout, coords),
                        "seed {seed}, cell {coords:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn four_by_four_with_corner_mine() {
        let layout = MineLayout::from_mine_coords(4, &[(0, 0)]).unwrap();
        let board = Board::from_layout(&layout);

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board[(0, 1)].adjacent_mines(), 1);
        assert_eq!(board[(1, 0)].adjacent_mines(), 1);
        assert_eq!(board[(1, 1)].adjacent_mines(), 1);
        let ones = board
            .iter_cells()
            .filter(|(_, cell)| cell.adjacent_mines() == 1)
            .count();
        assert_eq!(ones, 3);
        assert!(board.iter_cells().all(|(_, cell)| cell.is_hidden()));
    }

    #[test]
    fn win_predicate_is_literal() {
        let layout = MineLayout::from_mine_coords(2, &[(0, 0)]).unwrap();
        let mut board = Board::from_layout(&layout);
        assert!(!board.is_won());

        for coords in [(0, 1), (1, 0), (1, 1)] {
            board[coords].state = CellState::Revealed;
        }
        // the mine is still hidden and unflagged
        assert!(!board.is_won());

        board[(0, 0)].state = CellState::Flagged;
        assert!(board.is_won());

        board[(0, 0)].state = CellState::Hidden;
        assert!(!board.is_won());

        // a revealed mine never counts as settled
        board[(0, 0)].state = CellState::Revealed;
        assert!(!board.is_won());
    }

    #[test]
    fn flag_on_safe_cell_blocks_win() {
        let layout = MineLayout::from_mine_coords(2, &[(0, 0)]).unwrap();
        let mut board = Board::from_layout(&layout);
        board[(0, 0)].state = CellState::Flagged;
        board[(0, 1)].state = CellState::Revealed;
        board[(1, 0)].state = CellState::Revealed;
        board[(1, 1)].state = CellState::Flagged;
        assert!(!board.is_won());
    }

    #[test]
    fn validate_coords_rejects_out_of_bounds() {
        let board = Board::from_layout(&MineLayout::from_mine_coords(3, &[(1, 1)]).unwrap());
        assert_eq!(board.validate_coords((2, 2)), Ok((2, 2)));
        assert_eq!(board.validate_coords((3, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((0, 255)), Err(GameError::InvalidCoords));
    }
}
