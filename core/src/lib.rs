#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use store::*;
pub use ticker::*;
pub use tile::*;
pub use types::*;
pub use view::*;

mod board;
mod engine;
mod error;
mod generator;
mod session;
mod store;
mod ticker;
mod tile;
mod types;
mod view;

/// Board side and mine count, validated so that `0 < mines < size²`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord = 10;
    pub const DEFAULT_MINES: CellCount = 10;

    const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if size == 0 {
            return Err(GameError::EmptyBoard);
        }
        if mines == 0 {
            return Err(GameError::NoMines);
        }
        if mines >= mult(size, size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_MINES)
    }
}

/// Where the mines are, independent of any play state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds a layout from explicit coordinates. Duplicates collapse into one mine.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default((size, size).to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        let layout = Self::from_mine_mask(mine_mask);
        GameConfig::new(size, layout.mine_count)?;
        Ok(layout)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord {
        self.mine_mask.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len().try_into().unwrap_or(CellCount::MAX)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors, the cast cannot truncate
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord2> + '_ {
        iter_coords(self.size()).filter(|&pos| self[pos])
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
    Won,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
            Self::Won => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_full_and_empty_boards() {
        assert_eq!(GameConfig::new(4, 16), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(4, 200), Err(GameError::TooManyMines));
        assert_eq!(GameConfig::new(4, 0), Err(GameError::NoMines));
        assert_eq!(GameConfig::new(0, 1), Err(GameError::EmptyBoard));

        let config = GameConfig::new(4, 15).unwrap();
        assert_eq!(config.total_cells(), 16);
        assert_eq!(config.mines(), 15);
    }

    #[test]
    fn default_config_is_ten_by_ten_with_ten_mines() {
        let config = GameConfig::default();
        assert_eq!(config.size(), 10);
        assert_eq!(config.mines(), 10);
        assert_eq!(GameConfig::new(10, 10), Ok(config));
    }

    #[test]
    fn layout_from_coords_validates_bounds_and_counts() {
        assert_eq!(
            MineLayout::from_mine_coords(3, &[(3, 0)]),
            Err(GameError::InvalidCoords)
        );

        let layout = MineLayout::from_mine_coords(3, &[(0, 0), (0, 0), (2, 1)]).unwrap();
        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.size(), 3);
        assert!(layout.contains_mine((2, 1)));
        assert!(!layout.contains_mine((1, 1)));
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((0, 2)), 0);
    }

    #[test]
    fn only_no_change_skips_a_redraw() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::Revealed.has_update());
        assert!(RevealOutcome::HitMine.has_update());
        assert!(RevealOutcome::Won.has_update());

        assert!(!MarkOutcome::NoChange.has_update());
        assert!(MarkOutcome::Changed.has_update());
        assert!(MarkOutcome::Won.has_update());
    }
}
