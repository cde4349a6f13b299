use super::*;

/// Uniform rejection sampling: draw a coordinate, keep it unless it already holds a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use ndarray::Array2;
        use rand::prelude::*;

        let size = config.size();
        let mut mines: Array2<bool> = Array2::default((size, size).to_nd_index());
        let mut mines_placed: CellCount = 0;
        let mut draws: u32 = 0;

        // GameConfig guarantees mines < size², so this terminates with probability 1
        let mut rng = SmallRng::seed_from_u64(self.seed);
        while mines_placed < config.mines() {
            let coords: Coord2 = (rng.random_range(0..size), rng.random_range(0..size));
            draws += 1;
            let cell = &mut mines[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_placed += 1;
            }
        }

        log::debug!(
            "placed {} mines on {}x{} in {} draws (seed {})",
            mines_placed,
            size,
            size,
            draws,
            self.seed
        );
        MineLayout::from_mine_mask(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn places_exact_mine_count_without_duplicates() {
        for seed in 0..32 {
            let config = GameConfig::new(10, 10).unwrap();
            let layout = RandomLayoutGenerator::new(seed).generate(config);

            assert_eq!(layout.mine_count(), 10);
            let coords: BTreeSet<_> = layout.iter_mines().collect();
            assert_eq!(coords.len(), 10);
            assert!(coords.iter().all(|&(row, col)| row < 10 && col < 10));
        }
    }

    #[test]
    fn nearly_full_board_leaves_one_safe_cell() {
        let config = GameConfig::new(4, 15).unwrap();
        let layout = RandomLayoutGenerator::new(7).generate(config);
        assert_eq!(layout.mine_count(), 15);
        assert_eq!(layout.total_cells() - layout.mine_count(), 1);
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::new(9, 12).unwrap();
        let a = RandomLayoutGenerator::new(42).generate(config);
        let b = RandomLayoutGenerator::new(42).generate(config);
        let c = RandomLayoutGenerator::new(43).generate(config);
        assert_eq!(a, b);
        assert_eq!(a.game_config(), config);
        // different seeds on a 9x9 board are overwhelmingly likely to differ
        assert_ne!(a, c);
    }

    #[test]
    fn fixed_generator_returns_its_layout() {
        let layout = MineLayout::from_mine_coords(4, &[(0, 0), (3, 3)]).unwrap();
        let config = layout.game_config();
        assert_eq!(FixedLayoutGenerator::new(layout.clone()).generate(config), layout);
    }
}
