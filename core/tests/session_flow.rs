use flagfall_core::*;

fn session() -> (Session<MemoryStore, ManualTicks>, ManualTicks) {
    let ticks = ManualTicks::default();
    let config = GameConfig::new(4, 1).unwrap();
    let session = Session::new(config, 99, MemoryStore::default(), ticks.clone());
    (session, ticks)
}

fn corner_mine() -> FixedLayoutGenerator {
    FixedLayoutGenerator::new(MineLayout::from_mine_coords(4, &[(0, 0)]).unwrap())
}

#[test]
fn zero_cell_far_from_the_mine_opens_the_whole_board() {
    let (mut session, ticks) = session();
    session.restart_with(corner_mine());
    assert_eq!(session.toggle_flag((0, 0)), MarkOutcome::Changed);
    let epoch = session.epoch();
    session.tick(epoch);
    session.tick(epoch);

    assert_eq!(session.reveal((3, 3)), RevealOutcome::Won);

    let view = session.view();
    let revealed = view.cells.iter().filter(|cell| cell.is_revealed()).count();
    assert_eq!(revealed, 15);
    assert_eq!(view.cell_at((0, 0)), CellView::Flagged);
    assert_eq!(view.cell_at((1, 1)), CellView::Revealed(1));
    assert_eq!(view.cell_at((3, 3)), CellView::Revealed(0));
    assert_eq!(view.state, EngineState::Won);
    assert_eq!(view.best_time_secs, Some(2));
    assert_eq!(session.store().load_best_time(), Some(2));
    assert_eq!(ticks.live_tasks(), 0);
}

#[test]
fn without_the_flag_the_same_reveal_does_not_win() {
    let (mut session, ticks) = session();
    session.restart_with(corner_mine());

    assert_eq!(session.reveal((3, 3)), RevealOutcome::Revealed);
    assert_eq!(session.state(), EngineState::Active);
    assert_eq!(session.view().cell_at((0, 0)), CellView::Hidden);
    assert_eq!(ticks.live_tasks(), 1);

    assert_eq!(session.toggle_flag((0, 0)), MarkOutcome::Won);
    assert!(session.is_over());
}

#[test]
fn random_games_can_be_played_to_a_win() {
    let ticks = ManualTicks::default();
    let config = GameConfig::new(12, 30).unwrap();
    let mut session = Session::new(config, 7, MemoryStore::default(), ticks.clone());

    for _ in 0..8 {
        session.restart();
        let cells: Vec<_> = session.engine().board().iter_cells().collect();
        assert_eq!(cells.iter().filter(|(_, cell)| cell.is_mine()).count(), 30);

        for (coords, cell) in cells {
            if session.is_over() {
                break;
            }
            if cell.is_mine() {
                session.toggle_flag(coords);
            } else {
                session.reveal(coords);
            }
        }

        assert_eq!(session.state(), EngineState::Won);
        assert!(session.engine().board().is_won());
        assert_eq!(ticks.live_tasks(), 0);
    }
    assert_eq!(session.best_time_secs(), Some(0));
}
