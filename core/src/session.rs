use rand::prelude::*;

use crate::*;

/// One player's game lifecycle: the current board, its clock, and the best time on record.
///
/// Every method handles exactly one event and runs to completion, renderers read [`Session::view`]
/// between events.
pub struct Session<S: BestTimeStore, T: TickSource> {
    config: GameConfig,
    engine: PlayEngine,
    seeds: SmallRng,
    elapsed_secs: Seconds,
    best_time_secs: Option<Seconds>,
    store: S,
    ticks: T,
    tick_task: Option<T::Task>,
    epoch: Epoch,
}

impl<S: BestTimeStore, T: TickSource> Session<S, T> {
    /// Loads the best time once and starts the first game.
    pub fn new(config: GameConfig, seed: u64, store: S, ticks: T) -> Self {
        let mut seeds = SmallRng::seed_from_u64(seed);
        let layout = RandomLayoutGenerator::new(seeds.next_u64()).generate(config);
        let best_time_secs = store.load_best_time();
        log::debug!("best time on record: {:?}", best_time_secs);

        let mut session = Self {
            config,
            engine: PlayEngine::new(&layout),
            seeds,
            elapsed_secs: 0,
            best_time_secs,
            store,
            ticks,
            tick_task: None,
            epoch: 0,
        };
        session.start_clock();
        session
    }

    /// Throws the current board away and starts a fresh random one.
    ///
    /// Always a visible change: new board, clock back at zero.
    pub fn restart(&mut self) -> bool {
        let seed = self.seeds.next_u64();
        self.restart_with(RandomLayoutGenerator::new(seed))
    }

    /// Like [`Session::restart`], but with the mines placed by `generator`.
    ///
    /// The layout only applies to this one game, later restarts go back to the session config.
    pub fn restart_with<G: LayoutGenerator>(&mut self, generator: G) -> bool {
        let layout = generator.generate(self.config);
        self.engine = PlayEngine::new(&layout);
        self.elapsed_secs = 0;
        self.start_clock();
        log::debug!(
            "new game: {}x{} with {} mines",
            layout.size(),
            layout.size(),
            layout.mine_count()
        );
        true
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        match self.engine.reveal(coords) {
            Ok(outcome) => {
                self.after_move();
                outcome
            }
            Err(err) => {
                log::debug!("ignored reveal at {:?}: {}", coords, err);
                RevealOutcome::NoChange
            }
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        match self.engine.toggle_flag(coords) {
            Ok(outcome) => {
                self.after_move();
                outcome
            }
            Err(err) => {
                log::debug!("ignored flag at {:?}: {}", coords, err);
                MarkOutcome::NoChange
            }
        }
    }

    /// Advances the clock by one second. Returns whether the time changed.
    ///
    /// Ticks from a cancelled task or arriving after the game ended are ignored.
    pub fn tick(&mut self, epoch: Epoch) -> bool {
        if epoch != self.epoch || self.tick_task.is_none() || self.engine.is_finished() {
            log::trace!("stale tick for epoch {} (current {})", epoch, self.epoch);
            return false;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        true
    }

    pub fn view(&self) -> SessionView {
        SessionView::new(&self.engine, self.elapsed_secs, self.best_time_secs)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn state(&self) -> EngineState {
        self.engine.state()
    }

    pub fn is_over(&self) -> bool {
        self.engine.is_finished()
    }

    pub fn elapsed_secs(&self) -> Seconds {
        self.elapsed_secs
    }

    pub fn best_time_secs(&self) -> Option<Seconds> {
        self.best_time_secs
    }

    /// Epoch of the running tick task, the one [`Session::tick`] accepts.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn is_ticking(&self) -> bool {
        self.tick_task.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn start_clock(&mut self) {
        // the old task has to go before the new one exists
        self.tick_task = None;
        self.epoch = self.epoch.wrapping_add(1);
        self.tick_task = Some(self.ticks.start(self.epoch));
    }

    fn after_move(&mut self) {
        if !self.engine.is_finished() {
            return;
        }

        self.tick_task = None;
        if self.engine.state() == EngineState::Won {
            self.record_win();
        }
    }

    fn record_win(&mut self) {
        let elapsed = self.elapsed_secs;
        if self.best_time_secs.is_none_or(|best| elapsed < best) {
            log::info!(
                "new best time: {}s (previous {:?})",
                elapsed,
                self.best_time_secs
            );
            self.best_time_secs = Some(elapsed);
            self.store.save_best_time(elapsed);
        }
    }
}
