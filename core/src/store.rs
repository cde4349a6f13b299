use crate::*;

/// Persistent home of the best (lowest) winning time.
///
/// Implementations deal with their own I/O failures, a failed load reads as "no record".
pub trait BestTimeStore {
    fn load_best_time(&self) -> Option<Seconds>;
    fn save_best_time(&mut self, secs: Seconds);
}

/// Keeps the record in memory, for tests and headless play.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    best_time: Option<Seconds>,
    save_count: u32,
}

impl MemoryStore {
    pub fn with_best_time(secs: Seconds) -> Self {
        Self {
            best_time: Some(secs),
            save_count: 0,
        }
    }

    pub fn save_count(&self) -> u32 {
        self.save_count
    }
}

impl BestTimeStore for MemoryStore {
    fn load_best_time(&self) -> Option<Seconds> {
        self.best_time
    }

    fn save_best_time(&mut self, secs: Seconds) {
        self.best_time = Some(secs);
        self.save_count += 1;
    }
}
