use alloc::rc::Rc;
use core::cell::Cell;

/// Sequence number of a tick task, bumped on every game start.
pub type Epoch = u32;

/// Schedules the once-per-second tick of a running game.
///
/// The returned task keeps ticking until it is dropped. Every tick it produces must be handed
/// back to [`Session::tick`](crate::Session::tick) with the epoch it was started with.
pub trait TickSource {
    type Task;

    fn start(&mut self, epoch: Epoch) -> Self::Task;
}

/// Tick source driven by hand, the caller decides when a second has passed.
///
/// It only counts tasks so that callers can check that at most one is running. Clones share
/// their counters, keep one around to observe a source handed to a session.
#[derive(Clone, Debug, Default)]
pub struct ManualTicks {
    live: Rc<Cell<usize>>,
    started: Rc<Cell<u32>>,
}

impl ManualTicks {
    pub fn live_tasks(&self) -> usize {
        self.live.get()
    }

    pub fn started_tasks(&self) -> u32 {
        self.started.get()
    }
}

impl TickSource for ManualTicks {
    type Task = ManualTickTask;

    fn start(&mut self, epoch: Epoch) -> Self::Task {
        self.live.set(self.live.get() + 1);
        self.started.set(self.started.get() + 1);
        ManualTickTask {
            live: Rc::clone(&self.live),
            epoch,
        }
    }
}

#[derive(Debug)]
pub struct ManualTickTask {
    live: Rc<Cell<usize>>,
    epoch: Epoch,
}

impl ManualTickTask {
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }
}

impl Drop for ManualTickTask {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}
