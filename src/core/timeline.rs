use super::state::{Pid, Ticks};

/// One stretch of processor occupancy: `pid` ran from `start` (inclusive) to
/// `stop` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub pid: Pid,
    pub start: Ticks,
    pub stop: Ticks,
}

/// Accumulates contiguous same-process stretches as the clock advances.
/// Slices come out chronological and gapless: each close opens the next
/// stretch at the previous stop.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    slices: Vec<Slice>,
    open: Ticks,
}

impl TimelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the currently open stretch at `stop`, attributing it to `pid`.
    pub fn close(&mut self, pid: Pid, stop: Ticks) {
        debug_assert!(stop >= self.open, "timeline must advance monotonically");
        self.slices.push(Slice {
            pid,
            start: self.open,
            stop,
        });
        self.open = stop;
    }

    pub fn finish(self) -> Vec<Slice> {
        self.slices
    }
}
