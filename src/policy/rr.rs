use super::Policy;
use crate::core::state::{SimCtx, Ticks};

pub const DEFAULT_QUANTUM: Ticks = 4;

/// Round-robin over the catalog by index, with a fixed quantum.
///
/// This is a cursor-increment approximation of round-robin rather than a true
/// FIFO ready queue: when the active process completes or its quantum runs
/// out, the cursor advances to the next catalog index, wrapping past the end
/// to the first process that still has work left. It matches standard
/// round-robin only when every process arrives at or before tick 0 and
/// catalog order equals arrival order; outside that shape the cursor can
/// revisit finished slots and starve later indices.
#[derive(Debug)]
pub struct RoundRobin {
    quantum: Ticks,
    slice_left: Ticks,
    cursor: usize,
}

impl RoundRobin {
    pub fn new(quantum: Ticks) -> Self {
        assert!(quantum > 0, "round-robin needs a non-zero quantum");
        Self {
            quantum,
            slice_left: quantum,
            cursor: 0,
        }
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl Policy for RoundRobin {
    fn first_tick(&self) -> Ticks {
        1
    }

    fn initial(&mut self, _ctx: &SimCtx<'_>) -> usize {
        self.cursor
    }

    fn exempts_selected(&self) -> bool {
        false
    }

    fn charge(&mut self) -> bool {
        self.slice_left -= 1;
        self.slice_left == 0
    }

    fn next(&mut self, _ctx: &SimCtx<'_>, _now: Ticks) -> usize {
        self.cursor += 1;
        self.cursor
    }

    fn on_switch(&mut self, ctx: &SimCtx<'_>, selected: usize) -> usize {
        self.slice_left = self.quantum;

        self.cursor = if selected >= ctx.len() {
            (0..ctx.len())
                .find(|&i| ctx.track[i].remaining > 0)
                .unwrap_or(0)
        } else {
            selected
        };
        self.cursor
    }
}
