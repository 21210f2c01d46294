pub mod priority;
pub mod rr;
pub mod sjf;

pub use priority::PriorityFirst;
pub use rr::RoundRobin;
pub use sjf::ShortestRemaining;

use crate::core::state::{SimCtx, Ticks};

/// Decides which process should occupy the processor next.
///
/// One implementation per preemptive discipline. The tick loop in
/// [`crate::core::Simulation`] owns the clock and the bookkeeping; a policy
/// only answers the selection questions it is asked.
pub trait Policy {
    /// First tick of the clock. Most disciplines start at 0.
    fn first_tick(&self) -> Ticks {
        0
    }

    /// Index to run before any tick has elapsed.
    fn initial(&mut self, ctx: &SimCtx<'_>) -> usize;

    /// Whether the process `incoming`, arriving on this very tick, should
    /// displace the pending selection. Compared against `active`, not against
    /// an earlier same-tick arrival.
    fn preempts(&self, _ctx: &SimCtx<'_>, _incoming: usize, _active: usize) -> bool {
        false
    }

    /// Whether a pending (not yet installed) selection is exempt from wait
    /// accrual on the tick it was chosen.
    fn exempts_selected(&self) -> bool {
        true
    }

    /// Meter one tick of the active process's timeslice. Returns true when
    /// the slice expired.
    fn charge(&mut self) -> bool {
        false
    }

    /// Replacement for an active process that completed or exhausted its
    /// timeslice. May return an index that is only resolved by
    /// [`Policy::on_switch`].
    fn next(&mut self, ctx: &SimCtx<'_>, now: Ticks) -> usize;

    /// Called at every processor-switch boundary with the pending selection;
    /// returns the index actually installed.
    fn on_switch(&mut self, _ctx: &SimCtx<'_>, selected: usize) -> usize {
        selected
    }
}

/// Index of the eligible process with the least remaining work; ties go to
/// the lowest index. `None` when nothing has both arrived and work left.
pub(crate) fn shortest_eligible(ctx: &SimCtx<'_>, now: Ticks) -> Option<usize> {
    ctx.eligible(now).min_by_key(|&i| ctx.track[i].remaining)
}

/// Index of the eligible process with the most urgent (lowest) priority;
/// ties go to the lowest index.
pub(crate) fn most_urgent_eligible(ctx: &SimCtx<'_>, now: Ticks) -> Option<usize> {
    ctx.eligible(now).min_by_key(|&i| ctx.procs[i].priority)
}
