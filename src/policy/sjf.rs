use super::{shortest_eligible, Policy};
use crate::core::state::{SimCtx, Ticks};

/// Preemptive shortest-job-first: keep the processor on the process with the
/// least remaining work. An arrival with strictly less remaining work than
/// the active process takes over immediately, even one tick before the active
/// process would have finished.
#[derive(Debug, Default)]
pub struct ShortestRemaining;

impl Policy for ShortestRemaining {
    fn initial(&mut self, ctx: &SimCtx<'_>) -> usize {
        shortest_eligible(ctx, 0).unwrap_or(0)
    }

    fn preempts(&self, ctx: &SimCtx<'_>, incoming: usize, active: usize) -> bool {
        ctx.track[incoming].remaining < ctx.track[active].remaining
    }

    fn next(&mut self, ctx: &SimCtx<'_>, now: Ticks) -> usize {
        shortest_eligible(ctx, now).unwrap_or(0)
    }
}
