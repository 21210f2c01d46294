use super::{most_urgent_eligible, shortest_eligible, Policy};
use crate::core::state::{SimCtx, Ticks};

/// Preemptive priority scheduling, lower value first. An arrival with a
/// strictly more urgent priority than the active process takes over; on an
/// equal priority the arrival wins only with strictly less remaining work.
/// The completion scan considers priority alone — the remaining-work
/// tie-break applies at arrival time only.
#[derive(Debug, Default)]
pub struct PriorityFirst;

impl Policy for PriorityFirst {
    fn initial(&mut self, ctx: &SimCtx<'_>) -> usize {
        // Before the first tick there is no priority history to respect; the
        // opening pick favors the shortest arrival, as in shortest-job-first.
        shortest_eligible(ctx, 0).unwrap_or(0)
    }

    fn preempts(&self, ctx: &SimCtx<'_>, incoming: usize, active: usize) -> bool {
        let incoming_prio = ctx.procs[incoming].priority;
        let active_prio = ctx.procs[active].priority;

        incoming_prio < active_prio
            || (incoming_prio == active_prio
                && ctx.track[incoming].remaining < ctx.track[active].remaining)
    }

    fn next(&mut self, ctx: &SimCtx<'_>, now: Ticks) -> usize {
        most_urgent_eligible(ctx, now).unwrap_or(0)
    }
}
