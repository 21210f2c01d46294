use super::observer::Observer;
use super::state::{Process, RunState, SimCtx};
use super::timeline::{Slice, TimelineBuilder};
use crate::policy::Policy;

/// The shared discrete-clock loop behind the preemptive disciplines.
///
/// The clock advances one tick at a time from the policy's first tick through
/// the total burst sum, inclusive. Each tick:
///
/// 1. processes arriving on this tick may move the pending selection,
/// 2. arrived processes that are neither active nor selected and still have
///    work left accrue one tick of wait,
/// 3. the active process burns one tick of remaining work (and of its
///    timeslice, where the policy meters one),
/// 4. a completion or an expired timeslice asks the policy for a replacement,
/// 5. a changed selection, or the clock reaching the horizon, closes the open
///    timeline stretch and installs the replacement.
///
/// The horizon equals the total work, so once everything has completed the
/// loop can spend a transient tick charged to an already-finished process
/// (the selection scans degrade to index 0 when nothing is eligible). Callers
/// see that as a short trailing slice; the tracker itself never goes below
/// zero and never re-fires a completion.
pub struct Simulation<'a, P> {
    ctx: SimCtx<'a>,
    policy: P,
    timeline: TimelineBuilder,
    observer: Observer,
}

/// Final tracker state plus the full occupancy timeline of one run.
#[derive(Debug)]
pub struct RunOutcome {
    pub slices: Vec<Slice>,
    pub track: Vec<RunState>,
}

impl<'a, P: Policy> Simulation<'a, P> {
    pub fn new(catalog: &'a [Process], policy: P) -> Self {
        Self {
            ctx: SimCtx::new(catalog),
            policy,
            timeline: TimelineBuilder::new(),
            observer: Observer::new(),
        }
    }

    pub fn run(mut self) -> RunOutcome {
        if self.ctx.is_empty() {
            return RunOutcome {
                slices: Vec::new(),
                track: self.ctx.track,
            };
        }

        let total = self.ctx.total_burst();
        let mut active = self.policy.initial(&self.ctx);
        let mut selected = active;

        for now in self.policy.first_tick()..=total {
            for i in 0..self.ctx.len() {
                if self.ctx.procs[i].arrival == now && self.policy.preempts(&self.ctx, i, active) {
                    selected = i;
                }
            }

            for i in 0..self.ctx.len() {
                if i == active || (self.policy.exempts_selected() && i == selected) {
                    continue;
                }
                if self.ctx.track[i].remaining > 0 && now > self.ctx.procs[i].arrival {
                    self.ctx.track[i].waited += 1;
                }
            }

            let before = self.ctx.track[active].remaining;
            self.ctx.track[active].remaining = before.saturating_sub(1);
            let expired = self.policy.charge();

            if before == 1 || expired {
                selected = self.policy.next(&self.ctx, now);
            }

            if selected != active || now == total {
                let pid = self.ctx.procs[active].pid;
                self.timeline.close(pid, now);
                active = self.policy.on_switch(&self.ctx, selected);
                selected = active;
                log::trace!(
                    "t={now}: pid {pid} off the processor, pid {} installed",
                    self.ctx.procs[active].pid
                );
            }

            self.observer.observe(&self.ctx);
        }

        RunOutcome {
            slices: self.timeline.finish(),
            track: self.ctx.track,
        }
    }
}
