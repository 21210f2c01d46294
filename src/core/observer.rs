use super::state::SimCtx;

/// Debug-build sanity checks over the tracker, run once per tick.
#[derive(Debug)]
pub struct Observer {
    ticks_seen: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { ticks_seen: 0 }
    }

    pub fn observe(&mut self, ctx: &SimCtx<'_>) {
        self.ticks_seen += 1;

        debug_assert_eq!(
            ctx.track.len(),
            ctx.procs.len(),
            "tracker must mirror the catalog"
        );

        for (proc, state) in ctx.procs.iter().zip(&ctx.track) {
            debug_assert_eq!(proc.pid, state.pid, "tracker slot out of catalog order");
            debug_assert!(
                state.remaining <= proc.burst,
                "pid {} remaining {} exceeds burst {}",
                proc.pid,
                state.remaining,
                proc.burst
            );
            debug_assert!(
                state.waited <= self.ticks_seen,
                "pid {} accrued {} wait ticks in {} ticks",
                proc.pid,
                state.waited,
                self.ticks_seen
            );
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::new()
    }
}
