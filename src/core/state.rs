pub type Pid = u32;
pub type Ticks = u64;

/// A catalog entry. Never mutated after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    pub pid: Pid,
    pub arrival: Ticks,
    pub burst: Ticks,
    /// Lower value means more urgent. Inputs without a priority field load as 0.
    pub priority: i32,
}

/// Per-process bookkeeping for a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
    pub pid: Pid,
    pub remaining: Ticks,
    pub waited: Ticks,
}

/// Mutable state of one run: the read-only catalog plus one tracker slot per
/// process. Dropped once the run's report has been produced.
#[derive(Debug)]
pub struct SimCtx<'a> {
    pub procs: &'a [Process],
    pub track: Vec<RunState>,
    total: Ticks,
}

impl<'a> SimCtx<'a> {
    pub fn new(procs: &'a [Process]) -> Self {
        let track = procs
            .iter()
            .map(|p| RunState {
                pid: p.pid,
                remaining: p.burst,
                waited: 0,
            })
            .collect();
        let total = procs.iter().map(|p| p.burst).sum();

        Self { procs, track, total }
    }

    /// Sum of all burst durations; the simulation horizon.
    pub fn total_burst(&self) -> Ticks {
        self.total
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }

    /// Indices of processes that have arrived by `now` and still have work left.
    pub fn eligible(&self, now: Ticks) -> impl Iterator<Item = usize> + '_ {
        (0..self.procs.len())
            .filter(move |&i| self.procs[i].arrival <= now && self.track[i].remaining > 0)
    }
}
