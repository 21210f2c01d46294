use std::fmt;

use super::fcfs;
use super::report::{tabulate, Row, Stats};
use crate::core::driver::Simulation;
use crate::core::state::{Process, Ticks};
use crate::core::timeline::Slice;
use crate::policy::{Policy, PriorityFirst, RoundRobin, ShortestRemaining};

/// The four scheduling disciplines on offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    ShortestJobFirst,
    Priority,
    RoundRobin,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::ShortestJobFirst,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Fcfs => "First-come, first-serve",
            Algorithm::ShortestJobFirst => "Shortest-job-first",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "Round-robin",
        };
        f.write_str(name)
    }
}

/// Everything one run produces: the occupancy timeline plus the per-process
/// rows and aggregate figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub algorithm: Algorithm,
    pub timeline: Vec<Slice>,
    pub rows: Vec<Row>,
    pub stats: Stats,
}

/// Run `algorithm` over an arrival-sorted catalog.
///
/// The catalog is only read; each invocation stands alone and repeated runs
/// return identical schedules.
pub fn schedule(algorithm: Algorithm, catalog: &[Process]) -> Schedule {
    let (timeline, waits) = match algorithm {
        Algorithm::Fcfs => fcfs::run(catalog),
        Algorithm::ShortestJobFirst => preemptive(catalog, ShortestRemaining),
        Algorithm::Priority => preemptive(catalog, PriorityFirst),
        Algorithm::RoundRobin => preemptive(catalog, RoundRobin::default()),
    };

    let (rows, stats) = tabulate(catalog, &waits);
    log::debug!(
        "{algorithm}: {} slices, avg wait {:.2}, throughput {:.2}/t",
        timeline.len(),
        stats.avg_wait,
        stats.throughput
    );

    Schedule {
        algorithm,
        timeline,
        rows,
        stats,
    }
}

fn preemptive<P: Policy>(catalog: &[Process], policy: P) -> (Vec<Slice>, Vec<Ticks>) {
    let outcome = Simulation::new(catalog, policy).run();
    let waits = outcome.track.iter().map(|s| s.waited).collect();
    (outcome.slices, waits)
}
