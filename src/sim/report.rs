use average::{Estimate, Mean};

use crate::core::state::{Pid, Process, Ticks};

/// Per-process timing row for the schedule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub pid: Pid,
    pub priority: i32,
    pub burst: Ticks,
    pub arrival: Ticks,
    pub wait: Ticks,
    pub turnaround: Ticks,
    pub completion: Ticks,
}

/// System-wide figures for one run.
///
/// Throughput divides the process count by the completion time of the last
/// catalog-order process, an approximation that is only exact when the
/// catalog is arrival-sorted and that process finishes last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub avg_wait: f64,
    pub avg_turnaround: f64,
    pub throughput: f64,
}

/// Pure conversion from final wait times to rows and aggregates.
pub fn tabulate(catalog: &[Process], waits: &[Ticks]) -> (Vec<Row>, Stats) {
    debug_assert_eq!(catalog.len(), waits.len());

    let rows: Vec<Row> = catalog
        .iter()
        .zip(waits)
        .map(|(p, &wait)| Row {
            pid: p.pid,
            priority: p.priority,
            burst: p.burst,
            arrival: p.arrival,
            wait,
            turnaround: p.burst + wait,
            completion: p.arrival + wait + p.burst,
        })
        .collect();

    let avg_wait = rows
        .iter()
        .map(|r| r.wait as f64)
        .collect::<Mean>()
        .estimate();
    let avg_turnaround = rows
        .iter()
        .map(|r| r.turnaround as f64)
        .collect::<Mean>()
        .estimate();
    let throughput = match rows.last() {
        Some(last) if last.completion > 0 => rows.len() as f64 / last.completion as f64,
        _ => 0.0,
    };

    (
        rows,
        Stats {
            avg_wait,
            avg_turnaround,
            throughput,
        },
    )
}
