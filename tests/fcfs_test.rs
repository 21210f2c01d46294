use pretty_assertions::assert_eq;

use schedsim::{schedule, Algorithm, Process, Slice, Ticks};

fn proc(pid: u32, arrival: Ticks, burst: Ticks) -> Process {
    Process { pid, arrival, burst, priority: 0 }
}

fn waits(run: &schedsim::Schedule) -> Vec<Ticks> {
    run.rows.iter().map(|r| r.wait).collect()
}

#[test]
fn staggered_arrivals_queue_in_catalog_order() {
    let catalog = [proc(1, 0, 5), proc(2, 1, 3), proc(3, 2, 8)];
    let run = schedule(Algorithm::Fcfs, &catalog);

    assert_eq!(waits(&run), vec![0, 4, 6]);
    assert_eq!(
        run.rows.iter().map(|r| r.turnaround).collect::<Vec<_>>(),
        vec![5, 7, 14]
    );
    assert_eq!(
        run.rows.iter().map(|r| r.completion).collect::<Vec<_>>(),
        vec![5, 8, 16]
    );
    assert_eq!(
        run.timeline,
        vec![
            Slice { pid: 1, start: 0, stop: 5 },
            Slice { pid: 2, start: 5, stop: 8 },
            Slice { pid: 3, start: 8, stop: 16 },
        ]
    );

    assert!((run.stats.avg_wait - 10.0 / 3.0).abs() < 1e-9);
    assert!((run.stats.avg_turnaround - 26.0 / 3.0).abs() < 1e-9);
    assert!((run.stats.throughput - 3.0 / 16.0).abs() < 1e-9);
}

#[test]
fn simultaneous_arrivals_wait_for_the_bursts_ahead_of_them() {
    let catalog = [proc(1, 0, 2), proc(2, 0, 3), proc(3, 0, 4), proc(4, 0, 1)];
    let run = schedule(Algorithm::Fcfs, &catalog);

    // Each wait is the sum of the bursts queued ahead in catalog order.
    assert_eq!(waits(&run), vec![0, 2, 5, 9]);
}

#[test]
fn late_arrival_after_an_idle_gap_starts_immediately() {
    let catalog = [proc(1, 0, 2), proc(2, 5, 3)];
    let run = schedule(Algorithm::Fcfs, &catalog);

    assert_eq!(waits(&run), vec![0, 0]);
    assert_eq!(
        run.timeline,
        vec![
            Slice { pid: 1, start: 0, stop: 2 },
            Slice { pid: 2, start: 5, stop: 8 },
        ]
    );
    assert_eq!(
        run.rows.iter().map(|r| r.completion).collect::<Vec<_>>(),
        vec![2, 8]
    );
}
