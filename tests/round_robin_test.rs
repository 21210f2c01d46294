use pretty_assertions::assert_eq;

use schedsim::{schedule, Algorithm, Process, Schedule, Slice, Ticks};

// The round-robin cursor approximates a ready queue by catalog index, so
// these catalogs keep every arrival at tick 0 (the shape the variant is
// documented to handle).
fn proc(pid: u32, burst: Ticks) -> Process {
    Process { pid, arrival: 0, burst, priority: 0 }
}

fn waits(run: &Schedule) -> Vec<Ticks> {
    run.rows.iter().map(|r| r.wait).collect()
}

#[test]
fn equal_bursts_rotate_once_through_the_catalog() {
    let catalog = [proc(1, 4), proc(2, 4), proc(3, 4)];
    let run = schedule(Algorithm::RoundRobin, &catalog);

    assert_eq!(
        run.timeline,
        vec![
            Slice { pid: 1, start: 0, stop: 4 },
            Slice { pid: 2, start: 4, stop: 8 },
            Slice { pid: 3, start: 8, stop: 12 },
        ]
    );
    assert_eq!(waits(&run), vec![0, 4, 8]);
    assert_eq!(
        run.rows.iter().map(|r| r.completion).collect::<Vec<_>>(),
        vec![4, 8, 12]
    );
    assert!((run.stats.throughput - 3.0 / 12.0).abs() < 1e-9);
}

#[test]
fn cursor_wraps_back_to_unfinished_work() {
    let catalog = [proc(1, 6), proc(2, 4)];
    let run = schedule(Algorithm::RoundRobin, &catalog);

    assert_eq!(
        run.timeline,
        vec![
            Slice { pid: 1, start: 0, stop: 4 },
            Slice { pid: 2, start: 4, stop: 8 },
            Slice { pid: 1, start: 8, stop: 10 },
        ]
    );
    assert_eq!(waits(&run), vec![4, 4]);
}

#[test]
fn no_slice_outlives_the_quantum_except_a_final_one() {
    let catalog = [proc(1, 9), proc(2, 2), proc(3, 7)];
    let run = schedule(Algorithm::RoundRobin, &catalog);

    for (i, slice) in run.timeline.iter().enumerate() {
        let is_last_for_pid = run.timeline[i + 1..].iter().all(|s| s.pid != slice.pid);
        assert!(
            slice.stop - slice.start <= 4 || is_last_for_pid,
            "slice {slice:?} exceeds the quantum mid-run"
        );
    }
}

#[test]
fn timeline_is_gapless_and_covers_the_total_burst() {
    let catalog = [proc(1, 5), proc(2, 3), proc(3, 6)];
    let run = schedule(Algorithm::RoundRobin, &catalog);

    let total: Ticks = catalog.iter().map(|p| p.burst).sum();
    assert_eq!(run.timeline.first().unwrap().start, 0);
    assert_eq!(run.timeline.last().unwrap().stop, total);
    for pair in run.timeline.windows(2) {
        assert_eq!(pair[0].stop, pair[1].start);
    }
}
