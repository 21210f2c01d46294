use crate::core::state::{Process, Ticks};
use crate::core::timeline::Slice;

/// First-come-first-served is non-preemptive and needs no tick loop: catalog
/// order is execution order, so each wait falls out of a running service
/// clock. The clock jumps forward over idle gaps (a process arriving after
/// all earlier work has drained starts at its own arrival), which is also why
/// an FCFS timeline, unlike the preemptive ones, may contain holes.
pub fn run(catalog: &[Process]) -> (Vec<Slice>, Vec<Ticks>) {
    let mut slices = Vec::with_capacity(catalog.len());
    let mut waits = Vec::with_capacity(catalog.len());
    let mut service: Ticks = 0;

    for p in catalog {
        service = service.max(p.arrival);
        let wait = service - p.arrival;

        slices.push(Slice {
            pid: p.pid,
            start: service,
            stop: service + p.burst,
        });
        waits.push(wait);
        service += p.burst;
    }

    (slices, waits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc(pid: u32, arrival: Ticks, burst: Ticks) -> Process {
        Process { pid, arrival, burst, priority: 0 }
    }

    #[test]
    fn waits_are_prefix_sums_when_everything_arrives_at_zero() {
        let catalog = [proc(1, 0, 2), proc(2, 0, 3), proc(3, 0, 4)];
        let (_, waits) = run(&catalog);
        assert_eq!(waits, vec![0, 2, 5]);
    }

    #[test]
    fn service_clock_jumps_over_idle_gaps() {
        let catalog = [proc(1, 0, 2), proc(2, 5, 3)];
        let (slices, waits) = run(&catalog);

        assert_eq!(waits, vec![0, 0]);
        assert_eq!(
            slices,
            vec![
                Slice { pid: 1, start: 0, stop: 2 },
                Slice { pid: 2, start: 5, stop: 8 },
            ]
        );
    }
}
