use std::io::{self, Write};

use crate::sim::Schedule;

/// Write a title banner, the Gantt timeline, and the timing table for one
/// schedule. Pure formatting over an already-computed [`Schedule`].
pub fn render<W: Write>(w: &mut W, schedule: &Schedule) -> io::Result<()> {
    let title = schedule.algorithm.to_string();
    banner(w, &title)?;
    gantt(w, schedule)?;
    table(w, schedule)
}

fn banner<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{:width$}{title}", "", width = title.len() / 2)?;
    writeln!(w, "{rule}")
}

fn gantt<W: Write>(w: &mut W, schedule: &Schedule) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;

    write!(w, "|")?;
    for slice in &schedule.timeline {
        write!(w, "{:^7}|", slice.pid)?;
    }
    writeln!(w)?;

    for (i, slice) in schedule.timeline.iter().enumerate() {
        write!(w, "{}\t", slice.start)?;
        if i + 1 == schedule.timeline.len() {
            write!(w, "{}", slice.stop)?;
        }
    }
    writeln!(w, "\n")
}

fn table<W: Write>(w: &mut W, schedule: &Schedule) -> io::Result<()> {
    writeln!(w, "Schedule table")?;
    writeln!(
        w,
        "{:>6} {:>9} {:>6} {:>8} {:>6} {:>11} {:>6}",
        "ID", "PRIORITY", "BURST", "ARRIVAL", "WAIT", "TURNAROUND", "EXIT"
    )?;

    for row in &schedule.rows {
        writeln!(
            w,
            "{:>6} {:>9} {:>6} {:>8} {:>6} {:>11} {:>6}",
            row.pid, row.priority, row.burst, row.arrival, row.wait, row.turnaround, row.completion
        )?;
    }

    let stats = &schedule.stats;
    writeln!(
        w,
        "Average wait: {:.2}  Average turnaround: {:.2}  Throughput: {:.2}/t",
        stats.avg_wait, stats.avg_turnaround, stats.throughput
    )?;
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Process;
    use crate::sim::{schedule, Algorithm};

    #[test]
    fn renders_banner_timeline_and_footer() {
        let catalog = [
            Process { pid: 1, arrival: 0, burst: 5, priority: 0 },
            Process { pid: 2, arrival: 1, burst: 3, priority: 0 },
        ];
        let run = schedule(Algorithm::Fcfs, &catalog);

        let mut out = Vec::new();
        render(&mut out, &run).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("First-come, first-serve"));
        assert!(text.contains("Gantt schedule"));
        assert!(text.contains("Schedule table"));
        assert!(text.contains("Throughput: 0.25/t"));
    }
}
