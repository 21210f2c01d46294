use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::prelude::*;

use schedsim::{load_catalog, render, schedule, Algorithm, Process};

/// Simulate the classical scheduling disciplines over a process catalog.
#[derive(Debug, Parser)]
#[command(name = "schedsim")]
struct Args {
    /// Catalog file, one `id,burst,arrival[,priority]` record per line.
    catalog: Option<PathBuf>,

    /// Generate a random catalog of N processes instead of reading a file.
    #[arg(long, value_name = "N", conflicts_with = "catalog")]
    random: Option<usize>,

    /// Seed for --random, for reproducible workloads.
    #[arg(long, requires = "random")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let catalog = match (&args.catalog, args.random) {
        (Some(path), None) => load_catalog(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        (None, Some(count)) => {
            if count == 0 {
                bail!("--random needs at least one process");
            }
            random_catalog(count, args.seed)
        }
        _ => bail!("give a catalog file or --random N"),
    };
    log::info!("catalog loaded: {} processes", catalog.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for algorithm in Algorithm::ALL {
        let run = schedule(algorithm, &catalog);
        render(&mut out, &run)?;
    }
    out.flush()?;

    Ok(())
}

/// Synthetic workload: arrivals clustered near tick 0, modest bursts, a small
/// priority spread. Sorted by arrival like a loaded catalog.
fn random_catalog(count: usize, seed: Option<u64>) -> Vec<Process> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut catalog: Vec<Process> = (1..=count)
        .map(|pid| Process {
            pid: pid as u32,
            arrival: rng.gen_range(0..=3),
            burst: rng.gen_range(1..=9),
            priority: rng.gen_range(0..=4),
        })
        .collect();
    catalog.sort_by_key(|p| p.arrival);

    catalog
}
