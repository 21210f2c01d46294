//! Discrete-tick simulation of four classical single-processor scheduling
//! disciplines: first-come-first-served, preemptive shortest-job-first,
//! preemptive priority with a shortest-job tie-break, and round-robin.
//!
//! [`sim::schedule`] runs one discipline over an arrival-sorted catalog and
//! returns the occupancy timeline together with per-process timing rows and
//! aggregate statistics. [`load`] and [`render`] supply the delimited-input
//! and text-output edges around the core.

pub mod core;
pub mod load;
pub mod policy;
pub mod render;
pub mod sim;

pub use crate::core::{Pid, Process, RunState, Slice, Ticks};
pub use load::{load_catalog, parse_catalog, LoadError};
pub use policy::{Policy, PriorityFirst, RoundRobin, ShortestRemaining};
pub use render::render;
pub use sim::{schedule, Algorithm, Row, Schedule, Stats};
