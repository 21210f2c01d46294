pub mod fcfs;
pub mod report;
pub mod run;

pub use report::{Row, Stats};
pub use run::{schedule, Algorithm, Schedule};
