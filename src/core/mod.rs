pub mod driver;
pub mod observer;
pub mod state;
pub mod timeline;

pub use driver::{RunOutcome, Simulation};
pub use observer::Observer;
pub use state::{Pid, Process, RunState, SimCtx, Ticks};
pub use timeline::{Slice, TimelineBuilder};
