pub mod anneal;
pub mod initialization;
pub mod mutation;
pub mod runner;

pub use self::anneal::{AnnealSchedule, Annealer, RunResult, StepOutcome};
pub use self::runner::{MultiRunController, MultiRunResult, SearchOptions};
