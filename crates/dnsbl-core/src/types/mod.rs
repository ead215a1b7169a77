//! Value types shared by the engine and the CLI.

mod list;
mod outcome;
mod tally;
mod target;

pub use list::{filter_entries, ListEntry, ListMode};
pub use outcome::{FailureKind, HealthVerdict, Outcome};
pub use tally::{RunReport, RunStatus, Tally};
pub use target::Target;
