pub mod identifiers;
pub mod outcome;
pub mod program;

pub use identifiers::{ApplicantId, ProgramId};
pub use outcome::{Assignment, MatchOutcome, MatchStats, Rosters};
pub use program::{CapacityMap, ConfigError, Program};
