//! Deterministic admissions matching engine for ranked university applications.
//!
//! `admission-core` provides applicant record merging, preference building,
//! deferred-acceptance matching under fixed per-program seat quotas, and
//! effective-standing resolution. All operations are deterministic —
//! identical inputs always produce identical outputs.
//!
//! Data acquisition and presentation live outside this crate; it consumes
//! per-program `(applicant, score, priority)` entries and produces a
//! serializable [`MatchOutcome`] plus on-demand [`Standing`] reports.

pub mod matching;
pub mod records;
pub mod snapshot;
pub mod standings;
pub mod types;

pub use matching::{ambiguous_preferences, build_preferences, simulate, MatchError};
pub use records::{Application, ApplicantRecord, ProgramEntry, RecordSet};
pub use snapshot::{SnapshotError, SnapshotManifest, SnapshotStore};
pub use standings::{effective_competitors, position, Competitor, Standing, StandingError};
pub use types::{
    ApplicantId, Assignment, CapacityMap, ConfigError, MatchOutcome, MatchStats, Program,
    ProgramId, Rosters,
};

/// Facade over the matching phases: validates the program configuration
/// once, then runs matching and answers standing queries against it.
pub struct AdmissionsMatcher {
    programs: Vec<Program>,
    capacities: CapacityMap,
}

impl AdmissionsMatcher {
    pub fn new(programs: Vec<Program>) -> Result<Self, ConfigError> {
        let capacities = CapacityMap::from_programs(&programs)?;
        Ok(AdmissionsMatcher {
            programs,
            capacities,
        })
    }

    /// The configured programs, in declaration order.
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn capacities(&self) -> &CapacityMap {
        &self.capacities
    }

    /// Run deferred acceptance over a merged record set.
    pub fn run(&self, records: &RecordSet) -> Result<MatchOutcome, MatchError> {
        simulate(records, &self.capacities)
    }

    /// Where an applicant stands in one program's competition, given a
    /// completed run.
    pub fn standing(
        &self,
        records: &RecordSet,
        outcome: &MatchOutcome,
        applicant: ApplicantId,
        program: &ProgramId,
    ) -> Result<Option<Standing>, StandingError> {
        position(
            applicant,
            program,
            records,
            &outcome.assignment,
            &self.capacities,
        )
    }
}
