use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ApplicantId, ProgramId};

/// Final assignment: every applicant in the record set has an entry;
/// `None` means unassigned.
pub type Assignment = BTreeMap<ApplicantId, Option<ProgramId>>;

/// Per-program admitted lists, ordered by score descending then applicant
/// code ascending, truncated to capacity.
pub type Rosters = BTreeMap<ProgramId, Vec<ApplicantId>>;

/// Statistics describing a completed matching run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub rounds: usize,
    pub applicants_considered: usize,
    pub applicants_assigned: usize,
    pub applicants_unassigned: usize,
}

/// The final result of a matching run.
/// Fully self-contained and serializable.
///
/// Invariant: `assignment` and `rosters` are in lock-step — an applicant
/// maps to `Some(program)` iff they appear in that program's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub assignment: Assignment,
    pub rosters: Rosters,
    pub stats: MatchStats,
}

impl MatchOutcome {
    /// The program an applicant ended up admitted to, if any.
    pub fn assigned_program(&self, applicant: ApplicantId) -> Option<&ProgramId> {
        self.assignment.get(&applicant).and_then(|slot| slot.as_ref())
    }

    /// The final admitted list for a program, empty if the program admitted
    /// nobody or is unknown.
    pub fn roster(&self, program: &ProgramId) -> &[ApplicantId] {
        self.rosters.get(program).map(Vec::as_slice).unwrap_or(&[])
    }
}
