use serde::Serialize;
use thiserror::Error;

use crate::records::RecordSet;
use crate::standings::competitors::effective_competitors;
use crate::types::identifiers::{ApplicantId, ProgramId};
use crate::types::outcome::Assignment;
use crate::types::program::CapacityMap;

#[derive(Debug, Error)]
pub enum StandingError {
    #[error("Unknown program: {0}")]
    UnknownProgram(ProgramId),
}

/// An applicant's place within one program's effective competitor list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// Zero-based rank within the effective competitor list. Presentation
    /// layers showing a 1-based place add one themselves.
    pub rank: usize,
    /// Whether the rank falls inside the program's capacity.
    pub passes_quota: bool,
    pub score: u32,
}

/// Where an applicant stands in a program's competition.
///
/// `Ok(None)` means the applicant did not meaningfully apply there: no score
/// recorded, or a score without a priority (which keeps them out of the
/// effective list). Querying a program absent from the configuration is an
/// error, never a silent empty answer.
pub fn position(
    applicant: ApplicantId,
    program: &ProgramId,
    records: &RecordSet,
    assignment: &Assignment,
    capacities: &CapacityMap,
) -> Result<Option<Standing>, StandingError> {
    let capacity = capacities
        .capacity_of(program)
        .ok_or_else(|| StandingError::UnknownProgram(program.clone()))?;

    let score = match records.get(&applicant).and_then(|r| r.score_for(program)) {
        Some(score) => score,
        None => return Ok(None),
    };

    let field = effective_competitors(program, records, assignment);
    let rank = match field.iter().position(|c| c.applicant == applicant) {
        Some(rank) => rank,
        // Score present but no priority: not in the effective list, so the
        // query behaves as "did not apply".
        None => return Ok(None),
    };

    Ok(Some(Standing {
        rank,
        passes_quota: rank < capacity as usize,
        score,
    }))
}
