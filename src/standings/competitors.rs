use serde::Serialize;

use crate::records::RecordSet;
use crate::types::identifiers::{ApplicantId, ProgramId};
use crate::types::outcome::Assignment;

/// One applicant still contending for a seat in a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Competitor {
    pub applicant: ApplicantId,
    pub score: u32,
}

/// Who would actually be competing for this program's seats, given the
/// final assignment.
///
/// A qualifying applicant (score and priority both present here) competes
/// unless they are assigned to a program they declared a strictly better
/// priority for; such an applicant would never give up that seat. An
/// applicant assigned to an equal-or-worse-priority program, or to a program
/// they recorded no priority for, still competes. In particular the current
/// holder of a seat in this very program appears in the list, which is what
/// lets a standing query report "you hold this seat" as a rank within quota.
///
/// Ordered by score descending, applicant code ascending, identical to the
/// engine's roster ranking.
pub fn effective_competitors(
    program: &ProgramId,
    records: &RecordSet,
    assignment: &Assignment,
) -> Vec<Competitor> {
    let mut competitors = Vec::new();

    for (&applicant, record) in records.iter() {
        let (score, priority_here) = match record.application(program) {
            Some(app) => match (app.score, app.priority) {
                (Some(score), Some(priority)) => (score, priority),
                _ => continue,
            },
            None => continue,
        };

        if let Some(Some(assigned)) = assignment.get(&applicant) {
            if let Some(priority_there) = record.priority_for(assigned) {
                if priority_there < priority_here {
                    continue;
                }
            }
        }

        competitors.push(Competitor { applicant, score });
    }

    competitors.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.applicant.cmp(&b.applicant)));
    competitors
}
