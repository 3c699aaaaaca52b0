use std::collections::BTreeMap;

use crate::records::RecordSet;
use crate::types::identifiers::{ApplicantId, ProgramId};

/// Per-applicant ordered preference lists.
pub type PreferenceLists = BTreeMap<ApplicantId, Vec<ProgramId>>;

/// Derive each applicant's preference order from their applications.
///
/// Only qualifying applications (score AND priority present) participate;
/// the rest do not occupy a slot in the order at all. Ordering is priority
/// ascending, then program name ascending, so the output is deterministic
/// for a given record set.
///
/// An applicant with no qualifying application gets an empty list and can
/// never be proposed anywhere.
pub fn build_preferences(records: &RecordSet) -> PreferenceLists {
    let mut prefs = PreferenceLists::new();
    for (&applicant, record) in records.iter() {
        let mut pairs: Vec<(u32, &ProgramId)> = record
            .applications()
            .filter_map(|(program, app)| match (app.score, app.priority) {
                (Some(_), Some(priority)) => Some((priority, program)),
                _ => None,
            })
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        prefs.insert(applicant, pairs.into_iter().map(|(_, p)| p.clone()).collect());
    }
    prefs
}

/// Applicants whose qualifying applications repeat a priority value.
///
/// Duplicate priorities make the applicant's true order ambiguous; the
/// program-name tie-break above keeps matching reproducible, but the input
/// is worth surfacing as a data-quality condition.
pub fn ambiguous_preferences(records: &RecordSet) -> Vec<ApplicantId> {
    let mut flagged = Vec::new();
    for (&applicant, record) in records.iter() {
        let mut priorities: Vec<u32> = record
            .applications()
            .filter(|(_, app)| app.is_qualifying())
            .filter_map(|(_, app)| app.priority)
            .collect();
        priorities.sort_unstable();
        if priorities.windows(2).any(|w| w[0] == w[1]) {
            flagged.push(applicant);
        }
    }
    flagged
}
