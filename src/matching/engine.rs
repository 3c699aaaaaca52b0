use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::matching::preferences::{build_preferences, PreferenceLists};
use crate::records::RecordSet;
use crate::types::identifiers::{ApplicantId, ProgramId};
use crate::types::outcome::{Assignment, MatchOutcome, MatchStats, Rosters};
use crate::types::program::CapacityMap;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Applicant {applicant} ranks unknown program {program}")]
    UnknownProgram {
        applicant: ApplicantId,
        program: ProgramId,
    },
}

/// Run applicant-proposing deferred acceptance to a stable assignment.
///
/// Rounds repeat until a round makes no proposals and changes nothing:
///
/// 1. every unassigned applicant with preferences left proposes to their
///    next choice and advances their cursor;
/// 2. every program touched this round (or holding anyone) re-ranks the
///    union of its roster and its proposals by score descending, applicant
///    code ascending, drops anyone with no score recorded for it, and keeps
///    the top `capacity`;
/// 3. the assignment is rebuilt from the rosters.
///
/// Termination holds because cursors only advance and preference lists are
/// finite. A preference naming a program outside the configuration is a
/// configuration error and fails the whole run rather than being dropped.
pub fn simulate(records: &RecordSet, capacities: &CapacityMap) -> Result<MatchOutcome, MatchError> {
    let prefs = build_preferences(records);

    let mut rosters: Rosters = capacities
        .programs()
        .map(|p| (p.clone(), Vec::new()))
        .collect();
    let mut assignment: Assignment = records.ids().map(|&id| (id, None)).collect();
    let mut cursors: BTreeMap<ApplicantId, usize> = records.ids().map(|&id| (id, 0)).collect();

    let mut rounds = 0;
    loop {
        rounds += 1;

        let proposals = collect_proposals(&prefs, &assignment, &mut cursors, capacities)?;
        let proposed_any = proposals.values().any(|list| !list.is_empty());

        // Re-rank every touched program; an untouched empty program cannot change.
        let mut rosters_changed = false;
        for (program, roster) in rosters.iter_mut() {
            let incoming = proposals.get(program).map(Vec::as_slice).unwrap_or(&[]);
            if incoming.is_empty() && roster.is_empty() {
                continue;
            }

            let pool: BTreeSet<ApplicantId> =
                roster.iter().chain(incoming.iter()).copied().collect();
            let capacity = capacities.capacity_of(program).unwrap_or(0) as usize;
            let keep: Vec<ApplicantId> = rank_pool(records, program, &pool)
                .into_iter()
                .take(capacity)
                .collect();

            let before: BTreeSet<ApplicantId> = roster.iter().copied().collect();
            let after: BTreeSet<ApplicantId> = keep.iter().copied().collect();
            if before != after {
                rosters_changed = true;
            }
            *roster = keep;
        }

        // Rebuild the assignment from the rosters to keep the two in lock-step.
        let mut next: Assignment = records.ids().map(|&id| (id, None)).collect();
        for (program, roster) in &rosters {
            for &applicant in roster {
                next.insert(applicant, Some(program.clone()));
            }
        }
        let assignment_changed = next != assignment;
        assignment = next;

        if !proposed_any && !rosters_changed && !assignment_changed {
            break;
        }
    }

    debug_assert!(rosters.iter().all(|(program, roster)| {
        roster.len() <= capacities.capacity_of(program).unwrap_or(0) as usize
    }));

    let assigned = assignment.values().filter(|slot| slot.is_some()).count();
    let stats = MatchStats {
        rounds,
        applicants_considered: records.len(),
        applicants_assigned: assigned,
        applicants_unassigned: records.len() - assigned,
    };

    Ok(MatchOutcome {
        assignment,
        rosters,
        stats,
    })
}

/// Gather this round's proposals, advancing each proposer's cursor.
///
/// Cursors never retreat; an applicant who has exhausted their list stays
/// permanently unassigned. A proposal to a program outside the configured
/// capacity map aborts the run.
fn collect_proposals(
    prefs: &PreferenceLists,
    assignment: &Assignment,
    cursors: &mut BTreeMap<ApplicantId, usize>,
    capacities: &CapacityMap,
) -> Result<BTreeMap<ProgramId, Vec<ApplicantId>>, MatchError> {
    let mut proposals: BTreeMap<ProgramId, Vec<ApplicantId>> = BTreeMap::new();
    for (&applicant, slot) in assignment {
        if slot.is_some() {
            continue;
        }
        let list = match prefs.get(&applicant) {
            Some(list) => list,
            None => continue,
        };
        let cursor = cursors.entry(applicant).or_insert(0);
        if *cursor < list.len() {
            let program = &list[*cursor];
            if !capacities.contains(program) {
                return Err(MatchError::UnknownProgram {
                    applicant,
                    program: program.clone(),
                });
            }
            proposals
                .entry(program.clone())
                .or_default()
                .push(applicant);
            *cursor += 1;
        }
    }
    Ok(proposals)
}

/// Order a candidate pool the way the program ranks it: score descending,
/// applicant code ascending, candidates without a score for this program
/// excluded.
pub fn rank_pool(
    records: &RecordSet,
    program: &ProgramId,
    pool: &BTreeSet<ApplicantId>,
) -> Vec<ApplicantId> {
    let mut scored: Vec<(ApplicantId, u32)> = pool
        .iter()
        .filter_map(|&applicant| {
            let score = records.get(&applicant)?.score_for(program)?;
            Some((applicant, score))
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    debug_assert!(scored.windows(2).all(|w| {
        w[0].1 > w[1].1 || (w[0].1 == w[1].1 && w[0].0 <= w[1].0)
    }));

    scored.into_iter().map(|(applicant, _)| applicant).collect()
}
