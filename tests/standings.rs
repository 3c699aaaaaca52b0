use std::collections::BTreeMap;

use admission_core::records::{ProgramEntry, RecordSet};
use admission_core::standings::{effective_competitors, position, StandingError};
use admission_core::types::{ApplicantId, Assignment, CapacityMap, Program, ProgramId};

fn id(code: u32) -> ApplicantId {
    ApplicantId::new(code)
}

fn pid(name: &str) -> ProgramId {
    ProgramId::new(name)
}

fn entry(code: u32, program: &str, score: Option<u32>, priority: Option<u32>) -> ProgramEntry {
    ProgramEntry::new(id(code), program, score, priority)
}

fn assignment(pairs: &[(u32, Option<&str>)]) -> Assignment {
    pairs
        .iter()
        .map(|(code, program)| (id(*code), program.map(ProgramId::new)))
        .collect::<BTreeMap<_, _>>()
}

#[test]
fn seat_holder_competes_in_their_own_program() {
    let records = RecordSet::merge(vec![vec![
        entry(1, "P1", Some(90), Some(1)),
        entry(2, "P1", Some(80), Some(1)),
    ]]);
    let assigned = assignment(&[(1, Some("P1")), (2, None)]);

    let field = effective_competitors(&pid("P1"), &records, &assigned);

    assert_eq!(field.len(), 2);
    assert_eq!(field[0].applicant, id(1));
    assert_eq!(field[1].applicant, id(2));
}

#[test]
fn strictly_better_seat_elsewhere_removes_a_competitor() {
    // 1 holds their first choice P1; they no longer compete at P2.
    // 2 holds P2 but declared it second choice; they still compete there.
    let records = RecordSet::merge(vec![vec![
        entry(1, "P1", Some(90), Some(1)),
        entry(1, "P2", Some(90), Some(2)),
        entry(2, "P1", Some(85), Some(1)),
        entry(2, "P2", Some(85), Some(2)),
        entry(3, "P2", Some(70), Some(1)),
    ]]);
    let assigned = assignment(&[(1, Some("P1")), (2, Some("P2")), (3, None)]);

    let field = effective_competitors(&pid("P2"), &records, &assigned);

    let ids: Vec<ApplicantId> = field.iter().map(|c| c.applicant).collect();
    assert_eq!(ids, vec![id(2), id(3)]);
}

#[test]
fn assignment_without_recorded_priority_still_competes() {
    // 1 is assigned somewhere they never recorded a priority for; no basis
    // to assume that seat outranks P1, so they stay in P1's field.
    let records = RecordSet::merge(vec![vec![
        entry(1, "P1", Some(90), Some(1)),
        entry(1, "EXT", Some(90), None),
    ]]);
    let assigned = assignment(&[(1, Some("EXT"))]);

    let field = effective_competitors(&pid("P1"), &records, &assigned);

    assert_eq!(field.len(), 1);
    assert_eq!(field[0].applicant, id(1));
}

#[test]
fn competitors_order_is_score_desc_then_code_asc() {
    let records = RecordSet::merge(vec![vec![
        entry(5, "P1", Some(80), Some(1)),
        entry(3, "P1", Some(80), Some(1)),
        entry(9, "P1", Some(95), Some(1)),
    ]]);
    let assigned = assignment(&[(3, None), (5, None), (9, None)]);

    let field = effective_competitors(&pid("P1"), &records, &assigned);

    let ids: Vec<ApplicantId> = field.iter().map(|c| c.applicant).collect();
    assert_eq!(ids, vec![id(9), id(3), id(5)]);
}

#[test]
fn position_reports_rank_quota_and_score() {
    let records = RecordSet::merge(vec![vec![
        entry(1, "P1", Some(90), Some(1)),
        entry(2, "P1", Some(85), Some(1)),
        entry(3, "P1", Some(80), Some(1)),
    ]]);
    let assigned = assignment(&[(1, None), (2, None), (3, None)]);
    let capacities = CapacityMap::from_programs(&[Program::new("P1", 2)]).unwrap();

    let second = position(id(2), &pid("P1"), &records, &assigned, &capacities)
        .unwrap()
        .unwrap();
    assert_eq!(second.rank, 1);
    assert!(second.passes_quota);
    assert_eq!(second.score, 85);

    let third = position(id(3), &pid("P1"), &records, &assigned, &capacities)
        .unwrap()
        .unwrap();
    assert_eq!(third.rank, 2);
    assert!(!third.passes_quota);
}

#[test]
fn position_without_score_reports_did_not_apply() {
    let records = RecordSet::merge(vec![vec![entry(1, "P1", Some(90), Some(1))]]);
    let assigned = assignment(&[(1, None)]);
    let capacities = CapacityMap::from_programs(&[Program::new("P1", 1)]).unwrap();

    assert!(position(id(2), &pid("P1"), &records, &assigned, &capacities)
        .unwrap()
        .is_none());
}

#[test]
fn position_with_score_but_no_priority_reports_did_not_apply() {
    let records = RecordSet::merge(vec![vec![
        entry(1, "P1", Some(99), None),
        entry(2, "P1", Some(50), Some(1)),
    ]]);
    let assigned = assignment(&[(1, None), (2, None)]);
    let capacities = CapacityMap::from_programs(&[Program::new("P1", 1)]).unwrap();

    assert!(position(id(1), &pid("P1"), &records, &assigned, &capacities)
        .unwrap()
        .is_none());
}

#[test]
fn position_for_unknown_program_is_an_error() {
    let records = RecordSet::merge(vec![vec![entry(1, "P1", Some(90), Some(1))]]);
    let assigned = assignment(&[(1, None)]);
    let capacities = CapacityMap::from_programs(&[Program::new("P1", 1)]).unwrap();

    let err = position(id(1), &pid("GHOST"), &records, &assigned, &capacities).unwrap_err();

    match err {
        StandingError::UnknownProgram(program) => assert_eq!(program, pid("GHOST")),
    }
}
