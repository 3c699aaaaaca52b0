use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::ProgramId;

/// One applicant's entry for one program.
///
/// Either field may be absent in source data. An application missing either
/// field never enters preference lists or effective-competitor lists, and
/// one missing `score` never enters a roster pool; `is_qualifying` is the
/// single place that rule lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Application {
    pub score: Option<u32>,
    pub priority: Option<u32>,
}

impl Application {
    pub fn new(score: Option<u32>, priority: Option<u32>) -> Self {
        Application { score, priority }
    }

    /// Both score and priority present: the applicant meaningfully applied.
    pub fn is_qualifying(&self) -> bool {
        self.score.is_some() && self.priority.is_some()
    }
}

/// All of one applicant's applications, keyed by program.
///
/// The applicant's identity lives in the `RecordSet` key; this holds only
/// the per-program data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantRecord {
    applications: BTreeMap<ProgramId, Application>,
}

impl ApplicantRecord {
    pub fn new() -> Self {
        ApplicantRecord {
            applications: BTreeMap::new(),
        }
    }

    /// Set or overwrite the application for a program. Last write wins.
    pub fn set_application(&mut self, program: ProgramId, application: Application) {
        self.applications.insert(program, application);
    }

    pub fn application(&self, program: &ProgramId) -> Option<&Application> {
        self.applications.get(program)
    }

    pub fn score_for(&self, program: &ProgramId) -> Option<u32> {
        self.applications.get(program).and_then(|a| a.score)
    }

    pub fn priority_for(&self, program: &ProgramId) -> Option<u32> {
        self.applications.get(program).and_then(|a| a.priority)
    }

    pub fn applications(&self) -> impl Iterator<Item = (&ProgramId, &Application)> {
        self.applications.iter()
    }
}
