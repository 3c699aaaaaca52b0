use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::records::record::{ApplicantRecord, Application};
use crate::types::identifiers::{ApplicantId, ProgramId};

/// One row of acquired source data: an applicant's score and priority as
/// published on a single program's list. Either number may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramEntry {
    pub applicant: ApplicantId,
    pub program: ProgramId,
    pub score: Option<u32>,
    pub priority: Option<u32>,
}

impl ProgramEntry {
    pub fn new(
        applicant: ApplicantId,
        program: impl Into<ProgramId>,
        score: Option<u32>,
        priority: Option<u32>,
    ) -> Self {
        ProgramEntry {
            applicant,
            program: program.into(),
            score,
            priority,
        }
    }
}

/// The merged applicant record store: one record per applicant code, built
/// once from per-program lists and read-only afterwards.
///
/// No score/priority validation happens here; out-of-range or missing values
/// pass through for downstream consumers to exclude.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    inner: BTreeMap<ApplicantId, ApplicantRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        RecordSet {
            inner: BTreeMap::new(),
        }
    }

    /// Union-merge several per-program lists into one store.
    ///
    /// Keyed by applicant code; the same applicant appearing on several
    /// lists contributes one record with all their per-program entries.
    /// A repeated applicant/program pair overwrites: last write wins.
    pub fn merge<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = Vec<ProgramEntry>>,
    {
        let mut set = RecordSet::new();
        for list in lists {
            for entry in list {
                set.absorb(entry);
            }
        }
        set
    }

    /// Insert one entry, creating the applicant's record if needed.
    /// Entries are never deleted.
    pub fn absorb(&mut self, entry: ProgramEntry) {
        self.inner
            .entry(entry.applicant)
            .or_default()
            .set_application(entry.program, Application::new(entry.score, entry.priority));
    }

    pub fn get(&self, applicant: &ApplicantId) -> Option<&ApplicantRecord> {
        self.inner.get(applicant)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ApplicantId, &ApplicantRecord)> {
        self.inner.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ApplicantId> {
        self.inner.keys()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
