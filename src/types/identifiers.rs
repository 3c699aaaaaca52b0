use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable applicant code, unique across merges.
///
/// `Ord` is the documented tie-break everywhere two applicants compare equal
/// on score or priority: the lower code wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicantId(u32);

impl ApplicantId {
    pub fn new(code: u32) -> Self {
        ApplicantId(code)
    }

    pub fn code(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Program (university direction) name.
///
/// `Ord` is lexicographic on the name and doubles as the deterministic
/// tie-break when two programs share a declared priority.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramId(String);

impl ProgramId {
    pub fn new(name: impl Into<String>) -> Self {
        ProgramId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProgramId {
    fn from(name: &str) -> Self {
        ProgramId(name.to_string())
    }
}
