use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::ProgramId;

// Key point:
// Serializable
// Fixed before matching starts
// Explicit capacities, no defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub name: ProgramId,
    pub capacity: u32,
}

impl Program {
    pub fn new(name: impl Into<ProgramId>, capacity: u32) -> Self {
        Program {
            name: name.into(),
            capacity,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Duplicate program name: {0}")]
    DuplicateProgram(ProgramId),
}

/// Name-to-capacity map derived from the configured program list.
///
/// Membership here is authoritative: a program absent from this map must not
/// be proposed to or queried, and the engine treats such a reference as an
/// invariant violation rather than recovering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapacityMap {
    inner: BTreeMap<ProgramId, u32>,
}

impl CapacityMap {
    pub fn from_programs(programs: &[Program]) -> Result<Self, ConfigError> {
        let mut inner = BTreeMap::new();
        for program in programs {
            if inner.insert(program.name.clone(), program.capacity).is_some() {
                return Err(ConfigError::DuplicateProgram(program.name.clone()));
            }
        }
        Ok(CapacityMap { inner })
    }

    pub fn capacity_of(&self, program: &ProgramId) -> Option<u32> {
        self.inner.get(program).copied()
    }

    pub fn contains(&self, program: &ProgramId) -> bool {
        self.inner.contains_key(program)
    }

    pub fn programs(&self) -> impl Iterator<Item = &ProgramId> {
        self.inner.keys()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
