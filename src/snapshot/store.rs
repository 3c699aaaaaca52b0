use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::records::RecordSet;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Snapshot not found: {0}")]
    Missing(PathBuf),
    #[error("Snapshot checksum mismatch: manifest says {expected}, records hash to {actual}")]
    ChecksumMismatch { expected: String, actual: String },
    #[error("Snapshot applicant count mismatch: manifest says {expected}, records hold {actual}")]
    CountMismatch { expected: usize, actual: usize },
}

/// Describes a written snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotManifest {
    pub checksum: String,
    pub created_at: DateTime<Utc>, // informational only
    pub applicant_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    checksum: String,
    created_at: DateTime<Utc>,
    applicant_count: usize,
    records: RecordSet,
}

/// Durable JSON snapshot of a merged record set.
///
/// Writes go to a temp sibling and land via atomic rename; loads recompute
/// the checksum over the embedded records and refuse a snapshot that does
/// not verify. Single-threaded and non-reentrant by design.
#[derive(Debug)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn save(&self, records: &RecordSet) -> Result<SnapshotManifest, SnapshotError> {
        let checksum = checksum_records(records)?;
        let manifest = SnapshotManifest {
            checksum: checksum.clone(),
            created_at: Utc::now(),
            applicant_count: records.len(),
        };

        let file = SnapshotFile {
            checksum,
            created_at: manifest.created_at,
            applicant_count: manifest.applicant_count,
            records: records.clone(),
        };

        // Temp sibling keeps the rename on one filesystem.
        let temp_path = self.path.with_extension("tmp");
        {
            let mut f = fs::File::create(&temp_path)?;
            serde_json::to_writer_pretty(&f, &file)?;
            f.flush()?;
            f.sync_all()?;
        }
        fs::rename(&temp_path, &self.path)?;

        Ok(manifest)
    }

    pub fn load(&self) -> Result<RecordSet, SnapshotError> {
        if !self.path.exists() {
            return Err(SnapshotError::Missing(self.path.clone()));
        }

        let f = fs::File::open(&self.path)?;
        let file: SnapshotFile = serde_json::from_reader(f)?;

        let actual = checksum_records(&file.records)?;
        if actual != file.checksum {
            return Err(SnapshotError::ChecksumMismatch {
                expected: file.checksum,
                actual,
            });
        }
        if file.records.len() != file.applicant_count {
            return Err(SnapshotError::CountMismatch {
                expected: file.applicant_count,
                actual: file.records.len(),
            });
        }

        Ok(file.records)
    }
}

/// Checksum over the canonical serialization of the records. BTreeMap keys
/// give a stable byte sequence for identical record sets.
fn checksum_records(records: &RecordSet) -> Result<String, SnapshotError> {
    let canonical = serde_json::to_vec(records)?;
    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    let hash = hasher.finalize();
    Ok(format!("sha256:{}", hex::encode(hash)))
}
