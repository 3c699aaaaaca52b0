pub mod store;

pub use store::{SnapshotError, SnapshotManifest, SnapshotStore};
