pub mod record;
pub mod store;

pub use record::{Application, ApplicantRecord};
pub use store::{ProgramEntry, RecordSet};
