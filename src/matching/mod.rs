pub mod engine;
pub mod preferences;

pub use engine::{simulate, MatchError};
pub use preferences::{ambiguous_preferences, build_preferences, PreferenceLists};
