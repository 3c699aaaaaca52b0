pub mod competitors;
pub mod position;

pub use competitors::{effective_competitors, Competitor};
pub use position::{position, Standing, StandingError};
