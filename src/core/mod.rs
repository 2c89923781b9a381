pub mod assessed;
pub mod errors;
pub mod lead;
pub mod score;
pub mod types;

pub use assessed::Assessed;
pub use errors::{Error, Result, ResultExt};
pub use lead::{Coordinates, Lead};
pub use score::{CompositeScore, Factor, ScoreComponent};
pub use types::{GymType, LeadStatus, SizeTier, Urgency};
