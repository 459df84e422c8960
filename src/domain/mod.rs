pub mod profile;
pub mod progress;
pub mod tier;

pub use profile::{ClassDecoration, Profile, ResolvedProfile, UserStats};
pub use progress::{BarWidth, Progress};
pub use tier::{Division, Rating, RatingError, THRESHOLDS, Tier};
