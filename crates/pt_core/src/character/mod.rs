// Character data model: skill stats and session resources

pub mod profile;
pub mod resources;
pub mod stats;

pub use profile::{CharacterInfo, StatProfile};
pub use resources::{Resource, Resources};
pub use stats::{Stat, Stats, STAT_MAX, STAT_MIN};
