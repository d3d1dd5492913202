//! Tournament entry engine.
//!
//! A [`Tournament`] is a fixed event definition (kind, buy-in, field size)
//! that a profile can enter any number of times. Each entry charges the
//! buy-in (and energy for non-online events), plays one full event against a
//! fresh simulated field, pays out by rank and records the result.

pub mod engine;
pub mod kind;
pub mod result;
pub mod stats;

#[cfg(test)]
mod tests;

pub use engine::{rank_player, Tournament};
pub use kind::{TournamentKind, TournamentStatus};
pub use result::{EntryOutcome, EntryRejection, EntryResult, TournamentInfo};
pub use stats::SessionStats;
