//! # pt_core - Poker Tournament Outcome Engine
//!
//! Resolves a player's entry into a poker tournament as a single scored
//! event instead of simulating hands.
//!
//! ## Features
//! - Six-stat player model with clamped mutation and named accessors
//! - Stat-weighted performance score with Box-Muller noise and luck
//! - Tiered NPC field generation (elite / strong / baseline)
//! - Generic and large-field payout schedules with ITM reputation bonus
//! - Injectable randomness: seeded ChaCha or scripted samples for tests
//! - YAML / JSON engine configuration with presets

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod character;
pub mod config;
pub mod error;
pub mod field;
pub mod payout;
pub mod random;
pub mod scoring;
pub mod tournament;

pub use character::{CharacterInfo, Resource, Resources, Stat, StatProfile, Stats};
pub use config::EngineConfig;
pub use error::{CoreError, Result};
pub use field::{FieldEntry, FieldGenerator, FieldTier};
pub use payout::{itm_bonus, itm_count, prize_for, PayoutSchedule};
pub use random::{seeded, ScriptedSource, UniformSource};
pub use scoring::ScoringFunction;
pub use tournament::{
    EntryOutcome, EntryRejection, EntryResult, SessionStats, Tournament, TournamentInfo,
    TournamentKind, TournamentStatus,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
