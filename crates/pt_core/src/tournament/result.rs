use super::kind::{TournamentKind, TournamentStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of one accepted entry. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryResult {
    pub kind: TournamentKind,
    pub buy_in: u64,
    /// Player score in [0, 100]
    pub score: f64,
    /// 1 = best
    pub rank: u32,
    pub prize: u64,
    /// rank / field_size × 100 (lower is better)
    pub percentile: f64,
    pub field_size: u32,
    pub itm_bonus: u32,
    pub reputation_gain: i64,
}

impl EntryResult {
    /// Prize minus buy-in.
    pub fn net(&self) -> i64 {
        self.prize as i64 - self.buy_in as i64
    }

    pub fn is_victory(&self) -> bool {
        self.rank == 1
    }
}

/// Why an entry was refused. `Display` is the message shown to the player.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryRejection {
    #[error("Tournament is not accepting entries (status: {status:?})")]
    Closed { status: TournamentStatus },

    #[error("Insufficient bankroll: buy-in is {required}, bankroll is {available}")]
    InsufficientBankroll { required: u64, available: i64 },

    #[error("Insufficient energy: {required} required, {available} available")]
    InsufficientEnergy { required: i64, available: i64 },
}

/// Caller-facing response of `Tournament::enter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<EntryResult>,
}

impl EntryOutcome {
    pub fn accepted(result: EntryResult) -> Self {
        Self { success: true, message: None, result: Some(result) }
    }

    pub fn rejected(reason: &EntryRejection) -> Self {
        Self { success: false, message: Some(reason.to_string()), result: None }
    }
}

impl From<Result<EntryResult, EntryRejection>> for EntryOutcome {
    fn from(outcome: Result<EntryResult, EntryRejection>) -> Self {
        match outcome {
            Ok(result) => Self::accepted(result),
            Err(reason) => Self::rejected(&reason),
        }
    }
}

/// Tournament summary for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentInfo {
    pub name: String,
    pub buy_in: u64,
    pub prize_pool: u64,
    pub field_size: u32,
    pub current_players: u32,
    pub kind: TournamentKind,
    pub status: TournamentStatus,
    pub itm_count: u32,
}
