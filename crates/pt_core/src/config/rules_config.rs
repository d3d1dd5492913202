//! Tournament rules and default lineup

use crate::tournament::TournamentKind;
use serde::{Deserialize, Serialize};

/// 토너먼트 규칙 파라미터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Share of total buy-ins returned as prize pool (기본: 0.9)
    pub rake_back: f64,
    /// Energy charged per entry for kinds that are not energy-exempt (기본: 20)
    pub energy_cost: i64,
    /// Ranks counted as a final-table finish in session stats (기본: 9)
    pub final_table_size: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self { rake_back: 0.9, energy_cost: 20, final_table_size: 9 }
    }
}

impl RulesConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.rake_back > 0.0 && self.rake_back <= 1.0) {
            return Err(format!("rake_back must be in (0, 1], got {}", self.rake_back));
        }
        if self.energy_cost < 0 {
            return Err(format!("energy_cost must be >= 0, got {}", self.energy_cost));
        }
        if self.final_table_size == 0 {
            return Err("final_table_size must be >= 1".to_string());
        }
        Ok(())
    }
}

/// One tournament offered to the player in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub kind: TournamentKind,
    pub buy_in: u64,
    pub field_size: u32,
}

/// Online daily (100 buy-in, 1000 players) and a high roller (1000 buy-in, 200 players).
pub fn default_lineup() -> Vec<LineupEntry> {
    vec![
        LineupEntry { kind: TournamentKind::Online, buy_in: 100, field_size: 1000 },
        LineupEntry { kind: TournamentKind::HighRoller, buy_in: 1000, field_size: 200 },
    ]
}
