//! Field (NPC) Configuration

use serde::{Deserialize, Serialize};

/// NPC 필드 생성 파라미터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Share of the field generated as elite NPCs (기본: 0.01)
    pub elite_ratio: f64,
    /// Share of the field (elite included) generated as elite or strong (기본: 0.05)
    pub strong_ratio: f64,
    /// Flat score bonus for elite NPCs (기본: 10)
    pub elite_bonus: f64,
    /// Flat score bonus for strong NPCs (기본: 5)
    pub strong_bonus: f64,
    /// Mean NPC skill level in [0, 1] (기본: 0.5)
    pub npc_skill_mean: f64,
    /// Standard deviation of NPC skill level (기본: 0.15)
    pub npc_skill_std_dev: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            elite_ratio: 0.01,
            strong_ratio: 0.05,
            elite_bonus: 10.0,
            strong_bonus: 5.0,
            npc_skill_mean: 0.5,
            npc_skill_std_dev: 0.15,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.elite_ratio) {
            return Err(format!("elite_ratio must be in [0, 1], got {}", self.elite_ratio));
        }
        if !(self.elite_ratio..=1.0).contains(&self.strong_ratio) {
            return Err(format!(
                "strong_ratio must be in [elite_ratio, 1], got {}",
                self.strong_ratio
            ));
        }
        if !self.elite_bonus.is_finite() || !self.strong_bonus.is_finite() {
            return Err("tier bonuses must be finite".to_string());
        }
        if !(0.0..=1.0).contains(&self.npc_skill_mean) {
            return Err(format!("npc_skill_mean must be in [0, 1], got {}", self.npc_skill_mean));
        }
        if !(self.npc_skill_std_dev >= 0.0) || !self.npc_skill_std_dev.is_finite() {
            return Err(format!(
                "npc_skill_std_dev must be >= 0, got {}",
                self.npc_skill_std_dev
            ));
        }
        Ok(())
    }
}
