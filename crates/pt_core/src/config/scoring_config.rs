//! Scoring Configuration

use crate::character::{Stat, Stats};
use serde::{Deserialize, Serialize};

/// Tolerance when checking that the skill weights sum to 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Relative importance of each stat in the skill bonus. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillWeights {
    #[serde(rename = "pokerIQ")]
    pub poker_iq: f64,
    pub insight: f64,
    pub gto_mastery: f64,
    pub focus: f64,
    pub stamina: f64,
    pub luck: f64,
}

impl Default for SkillWeights {
    fn default() -> Self {
        Self {
            poker_iq: 0.30,
            insight: 0.25,
            gto_mastery: 0.20,
            focus: 0.15,
            stamina: 0.05,
            luck: 0.05,
        }
    }
}

impl SkillWeights {
    pub fn weight(&self, stat: Stat) -> f64 {
        match stat {
            Stat::PokerIq => self.poker_iq,
            Stat::Insight => self.insight,
            Stat::GtoMastery => self.gto_mastery,
            Stat::Focus => self.focus,
            Stat::Stamina => self.stamina,
            Stat::Luck => self.luck,
        }
    }

    pub fn sum(&self) -> f64 {
        Stat::ALL.iter().map(|&stat| self.weight(stat)).sum()
    }

    /// Weighted stat average scaled to [0, 1].
    pub fn weighted_average(&self, stats: &Stats) -> f64 {
        Stat::ALL.iter().map(|&stat| self.weight(stat) * stats.get(stat) as f64).sum::<f64>()
            / 100.0
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(stat) = Stat::ALL.iter().find(|&&stat| !(self.weight(stat) >= 0.0)) {
            return Err(format!("weight for {} must be non-negative", stat));
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(format!("skill weights must sum to 1.0, got {}", sum));
        }
        Ok(())
    }
}

/// 점수 합성 파라미터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Mean of the normally distributed base score (기본: 50)
    pub base_mean: f64,
    /// Standard deviation of the base score (기본: 15)
    pub base_std_dev: f64,
    /// Points awarded for a perfect skill bonus (기본: 25)
    pub skill_scale: f64,
    /// Luck is uniform in [-luck_range, +luck_range] (기본: 10)
    pub luck_range: f64,
    #[serde(default)]
    pub weights: SkillWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_mean: 50.0,
            base_std_dev: 15.0,
            skill_scale: 25.0,
            luck_range: 10.0,
            weights: SkillWeights::default(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.base_mean.is_finite() {
            return Err("base_mean must be finite".to_string());
        }
        if !(self.base_std_dev >= 0.0) || !self.base_std_dev.is_finite() {
            return Err(format!("base_std_dev must be >= 0, got {}", self.base_std_dev));
        }
        if !(self.skill_scale >= 0.0) || !self.skill_scale.is_finite() {
            return Err(format!("skill_scale must be >= 0, got {}", self.skill_scale));
        }
        if !(self.luck_range >= 0.0) || !self.luck_range.is_finite() {
            return Err(format!("luck_range must be >= 0, got {}", self.luck_range));
        }
        self.weights.validate()
    }
}
