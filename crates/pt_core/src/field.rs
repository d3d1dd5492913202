//! Simulated competitor field.
//!
//! One canonical NPC model: every NPC is scored with the same distribution as
//! the player, with a normally distributed skill level in place of stats. The
//! first entries generated are the strongest tiers; tier membership comes from
//! generation order, not from sorting the finished scores.

use crate::config::{FieldConfig, ScoringConfig};
use crate::random::UniformSource;
use crate::scoring::{clamp_score, ScoringFunction};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldTier {
    Elite,
    Strong,
    Baseline,
}

/// One simulated competitor. Lives only for the duration of an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    /// 1-based generation index
    pub seat: u32,
    pub tier: FieldTier,
    pub score: f64,
}

impl FieldEntry {
    pub fn name(&self) -> String {
        format!("NPC {}", self.seat)
    }
}

/// Tier cutoffs for a given field size, as generation-index bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierCutoffs {
    /// Entries with index < elite are Elite
    pub elite: u32,
    /// Entries with elite <= index < strong are Strong
    pub strong: u32,
}

impl TierCutoffs {
    /// ⌈ratio × field_size⌉ for both tiers.
    pub fn for_field(field_size: u32, config: &FieldConfig) -> Self {
        let cutoff = |ratio: f64| (field_size as f64 * ratio).ceil() as u32;
        let elite = cutoff(config.elite_ratio);
        let strong = cutoff(config.strong_ratio).max(elite);
        Self { elite, strong }
    }

    pub fn tier_for(&self, index: u32) -> FieldTier {
        if index < self.elite {
            FieldTier::Elite
        } else if index < self.strong {
            FieldTier::Strong
        } else {
            FieldTier::Baseline
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldGenerator {
    config: FieldConfig,
    scoring: ScoringFunction,
}

impl FieldGenerator {
    pub fn new(config: FieldConfig, scoring: ScoringConfig) -> Self {
        Self { config, scoring: ScoringFunction::new(scoring) }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn tier_bonus(&self, tier: FieldTier) -> f64 {
        match tier {
            FieldTier::Elite => self.config.elite_bonus,
            FieldTier::Strong => self.config.strong_bonus,
            FieldTier::Baseline => 0.0,
        }
    }

    /// `field_size - 1` competitors: everyone except the acting player.
    pub fn generate(&self, field_size: u32, rng: &mut impl UniformSource) -> Vec<FieldEntry> {
        let opponents = field_size.saturating_sub(1);
        let cutoffs = TierCutoffs::for_field(field_size, &self.config);

        (0..opponents)
            .map(|index| {
                let tier = cutoffs.tier_for(index);
                let raw = self.scoring.score_npc(
                    self.config.npc_skill_mean,
                    self.config.npc_skill_std_dev,
                    rng,
                );
                FieldEntry { seat: index + 1, tier, score: clamp_score(raw + self.tier_bonus(tier)) }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{seeded, ScriptedSource};
    use crate::scoring::{SCORE_MAX, SCORE_MIN};

    fn count(entries: &[FieldEntry], tier: FieldTier) -> usize {
        entries.iter().filter(|e| e.tier == tier).count()
    }

    #[test]
    fn test_field_size_and_tiers_for_1000() {
        let generator = FieldGenerator::default();
        let field = generator.generate(1000, &mut seeded(1));

        assert_eq!(field.len(), 999);
        assert_eq!(count(&field, FieldTier::Elite), 10);
        assert_eq!(count(&field, FieldTier::Strong), 40);
        assert_eq!(count(&field, FieldTier::Baseline), 949);

        // tiers come from generation order
        assert!(field[..10].iter().all(|e| e.tier == FieldTier::Elite));
        assert!(field[10..50].iter().all(|e| e.tier == FieldTier::Strong));
        assert_eq!(field[0].name(), "NPC 1");
        assert_eq!(field[998].seat, 999);
    }

    #[test]
    fn test_cutoffs_round_up() {
        let config = FieldConfig::default();
        assert_eq!(TierCutoffs::for_field(200, &config), TierCutoffs { elite: 2, strong: 10 });
        assert_eq!(TierCutoffs::for_field(150, &config), TierCutoffs { elite: 2, strong: 8 });
        assert_eq!(TierCutoffs::for_field(2, &config), TierCutoffs { elite: 1, strong: 1 });
    }

    #[test]
    fn test_heads_up_field() {
        let generator = FieldGenerator::default();
        let field = generator.generate(2, &mut seeded(3));
        assert_eq!(field.len(), 1);
        assert_eq!(field[0].tier, FieldTier::Elite);
    }

    #[test]
    fn test_scores_clamped_after_bonus() {
        let generator = FieldGenerator::default();
        let field = generator.generate(500, &mut seeded(5));
        assert!(field.iter().all(|e| (SCORE_MIN..=SCORE_MAX).contains(&e.score)));
    }

    #[test]
    fn test_tier_bonus_applied() {
        // every NPC draws z = 0, skill = mean, luck = 0 → raw 62.5
        let generator = FieldGenerator::default();
        let mut source = ScriptedSource::new(vec![1.0, 0.0, 1.0, 0.0, 0.5]);
        let field = generator.generate(100, &mut source);

        assert!((field[0].score - 72.5).abs() < 1e-6);
        assert_eq!(field[0].tier, FieldTier::Elite);
        assert!((field[1].score - 67.5).abs() < 1e-6);
        assert_eq!(field[4].tier, FieldTier::Strong);
        assert!((field[5].score - 62.5).abs() < 1e-6);
        assert_eq!(field[5].tier, FieldTier::Baseline);
    }

    #[test]
    fn test_bonus_cannot_push_past_max() {
        let generator = FieldGenerator::default();
        // huge z for base → raw already 100
        let mut source = ScriptedSource::new(vec![1e-12, 0.0, 1.0, 0.0, 0.999]);
        let field = generator.generate(10, &mut source);
        assert_eq!(field[0].score, 100.0);
    }

    #[test]
    fn test_elite_tier_stronger_on_average() {
        let generator = FieldGenerator::default();
        let field = generator.generate(10_000, &mut seeded(9));
        let mean = |tier| {
            let scores: Vec<f64> =
                field.iter().filter(|e| e.tier == tier).map(|e| e.score).collect();
            scores.iter().sum::<f64>() / scores.len() as f64
        };
        assert!(mean(FieldTier::Elite) > mean(FieldTier::Baseline) + 5.0);
    }
}
