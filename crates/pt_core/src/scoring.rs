//! Performance score synthesis for one tournament entry.
//!
//! `score = clamp(base + skill * skill_scale + luck, 0, 100)` where
//! - `base` is normal(base_mean, base_std_dev), sampled with Box-Muller
//! - `skill` is the weighted stat average for the player, or a normally
//!   distributed skill level for an NPC, in [0, 1]
//! - `luck` is uniform in [-luck_range, +luck_range]
//!
//! Draw order from the [`UniformSource`]: the player consumes `u1, u2, luck`;
//! an NPC consumes `u1, u2, s1, s2, luck` with `s1, s2` feeding its skill level.

use crate::character::Stats;
use crate::config::ScoringConfig;
use crate::random::UniformSource;
use std::f64::consts::PI;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Standard normal sample from two uniform samples in (0, 1).
///
/// `u1 == 0` is nudged to the smallest positive double so the log stays finite.
pub fn box_muller(u1: f64, u2: f64) -> f64 {
    let u1 = u1.max(f64::MIN_POSITIVE);
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Draw one standard normal sample (consumes two uniforms).
pub fn standard_normal(rng: &mut impl UniformSource) -> f64 {
    let u1 = rng.next_uniform();
    let u2 = rng.next_uniform();
    box_muller(u1, u2)
}

/// Clamp a raw score into [0, 100].
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Final score from already-sampled parts.
pub fn compose_score(config: &ScoringConfig, z: f64, skill: f64, luck: f64) -> f64 {
    let base = config.base_mean + z * config.base_std_dev;
    clamp_score(base + skill.clamp(0.0, 1.0) * config.skill_scale + luck)
}

#[derive(Debug, Clone, Default)]
pub struct ScoringFunction {
    config: ScoringConfig,
}

impl ScoringFunction {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Stat-weighted skill bonus in [0, 1].
    pub fn skill_bonus(&self, stats: &Stats) -> f64 {
        self.config.weights.weighted_average(stats).clamp(0.0, 1.0)
    }

    pub fn luck_factor(&self, rng: &mut impl UniformSource) -> f64 {
        let range = self.config.luck_range;
        rng.next_in_range(-range, range)
    }

    /// Score for any competitor whose skill level in [0, 1] is already known.
    pub fn score_with_skill(&self, skill: f64, rng: &mut impl UniformSource) -> f64 {
        let z = standard_normal(rng);
        let luck = self.luck_factor(rng);
        compose_score(&self.config, z, skill, luck)
    }

    /// Score the acting player from their stats.
    pub fn score_player(&self, stats: &Stats, rng: &mut impl UniformSource) -> f64 {
        self.score_with_skill(self.skill_bonus(stats), rng)
    }

    /// Score an NPC whose skill level is itself drawn from normal(mean, std_dev).
    pub fn score_npc(
        &self,
        skill_mean: f64,
        skill_std_dev: f64,
        rng: &mut impl UniformSource,
    ) -> f64 {
        let z = standard_normal(rng);
        let skill = (skill_mean + standard_normal(rng) * skill_std_dev).clamp(0.0, 1.0);
        let luck = self.luck_factor(rng);
        compose_score(&self.config, z, skill, luck)
    }
}
