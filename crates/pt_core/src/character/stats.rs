//! Skill attributes (0-100) that drive the player's tournament score.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const STAT_MIN: u8 = 0;
pub const STAT_MAX: u8 = 100;
pub const DEFAULT_STAT: u8 = 50;

/// Named skill attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    /// Odds math and strategic understanding
    PokerIq,
    /// Bluffing, bluff-catching and hero folds
    Insight,
    /// Theoretical (game-theory optimal) play
    GtoMastery,
    /// Staying sharp through long tournaments
    Focus,
    /// Fatigue management across back-to-back sessions
    Stamina,
    Luck,
}

impl Stat {
    pub const ALL: [Stat; 6] =
        [Stat::PokerIq, Stat::Insight, Stat::GtoMastery, Stat::Focus, Stat::Stamina, Stat::Luck];

    /// Canonical name used in snapshots and by presentation layers.
    pub fn name(self) -> &'static str {
        match self {
            Stat::PokerIq => "pokerIQ",
            Stat::Insight => "insight",
            Stat::GtoMastery => "gtoMastery",
            Stat::Focus => "focus",
            Stat::Stamina => "stamina",
            Stat::Luck => "luck",
        }
    }

    /// Accepts the canonical name or its snake_case alias.
    pub fn from_name(name: &str) -> Option<Stat> {
        match name {
            "pokerIQ" | "poker_iq" => Some(Stat::PokerIq),
            "insight" => Some(Stat::Insight),
            "gtoMastery" | "gto_mastery" => Some(Stat::GtoMastery),
            "focus" => Some(Stat::Focus),
            "stamina" => Some(Stat::Stamina),
            "luck" => Some(Stat::Luck),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Skill attribute block. Every value stays within [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawStats")]
pub struct Stats {
    #[serde(rename = "pokerIQ")]
    poker_iq: u8,
    insight: u8,
    gto_mastery: u8,
    focus: u8,
    stamina: u8,
    luck: u8,
}

// Deserialized values pass through `from_values` so the [0, 100] bound holds.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStats {
    #[serde(rename = "pokerIQ", alias = "poker_iq")]
    poker_iq: u8,
    insight: u8,
    #[serde(alias = "gto_mastery")]
    gto_mastery: u8,
    focus: u8,
    stamina: u8,
    luck: u8,
}

impl From<RawStats> for Stats {
    fn from(raw: RawStats) -> Self {
        Stats::from_values(
            raw.poker_iq,
            raw.insight,
            raw.gto_mastery,
            raw.focus,
            raw.stamina,
            raw.luck,
        )
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::uniform(DEFAULT_STAT)
    }
}

impl Stats {
    /// Every attribute set to the same (clamped) value.
    pub fn uniform(value: u8) -> Self {
        let value = value.min(STAT_MAX);
        Self {
            poker_iq: value,
            insight: value,
            gto_mastery: value,
            focus: value,
            stamina: value,
            luck: value,
        }
    }

    /// Build from explicit values; out-of-range values are clamped.
    pub fn from_values(
        poker_iq: u8,
        insight: u8,
        gto_mastery: u8,
        focus: u8,
        stamina: u8,
        luck: u8,
    ) -> Self {
        Self {
            poker_iq: poker_iq.min(STAT_MAX),
            insight: insight.min(STAT_MAX),
            gto_mastery: gto_mastery.min(STAT_MAX),
            focus: focus.min(STAT_MAX),
            stamina: stamina.min(STAT_MAX),
            luck: luck.min(STAT_MAX),
        }
    }

    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::PokerIq => self.poker_iq,
            Stat::Insight => self.insight,
            Stat::GtoMastery => self.gto_mastery,
            Stat::Focus => self.focus,
            Stat::Stamina => self.stamina,
            Stat::Luck => self.luck,
        }
    }

    /// Set with bounds checking.
    pub fn set(&mut self, stat: Stat, value: u8) {
        let value = value.min(STAT_MAX);
        match stat {
            Stat::PokerIq => self.poker_iq = value,
            Stat::Insight => self.insight = value,
            Stat::GtoMastery => self.gto_mastery = value,
            Stat::Focus => self.focus = value,
            Stat::Stamina => self.stamina = value,
            Stat::Luck => self.luck = value,
        }
    }

    /// Add a signed delta and clamp to [0, 100]. Returns the new value.
    pub fn apply_delta(&mut self, stat: Stat, delta: i32) -> u8 {
        let current = self.get(stat) as i64;
        let next = (current + delta as i64).clamp(STAT_MIN as i64, STAT_MAX as i64) as u8;
        self.set(stat, next);
        next
    }

    /// Get attribute value by name
    pub fn get_by_name(&self, name: &str) -> Option<u8> {
        Stat::from_name(name).map(|stat| self.get(stat))
    }

    /// Get all attribute names for UI/debugging
    pub fn all_names() -> Vec<&'static str> {
        Stat::ALL.iter().map(|stat| stat.name()).collect()
    }

    /// Name → value mapping, keyed by canonical names.
    pub fn to_map(&self) -> BTreeMap<&'static str, i64> {
        Stat::ALL.iter().map(|&stat| (stat.name(), self.get(stat) as i64)).collect()
    }
}
