use super::resources::{Resource, Resources};
use super::stats::{Stat, Stats};
use serde::{Deserialize, Serialize};

/// The acting player: skill attributes plus session resources.
///
/// A session owns exactly one profile and lends it out as `&mut` to each
/// tournament entry, so payout and reputation effects are visible to the
/// caller as soon as the entry returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatProfile {
    name: String,
    style: String,
    stats: Stats,
    resources: Resources,
}

/// Read-only snapshot for presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterInfo {
    pub name: String,
    pub style: String,
    pub stats: Stats,
    pub resources: Resources,
}

impl Default for StatProfile {
    fn default() -> Self {
        Self::new("Player", "balanced")
    }
}

impl StatProfile {
    /// Fresh session profile: every stat at 50, 1000 bankroll, 0 reputation, 100 energy.
    pub fn new(name: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            style: style.into(),
            stats: Stats::default(),
            resources: Resources::default(),
        }
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.resources = resources;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn stat(&self, stat: Stat) -> u8 {
        self.stats.get(stat)
    }

    pub fn resource(&self, resource: Resource) -> i64 {
        self.resources.get(resource)
    }

    pub fn bankroll(&self) -> i64 {
        self.resources.bankroll
    }

    pub fn reputation(&self) -> i64 {
        self.resources.reputation
    }

    pub fn energy(&self) -> i64 {
        self.resources.energy
    }

    /// Add `delta` to the named stat, clamped to [0, 100].
    /// Returns false (and changes nothing) for an unknown name.
    pub fn modify_stat(&mut self, name: &str, delta: i32) -> bool {
        match Stat::from_name(name) {
            Some(stat) => {
                self.adjust_stat(stat, delta);
                true
            }
            None => false,
        }
    }

    /// Typed form of [`modify_stat`](Self::modify_stat); returns the new value.
    pub fn adjust_stat(&mut self, stat: Stat, delta: i32) -> u8 {
        self.stats.apply_delta(stat, delta)
    }

    /// Add `delta` to the named resource without clamping.
    /// Returns false (and changes nothing) for an unknown name.
    pub fn modify_resource(&mut self, name: &str, delta: i64) -> bool {
        match Resource::from_name(name) {
            Some(resource) => {
                self.adjust_resource(resource, delta);
                true
            }
            None => false,
        }
    }

    pub fn adjust_resource(&mut self, resource: Resource, delta: i64) -> i64 {
        self.resources.apply_delta(resource, delta)
    }

    /// Independent copy of the current stats.
    pub fn snapshot_stats(&self) -> Stats {
        self.stats
    }

    /// Independent copy of the current resources.
    pub fn snapshot_resources(&self) -> Resources {
        self.resources
    }

    pub fn info(&self) -> CharacterInfo {
        CharacterInfo {
            name: self.name.clone(),
            style: self.style.clone(),
            stats: self.stats,
            resources: self.resources,
        }
    }
}
