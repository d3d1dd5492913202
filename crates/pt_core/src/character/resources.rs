// Session resources. Unlike stats these are never clamped by the model:
// bankroll and reputation may go negative, energy bounds are a caller rule.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const STARTING_BANKROLL: i64 = 1000;
pub const STARTING_REPUTATION: i64 = 0;
pub const STARTING_ENERGY: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    Bankroll,
    Reputation,
    Energy,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::Bankroll, Resource::Reputation, Resource::Energy];

    pub fn name(self) -> &'static str {
        match self {
            Resource::Bankroll => "bankroll",
            Resource::Reputation => "reputation",
            Resource::Energy => "energy",
        }
    }

    pub fn from_name(name: &str) -> Option<Resource> {
        match name {
            "bankroll" => Some(Resource::Bankroll),
            "reputation" => Some(Resource::Reputation),
            "energy" => Some(Resource::Energy),
            _ => None,
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub bankroll: i64,
    pub reputation: i64,
    pub energy: i64,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            bankroll: STARTING_BANKROLL,
            reputation: STARTING_REPUTATION,
            energy: STARTING_ENERGY,
        }
    }
}

impl Resources {
    pub fn get(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Bankroll => self.bankroll,
            Resource::Reputation => self.reputation,
            Resource::Energy => self.energy,
        }
    }

    fn slot_mut(&mut self, resource: Resource) -> &mut i64 {
        match resource {
            Resource::Bankroll => &mut self.bankroll,
            Resource::Reputation => &mut self.reputation,
            Resource::Energy => &mut self.energy,
        }
    }

    /// Add a signed delta without clamping. Saturates at the i64 limits.
    pub fn apply_delta(&mut self, resource: Resource, delta: i64) -> i64 {
        let slot = self.slot_mut(resource);
        *slot = slot.saturating_add(delta);
        *slot
    }

    pub fn to_map(&self) -> BTreeMap<&'static str, i64> {
        Resource::ALL.iter().map(|&r| (r.name(), self.get(r))).collect()
    }
}
