use serde::{Deserialize, Serialize};

/// Tournament class. Closed set; each class decides whether an entry costs energy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentKind {
    Local,
    Online,
    Major,
    #[serde(rename = "highroller", alias = "high_roller")]
    HighRoller,
}

impl TournamentKind {
    pub const ALL: [TournamentKind; 4] =
        [TournamentKind::Local, TournamentKind::Online, TournamentKind::Major, TournamentKind::HighRoller];

    pub fn name(self) -> &'static str {
        match self {
            TournamentKind::Local => "local",
            TournamentKind::Online => "online",
            TournamentKind::Major => "major",
            TournamentKind::HighRoller => "highroller",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "local" => Some(TournamentKind::Local),
            "online" => Some(TournamentKind::Online),
            "major" => Some(TournamentKind::Major),
            "highroller" | "high_roller" | "high-roller" => Some(TournamentKind::HighRoller),
            _ => None,
        }
    }

    /// Online events are played from home: no energy cost, no energy requirement.
    pub fn is_energy_exempt(self) -> bool {
        matches!(self, TournamentKind::Online)
    }
}

impl std::fmt::Display for TournamentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle state of a tournament.
///
/// Entries never move a tournament out of `Open`: every entry is an
/// independent run and the tournament stays re-enterable. `InProgress` and
/// `Completed` are kept so that real transitions have a place to land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    #[default]
    Open,
    InProgress,
    Completed,
}

impl TournamentStatus {
    pub fn accepts_entries(self) -> bool {
        self == TournamentStatus::Open
    }
}
