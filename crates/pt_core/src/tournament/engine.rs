use super::kind::{TournamentKind, TournamentStatus};
use super::result::{EntryOutcome, EntryRejection, EntryResult, TournamentInfo};
use super::stats::SessionStats;
use crate::character::{Resource, StatProfile};
use crate::config::EngineConfig;
use crate::error::{CoreError, Result};
use crate::field::{FieldEntry, FieldGenerator};
use crate::payout::{itm_bonus, itm_count, prize_for};
use crate::random::UniformSource;
use crate::scoring::ScoringFunction;
use tracing::{debug, info};

/// Finishing position of `player_score` against the simulated field.
///
/// Equivalent to sorting every score descending and taking the first position
/// holding the player's score: ties with field scores go to the player, and
/// duplicate field scores never shift the result.
pub fn rank_player(player_score: f64, field: &[FieldEntry]) -> u32 {
    let ahead = field.iter().filter(|entry| entry.score > player_score).count();
    ahead as u32 + 1
}

/// A repeatable tournament. Every `enter` runs a complete, independent event
/// against a freshly generated field.
#[derive(Debug, Clone)]
pub struct Tournament {
    kind: TournamentKind,
    buy_in: u64,
    field_size: u32,
    prize_pool: u64,
    current_players: u32,
    status: TournamentStatus,
    energy_cost: i64,
    final_table_size: u32,
    scoring: ScoringFunction,
    field: FieldGenerator,
    history: Vec<EntryResult>,
}

impl Tournament {
    /// Tournament with the standard engine configuration.
    pub fn new(kind: TournamentKind, buy_in: u64, field_size: u32) -> Result<Self> {
        Self::with_config(kind, buy_in, field_size, &EngineConfig::default())
    }

    pub fn with_config(
        kind: TournamentKind,
        buy_in: u64,
        field_size: u32,
        config: &EngineConfig,
    ) -> Result<Self> {
        config.validate()?;
        if buy_in == 0 {
            return Err(CoreError::InvalidTournament("buy-in must be positive".to_string()));
        }
        if field_size < 2 {
            return Err(CoreError::InvalidTournament(format!(
                "field size must be at least 2, got {}",
                field_size
            )));
        }

        let prize_pool =
            (buy_in as f64 * field_size as f64 * config.rules.rake_back).floor() as u64;

        Ok(Self {
            kind,
            buy_in,
            field_size,
            prize_pool,
            current_players: field_size,
            status: TournamentStatus::Open,
            energy_cost: config.rules.energy_cost,
            final_table_size: config.rules.final_table_size,
            scoring: ScoringFunction::new(config.scoring.clone()),
            field: FieldGenerator::new(config.field.clone(), config.scoring.clone()),
            history: Vec::new(),
        })
    }

    /// Every tournament in the configured lineup.
    pub fn from_lineup(config: &EngineConfig) -> Result<Vec<Self>> {
        config
            .lineup
            .iter()
            .map(|entry| Self::with_config(entry.kind, entry.buy_in, entry.field_size, config))
            .collect()
    }

    /// Default session lineup: online daily and high roller.
    pub fn lineup() -> Result<Vec<Self>> {
        Self::from_lineup(&EngineConfig::default())
    }

    pub fn kind(&self) -> TournamentKind {
        self.kind
    }

    pub fn buy_in(&self) -> u64 {
        self.buy_in
    }

    pub fn field_size(&self) -> u32 {
        self.field_size
    }

    pub fn prize_pool(&self) -> u64 {
        self.prize_pool
    }

    pub fn status(&self) -> TournamentStatus {
        self.status
    }

    pub fn itm_count(&self) -> u32 {
        itm_count(self.field_size)
    }

    /// Energy a profile must hold to enter; zero for energy-exempt kinds.
    pub fn energy_required(&self) -> i64 {
        if self.kind.is_energy_exempt() {
            0
        } else {
            self.energy_cost
        }
    }

    /// Eligibility with a reason. Bankroll is checked before energy.
    pub fn check_entry(&self, profile: &StatProfile) -> std::result::Result<(), EntryRejection> {
        if !self.status.accepts_entries() {
            return Err(EntryRejection::Closed { status: self.status });
        }
        if (profile.bankroll() as i128) < self.buy_in as i128 {
            return Err(EntryRejection::InsufficientBankroll {
                required: self.buy_in,
                available: profile.bankroll(),
            });
        }
        let required = self.energy_required();
        if profile.energy() < required {
            return Err(EntryRejection::InsufficientEnergy {
                required,
                available: profile.energy(),
            });
        }
        Ok(())
    }

    pub fn can_enter(&self, profile: &StatProfile) -> bool {
        self.check_entry(profile).is_ok()
    }

    /// Enter using the thread-local generator.
    pub fn enter(&mut self, profile: &mut StatProfile) -> EntryOutcome {
        let mut rng = rand::thread_rng();
        self.enter_with(profile, &mut rng)
    }

    /// Enter drawing every random sample from `rng`.
    pub fn enter_with(
        &mut self,
        profile: &mut StatProfile,
        rng: &mut impl UniformSource,
    ) -> EntryOutcome {
        self.try_enter_with(profile, rng).into()
    }

    pub fn try_enter_with(
        &mut self,
        profile: &mut StatProfile,
        rng: &mut impl UniformSource,
    ) -> std::result::Result<EntryResult, EntryRejection> {
        if let Err(reason) = self.check_entry(profile) {
            debug!(kind = %self.kind, reason = %reason, "entry rejected");
            return Err(reason);
        }

        self.charge_entry(profile);

        self.current_players = self.field_size;
        let field = self.field.generate(self.field_size, rng);
        let score = self.scoring.score_player(&profile.snapshot_stats(), rng);

        Ok(self.settle(profile, score, &field))
    }

    fn charge_entry(&self, profile: &mut StatProfile) {
        // check_entry guarantees bankroll >= buy_in, so buy_in fits in i64 here
        profile.adjust_resource(Resource::Bankroll, -(self.buy_in as i64));
        if !self.kind.is_energy_exempt() {
            profile.adjust_resource(Resource::Energy, -self.energy_cost);
        }
    }

    /// Rank, pay out and record an entry whose scores are already known.
    pub(crate) fn settle(
        &mut self,
        profile: &mut StatProfile,
        score: f64,
        field: &[FieldEntry],
    ) -> EntryResult {
        let rank = rank_player(score, field);
        let prize = prize_for(rank, self.field_size, self.prize_pool);
        let percentile = rank as f64 / self.field_size as f64 * 100.0;
        let itm_bonus = itm_bonus(rank, self.field_size);

        let mut reputation_gain = 0;
        if prize > 0 {
            let credited = i64::try_from(prize).unwrap_or(i64::MAX);
            profile.adjust_resource(Resource::Bankroll, credited);
            reputation_gain = credited / 100 + itm_bonus as i64;
            profile.adjust_resource(Resource::Reputation, reputation_gain);
        }

        let result = EntryResult {
            kind: self.kind,
            buy_in: self.buy_in,
            score,
            rank,
            prize,
            percentile,
            field_size: self.field_size,
            itm_bonus,
            reputation_gain,
        };

        info!(
            kind = %self.kind,
            rank,
            field_size = self.field_size,
            score,
            prize,
            reputation_gain,
            "tournament entry settled"
        );

        self.history.push(result.clone());
        result
    }

    pub fn info(&self) -> TournamentInfo {
        TournamentInfo {
            name: self.kind.name().to_string(),
            buy_in: self.buy_in,
            prize_pool: self.prize_pool,
            field_size: self.field_size,
            current_players: self.current_players,
            kind: self.kind,
            status: self.status,
            itm_count: self.itm_count(),
        }
    }

    /// Past results ordered by rank, best first.
    pub fn history(&self) -> Vec<EntryResult> {
        let mut results = self.history.clone();
        results.sort_by_key(|result| result.rank);
        results
    }

    /// Past results in the order they were played.
    pub fn results(&self) -> &[EntryResult] {
        &self.history
    }

    pub fn session_stats(&self) -> SessionStats {
        SessionStats::from_results(&self.history, self.final_table_size)
    }

    /// Forget all recorded entries.
    pub fn reset_stats(&mut self) {
        debug!(kind = %self.kind, cleared = self.history.len(), "session stats reset");
        self.history.clear();
    }
}
