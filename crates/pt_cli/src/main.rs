//! Poker Tournament CLI
//!
//! 토너먼트 라인업 조회 및 세션 실행 도구

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pt_core::{seeded, EngineConfig, StatProfile, Tournament, TournamentKind, TournamentInfo};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pt_cli")]
#[command(version = pt_core::VERSION)]
#[command(about = "Run poker tournament entries from the command line", long_about = None)]
struct Cli {
    /// Engine config file (YAML, or JSON by extension). Falls back to PT_ENGINE_CONFIG_PATH.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the configured tournament lineup as JSON
    Lineup,

    /// Enter one tournament repeatedly with a fresh profile
    Play {
        /// Tournament kind: local, online, major, highroller
        #[arg(long, default_value = "online")]
        kind: String,

        /// Number of entries to play
        #[arg(long, default_value = "1")]
        entries: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Override the lineup buy-in
        #[arg(long)]
        buy_in: Option<u64>,

        /// Override the lineup field size
        #[arg(long)]
        field_size: Option<u32>,

        /// Player name
        #[arg(long, default_value = "Player")]
        name: String,
    },
}

#[derive(Serialize)]
struct SessionReport {
    tournament: TournamentInfo,
    outcomes: Vec<pt_core::EntryOutcome>,
    stats: pt_core::SessionStats,
    profile: pt_core::CharacterInfo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Lineup => {
            let lineup = Tournament::from_lineup(&config)?;
            let infos: Vec<TournamentInfo> = lineup.iter().map(Tournament::info).collect();
            println!("{}", serde_json::to_string_pretty(&infos)?);
        }

        Commands::Play { kind, entries, seed, buy_in, field_size, name } => {
            let kind = TournamentKind::from_name(&kind)
                .with_context(|| format!("unknown tournament kind '{}'", kind))?;
            let mut tournament = build_tournament(&config, kind, buy_in, field_size)?;
            let mut profile = StatProfile::new(name, "balanced");

            info!(kind = %kind, entries, seed = ?seed, "starting session");

            let mut outcomes = Vec::with_capacity(entries as usize);
            match seed {
                Some(seed) => {
                    let mut rng = seeded(seed);
                    for _ in 0..entries {
                        outcomes.push(tournament.enter_with(&mut profile, &mut rng));
                    }
                }
                None => {
                    for _ in 0..entries {
                        outcomes.push(tournament.enter(&mut profile));
                    }
                }
            }

            let report = SessionReport {
                tournament: tournament.info(),
                outcomes,
                stats: tournament.session_stats(),
                profile: profile.info(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::from_env().context("failed to load config from environment")?,
    };
    Ok(config)
}

/// Lineup parameters for `kind`, overridden by any explicit flags.
fn build_tournament(
    config: &EngineConfig,
    kind: TournamentKind,
    buy_in: Option<u64>,
    field_size: Option<u32>,
) -> Result<Tournament> {
    let listed = config.lineup.iter().find(|entry| entry.kind == kind);

    let (buy_in, field_size) = match (listed, buy_in, field_size) {
        (_, Some(buy_in), Some(field_size)) => (buy_in, field_size),
        (Some(entry), buy_in, field_size) => {
            (buy_in.unwrap_or(entry.buy_in), field_size.unwrap_or(entry.field_size))
        }
        (None, _, _) => bail!(
            "'{}' is not in the lineup; pass both --buy-in and --field-size",
            kind
        ),
    };

    Ok(Tournament::with_config(kind, buy_in, field_size, config)?)
}
