//! # Engine Configuration
//!
//! 모든 밸런스 상수를 중앙에서 관리하는 설정 시스템.
//!
//! ## 사용법
//! ```rust
//! use pt_core::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let flat = EngineConfig::no_luck();
//! assert!(config.validate().is_ok() && flat.validate().is_ok());
//! ```
//!
//! Configs load from YAML or JSON. When `PT_ENGINE_CONFIG_PATH` is set,
//! [`EngineConfig::from_env`] reads that file instead of the defaults.

mod field_config;
mod rules_config;
mod scoring_config;

pub use field_config::FieldConfig;
pub use rules_config::{default_lineup, LineupEntry, RulesConfig};
pub use scoring_config::{ScoringConfig, SkillWeights, WEIGHT_SUM_TOLERANCE};

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "PT_ENGINE_CONFIG_PATH";

/// Full engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default = "default_lineup")]
    pub lineup: Vec<LineupEntry>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            field: FieldConfig::default(),
            rules: RulesConfig::default(),
            lineup: default_lineup(),
        }
    }
}

impl EngineConfig {
    /// 기본 밸런스
    pub fn standard() -> Self {
        Self::default()
    }

    /// No randomness beyond the uniform draws themselves: base score fixed at its
    /// mean, zero luck, every NPC at mean skill. Useful for balance checks.
    pub fn no_luck() -> Self {
        let mut cfg = Self::default();
        cfg.scoring.base_std_dev = 0.0;
        cfg.scoring.luck_range = 0.0;
        cfg.field.npc_skill_std_dev = 0.0;
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate().map_err(CoreError::InvalidConfig)?;
        self.field.validate().map_err(CoreError::InvalidConfig)?;
        self.rules.validate().map_err(CoreError::InvalidConfig)?;
        for entry in &self.lineup {
            if entry.buy_in == 0 {
                return Err(CoreError::InvalidConfig(format!(
                    "lineup entry {:?} has zero buy-in",
                    entry.kind
                )));
            }
            if entry.field_size < 2 {
                return Err(CoreError::InvalidConfig(format!(
                    "lineup entry {:?} has field size {} (minimum 2)",
                    entry.kind, entry.field_size
                )));
            }
        }
        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` files parse as JSON, everything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CoreError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;

        let is_json = path.extension().and_then(|ext| ext.to_str()) == Some("json");
        let config = if is_json { Self::from_json_str(&content)? } else { Self::from_yaml_str(&content)? };

        log::info!("Loaded engine config from {}", path.display());
        Ok(config)
    }

    /// Defaults unless `PT_ENGINE_CONFIG_PATH` names a config file.
    pub fn from_env() -> Result<Self> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        log::debug!("{}='{}'", CONFIG_PATH_ENV, path);
        Self::load(path)
    }
}
