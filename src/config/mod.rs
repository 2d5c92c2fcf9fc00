use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{ensure_dir, write_atomic, PathResolver},
    errors::{EngineError, Result},
    ledger::recurring::NEVER_ENDING_YEARS,
};

/// Roughly 12.1 years: the furthest end date a new schedule may have.
const DEFAULT_MAX_HORIZON_DAYS: i64 = 4_419;
const DEFAULT_GOAL_DAYS: i64 = 30;
/// Upper bound for any day count read from disk: a century.
const MAX_CONFIG_DAYS: i64 = 36_600;
const MAX_NEVER_ENDING_YEARS: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Years added to an end date when a schedule is marked as never ending.
    #[serde(default = "Config::default_never_ending_years")]
    pub never_ending_years: u32,
    /// Schedules may not end more than this many days after today.
    #[serde(default = "Config::default_max_horizon_days")]
    pub max_horizon_days: i64,
    /// Days between today and a new goal's suggested due date.
    #[serde(default = "Config::default_goal_days")]
    pub default_goal_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-AU".into(),
            currency: "AUD".into(),
            never_ending_years: NEVER_ENDING_YEARS,
            max_horizon_days: DEFAULT_MAX_HORIZON_DAYS,
            default_goal_days: DEFAULT_GOAL_DAYS,
        }
    }
}

impl Config {
    fn default_never_ending_years() -> u32 {
        NEVER_ENDING_YEARS
    }

    fn default_max_horizon_days() -> i64 {
        DEFAULT_MAX_HORIZON_DAYS
    }

    fn default_goal_days() -> i64 {
        DEFAULT_GOAL_DAYS
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_NEVER_ENDING_YEARS).contains(&self.never_ending_years) {
            return Err(EngineError::Config(format!(
                "never_ending_years must be between 1 and {MAX_NEVER_ENDING_YEARS}"
            )));
        }
        if !(1..=MAX_CONFIG_DAYS).contains(&self.max_horizon_days) {
            return Err(EngineError::Config(format!(
                "max_horizon_days must be between 1 and {MAX_CONFIG_DAYS}"
            )));
        }
        if !(1..=MAX_CONFIG_DAYS).contains(&self.default_goal_days) {
            return Err(EngineError::Config(format!(
                "default_goal_days must be between 1 and {MAX_CONFIG_DAYS}"
            )));
        }
        Ok(())
    }
}

/// Loads and saves [`Config`] as JSON under the application directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Missing file means defaults; a present file must parse and validate.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config =
            serde_json::from_str(&data).map_err(|err| EngineError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
