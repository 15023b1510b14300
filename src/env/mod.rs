use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

mod deployer;
mod infura;
mod settings;

pub use deployer::*;
pub use infura::*;
pub use settings::*;

/// Immutable snapshot of environment state.
///
/// Captured once from the process environment (or built explicitly in
/// tests); every lookup goes through the snapshot so loading stays pure
/// and never touches globals after capture.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: BTreeMap<String, String>,
}

impl Env {
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Value for `name`, treating an empty string the same as unset.
    pub fn get_nonempty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    /// First non-empty value among the primary `name` and its `aliases`,
    /// in that order. Fails naming the primary variable.
    pub fn require(&self, name: &'static str, aliases: &[&'static str]) -> ConfigResult<&str> {
        if let Some(value) = self.get_nonempty(name) {
            return Ok(value);
        }
        for alias in aliases {
            if let Some(value) = self.get_nonempty(alias) {
                debug!("{name} not set, falling back to {alias}");
                return Ok(value);
            }
        }
        Err(ConfigError::MissingVariable { name })
    }
}

impl FromIterator<(String, String)> for Env {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: SettingsConfig,
    pub infura: InfuraConfig,
    pub deployer: DeployerConfig,
}

impl Config {
    pub fn from_env() -> ConfigResult<Config> {
        Self::from_snapshot(&Env::from_process())
    }

    pub fn from_snapshot(env: &Env) -> ConfigResult<Config> {
        Ok(Self {
            settings: SettingsConfig::from_snapshot(env)?,
            infura: InfuraConfig::from_snapshot(env)?,
            deployer: DeployerConfig::from_snapshot(env)?,
        })
    }
}

pub(crate) fn prefixed<T: DeserializeOwned>(prefix: &str, env: &Env) -> Result<T, envy::Error> {
    envy::prefixed(prefix).from_iter(env.vars.clone())
}
