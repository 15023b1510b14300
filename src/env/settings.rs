use {
    super::Env,
    crate::error::ConfigResult,
    serde::Deserialize,
    serde_piecewise_default::DeserializePiecewiseDefault,
    std::path::PathBuf,
};

/// Prefix for the tool's own (optional) settings. The required secrets
/// stay unprefixed, matching what deploy setups already export.
pub const SETTINGS_PREFIX: &str = "DEPLOY_CONFIG_";

pub const DEFAULT_SOLIDITY: &str = "0.8.18";

#[derive(DeserializePiecewiseDefault, Debug, Clone, PartialEq, Eq)]
pub struct SettingsConfig {
    pub log_level: String,
    pub solidity: String,
    pub networks: Option<Vec<String>>,
    pub env_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        SettingsConfig {
            log_level: "INFO".to_string(),
            solidity: DEFAULT_SOLIDITY.to_string(),
            networks: None,
            env_file: None,
            output: None,
        }
    }
}

impl SettingsConfig {
    pub fn from_snapshot(env: &Env) -> ConfigResult<Self> {
        Ok(super::prefixed(SETTINGS_PREFIX, env)?)
    }
}
