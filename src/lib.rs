use crate::{
    env::{Config, Env},
    error::ConfigResult,
    tool_config::ToolConfig,
};

pub mod env;
pub mod error;
pub mod networks;
pub mod tool_config;

/// Load the full tool configuration from the current process
/// environment: secrets, settings, and the network selection.
pub fn load() -> ConfigResult<ToolConfig> {
    load_from_snapshot(&Env::from_process())
}

/// Same as [`load`], but off an explicit snapshot. Pure: nothing is
/// read from process state, which is what tests want.
pub fn load_from_snapshot(env: &Env) -> ConfigResult<ToolConfig> {
    let config = Config::from_snapshot(env)?;
    ToolConfig::from_config(&config)
}
