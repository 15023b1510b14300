use {super::Env, crate::error::ConfigResult};

/// Primary variable holding the deployer's signing key.
pub const PRIVATE_KEY: &str = "PRIVATE_KEY";
/// Legacy name some deploy setups export instead.
pub const DEPLOYER_PK: &str = "DEPLOYER_PK";

const ALIASES: &[&str] = &[DEPLOYER_PK];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployerConfig {
    pub private_key: String,
}

impl DeployerConfig {
    pub fn from_snapshot(env: &Env) -> ConfigResult<Self> {
        let private_key = env.require(PRIVATE_KEY, ALIASES)?.to_owned();
        Ok(Self { private_key })
    }

    /// Account list handed to every network. Order matters: index 0 is
    /// the default signing account.
    pub fn accounts(&self) -> Vec<String> {
        vec![self.private_key.clone()]
    }
}
