use {super::Env, crate::error::ConfigResult};

/// Primary variable holding the Infura project key.
pub const INFURA_API_KEY: &str = "INFURA_API_KEY";
/// Legacy name some deploy setups export instead.
pub const INFURA_ID: &str = "INFURA_ID";

const ALIASES: &[&str] = &[INFURA_ID];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfuraConfig {
    pub project_id: String,
}

impl InfuraConfig {
    pub fn from_snapshot(env: &Env) -> ConfigResult<Self> {
        let project_id = env.require(INFURA_API_KEY, ALIASES)?.to_owned();
        Ok(Self { project_id })
    }

    /// Endpoint for an Infura-backed network subdomain.
    pub fn endpoint_url(&self, subdomain: &str) -> String {
        format!("https://{}.infura.io/v3/{}", subdomain, self.project_id)
    }
}
