use {
    crate::{
        env::Config,
        error::{ConfigError, ConfigResult},
        networks::{validate_network_name, Manifest, RpcEndpoint},
    },
    anyhow::Context,
    serde::Serialize,
    std::collections::BTreeMap,
    tracing::debug,
    url::Url,
};

/// Connection parameters for one deployment target, in the exact shape
/// the deploy tool reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkConfig {
    pub url: String,
    pub accounts: Vec<String>,
}

/// The assembled tool configuration: a compiler version spec plus one
/// entry per declared network. Built once at startup, immutable after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolConfig {
    pub solidity: String,
    pub networks: BTreeMap<String, NetworkConfig>,
}

impl ToolConfig {
    /// Assemble from loaded env sections, resolving the manifest from
    /// the `DEPLOY_CONFIG_NETWORKS` selection or the default. An empty
    /// selection counts as unset, like everywhere else in the loader.
    pub fn from_config(config: &Config) -> ConfigResult<ToolConfig> {
        let manifest = match &config.settings.networks {
            Some(names) if !names.is_empty() => Manifest::from_selection(names)?,
            _ => Manifest::default_selection(),
        };
        Self::assemble(config, &manifest)
    }

    /// Fold a manifest into the networks map. Secrets must already be
    /// loaded; a duplicate or invalid declaration fails the whole build,
    /// so no partial configuration ever escapes.
    pub fn assemble(config: &Config, manifest: &Manifest) -> ConfigResult<ToolConfig> {
        let accounts = config.deployer.accounts();
        let mut networks = BTreeMap::new();

        for declaration in &manifest.networks {
            validate_network_name(&declaration.name)?;
            if networks.contains_key(&declaration.name) {
                return Err(ConfigError::DuplicateNetwork {
                    name: declaration.name.clone(),
                });
            }

            let url = match &declaration.endpoint {
                RpcEndpoint::Infura { subdomain } => config.infura.endpoint_url(subdomain),
                RpcEndpoint::Url { url } => url.clone(),
            };
            Url::parse(&url).map_err(|source| ConfigError::InvalidEndpoint {
                network: declaration.name.clone(),
                source,
            })?;

            debug!(network = %declaration.name, chain_id = ?declaration.chain_id, "declared network");
            networks.insert(
                declaration.name.clone(),
                NetworkConfig {
                    url,
                    accounts: accounts.clone(),
                },
            );
        }

        Ok(ToolConfig {
            solidity: config.settings.solidity.clone(),
            networks,
        })
    }

    /// Pretty JSON in the shape the deploy tool consumes.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self).context("serializing tool config")?)
    }
}
