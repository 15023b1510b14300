use {
    crate::error::{ConfigError, ConfigResult},
    once_cell::sync::Lazy,
    phf::phf_map,
};

/// Networks the tool can wire to Infura out of the box, keyed by the
/// name used in `DEPLOY_CONFIG_NETWORKS` and in the rendered config.
pub static INFURA_NETWORKS: phf::Map<&'static str, InfuraNetwork> = phf_map! {
    // Ethereum
    "mainnet" => InfuraNetwork { subdomain: "mainnet", chain_id: 1 },
    "goerli" => InfuraNetwork { subdomain: "goerli", chain_id: 5 },
    "sepolia" => InfuraNetwork { subdomain: "sepolia", chain_id: 11_155_111 },
    // Optimism
    "optimism_goerli" => InfuraNetwork { subdomain: "optimism-goerli", chain_id: 420 },
    // Arbitrum
    "arbitrum_goerli" => InfuraNetwork { subdomain: "arbitrum-goerli", chain_id: 421_613 },
    // Polygon
    "polygon_mainnet" => InfuraNetwork { subdomain: "polygon-mainnet", chain_id: 137 },
    "polygon_mumbai" => InfuraNetwork { subdomain: "polygon-mumbai", chain_id: 80_001 },
};

/// Networks declared when `DEPLOY_CONFIG_NETWORKS` is not set.
pub const DEFAULT_SELECTION: [&str; 3] = ["goerli", "polygon_mumbai", "optimism_goerli"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfuraNetwork {
    pub subdomain: &'static str,
    pub chain_id: u64,
}

/// Catalog names in deterministic order, for listings and error text.
pub fn known_networks() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = INFURA_NETWORKS.keys().copied().collect();
    names.sort_unstable();
    names
}

const MAX_NETWORK_NAME_LEN: usize = 64;

pub fn validate_network_name(name: &str) -> ConfigResult<()> {
    if name.is_empty() {
        return Err(invalid_name(name, "names must not be empty".to_owned()));
    }
    if name.len() > MAX_NETWORK_NAME_LEN {
        return Err(invalid_name(
            name,
            format!(
                "names can be at most {} characters, but this one has {}",
                MAX_NETWORK_NAME_LEN,
                name.len()
            ),
        ));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(invalid_name(
            name,
            "names can only contain lowercase alphanumeric characters or '_'".to_owned(),
        ));
    }
    Ok(())
}

fn invalid_name(name: &str, reason: String) -> ConfigError {
    ConfigError::InvalidNetworkName {
        name: name.to_owned(),
        reason,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcEndpoint {
    /// Assembled from the Infura base and the project key at load time.
    Infura { subdomain: String },
    /// Used verbatim, for endpoints that carry no credential.
    Url { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDeclaration {
    pub name: String,
    pub chain_id: Option<u64>,
    pub endpoint: RpcEndpoint,
}

impl NetworkDeclaration {
    pub fn infura(name: &str, subdomain: &str, chain_id: u64) -> Self {
        Self {
            name: name.to_owned(),
            chain_id: Some(chain_id),
            endpoint: RpcEndpoint::Infura {
                subdomain: subdomain.to_owned(),
            },
        }
    }

    pub fn url(name: &str, url: &str) -> Self {
        Self {
            name: name.to_owned(),
            chain_id: None,
            endpoint: RpcEndpoint::Url {
                url: url.to_owned(),
            },
        }
    }

    /// Declaration for a catalog network, by name.
    pub fn from_catalog(name: &str) -> ConfigResult<Self> {
        validate_network_name(name)?;
        let network = INFURA_NETWORKS
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork {
                name: name.to_owned(),
                known: known_networks().join(", "),
            })?;
        Ok(Self::infura(name, network.subdomain, network.chain_id))
    }
}

/// Ordered list of network declarations. Folding the list into the
/// networks map is where duplicate names get rejected, so a manifest
/// may hold a duplicate; a built config never does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub networks: Vec<NetworkDeclaration>,
}

static DEFAULT_MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let mut manifest = Manifest::new();
    for name in DEFAULT_SELECTION {
        let declaration =
            NetworkDeclaration::from_catalog(name).expect("catalog covers the default selection");
        manifest.declare(declaration);
    }
    manifest
});

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, network: NetworkDeclaration) -> &mut Self {
        self.networks.push(network);
        self
    }

    /// The selection used when `DEPLOY_CONFIG_NETWORKS` is not set.
    pub fn default_selection() -> Manifest {
        DEFAULT_MANIFEST.clone()
    }

    /// Manifest for an explicit selection of catalog networks. Names are
    /// trimmed; an unknown name fails listing the catalog.
    pub fn from_selection<I, S>(names: I) -> ConfigResult<Manifest>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut manifest = Manifest::new();
        for name in names {
            manifest.declare(NetworkDeclaration::from_catalog(name.as_ref().trim())?);
        }
        Ok(manifest)
    }
}
