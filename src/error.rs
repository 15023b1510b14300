use std::path::PathBuf;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    EnvyError(#[from] envy::Error),

    #[error("Missing required environment variable: {name}")]
    MissingVariable { name: &'static str },

    #[error("Duplicate network name: {name}")]
    DuplicateNetwork { name: String },

    #[error("Unknown network name: {name} (known networks: {known})")]
    UnknownNetwork { name: String, known: String },

    #[error("Invalid network name `{name}`: {reason}")]
    InvalidNetworkName { name: String, reason: String },

    #[error("Invalid endpoint URL for network {network}: {source}")]
    InvalidEndpoint {
        network: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Could not load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenv::Error,
    },

    #[error("{0:?}")]
    Other(#[from] anyhow::Error),
}
