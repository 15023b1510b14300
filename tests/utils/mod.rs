use deploy_config::env::Env;

pub const TEST_INFURA_KEY: &str = "abc123";
pub const TEST_PRIVATE_KEY: &str = "0xdeadbeef";

pub fn env_from(pairs: &[(&str, &str)]) -> Env {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect()
}

/// Snapshot with both required secrets set and nothing else.
pub fn secrets_env() -> Env {
    env_from(&[
        ("INFURA_API_KEY", TEST_INFURA_KEY),
        ("PRIVATE_KEY", TEST_PRIVATE_KEY),
    ])
}

/// Snapshot with the required secrets plus extra variables on top.
pub fn env_with(extra: &[(&str, &str)]) -> Env {
    let mut pairs = vec![
        ("INFURA_API_KEY", TEST_INFURA_KEY),
        ("PRIVATE_KEY", TEST_PRIVATE_KEY),
    ];
    pairs.extend_from_slice(extra);
    env_from(&pairs)
}
