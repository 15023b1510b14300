use {crate::utils::secrets_env, deploy_config::env::Env, test_context::TestContext};

/// Baseline environment for functional tests: both required secrets
/// set, everything else left to defaults.
pub struct EnvContext {
    pub env: Env,
}

impl TestContext for EnvContext {
    fn setup() -> Self {
        Self { env: secrets_env() }
    }
}
