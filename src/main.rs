use {
    anyhow::{anyhow, Context},
    deploy_config::{
        env::{Config, Env, SettingsConfig},
        error::{ConfigError, ConfigResult},
        tool_config::ToolConfig,
    },
    dotenv::dotenv,
    std::str::FromStr,
    tracing::info,
    tracing_subscriber::fmt::format::FmtSpan,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> ConfigResult<()> {
    dotenv().ok();

    let mut env = Env::from_process();
    let mut settings = SettingsConfig::from_snapshot(&env)?;

    // An explicitly requested env file must load; only the implicit
    // `.env` above is allowed to be absent.
    if let Some(path) = settings.env_file.clone() {
        dotenv::from_path(&path).map_err(|source| ConfigError::EnvFile { path, source })?;
        env = Env::from_process();
        settings = SettingsConfig::from_snapshot(&env)?;
    }

    let level = tracing::Level::from_str(settings.log_level.as_str())
        .map_err(|_| anyhow!("invalid log level {}", settings.log_level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
    info!("deploy-config v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_snapshot(&env)?;
    let tool_config = ToolConfig::from_config(&config)?;
    info!(
        "assembled {} network(s) for solc {}",
        tool_config.networks.len(),
        tool_config.solidity
    );

    let json = tool_config.to_json()?;
    match &settings.output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
