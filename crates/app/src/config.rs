use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/kopilka.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Log level for the kopilka crates (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Per-request timeout. Requests never time out when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            level: "info".to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Default, clap::Args)]
pub struct ConfigArgs {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:8080).
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Override log level.
    #[arg(long, global = true)]
    level: Option<String>,
    /// Override request timeout in seconds.
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

/// File first, then `KOPILKA_*` environment variables, then command-line flags.
pub fn load(args: &ConfigArgs) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("KOPILKA"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = &args.base_url {
        settings.base_url = base_url.clone();
    }
    if let Some(level) = &args.level {
        settings.level = level.clone();
    }
    if let Some(timeout_secs) = args.timeout_secs {
        settings.timeout_secs = Some(timeout_secs);
    }

    Ok(settings)
}
