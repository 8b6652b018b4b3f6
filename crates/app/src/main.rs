mod cli;
mod config;
mod error;

use std::time::Duration;

use clap::Parser;
use store::{ApiClient, Stores};

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let settings = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "kopilka={level},store={level}",
            level = settings.level
        ))
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("using server {}", settings.base_url);

    let mut client = ApiClient::builder().base_url(&settings.base_url);
    if let Some(secs) = settings.timeout_secs {
        client = client.timeout(Duration::from_secs(secs));
    }
    let stores = Stores::new(client.build()?);

    cli::run(cli.command, &stores).await
}
