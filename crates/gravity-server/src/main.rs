use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gravity_server::{run_server, tracing_setup, ServerConfig};

#[derive(Parser)]
#[command(name = "gravity-server")]
#[command(about = "Unified inbox API server")]
struct Cli {
    /// Path to JSON config file (contains bindAddr, draftSeed, limits)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Address to listen on, overrides the config file
    #[arg(long, env = "GRAVITY_BIND")]
    bind: Option<String>,

    /// Port on 0.0.0.0, used when no bind address is given
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Seed for reproducible draft regeneration
    #[arg(long, env = "GRAVITY_DRAFT_SEED")]
    draft_seed: Option<u64>,
}

impl Cli {
    fn into_config(self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::load(path)?,
            None => ServerConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        } else if let Some(port) = self.port {
            config.bind_addr = format!("0.0.0.0:{}", port);
        }
        if self.draft_seed.is_some() {
            config.draft_seed = self.draft_seed;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_setup::init_tracing()?;

    let config = Cli::parse().into_config()?;
    tracing::debug!(?config, "Loaded configuration");

    run_server(config).await
}
