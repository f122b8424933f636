mod config;
mod error;
mod ip;
mod provider;
mod updater;


use anyhow::Result;
use clap::Parser;
use log::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "do-ddns")]
#[command(about = "Keep a DigitalOcean DNS A record pointed at this host's public IP")]
struct Args {
    /// Path to the YAML configuration file
    config: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration first (before logger init)
    let config = config::Config::load(&args.config)?;

    // Initialize logger with config log level (env var takes precedence)
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.log_level)
    ).init();

    info!("Loaded configuration from: {}", args.config);

    let outcome = updater::sync_home_record(&config, log::logger()).await?;
    debug!("Run finished: {:?}", outcome);

    Ok(())
}
