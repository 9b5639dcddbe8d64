use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use triplist::config::Config;
use triplist::fetch::{ClientTimeouts, ReqwestClient};
use triplist::logging::init_tracing;
use triplist::trips::Region;
use triplist::ui::runtime;

#[derive(Parser, Debug)]
#[command(
    name = "triplist",
    version,
    about = "Browse trips from a REST backend, filtered by region"
)]
struct Cli {
    /// Config file (default: <config_dir>/triplist/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Backend base URL, e.g. http://localhost:3000
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Initial region filter: all, europe or america
    #[arg(long, value_name = "REGION")]
    region: Option<Region>,

    /// Log file (default: <cache_dir>/triplist/triplist.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter directive, e.g. "debug" or "triplist=trace"
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let log_path = init_tracing(&config.logging)?;
    tracing::info!(
        base_url = %config.api.base_url,
        region = %config.ui.default_region,
        log = %log_path.display(),
        "Starting trip list"
    );

    let client = ReqwestClient::new(ClientTimeouts::from(&config.api))?;
    runtime::run(&config, Arc::new(client)).await
}

/// Config file first, then command-line overrides, then validation.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(region) = cli.region {
        config.ui.default_region = region;
    }
    if let Some(file) = &cli.log_file {
        config.logging.file = Some(file.clone());
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    config.validate()?;
    Ok(config)
}
