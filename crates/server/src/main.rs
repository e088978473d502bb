//! `bridge-server`: serve the Bridge registry over HTTP(S).

use std::path::PathBuf;
use std::process::ExitCode;

use bridge_server::{serve, ServerConfig, ServerError};
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bridge-server", version, about = "Namespaced resource registry")]
struct Cli {
    /// TOML config file, applied before the environment.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:5000.
    #[arg(long)]
    bind: Option<String>,

    /// Database URL, e.g. sqlite:///bridge.db.
    #[arg(long)]
    database_url: Option<String>,

    /// Verbose logging.
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn resolve(self) -> Result<ServerConfig, ServerError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        config.apply_env();
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(url) = self.database_url {
            config.database_url = url;
        }
        if self.debug {
            config.debug = true;
        }
        Ok(config)
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        Err(_) => EnvFilter::new(default),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Cli::parse().resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("bridge-server: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.debug);
    tracing::debug!(target: "bridge::server", ?config, "configuration resolved");

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(target: "bridge::server", error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}
