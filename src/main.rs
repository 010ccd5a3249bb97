use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;

/// Serve the payroll engine over HTTP.
#[derive(Debug, Parser)]
#[command(name = "payroll-engine", version, about)]
struct Args {
    /// Directory holding jurisdiction.yaml and settings/*.yaml.
    #[arg(long, default_value = "./config/kenya")]
    config_dir: PathBuf,

    /// Port to listen on.
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match ConfigLoader::load(&args.config_dir) {
        Ok(config) => config,
        Err(e) => {
            error!(
                config_dir = %args.config_dir.display(),
                error = %e,
                "Failed to load configuration"
            );
            std::process::exit(1);
        }
    };

    let app = create_router(AppState::new(config));
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(%addr, "Payroll engine listening");
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
