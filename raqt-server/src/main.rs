use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use raqt_html::{HtmlOptions, HtmlRenderer};
use raqt_server::{AppState, ServerConfig, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Serve the Risk Analysis Quality Test survey.
#[derive(Debug, Parser)]
#[command(name = "raqt-server", version, about)]
struct Cli {
    /// Config file, merged over ./raqt.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides configuration)
    #[arg(short, long)]
    port: Option<u16>,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    let renderer = HtmlRenderer::new(HtmlOptions::new().with_title(&config.title));
    let state = AppState::new(
        raqt::aqt(),
        renderer,
        Duration::from_secs(config.session_ttl_secs),
    );
    let app = create_router(state);

    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Survey is being served at http://{address}");
    println!("Serving the survey at http://{address}. Press Ctrl+C to stop.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {err}");
    }
}
