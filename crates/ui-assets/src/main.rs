use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::{Json, Router, routing::get};
use clap::Parser;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ui_assets::{AssetsConfig, StaticAssetServer};

#[derive(Parser, Debug)]
#[command(name = "ui-assets")]
#[command(about = "Serve a built single-page UI with entry-document fallback")]
#[command(version)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "UI_ASSETS_PORT", default_value = "8080")]
    port: u16,

    /// Address to bind to
    #[arg(short, long, env = "UI_ASSETS_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Directory holding the built UI (overrides the config file)
    #[arg(short, long, env = "UI_ASSETS_ROOT")]
    root: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, env = "UI_ASSETS_VERBOSE")]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long, env = "UI_ASSETS_CONFIG")]
    config: Option<PathBuf>,
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "ui_assets=debug,tower_http=debug"
    } else {
        "ui_assets=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config from file if provided, otherwise use defaults
    let mut config = match &cli.config {
        Some(path) => AssetsConfig::from_file(path)?,
        None => AssetsConfig::default(),
    };
    if let Some(root) = cli.root {
        config.root = root;
    }

    // Fail before binding if the UI build is missing
    let assets = StaticAssetServer::from_config(&config)
        .context("static assets are misconfigured, refusing to start")?;

    // Build router
    let app = assets
        .register_routes(Router::new().route("/health", get(health)))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = format!("{}:{}", cli.bind, cli.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", cli.bind, cli.port))?;
    info!("Starting ui-assets on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
