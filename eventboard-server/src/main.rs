mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use clap::Parser;
use eventboard_core::{AppConfig, AppwriteGateway, EventGateway, MemoryGateway};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::state::AppState;

const DEFAULT_PORT: u16 = 4096;

#[derive(Parser)]
#[command(name = "eventboard-server")]
#[command(about = "Serve the event board as a JSON API", long_about = None)]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Keep events in memory instead of the hosted collection
    #[arg(long)]
    offline: bool,

    /// Base URL of the public event pages (overrides the configured one)
    #[arg(long)]
    public_url: Option<Url>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let (gateway, public_url): (Arc<dyn EventGateway>, Url) = if args.offline {
        tracing::info!("offline mode, events are kept in memory");
        let public_url = match args.public_url {
            Some(url) => url,
            None => Url::parse(eventboard_core::constants::DEFAULT_PUBLIC_URL)?,
        };
        (Arc::new(MemoryGateway::new()), public_url)
    } else {
        let config = AppConfig::load()?;
        tracing::info!(endpoint = %config.endpoint, collection = %config.collection_id, "using hosted collection");
        let gateway = AppwriteGateway::new(&config)?;
        (
            Arc::new(gateway),
            args.public_url.unwrap_or(config.public_url),
        )
    };

    let state = AppState::new(gateway, public_url);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::events::router())
        .merge(routes::meta::router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("eventboard-server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
