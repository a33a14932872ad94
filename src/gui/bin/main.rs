use clap::Parser;
use tracing::info;
use shelf::core::controller::{AppState, build_router};
use shelf::core::domain::{Configuration, DEFAULT_COVER, IdPolicy};
use shelf::gateway::GatewayPublisherVia;
use shelf::utils::logs::setup_tracing;

#[derive(Debug, Parser)]
#[command(name = "shelf", about = "Serves the book-tracking widget on a local address")]
struct Args {
    #[arg(long, env = "SHELF_HTTP_ADDR", default_value = "127.0.0.1:8080")]
    http_addr: String,

    #[arg(long, env = "SHELF_NAME", default_value = "My Library")]
    name: String,

    #[arg(long, env = "SHELF_PLACEHOLDER_COVER", default_value = DEFAULT_COVER)]
    placeholder_cover: String,

    #[arg(long, env = "SHELF_ID_POLICY", value_enum, default_value_t = IdPolicy::Unique)]
    id_policy: IdPolicy,

    #[arg(long, env = "SHELF_EVENTS", value_enum, default_value_t = GatewayPublisherVia::Logs)]
    events: GatewayPublisherVia,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    let args = Args::parse();

    let config = Configuration::new(args.name.as_str())
        .with_placeholder_cover(args.placeholder_cover.as_str())
        .with_id_policy(args.id_policy)
        .with_events(args.events);
    let state = AppState::new(config).await?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&args.http_addr).await?;
    info!(addr = %listener.local_addr()?, "shelf listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
