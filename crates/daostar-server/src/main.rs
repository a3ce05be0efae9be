use std::{net::SocketAddr, sync::Arc};

use daostar::{Gateway, NetworkRegistry};
use tokio::net::TcpListener;
use tracing::{error, info};

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let gateway =
        Gateway::new(NetworkRegistry::aragon_osx()).expect("Failed to build HTTP client");

    let router = daostar_server::create_router(Arc::new(gateway));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await.expect("Failed to bind port");

    info!("Listening on port {}", addr.port());

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
    }
}
