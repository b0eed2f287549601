use std::net::SocketAddr;
use std::sync::Arc;
use toy_store_rust::router::create_app_router;
use toy_store_rust::store::AppState;

/// Configures the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set, falling back to `info`.
fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() {
    setup_tracing();

    // Initialize application state; a missing or unreachable store leaves
    // the gateway disconnected instead of aborting startup.
    let state = Arc::new(AppState::from_env().await);

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Configure the server address (PORT env var, default 8000)
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server running on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
