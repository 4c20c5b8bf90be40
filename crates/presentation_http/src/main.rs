//! Wayfinder HTTP Server
//!
//! Main entry point for the route planning API server.

use std::{sync::Arc, time::Duration};

use application::{Geocoder, GeocodingPort, PlaceImageService, RoutePlanner};
use infrastructure::{AppConfig, GraphHopperAdapter, ServerConfig, UnsplashAdapter};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "wayfinder_server=info,application=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    init_tracing(&config.server);

    info!("Wayfinder v{} starting...", env!("CARGO_PKG_VERSION"));

    config.validate()?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        graphhopper = %config.graphhopper.base_url,
        max_paths = config.graphhopper.max_paths,
        "Configuration loaded"
    );

    // GraphHopper serves both geocoding and routing
    let graphhopper = Arc::new(
        GraphHopperAdapter::new(&config.graphhopper)
            .map_err(|e| anyhow::anyhow!("Failed to initialize GraphHopper client: {e}"))?,
    );

    let geocoding: Arc<dyn GeocodingPort> = graphhopper.clone();
    let geocoder = Geocoder::new(geocoding, config.geocoder.to_geocoder_config());
    let planner = RoutePlanner::new(geocoder, graphhopper);

    let images = match config.unsplash_enabled() {
        Some(unsplash) => {
            let adapter = UnsplashAdapter::new(unsplash)
                .map_err(|e| anyhow::anyhow!("Failed to initialize Unsplash client: {e}"))?;
            info!("Place images enabled");
            Some(Arc::new(PlaceImageService::new(Arc::new(adapter))))
        },
        None => {
            info!("Place images disabled (no Unsplash access key)");
            None
        },
    };

    let state = AppState {
        planner: Arc::new(planner),
        images,
    };

    // Add middleware (order matters: last added = outermost)
    let mut app = routes::create_router(state).layer(TraceLayer::new_for_http());
    if config.server.cors_enabled {
        app = app.layer(cors_layer(&config.server));
    }

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Initialize tracing, honoring `RUST_LOG` and the configured log format
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let registry = tracing_subscriber::registry().with(filter);
    if server.json_logs() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    use axum::http::{HeaderValue, Method};

    if server.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
}
