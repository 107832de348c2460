//! Options service backing the multi-select widget.
//!
//! Holds a read-only catalog of labeled options and answers case-insensitive
//! substring queries over their labels. Submissions are logged and discarded.
//!
//! # Endpoints
//!
//! | Method | Path | Query/Body | Response |
//! |---|---|---|---|
//! | GET | `/options` | `search` (required, empty matches all) | JSON array of options |
//! | POST | `/submit` | `{ "selectedOptions": ["..."] }` | `options received` |
//!
//! Cross-origin requests are allowed from any origin; the widget is expected
//! to be served from elsewhere.
//!
//! # Setup
//!
//! ```sh
//! RUST_PORT=3000 cargo run -p server
//! ```
//!
//! Point the service at a custom catalog with `OPTIONS_PATH`, a JSON array
//! of `{label, value, tags}` records.
//!
//! Smoke check:
//! ```sh
//! curl 'http://localhost:3000/options?search=hi'
//! curl -X POST -H 'Content-Type: application/json' \
//!     -d '{"selectedOptions":["hi_breaking_newsletter"]}' \
//!     http://localhost:3000/submit
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use routes::{options_handler, submit_handler};
use state::AppState;

/// The full router, split out from [`start_server`] so tests can drive it
/// in-process without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/options", get(options_handler))
        .route("/submit", post(submit_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().expect("Catalog misconfigured!");

    info!("Starting server...");
    let app = app(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
