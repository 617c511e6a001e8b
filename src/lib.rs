//! # Canteen Backend
//!
//! Minimal canteen ordering service. Serves a static menu, authenticates
//! against a static credential list, and records placed orders in a durable
//! ledger. Everything is backed by flat JSON files on disk.
//!
//! # Routes
//!
//! - `GET /` - plaintext welcome
//! - `GET /menu` - full menu
//! - `GET /menu/:id` - one menu item, 404 when absent
//! - `POST /login` - credential check against the user file
//! - `POST /placeOrder` - append an order to the ledger
//! - `GET /order-history/:userId` - a user's orders, 404 when none
//!
//! # Storage
//!
//! `menu.json` and `user.json` are read-only and re-read per request.
//! `ordered.json` is the ledger: appends are serialized behind a mutex and
//! flushed atomically (temp file + rename), so concurrent orders cannot
//! lose each other and readers never see a torn file. See [`ledger`].
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod ledger;
pub mod models;
pub mod routes;
pub mod state;

use config::Config;
use routes::{
    login_handler, menu_handler, menu_item_handler, order_history_handler, place_order_handler,
    welcome_handler,
};
use state::AppState;

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(welcome_handler))
        .route("/menu", get(menu_handler))
        .route("/menu/:id", get(menu_item_handler))
        .route("/login", post(login_handler))
        .route("/placeOrder", post(place_order_handler))
        .route("/order-history/:userId", get(order_history_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new(Config::load());

    info!("Starting server...");
    let app = build_router(state.clone());

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
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
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
