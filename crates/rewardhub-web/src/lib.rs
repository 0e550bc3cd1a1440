//! RewardHub Web Server
//!
//! Axum-based web server for the user, company and admin dashboards.

pub mod routes;
pub mod state;

use std::path::Path;

use anyhow::Context;
use axum::{extract::State, routing::get, Router};
use rewardhub_core::{Page, ServerConfig};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// One row of the route table printed by `rewardhub routes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    pub path: String,
    pub behaviour: String,
    /// Dashboard the route renders, if any.
    pub page: Option<Page>,
}

/// Behaviour bound to each route, in registration order.
pub fn route_table() -> Vec<RouteInfo> {
    let mut table = vec![RouteInfo {
        path: "/".to_string(),
        behaviour: format!("redirect -> {}", Page::DEFAULT.path()),
        page: None,
    }];
    table.extend(Page::ALL.iter().map(|page| RouteInfo {
        path: page.path().to_string(),
        behaviour: format!("render {} (page={})", page.template(), page.as_str()),
        page: Some(*page),
    }));
    table.push(RouteInfo {
        path: "/static/{*path}".to_string(),
        behaviour: "serve file from static directory".to_string(),
        page: None,
    });
    table
}

/// Create the application router.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let mut router = Router::new().route("/", get(routes::dashboard::index));
    for page in Page::ALL {
        router = router.route(
            page.path(),
            get(move |state: State<AppState>| routes::dashboard::show(state, page)),
        );
    }

    router
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the listener, resolving `host` through the system resolver.
pub async fn bind_listener(config: &ServerConfig) -> anyhow::Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))
}

/// Run the web server until Ctrl+C.
pub async fn run_server(config: &ServerConfig) -> anyhow::Result<()> {
    let app = create_router(AppState::new(config), &config.static_dir);

    let listener = bind_listener(config).await?;
    let addr = listener.local_addr()?;
    tracing::info!(debug = config.debug, "Web server listening on http://{}", addr);

    if !config.static_dir.is_dir() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "Static directory not found; /static requests will return 404"
        );
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
