//! HTTP server for the web UI.
//!
//! Provides three endpoints:
//! - `/` - the page (`?pais=<nome>` submits a lookup)
//! - `/api/lookup` - the same lookup as JSON
//! - `/health` - liveness check
//!
//! Every request is an isolated submission; failures are rendered, never fatal.

mod handlers;
mod page;
mod types;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::country::CountrySource;
use crate::flag::FlagSource;
use crate::translate::Translator;

use handlers::{health_handler, lookup_handler, page_handler};
pub use page::{page_view, PageRenderer};
pub use types::{AppState, FlagView, LookupParams, PageView, TableView};

/// Builds the application router.
pub fn router<T, C, F>(state: AppState<T, C, F>) -> Router
where
    T: Translator + 'static,
    C: CountrySource + 'static,
    F: FlagSource + 'static,
{
    Router::new()
        .route("/", get(page_handler::<T, C, F>))
        .route("/api/lookup", get(lookup_handler::<T, C, F>))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Binds `bind:port` and serves the web UI until Ctrl-C.
pub async fn start_server<T, C, F>(
    bind: &str,
    port: u16,
    state: AppState<T, C, F>,
) -> Result<(), anyhow::Error>
where
    T: Translator + 'static,
    C: CountrySource + 'static,
    F: FlagSource + 'static,
{
    let listener = TcpListener::bind(format!("{}:{}", bind, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}:{}: {}", bind, port, e))?;

    log::info!("Mundo em Dados listening on http://{}:{}/", bind, port);

    serve(listener, state, shutdown_signal()).await
}

/// Serves the router on an already bound listener until `shutdown` resolves.
pub async fn serve<T, C, F, S>(
    listener: TcpListener,
    state: AppState<T, C, F>,
    shutdown: S,
) -> Result<(), anyhow::Error>
where
    T: Translator + 'static,
    C: CountrySource + 'static,
    F: FlagSource + 'static,
    S: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}

