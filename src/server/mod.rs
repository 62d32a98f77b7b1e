mod handlers;
mod routes;

pub use handlers::{AddEarningParams, NavigationParams};

use std::sync::Arc;

use axum::{routing::get, Router};
use earnings_config::Config;
use earnings_core::{Clock, NavigationState, RecordStore};

use crate::errors::AppError;

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub navigation: Arc<NavigationState>,
}

impl AppState {
    /// State whose cursor starts at the clock's current month.
    pub fn new(store: Arc<dyn RecordStore>, clock: &dyn Clock) -> Self {
        Self {
            store,
            navigation: Arc::new(NavigationState::starting_now(clock)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(routes::page_routes())
        .merge(routes::api_routes())
        .with_state(state)
}

/// Binds the configured address and serves until the process is stopped.
pub async fn run_server(config: &Config, state: AppState) -> Result<(), AppError> {
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");

    axum::serve(listener, router(state)).await?;

    Ok(())
}
