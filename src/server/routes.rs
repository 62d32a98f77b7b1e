use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{handlers, AppState};

/// HTML chart pages and the earning submission endpoint.
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home))
        .route("/monthly", get(handlers::monthly_page))
        .route("/yearly", get(handlers::yearly_page))
        .route("/add_earning", post(handlers::add_earning))
}

/// The same chart payloads as JSON.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/monthly", get(handlers::monthly_json))
        .route("/api/yearly", get(handlers::yearly_json))
}
