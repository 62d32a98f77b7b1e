use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use earnings_core::{AggregationService, EarningService, NavigationService};
use serde::Deserialize;
use serde_json::json;

use crate::{
    errors::AppError,
    presentation::{monthly_chart, render_chart, yearly_chart, ChartView},
    server::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct NavigationParams {
    pub command: Option<String>,
}

/// Raw query parameters of `POST /add_earning`; parsing happens in the core validators.
#[derive(Debug, Default, Deserialize)]
pub struct AddEarningParams {
    pub date: Option<String>,
    pub amount: Option<String>,
}

fn monthly_view(state: &AppState, params: &NavigationParams) -> Result<ChartView, AppError> {
    let command = NavigationService::parse_command(params.command.as_deref());
    let cursor = state.navigation.advance(command)?;
    let view = AggregationService::aggregate_month(state.store.as_ref(), cursor)?;
    Ok(monthly_chart(&view))
}

fn yearly_view(state: &AppState, params: &NavigationParams) -> Result<ChartView, AppError> {
    let command = NavigationService::parse_command(params.command.as_deref());
    // The cursor moves even when the target year turns out to be empty.
    let cursor = state.navigation.shift_year(command)?;
    let (_, view) = AggregationService::aggregate_year(state.store.as_ref(), cursor, None)?;
    Ok(yearly_chart(&view))
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let chart = monthly_view(&state, &NavigationParams::default())?;
    Ok(Html(render_chart(&chart)?))
}

pub async fn monthly_page(
    State(state): State<AppState>,
    Query(params): Query<NavigationParams>,
) -> Result<Html<String>, AppError> {
    let chart = monthly_view(&state, &params)?;
    Ok(Html(render_chart(&chart)?))
}

pub async fn yearly_page(
    State(state): State<AppState>,
    Query(params): Query<NavigationParams>,
) -> Result<Html<String>, AppError> {
    let chart = yearly_view(&state, &params)?;
    Ok(Html(render_chart(&chart)?))
}

pub async fn monthly_json(
    State(state): State<AppState>,
    Query(params): Query<NavigationParams>,
) -> Result<Json<ChartView>, AppError> {
    Ok(Json(monthly_view(&state, &params)?))
}

pub async fn yearly_json(
    State(state): State<AppState>,
    Query(params): Query<NavigationParams>,
) -> Result<Json<ChartView>, AppError> {
    Ok(Json(yearly_view(&state, &params)?))
}

pub async fn add_earning(
    State(state): State<AppState>,
    Query(params): Query<AddEarningParams>,
) -> Result<Response, AppError> {
    EarningService::add_raw(
        state.store.as_ref(),
        params.date.as_deref(),
        params.amount.as_deref(),
    )?;

    Ok((
        StatusCode::CREATED,
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(json!({ "message": "Earning added successfully" })),
    )
        .into_response())
}
