//! HTTP API: one endpoint per dashboard view.
//!
//! Each view computes its own result from the shared dataset snapshot, so
//! views are independent: an error in one response never blocks the other
//! four. Empty result sets are valid 200 responses; rendering the "no
//! data for this selection" state is the consumer's job.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::debug;

use chargescope_query::export::{self, ExportError};
use chargescope_query::{aggregate, filter_sessions, summarize};
use chargescope_storage::{DatasetStore, StorageError};
use chargescope_types::ChargerType;

use crate::params::{BadParam, FilterParams, ResponseFormat};

pub struct AppState {
    pub store: Arc<DatasetStore>,
}

pub fn router(store: Arc<DatasetStore>) -> Router {
    let state = Arc::new(AppState { store });
    Router::new()
        .route("/api/meta", get(meta))
        .route("/api/summary", get(summary))
        .route("/api/events", get(events))
        .route("/api/views/utilization", get(utilization))
        .route("/api/views/wait-times", get(wait_times))
        .route("/api/views/busiest", get(busiest))
        .route("/api/views/revenue-cost", get(revenue_cost))
        .route("/api/views/queue-capacity", get(queue_capacity))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub enum ApiError {
    BadRequest(String),
    Data(StorageError),
    Export(ExportError),
}

impl From<BadParam> for ApiError {
    fn from(e: BadParam) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Export(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Data(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Export(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

fn csv_response(filename: &str, body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// The material the sidebar widgets are built from.
async fn meta(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let dataset = state.store.dataset().map_err(ApiError::Data)?;
    let span = dataset.date_span();
    Ok(Json(json!({
        "regions": dataset.regions(),
        "charger_types": ChargerType::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        "start": span.map(|s| s.0),
        "end": span.map(|s| s.1),
        "stations": dataset.stations.len(),
        "sessions": dataset.sessions.len(),
    }))
    .into_response())
}

async fn summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let dataset = state.store.dataset().map_err(ApiError::Data)?;
    let selection = params.selection(&dataset)?;
    let subset = filter_sessions(&dataset, &selection);
    debug!("summary over {} sessions", subset.len());
    let result = summarize(&subset);
    match params.format()? {
        ResponseFormat::Json => Ok(Json(result).into_response()),
        ResponseFormat::Csv => {
            let body = export::csv_string(|buf| export::write_summary(buf, &result))?;
            Ok(csv_response("summary.csv", body))
        }
    }
}

async fn events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let dataset = state.store.dataset().map_err(ApiError::Data)?;
    let selection = params.selection(&dataset)?;
    let in_range: Vec<_> =
        dataset.events.iter().filter(|e| selection.contains_day(e.date)).cloned().collect();
    match params.format()? {
        ResponseFormat::Json => Ok(Json(in_range).into_response()),
        ResponseFormat::Csv => {
            let body = export::csv_string(|buf| export::write_events(buf, &in_range))?;
            Ok(csv_response("events.csv", body))
        }
    }
}

async fn utilization(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let dataset = state.store.dataset().map_err(ApiError::Data)?;
    let selection = params.selection(&dataset)?;
    let subset = filter_sessions(&dataset, &selection);
    let rows = aggregate::utilization_rollup(&dataset, &subset);
    match params.format()? {
        ResponseFormat::Json => Ok(Json(rows).into_response()),
        ResponseFormat::Csv => {
            let body = export::csv_string(|buf| export::write_utilization(buf, &rows))?;
            Ok(csv_response("utilization.csv", body))
        }
    }
}

async fn wait_times(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let dataset = state.store.dataset().map_err(ApiError::Data)?;
    let selection = params.selection(&dataset)?;
    let subset = filter_sessions(&dataset, &selection);
    let series = aggregate::wait_time_series(&dataset, &subset, &selection);
    match params.format()? {
        ResponseFormat::Json => Ok(Json(series).into_response()),
        ResponseFormat::Csv => {
            let body = export::csv_string(|buf| export::write_wait_times(buf, &series))?;
            Ok(csv_response("wait_times.csv", body))
        }
    }
}

async fn busiest(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let dataset = state.store.dataset().map_err(ApiError::Data)?;
    let selection = params.selection(&dataset)?;
    let subset = filter_sessions(&dataset, &selection);
    let ranked = aggregate::busiest_stations(&dataset, &subset);
    match params.format()? {
        ResponseFormat::Json => Ok(Json(ranked).into_response()),
        ResponseFormat::Csv => {
            let body = export::csv_string(|buf| export::write_busiest(buf, &ranked))?;
            Ok(csv_response("busiest_stations.csv", body))
        }
    }
}

async fn revenue_cost(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let dataset = state.store.dataset().map_err(ApiError::Data)?;
    let selection = params.selection(&dataset)?;
    let subset = filter_sessions(&dataset, &selection);
    let rows = aggregate::revenue_vs_cost(&dataset, &subset);
    match params.format()? {
        ResponseFormat::Json => Ok(Json(rows).into_response()),
        ResponseFormat::Csv => {
            let body = export::csv_string(|buf| export::write_revenue_cost(buf, &rows))?;
            Ok(csv_response("revenue_vs_cost.csv", body))
        }
    }
}

async fn queue_capacity(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Response, ApiError> {
    let dataset = state.store.dataset().map_err(ApiError::Data)?;
    let selection = params.selection(&dataset)?;
    let subset = filter_sessions(&dataset, &selection);
    let rows = aggregate::queue_capacity(&dataset, &subset);
    match params.format()? {
        ResponseFormat::Json => Ok(Json(rows).into_response()),
        ResponseFormat::Csv => {
            let body = export::csv_string(|buf| export::write_queue_capacity(buf, &rows))?;
            Ok(csv_response("queue_capacity.csv", body))
        }
    }
}
