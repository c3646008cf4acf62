//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::domain::{Station, StationId, ValidationError};
use crate::repository::RepositoryError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(create_station))
        .route(
            "/stations/:id",
            get(get_station).put(update_station).delete(delete_station),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<Station>> {
    let stations = state.stations.get_all().await;
    debug!(count = stations.len(), "listed stations");
    Json(stations)
}

/// Fetch one station.
///
/// Ids that cannot name a station (below 1, or not an integer at all) are
/// answered with 404 without touching the repository.
async fn get_station(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Station>, AppError> {
    let id = parse_id(&raw_id)?;
    let station = state.stations.get(id).await?;
    Ok(Json(station))
}

/// Create a station under a freshly assigned id.
async fn create_station(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let draft = parse_body(&body)?.into_draft()?;
    let station = state.stations.add(draft).await?;

    info!(id = %station.id, call_sign = %station.call_sign, "created station");

    let location = format!("/stations/{}", station.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(station),
    )
        .into_response())
}

/// Replace the fields of an existing station.
///
/// The path id is authoritative; an `id` in the body is ignored.
async fn update_station(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let draft = parse_body(&body)?.into_draft()?;
    let id = parse_id(&raw_id)?;
    state.stations.update(id, draft).await?;

    info!(id = %id, "updated station");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a station.
///
/// Always answers 204 when the station is gone afterwards, whether or not it
/// existed beforehand.
async fn delete_station(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let Ok(id) = parse_id(&raw_id) else {
        debug!(id = %raw_id, "delete of invalid id, nothing to do");
        return Ok(StatusCode::NO_CONTENT);
    };

    match state.stations.delete(id).await {
        Ok(()) => info!(id = %id, "deleted station"),
        Err(RepositoryError::NotFound(_)) => debug!(id = %id, "station already absent"),
        Err(e) => return Err(e.into()),
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Parse a path id. Anything that names no station is a 404.
fn parse_id(raw_id: &str) -> Result<StationId, AppError> {
    let value: i64 = raw_id.parse().map_err(|_| AppError::NotFound {
        message: format!("invalid station id {raw_id:?}: not an integer"),
    })?;

    StationId::parse(value).map_err(|e| AppError::NotFound {
        message: e.to_string(),
    })
}

/// Parse a write body regardless of content type.
fn parse_body(body: &[u8]) -> Result<StationBody, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(bytes = body.len(), error = %e, "unparseable station body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Validation(ValidationError),
    NotFound { message: String },
    Internal { message: String },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            RepositoryError::IdsExhausted => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(err) => {
                warn!(status = %StatusCode::BAD_REQUEST, error = %err, "rejected station");
                let body = Json(ValidationProblem::from_error(&err));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::BadRequest { message } => {
                warn!(status = %StatusCode::BAD_REQUEST, %message, "bad request");
                error_response(StatusCode::BAD_REQUEST, message)
            }
            AppError::NotFound { message } => {
                warn!(status = %StatusCode::NOT_FOUND, %message, "not found");
                error_response(StatusCode::NOT_FOUND, message)
            }
            AppError::Internal { message } => {
                error!(status = %StatusCode::INTERNAL_SERVER_ERROR, %message, "internal error");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}
