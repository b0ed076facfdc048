//! HTTP API exposing folder queries and moves over a loaded snapshot.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use folder_hub_core::{Driver, ErrorKind, Folder, FolderDriver, FolderError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Shared application state. The snapshot is read-only; moves return a new
/// snapshot without replacing the served one.
#[derive(Clone)]
pub struct AppState {
    pub driver: Arc<Driver>,
}

#[derive(Serialize, Deserialize)]
pub struct MoveRequest {
    pub destination: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

/// Errors rendered as JSON. Folder errors take their status from their kind;
/// malformed path segments or bodies are reported as invalid arguments.
pub enum ApiError {
    Folder(FolderError),
    Path(PathRejection),
    Body(JsonRejection),
}

impl From<FolderError> for ApiError {
    fn from(err: FolderError) -> Self {
        Self::Folder(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(err: PathRejection) -> Self {
        Self::Path(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::Body(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (kind, error) = match self {
            ApiError::Folder(err) => (err.kind(), err.to_string()),
            ApiError::Path(err) => (ErrorKind::InvalidArgument, err.body_text()),
            ApiError::Body(err) => (ErrorKind::InvalidArgument, err.body_text()),
        };
        let status = match kind {
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidOperation => StatusCode::CONFLICT,
        };
        let body = ErrorResponse {
            error,
            kind: kind.as_str().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(driver: Arc<Driver>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/orgs/{org_id}/folders", get(list_folders))
        .route("/orgs/{org_id}/folders/{name}/children", get(child_folders))
        .route("/folders/{name}/move", post(move_folder))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { driver })
}

async fn list_folders(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<Folder>>, ApiError> {
    let Path(org_id) = path?;
    Ok(Json(state.driver.get_folders_by_org_id(org_id)))
}

async fn child_folders(
    State(state): State<AppState>,
    path: Result<Path<(Uuid, String)>, PathRejection>,
) -> Result<Json<Vec<Folder>>, ApiError> {
    let Path((org_id, name)) = path?;
    let children = state.driver.get_all_child_folders(org_id, &name)?;
    tracing::debug!(%org_id, %name, count = children.len(), "listed child folders");
    Ok(Json(children))
}

async fn move_folder(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<Vec<Folder>>, ApiError> {
    let Json(req) = body?;
    match state.driver.move_folder(&name, &req.destination) {
        Ok(folders) => {
            tracing::info!(%name, destination = %req.destination, "moved folder");
            Ok(Json(folders))
        }
        Err(err) => {
            tracing::warn!(%name, destination = %req.destination, "move rejected: {}", err);
            Err(err.into())
        }
    }
}
