//! Document manager microservice. Runs on its own port but shares the
//! process and database handle with the core API; core tables refer to its
//! records by `document_manager_guid`.

use crate::authz::{Caller, Role};
use crate::errors::ApiError;
use crate::storage;
use crate::web::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/documents", axum::routing::post(create_document))
        .route("/documents/{document_guid}", get(get_document))
        .route(
            "/import-now-submission-documents",
            axum::routing::post(create_import_document),
        )
        .route(
            "/import-now-submission-documents/{id}",
            get(get_import_document),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct CreateDocumentBody {
    file_display_name: String,
    full_storage_path: String,
}

async fn create_document(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<CreateDocumentBody>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::EditPermit, Role::MinespaceProponent])?;
    let doc = storage::create_document(
        &state.db,
        &body.file_display_name,
        &body.full_storage_path,
        &caller.subject,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(doc)))
}

async fn get_document(
    State(state): State<AppState>,
    caller: Caller,
    Path(document_guid): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::ViewAll, Role::MinespaceProponent])?;
    let doc = storage::get_document(&state.db, document_guid)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("document {document_guid} not found")))?;
    Ok(Json(doc))
}

#[derive(Debug, Deserialize)]
struct CreateImportBody {
    submission_document_url: String,
}

async fn create_import_document(
    State(state): State<AppState>,
    caller: Caller,
    Json(body): Json<CreateImportBody>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::EditPermit])?;
    let row =
        storage::create_import_now_submission_document(&state.db, &body.submission_document_url)
            .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

async fn get_import_document(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::ViewAll])?;
    let row = storage::get_import_now_submission_document(&state.db, id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("import submission document {id} not found"))
        })?;
    Ok(Json(row))
}
