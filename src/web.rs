//! Core REST API: notices of departure, notice of work applications, and
//! the status transition endpoint. The document manager API is served from
//! its own port, see `docman`.

use crate::authz::{Caller, Role};
use crate::errors::ApiError;
use crate::settings::Settings;
use crate::storage;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use miette::IntoDiagnostic;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub db: DatabaseConnection,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/mines/{mine_guid}/notices-of-departure",
            get(list_nods).post(create_nod),
        )
        .route(
            "/notices-of-departure/{nod_guid}",
            get(get_nod).patch(update_nod).delete(delete_nod),
        )
        .route(
            "/notices-of-departure/{nod_guid}/documents",
            post(add_nod_document),
        )
        .route(
            "/notices-of-departure/{nod_guid}/documents/{nod_xref_guid}",
            axum::routing::delete(remove_nod_document),
        )
        .route("/now-applications/status-codes", get(list_status_codes))
        .route(
            "/now-applications/{application_guid}/status",
            put(update_now_status),
        )
        .route(
            "/now-applications/{application_guid}/activity-details",
            get(list_activity_details),
        )
        .with_state(state)
}

pub async fn serve(settings: Settings, db: DatabaseConnection) -> miette::Result<()> {
    let state = AppState {
        settings: Arc::new(settings),
        db,
    };

    let public_addr: SocketAddr = format!(
        "{}:{}",
        state.settings.server.host, state.settings.server.port
    )
    .parse()
    .map_err(|e| miette::miette!("bad listen addr: {e}"))?;

    // Start document manager API on separate port
    let docman_addr: SocketAddr = format!(
        "{}:{}",
        state.settings.server.host,
        state.settings.docman_port()
    )
    .parse()
    .map_err(|e| miette::miette!("bad docman addr: {e}"))?;

    let docman_router = crate::docman::router(state.clone());
    let docman_listener = tokio::net::TcpListener::bind(docman_addr)
        .await
        .into_diagnostic()?;
    tracing::info!(%docman_addr, "Document manager API listening");
    tokio::spawn(async move {
        axum::serve(docman_listener, docman_router)
            .await
            .expect("Document manager server failed");
    });

    tracing::info!(
        %public_addr,
        base_url = %state.settings.base_url(),
        "Core API listening"
    );
    let listener = tokio::net::TcpListener::bind(public_addr)
        .await
        .into_diagnostic()?;
    axum::serve(listener, router(state)).await.into_diagnostic()?;
    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct ListNodQuery {
    permit_guid: Option<Uuid>,
}

async fn list_nods(
    State(state): State<AppState>,
    caller: Caller,
    Path(mine_guid): Path<Uuid>,
    Query(q): Query<ListNodQuery>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::ViewAll, Role::MinespaceProponent])?;
    let records = storage::list_notices_of_departure(&state.db, mine_guid, q.permit_guid).await?;
    Ok(Json(json!({ "records": records })))
}

#[derive(Debug, Deserialize)]
struct CreateNodBody {
    permit_guid: Uuid,
    nod_title: String,
}

async fn create_nod(
    State(state): State<AppState>,
    caller: Caller,
    Path(mine_guid): Path<Uuid>,
    Json(body): Json<CreateNodBody>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::EditPermit, Role::MinespaceProponent])?;
    let nod = storage::create_notice_of_departure(
        &state.db,
        mine_guid,
        body.permit_guid,
        &body.nod_title,
        &caller.subject,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(nod)))
}

async fn get_nod(
    State(state): State<AppState>,
    caller: Caller,
    Path(nod_guid): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::ViewAll, Role::MinespaceProponent])?;
    let nod = storage::get_notice_of_departure(&state.db, nod_guid).await?;
    Ok(Json(nod))
}

#[derive(Debug, Deserialize)]
struct UpdateNodBody {
    nod_title: String,
}

async fn update_nod(
    State(state): State<AppState>,
    caller: Caller,
    Path(nod_guid): Path<Uuid>,
    Json(body): Json<UpdateNodBody>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::EditPermit, Role::MinespaceProponent])?;
    let nod =
        storage::update_nod_title(&state.db, nod_guid, &body.nod_title, &caller.subject).await?;
    Ok(Json(nod))
}

async fn delete_nod(
    State(state): State<AppState>,
    caller: Caller,
    Path(nod_guid): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::EditPermit])?;
    storage::delete_notice_of_departure(&state.db, nod_guid, &caller.subject).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_nod_document(
    State(state): State<AppState>,
    caller: Caller,
    Path(nod_guid): Path<Uuid>,
    Json(body): Json<storage::NewNodDocument>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::EditPermit, Role::MinespaceProponent])?;
    let doc = storage::add_nod_document(&state.db, nod_guid, body, &caller.subject).await?;
    Ok((StatusCode::CREATED, Json(doc)))
}

async fn remove_nod_document(
    State(state): State<AppState>,
    caller: Caller,
    Path((nod_guid, nod_xref_guid)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::EditPermit, Role::MinespaceProponent])?;
    storage::remove_nod_document(&state.db, nod_guid, nod_xref_guid, &caller.subject).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_status_codes(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::ViewAll])?;
    let records = storage::list_now_status_codes(&state.db).await?;
    Ok(Json(json!({ "records": records })))
}

#[derive(Debug, Deserialize)]
struct StatusUpdateBody {
    now_application_status_code: Option<String>,
    issue_date: Option<NaiveDate>,
    auth_end_date: Option<NaiveDate>,
}

async fn update_now_status(
    State(state): State<AppState>,
    caller: Caller,
    Path(application_guid): Path<Uuid>,
    Json(body): Json<StatusUpdateBody>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::EditPermit])?;
    let outcome = storage::transition_now_status(
        &state.db,
        application_guid,
        body.now_application_status_code.as_deref(),
        body.issue_date,
        body.auth_end_date,
        &caller.subject,
    )
    .await?;
    Ok(Json(outcome))
}

async fn list_activity_details(
    State(state): State<AppState>,
    caller: Caller,
    Path(application_guid): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    caller.require_any(&[Role::ViewAll])?;
    let records = storage::list_activity_details(&state.db, application_guid).await?;
    Ok(Json(json!({ "records": records })))
}
