mod helpers;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use galena::settings::Settings;
use galena::storage;
use galena::web::{router, AppState};
use helpers::builders;
use helpers::db::TestDb;
use std::sync::Arc;
use tower::util::ServiceExt;
use uuid::Uuid;

fn app(test_db: &TestDb) -> axum::Router {
    router(AppState {
        settings: Arc::new(Settings::default()),
        db: test_db.connection().clone(),
    })
}

fn get(uri: &str, roles: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-auth-subject", "api-test")
        .header("x-auth-roles", roles)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health_needs_no_caller() {
    let test_db = TestDb::new().await;
    let response = app(&test_db)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_missing_subject_is_unauthenticated() {
    let test_db = TestDb::new().await;
    let response = app(&test_db)
        .oneshot(
            Request::builder()
                .uri("/now-applications/status-codes")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_role_is_forbidden() {
    let test_db = TestDb::new().await;
    let response = app(&test_db)
        .oneshot(get("/now-applications/status-codes", "minespace_proponent"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_viewer_can_list_status_codes() {
    let test_db = TestDb::new().await;
    let response = app(&test_db)
        .oneshot(get("/now-applications/status-codes", "core_view_all"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_nod_over_http() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();
    let mine = builders::seed_mine(db).await;
    let permit = builders::seed_permit(db, &mine, "O").await;

    let body = serde_json::json!({
        "permit_guid": permit.permit_guid,
        "nod_title": "Departure filed over the API",
    });
    let request = Request::builder()
        .method("POST")
        .uri(format!("/mines/{}/notices-of-departure", mine.mine_guid))
        .header("content-type", "application/json")
        .header("x-auth-subject", "proponent@minespace")
        .header("x-auth-roles", "minespace_proponent")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app(&test_db).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let nods = storage::list_notices_of_departure(db, mine.mine_guid, None)
        .await
        .unwrap();
    assert_eq!(nods.len(), 1);
    assert_eq!(nods[0].nod_title, "Departure filed over the API");
}

#[tokio::test]
async fn test_proponent_cannot_delete_nod() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();
    let mine = builders::seed_mine(db).await;
    let permit = builders::seed_permit(db, &mine, "O").await;
    let nod = storage::create_notice_of_departure(
        db,
        mine.mine_guid,
        permit.permit_guid,
        "Protected",
        builders::TEST_USER,
    )
    .await
    .unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/notices-of-departure/{}", nod.nod_guid))
        .header("x-auth-subject", "proponent@minespace")
        .header("x-auth-roles", "minespace_proponent")
        .body(Body::empty())
        .unwrap();
    let response = app(&test_db).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_nod_maps_to_404() {
    let test_db = TestDb::new().await;
    let response = app(&test_db)
        .oneshot(get(
            &format!("/notices-of-departure/{}", Uuid::new_v4()),
            "core_view_all",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
