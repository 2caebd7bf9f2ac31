mod helpers;

use galena::errors::GalenaError;
use galena::storage;
use helpers::builders;
use helpers::db::TestDb;
use uuid::Uuid;

#[tokio::test]
async fn test_register_and_fetch_document() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();

    let doc = storage::create_document(
        db,
        "application-map.pdf",
        "app/mines/1234/application-map.pdf",
        builders::TEST_USER,
    )
    .await
    .expect("create should succeed");

    assert_eq!(doc.file_display_name, "application-map.pdf");
    assert!(doc.upload_date > 0);

    let fetched = storage::get_document(db, doc.document_guid)
        .await
        .unwrap()
        .expect("document should exist");
    assert_eq!(fetched.full_storage_path, "app/mines/1234/application-map.pdf");

    let missing = storage::get_document(db, Uuid::new_v4()).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_document_name_is_required() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();

    let err = storage::create_document(db, "   ", "some/path", builders::TEST_USER)
        .await
        .unwrap_err();
    assert!(matches!(err, GalenaError::BadRequest(_)));
}

#[tokio::test]
async fn test_import_submission_document_lifecycle() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();

    let row = storage::create_import_now_submission_document(
        db,
        "https://submissions.example/documents/42",
    )
    .await
    .expect("create should succeed");

    assert_eq!(row.document_guid, None);
    assert_eq!(row.error, None);

    let fetched = storage::get_import_now_submission_document(db, row.import_now_submission_document_id)
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(
        fetched.submission_document_url,
        "https://submissions.example/documents/42"
    );

    let err = storage::create_import_now_submission_document(db, "").await.unwrap_err();
    assert!(matches!(err, GalenaError::BadRequest(_)));
}
