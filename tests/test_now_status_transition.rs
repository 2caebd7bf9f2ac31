mod helpers;

use chrono::NaiveDate;
use galena::entities;
use galena::errors::GalenaError;
use galena::storage;
use helpers::builders;
use helpers::db::TestDb;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[tokio::test]
async fn test_approval_activates_permit_and_amendment() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();
    let mine = builders::seed_mine(db).await;
    let permit = builders::seed_permit(db, &mine, "D").await;
    let (identity, app) = builders::seed_now_application(db, mine.mine_guid, "REC", "PLA", true).await;
    let app = app.unwrap();
    builders::seed_amendment(db, permit.permit_id, Some(identity.now_application_guid)).await;

    let issue = date(2026, 3, 15);
    let auth_end = date(2031, 3, 15);
    let outcome = storage::transition_now_status(
        db,
        identity.now_application_guid,
        Some("AIA"),
        Some(issue),
        Some(auth_end),
        "inspector",
    )
    .await
    .expect("transition should succeed");

    assert_eq!(outcome.now_application_status_code, "AIA");
    assert_eq!(outcome.permit_no.as_deref(), Some(&*format!("P-{}", permit.permit_id)));

    let permit = storage::get_permit_by_guid(db, permit.permit_guid)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(permit.permit_status_code, "O");
    assert_eq!(permit.permit_no.as_deref(), Some(&*format!("P-{}", permit.permit_id)));

    let amendment = entities::PermitAmendment::find()
        .filter(
            entities::permit_amendment::Column::NowApplicationGuid
                .eq(identity.now_application_guid),
        )
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(amendment.permit_amendment_status_code, "ACT");
    assert_eq!(amendment.issue_date, Some(issue));
    assert_eq!(amendment.authorization_end_date, Some(auth_end));

    let app = entities::NowApplication::find_by_id(app.now_application_id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(app.now_application_status_code, "AIA");
    assert!(app.status_updated_date.is_some());
    assert_eq!(app.update_user, "inspector");
}

#[tokio::test]
async fn test_approval_appoints_first_permittee_and_contacts() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();
    let mine = builders::seed_mine(db).await;
    let permit = builders::seed_permit(db, &mine, "D").await;
    let (identity, app) = builders::seed_now_application(db, mine.mine_guid, "REC", "SAG", true).await;
    let app = app.unwrap();
    builders::seed_amendment(db, permit.permit_id, Some(identity.now_application_guid)).await;

    let permittee_party = Uuid::new_v4();
    let manager_party = Uuid::new_v4();
    builders::seed_contact(db, app.now_application_id, permittee_party, "PMT").await;
    builders::seed_contact(db, app.now_application_id, manager_party, "MMG").await;

    let outcome = storage::transition_now_status(
        db,
        identity.now_application_guid,
        Some("AIA"),
        Some(date(2026, 5, 1)),
        None,
        "inspector",
    )
    .await
    .unwrap();

    assert_eq!(outcome.appointments_created, 2);
    assert!(!outcome.permittee_changed);

    // Permittee appointment is permit-level
    let permittee = entities::MinePartyAppt::find()
        .filter(entities::mine_party_appt::Column::PartyGuid.eq(permittee_party))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(permittee.permit_id, Some(permit.permit_id));
    assert_eq!(permittee.mine_guid, None);
    assert_eq!(permittee.end_date, None);
    assert_eq!(permittee.processed_by, "inspector");

    // Other contacts become mine-level appointments
    let manager = entities::MinePartyAppt::find()
        .filter(entities::mine_party_appt::Column::PartyGuid.eq(manager_party))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(manager.mine_guid, Some(mine.mine_guid));
    assert_eq!(manager.permit_id, None);
    assert_eq!(manager.mine_party_appt_type_code, "MMG");
}

#[tokio::test]
async fn test_approval_ends_superseded_permittee_day_before_issue() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();
    let mine = builders::seed_mine(db).await;
    let permit = builders::seed_permit(db, &mine, "O").await;
    let (identity, app) = builders::seed_now_application(db, mine.mine_guid, "REC", "QCA", true).await;
    let app = app.unwrap();
    builders::seed_amendment(db, permit.permit_id, Some(identity.now_application_guid)).await;

    let incumbent_party = Uuid::new_v4();
    let incoming_party = Uuid::new_v4();
    let incumbent = builders::seed_permittee(db, permit.permit_id, incumbent_party).await;
    builders::seed_contact(db, app.now_application_id, incoming_party, "PMT").await;

    let issue = date(2026, 7, 10);
    let outcome = storage::transition_now_status(
        db,
        identity.now_application_guid,
        Some("AIA"),
        Some(issue),
        None,
        "inspector",
    )
    .await
    .unwrap();

    assert!(outcome.permittee_changed);
    assert_eq!(outcome.appointments_created, 1);

    let ended = entities::MinePartyAppt::find_by_id(incumbent.mine_party_appt_id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ended.end_date, Some(date(2026, 7, 9)));

    let active = entities::MinePartyAppt::find()
        .filter(entities::mine_party_appt::Column::PermitId.eq(permit.permit_id))
        .filter(entities::mine_party_appt::Column::EndDate.is_null())
        .all(db)
        .await
        .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].party_guid, incoming_party);
}

#[tokio::test]
async fn test_approval_keeps_unchanged_permittee() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();
    let mine = builders::seed_mine(db).await;
    let permit = builders::seed_permit(db, &mine, "O").await;
    let (identity, app) = builders::seed_now_application(db, mine.mine_guid, "REC", "PLA", true).await;
    let app = app.unwrap();
    builders::seed_amendment(db, permit.permit_id, Some(identity.now_application_guid)).await;

    let party = Uuid::new_v4();
    builders::seed_permittee(db, permit.permit_id, party).await;
    builders::seed_contact(db, app.now_application_id, party, "PMT").await;

    let outcome = storage::transition_now_status(
        db,
        identity.now_application_guid,
        Some("AIA"),
        Some(date(2026, 8, 1)),
        None,
        "inspector",
    )
    .await
    .unwrap();

    assert!(!outcome.permittee_changed);
    assert_eq!(outcome.appointments_created, 0);

    let appointments = entities::MinePartyAppt::find()
        .filter(entities::mine_party_appt::Column::PartyGuid.eq(party))
        .all(db)
        .await
        .unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].end_date, None);
}

#[tokio::test]
async fn test_approval_rejects_multiple_active_permittees() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();
    let mine = builders::seed_mine(db).await;
    let permit = builders::seed_permit(db, &mine, "O").await;
    let (identity, app) = builders::seed_now_application(db, mine.mine_guid, "REC", "PLA", true).await;
    let app = app.unwrap();
    builders::seed_amendment(db, permit.permit_id, Some(identity.now_application_guid)).await;

    builders::seed_permittee(db, permit.permit_id, Uuid::new_v4()).await;
    builders::seed_permittee(db, permit.permit_id, Uuid::new_v4()).await;
    builders::seed_contact(db, app.now_application_id, Uuid::new_v4(), "PMT").await;

    let err = storage::transition_now_status(
        db,
        identity.now_application_guid,
        Some("AIA"),
        Some(date(2026, 9, 1)),
        None,
        "inspector",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, GalenaError::Conflict(_)));
}

#[tokio::test]
async fn test_non_approval_change_only_updates_status() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();
    let mine = builders::seed_mine(db).await;
    let permit = builders::seed_permit(db, &mine, "D").await;
    let (identity, _app) = builders::seed_now_application(db, mine.mine_guid, "REC", "PLA", true).await;
    builders::seed_amendment(db, permit.permit_id, Some(identity.now_application_guid)).await;

    let outcome = storage::transition_now_status(
        db,
        identity.now_application_guid,
        Some("REF"),
        None,
        None,
        "inspector",
    )
    .await
    .unwrap();

    assert_eq!(outcome.now_application_status_code, "REF");
    assert_eq!(outcome.permit_no, None);

    let permit = storage::get_permit_by_guid(db, permit.permit_guid)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(permit.permit_status_code, "D");
    assert_eq!(permit.permit_no, None);
}

#[tokio::test]
async fn test_same_status_is_a_no_op() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();
    let mine = builders::seed_mine(db).await;
    let (identity, app) = builders::seed_now_application(db, mine.mine_guid, "REC", "PLA", true).await;
    let app = app.unwrap();

    let outcome = storage::transition_now_status(
        db,
        identity.now_application_guid,
        Some("REC"),
        None,
        None,
        "inspector",
    )
    .await
    .unwrap();
    assert_eq!(outcome.now_application_status_code, "REC");

    let app = entities::NowApplication::find_by_id(app.now_application_id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(app.status_updated_date, None);
    assert_eq!(app.update_user, builders::TEST_USER);
}

#[tokio::test]
async fn test_unknown_application_is_not_found() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();

    let err = storage::transition_now_status(db, Uuid::new_v4(), Some("AIA"), None, None, "x")
        .await
        .unwrap_err();
    assert!(matches!(err, GalenaError::NotFound(_)));
}

#[tokio::test]
async fn test_unimported_application_is_rejected() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();
    let mine = builders::seed_mine(db).await;
    let (identity, _) = builders::seed_now_application(db, mine.mine_guid, "REC", "PLA", false).await;

    let err = storage::transition_now_status(
        db,
        identity.now_application_guid,
        Some("AIA"),
        None,
        None,
        "inspector",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, GalenaError::NotImplemented(_)));
}

#[tokio::test]
async fn test_approval_ignores_soft_deleted_permit() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();
    let mine = builders::seed_mine(db).await;
    let permit = builders::seed_permit(db, &mine, "D").await;
    let (identity, _app) = builders::seed_now_application(db, mine.mine_guid, "REC", "PLA", true).await;
    builders::seed_amendment(db, permit.permit_id, Some(identity.now_application_guid)).await;

    let mut deleted: galena::entities::permit::ActiveModel = permit.clone().into();
    deleted.deleted_ind = Set(1);
    deleted.update(db).await.unwrap();

    let err = storage::transition_now_status(
        db,
        identity.now_application_guid,
        Some("AIA"),
        Some(date(2026, 2, 1)),
        None,
        "inspector",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, GalenaError::NotFound(_)));

    // The deleted permit must not be touched
    let row = entities::Permit::find_by_id(permit.permit_id)
        .one(db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.permit_status_code, "D");
    assert_eq!(row.permit_no, None);
}

#[tokio::test]
async fn test_approval_without_amendment_is_not_found() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();
    let mine = builders::seed_mine(db).await;
    let (identity, _) = builders::seed_now_application(db, mine.mine_guid, "REC", "PLA", true).await;

    let err = storage::transition_now_status(
        db,
        identity.now_application_guid,
        Some("AIA"),
        Some(date(2026, 1, 1)),
        None,
        "inspector",
    )
    .await
    .unwrap_err();
    assert!(matches!(err, GalenaError::NotFound(_)));
}

#[tokio::test]
async fn test_status_codes_listed_in_display_order() {
    let test_db = TestDb::new().await;
    let db = test_db.connection();

    let codes = storage::list_now_status_codes(db).await.unwrap();
    let code_list: Vec<&str> = codes
        .iter()
        .map(|c| c.now_application_status_code.as_str())
        .collect();
    assert_eq!(code_list, vec!["REC", "REF", "PEV", "AIA", "WDN", "REJ"]);
}
