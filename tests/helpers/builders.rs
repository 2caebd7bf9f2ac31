use chrono::Utc;
use galena::entities;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use uuid::Uuid;

pub const TEST_USER: &str = "test-user";

fn ts() -> i64 {
    Utc::now().timestamp()
}

pub async fn seed_mine(db: &DatabaseConnection) -> entities::mine::Model {
    let suffix = &Uuid::new_v4().simple().to_string()[..8];
    galena::storage::create_mine(db, &format!("BC-{suffix}"), "Test Mine", TEST_USER)
        .await
        .expect("Failed to create test mine")
}

pub async fn seed_permit(
    db: &DatabaseConnection,
    mine: &entities::mine::Model,
    status_code: &str,
) -> entities::permit::Model {
    galena::storage::create_permit(db, mine.mine_guid, status_code, TEST_USER)
        .await
        .expect("Failed to create test permit")
}

pub async fn seed_amendment(
    db: &DatabaseConnection,
    permit_id: i32,
    now_application_guid: Option<Uuid>,
) -> entities::permit_amendment::Model {
    galena::storage::create_permit_amendment(db, permit_id, "DFT", now_application_guid, TEST_USER)
        .await
        .expect("Failed to create test amendment")
}

pub async fn seed_mine_document(
    db: &DatabaseConnection,
    mine_guid: Uuid,
    name: &str,
) -> entities::mine_document::Model {
    galena::storage::create_mine_document(db, mine_guid, Uuid::new_v4(), name, TEST_USER)
        .await
        .expect("Failed to create test mine document")
}

/// Seed a NOW application with its identity row. When `imported` is false
/// the identity carries no `now_application_id`, matching a submission that
/// has not been pulled into the core tables yet.
pub async fn seed_now_application(
    db: &DatabaseConnection,
    mine_guid: Uuid,
    status_code: &str,
    type_code: &str,
    imported: bool,
) -> (
    entities::now_application_identity::Model,
    Option<entities::now_application::Model>,
) {
    let now = ts();
    let application = if imported {
        let app = entities::now_application::ActiveModel {
            now_application_status_code: Set(status_code.to_string()),
            status_updated_date: Set(None),
            notice_of_work_type_code: Set(type_code.to_string()),
            create_user: Set(TEST_USER.to_string()),
            create_timestamp: Set(now),
            update_user: Set(TEST_USER.to_string()),
            update_timestamp: Set(now),
            ..Default::default()
        };
        Some(app.insert(db).await.expect("Failed to create application"))
    } else {
        None
    };

    let identity = entities::now_application_identity::ActiveModel {
        now_application_guid: Set(Uuid::new_v4()),
        now_application_id: Set(application.as_ref().map(|a| a.now_application_id)),
        mine_guid: Set(mine_guid),
        create_user: Set(TEST_USER.to_string()),
        create_timestamp: Set(now),
        update_user: Set(TEST_USER.to_string()),
        update_timestamp: Set(now),
    };
    let identity = identity.insert(db).await.expect("Failed to create identity");

    (identity, application)
}

pub async fn seed_contact(
    db: &DatabaseConnection,
    now_application_id: i32,
    party_guid: Uuid,
    appt_type_code: &str,
) -> entities::now_party_appointment::Model {
    let now = ts();
    let contact = entities::now_party_appointment::ActiveModel {
        now_application_id: Set(now_application_id),
        party_guid: Set(party_guid),
        mine_party_appt_type_code: Set(appt_type_code.to_string()),
        create_user: Set(TEST_USER.to_string()),
        create_timestamp: Set(now),
        update_user: Set(TEST_USER.to_string()),
        update_timestamp: Set(now),
        ..Default::default()
    };
    contact.insert(db).await.expect("Failed to create contact")
}

pub async fn seed_permittee(
    db: &DatabaseConnection,
    permit_id: i32,
    party_guid: Uuid,
) -> entities::mine_party_appt::Model {
    let now = ts();
    let appt = entities::mine_party_appt::ActiveModel {
        mine_party_appt_guid: Set(Uuid::new_v4()),
        mine_guid: Set(None),
        permit_id: Set(Some(permit_id)),
        party_guid: Set(party_guid),
        mine_party_appt_type_code: Set("PMT".to_string()),
        start_date: Set(Some(Utc::now().date_naive())),
        end_date: Set(None),
        processed_by: Set(TEST_USER.to_string()),
        deleted_ind: Set(0),
        create_user: Set(TEST_USER.to_string()),
        create_timestamp: Set(now),
        update_user: Set(TEST_USER.to_string()),
        update_timestamp: Set(now),
        ..Default::default()
    };
    appt.insert(db).await.expect("Failed to create permittee")
}

pub async fn seed_activity_summary(
    db: &DatabaseConnection,
    now_application_id: i32,
    activity_type_code: &str,
) -> entities::activity_summary::Model {
    let now = ts();
    let summary = entities::activity_summary::ActiveModel {
        now_application_id: Set(now_application_id),
        activity_type_code: Set(activity_type_code.to_string()),
        create_user: Set(TEST_USER.to_string()),
        create_timestamp: Set(now),
        update_user: Set(TEST_USER.to_string()),
        update_timestamp: Set(now),
        ..Default::default()
    };
    summary.insert(db).await.expect("Failed to create summary")
}

pub async fn seed_activity_detail(db: &DatabaseConnection) -> entities::activity_detail::Model {
    let now = ts();
    let detail = entities::activity_detail::ActiveModel {
        activity_type_description: Set(Some("test detail".to_string())),
        create_user: Set(TEST_USER.to_string()),
        create_timestamp: Set(now),
        update_user: Set(TEST_USER.to_string()),
        update_timestamp: Set(now),
        ..Default::default()
    };
    detail.insert(db).await.expect("Failed to create detail")
}

pub async fn link_detail(db: &DatabaseConnection, summary_id: i32, detail_id: i32) {
    let xref = entities::activity_summary_detail_xref::ActiveModel {
        activity_summary_id: Set(summary_id),
        activity_detail_id: Set(detail_id),
    };
    xref.insert(db).await.expect("Failed to link detail");
}

pub async fn link_staging_area_detail(db: &DatabaseConnection, summary_id: i32, detail_id: i32) {
    let xref = entities::activity_summary_staging_area_detail_xref::ActiveModel {
        activity_summary_id: Set(summary_id),
        activity_detail_id: Set(detail_id),
    };
    xref.insert(db).await.expect("Failed to link staging area detail");
}

pub async fn link_building_detail(db: &DatabaseConnection, summary_id: i32, detail_id: i32) {
    let xref = entities::activity_summary_building_detail_xref::ActiveModel {
        activity_summary_id: Set(summary_id),
        activity_detail_id: Set(detail_id),
    };
    xref.insert(db).await.expect("Failed to link building detail");
}
