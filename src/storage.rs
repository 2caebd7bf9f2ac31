use crate::entities;
use crate::entities::nod_document_xref::DocumentType;
use crate::errors::GalenaError;
use crate::settings::Database as DbCfg;
use chrono::{Days, NaiveDate, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PERMIT_STATUS_DRAFT: &str = "D";
pub const PERMIT_STATUS_OPEN: &str = "O";
pub const AMENDMENT_STATUS_ACTIVE: &str = "ACT";
pub const NOW_STATUS_APPROVED: &str = "AIA";
pub const APPT_TYPE_PERMITTEE: &str = "PMT";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeOfDeparture {
    pub nod_guid: Uuid,
    pub mine_guid: Uuid,
    pub permit_guid: Uuid,
    pub nod_title: String,
    pub documents: Vec<NodDocument>,
    pub create_timestamp: i64,
    pub update_timestamp: i64,
}

/// Document attached to a Notice of Departure. `mine_guid`,
/// `document_manager_guid` and `document_name` are read-only fields proxied
/// from the linked mine_document row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodDocument {
    pub nod_xref_guid: Uuid,
    pub document_type: DocumentType,
    pub mine_document_guid: Uuid,
    pub mine_guid: Uuid,
    pub document_manager_guid: Uuid,
    pub document_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewNodDocument {
    /// Attach an existing mine_document...
    pub mine_document_guid: Option<Uuid>,
    /// ...or register a new one inline.
    pub document_manager_guid: Option<Uuid>,
    pub document_name: Option<String>,
    #[serde(default)]
    pub document_type: DocumentType,
}

/// Outcome of a Notice of Work status transition, reported back to the
/// caller for audit logging.
#[derive(Debug, Clone, Serialize)]
pub struct StatusTransition {
    pub now_application_guid: Uuid,
    pub now_application_status_code: String,
    pub permit_no: Option<String>,
    pub permittee_changed: bool,
    pub appointments_created: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityDetailView {
    #[serde(flatten)]
    pub detail: entities::activity_detail::Model,
    /// Derived from whichever summary xref links the detail; null when the
    /// detail is orphaned.
    pub activity_type_code: Option<String>,
}

pub async fn init(cfg: &DbCfg) -> Result<DatabaseConnection, GalenaError> {
    let db = Database::connect(&cfg.url).await?;
    Ok(db)
}

fn now_ts() -> i64 {
    Utc::now().timestamp()
}

// ---------- mines, permits, documents (creation used by seeding and tests) ----------

pub async fn create_mine(
    db: &DatabaseConnection,
    mine_no: &str,
    mine_name: &str,
    user: &str,
) -> Result<entities::mine::Model, GalenaError> {
    let ts = now_ts();
    let mine = entities::mine::ActiveModel {
        mine_guid: Set(Uuid::new_v4()),
        mine_no: Set(mine_no.to_string()),
        mine_name: Set(mine_name.to_string()),
        deleted_ind: Set(0),
        create_user: Set(user.to_string()),
        create_timestamp: Set(ts),
        update_user: Set(user.to_string()),
        update_timestamp: Set(ts),
    };
    Ok(mine.insert(db).await?)
}

pub async fn get_mine(
    db: &DatabaseConnection,
    mine_guid: Uuid,
) -> Result<Option<entities::mine::Model>, GalenaError> {
    use entities::mine::{Column, Entity};
    Ok(Entity::find()
        .filter(Column::MineGuid.eq(mine_guid))
        .filter(Column::DeletedInd.eq(0))
        .one(db)
        .await?)
}

pub async fn create_permit(
    db: &DatabaseConnection,
    mine_guid: Uuid,
    status_code: &str,
    user: &str,
) -> Result<entities::permit::Model, GalenaError> {
    let ts = now_ts();
    let permit = entities::permit::ActiveModel {
        permit_guid: Set(Uuid::new_v4()),
        mine_guid: Set(mine_guid),
        permit_no: Set(None),
        permit_status_code: Set(status_code.to_string()),
        deleted_ind: Set(0),
        create_user: Set(user.to_string()),
        create_timestamp: Set(ts),
        update_user: Set(user.to_string()),
        update_timestamp: Set(ts),
        ..Default::default()
    };
    Ok(permit.insert(db).await?)
}

pub async fn get_permit_by_guid(
    db: &DatabaseConnection,
    permit_guid: Uuid,
) -> Result<Option<entities::permit::Model>, GalenaError> {
    use entities::permit::{Column, Entity};
    Ok(Entity::find()
        .filter(Column::PermitGuid.eq(permit_guid))
        .filter(Column::DeletedInd.eq(0))
        .one(db)
        .await?)
}

pub async fn create_permit_amendment(
    db: &DatabaseConnection,
    permit_id: i32,
    status_code: &str,
    now_application_guid: Option<Uuid>,
    user: &str,
) -> Result<entities::permit_amendment::Model, GalenaError> {
    let ts = now_ts();
    let amendment = entities::permit_amendment::ActiveModel {
        permit_amendment_guid: Set(Uuid::new_v4()),
        permit_id: Set(permit_id),
        permit_amendment_status_code: Set(status_code.to_string()),
        issue_date: Set(None),
        authorization_end_date: Set(None),
        now_application_guid: Set(now_application_guid),
        deleted_ind: Set(0),
        create_user: Set(user.to_string()),
        create_timestamp: Set(ts),
        update_user: Set(user.to_string()),
        update_timestamp: Set(ts),
        ..Default::default()
    };
    Ok(amendment.insert(db).await?)
}

pub async fn create_mine_document(
    db: &DatabaseConnection,
    mine_guid: Uuid,
    document_manager_guid: Uuid,
    document_name: &str,
    user: &str,
) -> Result<entities::mine_document::Model, GalenaError> {
    let ts = now_ts();
    let doc = entities::mine_document::ActiveModel {
        mine_document_guid: Set(Uuid::new_v4()),
        mine_guid: Set(mine_guid),
        document_manager_guid: Set(document_manager_guid),
        document_name: Set(document_name.to_string()),
        deleted_ind: Set(0),
        create_user: Set(user.to_string()),
        create_timestamp: Set(ts),
        update_user: Set(user.to_string()),
        update_timestamp: Set(ts),
    };
    Ok(doc.insert(db).await?)
}

// ---------- notices of departure ----------

/// Titles are bounded at 50 characters (not bytes), matching the column
/// length.
fn validate_nod_title(nod_title: &str) -> Result<&str, GalenaError> {
    let title = nod_title.trim();
    if title.is_empty() {
        return Err(GalenaError::BadRequest("nod_title must not be empty".into()));
    }
    if title.chars().count() > 50 {
        return Err(GalenaError::BadRequest(
            "nod_title must be 50 characters or fewer".into(),
        ));
    }
    Ok(title)
}

pub async fn create_notice_of_departure(
    db: &DatabaseConnection,
    mine_guid: Uuid,
    permit_guid: Uuid,
    nod_title: &str,
    user: &str,
) -> Result<NoticeOfDeparture, GalenaError> {
    let title = validate_nod_title(nod_title)?;

    let mine = get_mine(db, mine_guid)
        .await?
        .ok_or_else(|| GalenaError::NotFound(format!("mine {mine_guid} not found")))?;
    let permit = get_permit_by_guid(db, permit_guid)
        .await?
        .ok_or_else(|| GalenaError::NotFound(format!("permit {permit_guid} not found")))?;
    if permit.mine_guid != mine.mine_guid {
        return Err(GalenaError::BadRequest(
            "permit does not belong to this mine".into(),
        ));
    }

    let ts = now_ts();
    let nod = entities::notice_of_departure::ActiveModel {
        nod_guid: Set(Uuid::new_v4()),
        mine_guid: Set(mine.mine_guid),
        permit_guid: Set(permit.permit_guid),
        nod_title: Set(title.to_string()),
        deleted_ind: Set(0),
        create_user: Set(user.to_string()),
        create_timestamp: Set(ts),
        update_user: Set(user.to_string()),
        update_timestamp: Set(ts),
    };
    let model = nod.insert(db).await?;
    tracing::info!(nod_guid = %model.nod_guid, mine_guid = %mine_guid, "created notice of departure");

    Ok(NoticeOfDeparture {
        nod_guid: model.nod_guid,
        mine_guid: model.mine_guid,
        permit_guid: model.permit_guid,
        nod_title: model.nod_title,
        documents: Vec::new(),
        create_timestamp: model.create_timestamp,
        update_timestamp: model.update_timestamp,
    })
}

async fn find_nod(
    db: &DatabaseConnection,
    nod_guid: Uuid,
) -> Result<entities::notice_of_departure::Model, GalenaError> {
    use entities::notice_of_departure::{Column, Entity};
    Entity::find()
        .filter(Column::NodGuid.eq(nod_guid))
        .filter(Column::DeletedInd.eq(0))
        .one(db)
        .await?
        .ok_or_else(|| GalenaError::NotFound(format!("notice of departure {nod_guid} not found")))
}

async fn load_nod_documents(
    db: &DatabaseConnection,
    nod_guid: Uuid,
) -> Result<Vec<NodDocument>, GalenaError> {
    use entities::nod_document_xref::{Column, Entity};

    let rows = Entity::find()
        .filter(Column::NodGuid.eq(nod_guid))
        .filter(Column::DeletedInd.eq(0))
        .find_also_related(entities::MineDocument)
        .all(db)
        .await?;

    let mut documents = Vec::with_capacity(rows.len());
    for (xref, doc) in rows {
        let doc = doc.ok_or_else(|| {
            GalenaError::Other(format!(
                "nod_document_xref {} references a missing mine_document",
                xref.nod_xref_guid
            ))
        })?;
        documents.push(NodDocument {
            nod_xref_guid: xref.nod_xref_guid,
            document_type: xref.document_type,
            mine_document_guid: doc.mine_document_guid,
            mine_guid: doc.mine_guid,
            document_manager_guid: doc.document_manager_guid,
            document_name: doc.document_name,
        });
    }
    Ok(documents)
}

async fn to_nod(
    db: &DatabaseConnection,
    model: entities::notice_of_departure::Model,
) -> Result<NoticeOfDeparture, GalenaError> {
    let documents = load_nod_documents(db, model.nod_guid).await?;
    Ok(NoticeOfDeparture {
        nod_guid: model.nod_guid,
        mine_guid: model.mine_guid,
        permit_guid: model.permit_guid,
        nod_title: model.nod_title,
        documents,
        create_timestamp: model.create_timestamp,
        update_timestamp: model.update_timestamp,
    })
}

pub async fn get_notice_of_departure(
    db: &DatabaseConnection,
    nod_guid: Uuid,
) -> Result<NoticeOfDeparture, GalenaError> {
    let model = find_nod(db, nod_guid).await?;
    to_nod(db, model).await
}

pub async fn list_notices_of_departure(
    db: &DatabaseConnection,
    mine_guid: Uuid,
    permit_guid: Option<Uuid>,
) -> Result<Vec<NoticeOfDeparture>, GalenaError> {
    use entities::notice_of_departure::{Column, Entity};

    let mut query = Entity::find()
        .filter(Column::MineGuid.eq(mine_guid))
        .filter(Column::DeletedInd.eq(0))
        .order_by_desc(Column::CreateTimestamp);
    if let Some(permit_guid) = permit_guid {
        query = query.filter(Column::PermitGuid.eq(permit_guid));
    }

    let models = query.all(db).await?;
    let mut nods = Vec::with_capacity(models.len());
    for model in models {
        nods.push(to_nod(db, model).await?);
    }
    Ok(nods)
}

pub async fn update_nod_title(
    db: &DatabaseConnection,
    nod_guid: Uuid,
    nod_title: &str,
    user: &str,
) -> Result<NoticeOfDeparture, GalenaError> {
    let title = validate_nod_title(nod_title)?;

    let model = find_nod(db, nod_guid).await?;
    let mut nod: entities::notice_of_departure::ActiveModel = model.into();
    nod.nod_title = Set(title.to_string());
    nod.update_user = Set(user.to_string());
    nod.update_timestamp = Set(now_ts());
    let updated = nod.update(db).await?;
    to_nod(db, updated).await
}

/// Soft-deletes a NOD and all of its document cross-references.
pub async fn delete_notice_of_departure(
    db: &DatabaseConnection,
    nod_guid: Uuid,
    user: &str,
) -> Result<(), GalenaError> {
    use entities::nod_document_xref;

    let model = find_nod(db, nod_guid).await?;
    let ts = now_ts();

    nod_document_xref::Entity::update_many()
        .col_expr(nod_document_xref::Column::DeletedInd, Expr::value(1))
        .col_expr(nod_document_xref::Column::UpdateUser, Expr::value(user))
        .col_expr(nod_document_xref::Column::UpdateTimestamp, Expr::value(ts))
        .filter(nod_document_xref::Column::NodGuid.eq(nod_guid))
        .filter(nod_document_xref::Column::DeletedInd.eq(0))
        .exec(db)
        .await?;

    let mut nod: entities::notice_of_departure::ActiveModel = model.into();
    nod.deleted_ind = Set(1);
    nod.update_user = Set(user.to_string());
    nod.update_timestamp = Set(ts);
    nod.update(db).await?;
    tracing::info!(nod_guid = %nod_guid, "soft-deleted notice of departure");
    Ok(())
}

pub async fn add_nod_document(
    db: &DatabaseConnection,
    nod_guid: Uuid,
    input: NewNodDocument,
    user: &str,
) -> Result<NodDocument, GalenaError> {
    use entities::mine_document::{Column as DocColumn, Entity as MineDocumentEntity};

    let nod = find_nod(db, nod_guid).await?;

    let doc = match input.mine_document_guid {
        Some(guid) => {
            let doc = MineDocumentEntity::find()
                .filter(DocColumn::MineDocumentGuid.eq(guid))
                .filter(DocColumn::DeletedInd.eq(0))
                .one(db)
                .await?
                .ok_or_else(|| GalenaError::NotFound(format!("mine document {guid} not found")))?;
            if doc.mine_guid != nod.mine_guid {
                return Err(GalenaError::BadRequest(
                    "document belongs to a different mine".into(),
                ));
            }
            doc
        }
        None => {
            let (dm_guid, name) = match (input.document_manager_guid, input.document_name) {
                (Some(g), Some(n)) if !n.trim().is_empty() => (g, n),
                _ => {
                    return Err(GalenaError::BadRequest(
                        "either mine_document_guid or document_manager_guid and document_name are required"
                            .into(),
                    ))
                }
            };
            create_mine_document(db, nod.mine_guid, dm_guid, name.trim(), user).await?
        }
    };

    let ts = now_ts();
    let xref = entities::nod_document_xref::ActiveModel {
        nod_xref_guid: Set(Uuid::new_v4()),
        mine_document_guid: Set(doc.mine_document_guid),
        nod_guid: Set(nod.nod_guid),
        document_type: Set(input.document_type),
        deleted_ind: Set(0),
        create_user: Set(user.to_string()),
        create_timestamp: Set(ts),
        update_user: Set(user.to_string()),
        update_timestamp: Set(ts),
    };
    let xref = xref.insert(db).await?;

    Ok(NodDocument {
        nod_xref_guid: xref.nod_xref_guid,
        document_type: xref.document_type,
        mine_document_guid: doc.mine_document_guid,
        mine_guid: doc.mine_guid,
        document_manager_guid: doc.document_manager_guid,
        document_name: doc.document_name,
    })
}

pub async fn remove_nod_document(
    db: &DatabaseConnection,
    nod_guid: Uuid,
    nod_xref_guid: Uuid,
    user: &str,
) -> Result<(), GalenaError> {
    use entities::nod_document_xref::{Column, Entity};

    let xref = Entity::find()
        .filter(Column::NodXrefGuid.eq(nod_xref_guid))
        .filter(Column::NodGuid.eq(nod_guid))
        .filter(Column::DeletedInd.eq(0))
        .one(db)
        .await?
        .ok_or_else(|| {
            GalenaError::NotFound(format!("document xref {nod_xref_guid} not found"))
        })?;

    let mut xref: entities::nod_document_xref::ActiveModel = xref.into();
    xref.deleted_ind = Set(1);
    xref.update_user = Set(user.to_string());
    xref.update_timestamp = Set(now_ts());
    xref.update(db).await?;
    Ok(())
}

// ---------- notice of work applications ----------

pub async fn list_now_status_codes(
    db: &DatabaseConnection,
) -> Result<Vec<entities::now_application_status::Model>, GalenaError> {
    use entities::now_application_status::{Column, Entity};
    Ok(Entity::find()
        .order_by_asc(Column::DisplayOrder)
        .all(db)
        .await?)
}

async fn find_permit_by_now_application_guid(
    db: &DatabaseConnection,
    now_application_guid: Uuid,
) -> Result<Option<entities::permit::Model>, GalenaError> {
    use entities::permit::Column as PermitColumn;
    use entities::permit_amendment::{Column, Entity};

    let amendment = Entity::find()
        .filter(Column::NowApplicationGuid.eq(now_application_guid))
        .filter(Column::DeletedInd.eq(0))
        .one(db)
        .await?;
    let Some(amendment) = amendment else {
        return Ok(None);
    };
    Ok(entities::Permit::find_by_id(amendment.permit_id)
        .filter(PermitColumn::DeletedInd.eq(0))
        .one(db)
        .await?)
}

async fn find_amendment_by_now_application_guid(
    db: &DatabaseConnection,
    now_application_guid: Uuid,
) -> Result<Option<entities::permit_amendment::Model>, GalenaError> {
    use entities::permit_amendment::{Column, Entity};
    Ok(Entity::find()
        .filter(Column::NowApplicationGuid.eq(now_application_guid))
        .filter(Column::DeletedInd.eq(0))
        .one(db)
        .await?)
}

/// Generates the permit number assigned on first issuance. The prefix is
/// the first letter of the notice-of-work type code, the sequence the
/// permit's surrogate id, e.g. a placer application on permit 1042 gets
/// "P-1042".
fn permit_number(notice_of_work_type_code: &str, permit_id: i32) -> Result<String, GalenaError> {
    let prefix = notice_of_work_type_code
        .chars()
        .next()
        .ok_or_else(|| GalenaError::Other("notice_of_work_type_code is empty".into()))?;
    Ok(format!("{prefix}-{permit_id}"))
}

/// Applies a Notice of Work status change. Approving an application (AIA)
/// activates the draft permit and amendment, assigns the permit number, and
/// runs permittee succession over the application's contacts.
pub async fn transition_now_status(
    db: &DatabaseConnection,
    now_application_guid: Uuid,
    new_status_code: Option<&str>,
    issue_date: Option<NaiveDate>,
    auth_end_date: Option<NaiveDate>,
    processed_by: &str,
) -> Result<StatusTransition, GalenaError> {
    use entities::now_application_identity::Entity as IdentityEntity;

    let identity = IdentityEntity::find_by_id(now_application_guid)
        .one(db)
        .await?
        .ok_or_else(|| {
            GalenaError::NotFound("No identity record for this application guid.".into())
        })?;

    let Some(now_application_id) = identity.now_application_id else {
        return Err(GalenaError::NotImplemented(
            "This application has not been imported. Please import an application before making changes."
                .into(),
        ));
    };

    let application = entities::NowApplication::find_by_id(now_application_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            GalenaError::NotFound("No application record for this application guid.".into())
        })?;

    let mut permit_no = None;
    let mut permittee_changed = false;
    let mut appointments_created = 0;
    let mut status_code = application.now_application_status_code.clone();

    if let Some(new_code) = new_status_code {
        if new_code != application.now_application_status_code {
            status_code = new_code.to_string();
            let ts = now_ts();
            let mut app: entities::now_application::ActiveModel = application.clone().into();
            app.now_application_status_code = Set(new_code.to_string());
            app.status_updated_date = Set(Some(ts));
            app.update_user = Set(processed_by.to_string());
            app.update_timestamp = Set(ts);
            app.update(db).await?;
            tracing::info!(
                now_application_guid = %now_application_guid,
                status = new_code,
                "updated application status"
            );

            if new_code == NOW_STATUS_APPROVED {
                let permit = find_permit_by_now_application_guid(db, now_application_guid)
                    .await?
                    .ok_or_else(|| {
                        GalenaError::NotFound("No permit found for this application.".into())
                    })?;
                let amendment = find_amendment_by_now_application_guid(db, now_application_guid)
                    .await?
                    .ok_or_else(|| {
                        GalenaError::NotFound(
                            "No permit amendment found for this application.".into(),
                        )
                    })?;

                let assigned_no = match &permit.permit_no {
                    Some(no) => no.clone(),
                    None => permit_number(&application.notice_of_work_type_code, permit.permit_id)?,
                };
                let permit_id = permit.permit_id;
                let ts = now_ts();
                let mut p: entities::permit::ActiveModel = permit.clone().into();
                if permit.permit_status_code == PERMIT_STATUS_DRAFT {
                    p.permit_status_code = Set(PERMIT_STATUS_OPEN.to_string());
                }
                p.permit_no = Set(Some(assigned_no.clone()));
                p.update_user = Set(processed_by.to_string());
                p.update_timestamp = Set(ts);
                p.update(db).await?;
                permit_no = Some(assigned_no);

                let mut a: entities::permit_amendment::ActiveModel = amendment.into();
                a.permit_amendment_status_code = Set(AMENDMENT_STATUS_ACTIVE.to_string());
                a.issue_date = Set(issue_date);
                a.authorization_end_date = Set(auth_end_date);
                a.update_user = Set(processed_by.to_string());
                a.update_timestamp = Set(ts);
                a.update(db).await?;

                let succession = appoint_contacts(
                    db,
                    now_application_id,
                    identity.mine_guid,
                    permit_id,
                    issue_date,
                    processed_by,
                )
                .await?;
                permittee_changed = succession.0;
                appointments_created = succession.1;
            }
        }
    }

    Ok(StatusTransition {
        now_application_guid,
        now_application_status_code: status_code,
        permit_no,
        permittee_changed,
        appointments_created,
    })
}

/// Permittee succession plus mine-level appointments for the application's
/// contacts. Returns (permittee_changed, appointments_created).
async fn appoint_contacts(
    db: &DatabaseConnection,
    now_application_id: i32,
    mine_guid: Uuid,
    permit_id: i32,
    issue_date: Option<NaiveDate>,
    processed_by: &str,
) -> Result<(bool, usize), GalenaError> {
    use entities::mine_party_appt::{Column as ApptColumn, Entity as ApptEntity};
    use entities::now_party_appointment::{Column as ContactColumn, Entity as ContactEntity};

    let contacts = ContactEntity::find()
        .filter(ContactColumn::NowApplicationId.eq(now_application_id))
        .all(db)
        .await?;

    let today = Utc::now().date_naive();
    let effective = issue_date.unwrap_or(today);
    let mut permittee_changed = false;
    let mut created = 0;

    for contact in contacts {
        let is_permittee = contact.mine_party_appt_type_code == APPT_TYPE_PERMITTEE;
        let mut new_permittee = false;

        if is_permittee {
            let current = ApptEntity::find()
                .filter(ApptColumn::MinePartyApptTypeCode.eq(APPT_TYPE_PERMITTEE))
                .filter(ApptColumn::PermitId.eq(permit_id))
                .filter(ApptColumn::EndDate.is_null())
                .filter(ApptColumn::DeletedInd.eq(0))
                .all(db)
                .await?;

            match current.len() {
                0 => new_permittee = true,
                1 => {
                    let incumbent = &current[0];
                    if incumbent.party_guid != contact.party_guid {
                        let end = effective.checked_sub_days(Days::new(1)).unwrap_or(effective);
                        let mut appt: entities::mine_party_appt::ActiveModel =
                            incumbent.clone().into();
                        appt.end_date = Set(Some(end));
                        appt.update_user = Set(processed_by.to_string());
                        appt.update_timestamp = Set(now_ts());
                        appt.update(db).await?;
                        new_permittee = true;
                        permittee_changed = true;
                    }
                }
                _ => {
                    return Err(GalenaError::Conflict(
                        "This permit has more than one active permittee. Please resolve this and try again."
                            .into(),
                    ))
                }
            }
        }

        if !is_permittee || new_permittee {
            let ts = now_ts();
            let appt = entities::mine_party_appt::ActiveModel {
                mine_party_appt_guid: Set(Uuid::new_v4()),
                mine_guid: Set((!is_permittee).then_some(mine_guid)),
                permit_id: Set(is_permittee.then_some(permit_id)),
                party_guid: Set(contact.party_guid),
                mine_party_appt_type_code: Set(contact.mine_party_appt_type_code.clone()),
                start_date: Set(Some(today)),
                end_date: Set(None),
                processed_by: Set(processed_by.to_string()),
                deleted_ind: Set(0),
                create_user: Set(processed_by.to_string()),
                create_timestamp: Set(ts),
                update_user: Set(processed_by.to_string()),
                update_timestamp: Set(ts),
                ..Default::default()
            };
            appt.insert(db).await?;
            created += 1;
        }
    }

    Ok((permittee_changed, created))
}

// ---------- activity details ----------

/// Resolves the effective activity type of a detail row. The original
/// schema stores no discriminator on the detail; instead the type comes
/// from whichever summary linkage exists, checked in order:
/// plain detail xref, then staging-area xref (camp summaries only), then
/// building xref (camp summaries only).
pub async fn resolve_activity_type_code(
    db: &DatabaseConnection,
    activity_detail_id: i32,
) -> Result<Option<String>, GalenaError> {
    async fn summary_code(
        db: &DatabaseConnection,
        summary_id: i32,
        camp_only: bool,
    ) -> Result<Option<String>, GalenaError> {
        use entities::activity_summary::{Column, Entity};
        let mut query = Entity::find().filter(Column::ActivitySummaryId.eq(summary_id));
        if camp_only {
            query = query.filter(Column::ActivityTypeCode.eq("camp"));
        }
        Ok(query.one(db).await?.map(|s| s.activity_type_code))
    }

    {
        use entities::activity_summary_detail_xref::{Column, Entity};
        if let Some(xref) = Entity::find()
            .filter(Column::ActivityDetailId.eq(activity_detail_id))
            .one(db)
            .await?
        {
            if let Some(code) = summary_code(db, xref.activity_summary_id, false).await? {
                return Ok(Some(code));
            }
        }
    }

    {
        use entities::activity_summary_staging_area_detail_xref::{Column, Entity};
        if let Some(xref) = Entity::find()
            .filter(Column::ActivityDetailId.eq(activity_detail_id))
            .one(db)
            .await?
        {
            if let Some(code) = summary_code(db, xref.activity_summary_id, true).await? {
                return Ok(Some(code));
            }
        }
    }

    {
        use entities::activity_summary_building_detail_xref::{Column, Entity};
        if let Some(xref) = Entity::find()
            .filter(Column::ActivityDetailId.eq(activity_detail_id))
            .one(db)
            .await?
        {
            if let Some(code) = summary_code(db, xref.activity_summary_id, true).await? {
                return Ok(Some(code));
            }
        }
    }

    Ok(None)
}

/// All activity details linked to an application via any of the three
/// summary cross-reference tables, with their derived activity type.
pub async fn list_activity_details(
    db: &DatabaseConnection,
    now_application_guid: Uuid,
) -> Result<Vec<ActivityDetailView>, GalenaError> {
    use entities::activity_summary::{Column as SummaryColumn, Entity as SummaryEntity};
    use entities::now_application_identity::Entity as IdentityEntity;

    let identity = IdentityEntity::find_by_id(now_application_guid)
        .one(db)
        .await?
        .ok_or_else(|| {
            GalenaError::NotFound("No identity record for this application guid.".into())
        })?;
    let Some(now_application_id) = identity.now_application_id else {
        return Err(GalenaError::NotImplemented(
            "This application has not been imported. Please import an application before making changes."
                .into(),
        ));
    };

    let summaries = SummaryEntity::find()
        .filter(SummaryColumn::NowApplicationId.eq(now_application_id))
        .all(db)
        .await?;
    let summary_ids: Vec<i32> = summaries.iter().map(|s| s.activity_summary_id).collect();
    if summary_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut detail_ids: Vec<i32> = Vec::new();
    {
        use entities::activity_summary_detail_xref::{Column, Entity};
        for xref in Entity::find()
            .filter(Column::ActivitySummaryId.is_in(summary_ids.clone()))
            .all(db)
            .await?
        {
            detail_ids.push(xref.activity_detail_id);
        }
    }
    {
        use entities::activity_summary_staging_area_detail_xref::{Column, Entity};
        for xref in Entity::find()
            .filter(Column::ActivitySummaryId.is_in(summary_ids.clone()))
            .all(db)
            .await?
        {
            detail_ids.push(xref.activity_detail_id);
        }
    }
    {
        use entities::activity_summary_building_detail_xref::{Column, Entity};
        for xref in Entity::find()
            .filter(Column::ActivitySummaryId.is_in(summary_ids))
            .all(db)
            .await?
        {
            detail_ids.push(xref.activity_detail_id);
        }
    }
    detail_ids.sort_unstable();
    detail_ids.dedup();

    let details = entities::ActivityDetail::find()
        .filter(entities::activity_detail::Column::ActivityDetailId.is_in(detail_ids))
        .all(db)
        .await?;

    let mut views = Vec::with_capacity(details.len());
    for detail in details {
        let activity_type_code = resolve_activity_type_code(db, detail.activity_detail_id).await?;
        views.push(ActivityDetailView {
            detail,
            activity_type_code,
        });
    }
    Ok(views)
}

/// Deletes a detail row and its cross-references, xrefs first so the
/// foreign keys never dangle.
pub async fn delete_activity_detail(
    db: &DatabaseConnection,
    activity_detail_id: i32,
) -> Result<(), GalenaError> {
    {
        use entities::activity_summary_detail_xref::{Column, Entity};
        Entity::delete_many()
            .filter(Column::ActivityDetailId.eq(activity_detail_id))
            .exec(db)
            .await?;
    }
    {
        use entities::activity_summary_staging_area_detail_xref::{Column, Entity};
        Entity::delete_many()
            .filter(Column::ActivityDetailId.eq(activity_detail_id))
            .exec(db)
            .await?;
    }
    {
        use entities::activity_summary_building_detail_xref::{Column, Entity};
        Entity::delete_many()
            .filter(Column::ActivityDetailId.eq(activity_detail_id))
            .exec(db)
            .await?;
    }
    entities::ActivityDetail::delete_by_id(activity_detail_id)
        .exec(db)
        .await?;
    Ok(())
}

// ---------- document manager ----------

pub async fn create_document(
    db: &DatabaseConnection,
    file_display_name: &str,
    full_storage_path: &str,
    user: &str,
) -> Result<entities::document::Model, GalenaError> {
    if file_display_name.trim().is_empty() {
        return Err(GalenaError::BadRequest(
            "file_display_name must not be empty".into(),
        ));
    }
    let ts = now_ts();
    let doc = entities::document::ActiveModel {
        document_guid: Set(Uuid::new_v4()),
        full_storage_path: Set(full_storage_path.to_string()),
        file_display_name: Set(file_display_name.trim().to_string()),
        upload_date: Set(ts),
        create_user: Set(user.to_string()),
        create_timestamp: Set(ts),
        update_user: Set(user.to_string()),
        update_timestamp: Set(ts),
    };
    Ok(doc.insert(db).await?)
}

pub async fn get_document(
    db: &DatabaseConnection,
    document_guid: Uuid,
) -> Result<Option<entities::document::Model>, GalenaError> {
    Ok(entities::Document::find_by_id(document_guid).one(db).await?)
}

pub async fn create_import_now_submission_document(
    db: &DatabaseConnection,
    submission_document_url: &str,
) -> Result<entities::import_now_submission_document::Model, GalenaError> {
    if submission_document_url.trim().is_empty() {
        return Err(GalenaError::BadRequest(
            "submission_document_url must not be empty".into(),
        ));
    }
    let row = entities::import_now_submission_document::ActiveModel {
        submission_document_url: Set(submission_document_url.trim().to_string()),
        document_guid: Set(None),
        error: Set(None),
        ..Default::default()
    };
    Ok(row.insert(db).await?)
}

pub async fn get_import_now_submission_document(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<entities::import_now_submission_document::Model>, GalenaError> {
    Ok(entities::ImportNowSubmissionDocument::find_by_id(id)
        .one(db)
        .await?)
}
