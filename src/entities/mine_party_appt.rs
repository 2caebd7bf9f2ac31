use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An effective party appointment. Permittee (PMT) appointments hang off a
/// permit; every other type hangs off a mine. `end_date` null means the
/// appointment is current.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mine_party_appt")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub mine_party_appt_id: i32,
    #[sea_orm(unique)]
    pub mine_party_appt_guid: Uuid,
    pub mine_guid: Option<Uuid>,
    pub permit_id: Option<i32>,
    pub party_guid: Uuid,
    pub mine_party_appt_type_code: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub processed_by: String,
    pub deleted_ind: i64,
    pub create_user: String,
    pub create_timestamp: i64,
    pub update_user: String,
    pub update_timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
