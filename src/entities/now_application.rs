use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "now_application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub now_application_id: i32,
    pub now_application_status_code: String,
    pub status_updated_date: Option<i64>,
    /// e.g. SAG (sand and gravel), PLA (placer), QCA (quarry). The first
    /// letter seeds the permit number prefix on approval.
    pub notice_of_work_type_code: String,
    pub create_user: String,
    pub create_timestamp: i64,
    pub update_user: String,
    pub update_timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::now_application_status::Entity",
        from = "Column::NowApplicationStatusCode",
        to = "super::now_application_status::Column::NowApplicationStatusCode"
    )]
    NowApplicationStatus,
    #[sea_orm(has_many = "super::now_party_appointment::Entity")]
    NowPartyAppointment,
}

impl Related<super::now_application_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NowApplicationStatus.def()
    }
}

impl Related<super::now_party_appointment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NowPartyAppointment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
