use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A contact attached to a Notice of Work application, e.g. the proposed
/// permittee (PMT) or mine manager (MMG).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "now_party_appointment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub now_party_appt_id: i32,
    pub now_application_id: i32,
    pub party_guid: Uuid,
    pub mine_party_appt_type_code: String,
    pub create_user: String,
    pub create_timestamp: i64,
    pub update_user: String,
    pub update_timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::now_application::Entity",
        from = "Column::NowApplicationId",
        to = "super::now_application::Column::NowApplicationId"
    )]
    NowApplication,
}

impl Related<super::now_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NowApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
