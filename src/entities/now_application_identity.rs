use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Stable identity for a Notice of Work application. The guid exists from
/// the moment a submission is received; `now_application_id` stays null
/// until the submission has been imported into the core tables.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "now_application_identity")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub now_application_guid: Uuid,
    pub now_application_id: Option<i32>,
    pub mine_guid: Uuid,
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
