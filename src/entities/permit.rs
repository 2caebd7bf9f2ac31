use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Permit status codes: D = draft, O = open, C = closed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "permit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub permit_id: i32,
    #[sea_orm(unique)]
    pub permit_guid: Uuid,
    pub mine_guid: Uuid,
    /// Unassigned until the originating application is approved.
    pub permit_no: Option<String>,
    pub permit_status_code: String,
    pub deleted_ind: i64,
    pub create_user: String,
    pub create_timestamp: i64,
    pub update_user: String,
    pub update_timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mine::Entity",
        from = "Column::MineGuid",
        to = "super::mine::Column::MineGuid"
    )]
    Mine,
}

impl Related<super::mine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
