use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Amendment status codes: DFT = draft, ACT = active, RMT = remitted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "permit_amendment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub permit_amendment_id: i32,
    #[sea_orm(unique)]
    pub permit_amendment_guid: Uuid,
    pub permit_id: i32,
    pub permit_amendment_status_code: String,
    pub issue_date: Option<Date>,
    pub authorization_end_date: Option<Date>,
    /// Set when the amendment was produced by a Notice of Work application.
    pub now_application_guid: Option<Uuid>,
    pub deleted_ind: i64,
    pub create_user: String,
    pub create_timestamp: i64,
    pub update_user: String,
    pub update_timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::permit::Entity",
        from = "Column::PermitId",
        to = "super::permit::Column::PermitId"
    )]
    Permit,
}

impl Related<super::permit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Permit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
