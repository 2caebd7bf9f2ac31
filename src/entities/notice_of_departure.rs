use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A Notice of Departure is a proponent-submitted amendment request against
/// an issued permit.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notice_of_departure")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub nod_guid: Uuid,
    pub mine_guid: Uuid,
    pub permit_guid: Uuid,
    pub nod_title: String,
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
    #[sea_orm(
        belongs_to = "super::permit::Entity",
        from = "Column::PermitGuid",
        to = "super::permit::Column::PermitGuid"
    )]
    Permit,
    #[sea_orm(has_many = "super::nod_document_xref::Entity")]
    NodDocumentXref,
}

impl Related<super::mine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mine.def()
    }
}

impl Related<super::permit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Permit.def()
    }
}

impl Related<super::nod_document_xref::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NodDocumentXref.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
