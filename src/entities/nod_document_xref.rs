use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Classification of a document attached to a Notice of Departure.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[sea_orm(string_value = "checklist")]
    Checklist,
    #[sea_orm(string_value = "other")]
    Other,
}

impl Default for DocumentType {
    fn default() -> Self {
        DocumentType::Checklist
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "nod_document_xref")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub nod_xref_guid: Uuid,
    pub mine_document_guid: Uuid,
    pub nod_guid: Uuid,
    pub document_type: DocumentType,
    pub deleted_ind: i64,
    pub create_user: String,
    pub create_timestamp: i64,
    pub update_user: String,
    pub update_timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::notice_of_departure::Entity",
        from = "Column::NodGuid",
        to = "super::notice_of_departure::Column::NodGuid"
    )]
    NoticeOfDeparture,
    #[sea_orm(
        belongs_to = "super::mine_document::Entity",
        from = "Column::MineDocumentGuid",
        to = "super::mine_document::Column::MineDocumentGuid"
    )]
    MineDocument,
}

impl Related<super::notice_of_departure::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NoticeOfDeparture.def()
    }
}

impl Related<super::mine_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MineDocument.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
