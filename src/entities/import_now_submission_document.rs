use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Work-queue row for pulling a Notice of Work submission document into the
/// document manager. `document_guid` is set once the transfer succeeds;
/// `error` captures the last failure message.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "import_now_submission_document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub import_now_submission_document_id: i32,
    pub submission_document_url: String,
    pub document_guid: Option<Uuid>,
    pub error: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::document::Entity",
        from = "Column::DocumentGuid",
        to = "super::document::Column::DocumentGuid"
    )]
    Document,
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Document.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
