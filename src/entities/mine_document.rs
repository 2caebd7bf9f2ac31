use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mine_document")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mine_document_guid: Uuid,
    pub mine_guid: Uuid,
    /// Guid issued by the document manager service.
    pub document_manager_guid: Uuid,
    pub document_name: String,
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
