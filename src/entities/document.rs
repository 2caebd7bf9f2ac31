use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Document manager record. Core tables refer to these by
/// `document_manager_guid`; the file itself lives in object storage at
/// `full_storage_path`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub document_guid: Uuid,
    pub full_storage_path: String,
    pub file_display_name: String,
    pub upload_date: i64,
    pub create_user: String,
    pub create_timestamp: i64,
    pub update_user: String,
    pub update_timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
