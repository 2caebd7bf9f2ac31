use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mine")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub mine_guid: Uuid,
    #[sea_orm(unique)]
    pub mine_no: String,
    pub mine_name: String,
    pub deleted_ind: i64,
    pub create_user: String,
    pub create_timestamp: i64,
    pub update_user: String,
    pub update_timestamp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
